//! shardsql - лексический анализатор SQL для шардирующего прокси MySQL
//!
//! Превращает текст запроса, пришедшего от клиента, в поток токенов, который
//! забирает парсер. По дереву разбора прокси решает, на какие шарды отправить
//! запрос и как его переписать.

pub mod backend;
pub mod cli;
pub mod common;
pub mod parser;

pub use common::error::{Error, Result};
pub use parser::{Keyword, Lexer, Token, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
