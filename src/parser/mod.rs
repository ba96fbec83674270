//! Лексический анализ SQL для shardsql

pub mod escape;
pub mod keywords;
pub mod lexer;
pub mod reader;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use escape::encode_sql_string;
pub use keywords::Keyword;
pub use lexer::Lexer;
pub use token::{Token, TokenType};
