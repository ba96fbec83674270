//! Лексический анализатор SQL для shardsql
//!
//! Преобразует входной SQL текст в последовательность токенов, которые забирает
//! парсер. Работает с одним символом lookahead, без возвратов; каждая
//! лексическая ошибка возвращается как токен `LexError`, а не как паника.

use crate::common::{Error, LexerConfig, Result};
use crate::parser::escape::decode_escape;
use crate::parser::keywords::Keyword;
use crate::parser::reader::{digit_val, is_blank, is_digit, is_letter, CharReader};
use crate::parser::token::{Token, TokenType};

/// Лексический анализатор SQL
///
/// Один экземпляр обслуживает один оператор и используется одним потоком.
pub struct Lexer<'a> {
    /// Исходный текст
    reader: CharReader<'a>,
    /// Возвращать комментарии вызывающему коду
    allow_comments: bool,
    /// После установки любой вызов `scan` возвращает конец ввода
    force_eof: bool,
    /// Текст последнего выданного токена, для сообщений об ошибках
    error_token: Vec<u8>,
    error_token_present: bool,
    /// Последнее отформатированное сообщение об ошибке
    last_error: Option<String>,
    /// Счетчик для имен `:v1`, `:v2`, ... вместо `?`
    placeholder_index: usize,
}

impl<'a> Lexer<'a> {
    /// Создает новый лексический анализатор
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Создает лексер поверх сырых байт запроса
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self {
            reader: CharReader::new(input),
            allow_comments: false,
            force_eof: false,
            error_token: Vec::new(),
            error_token_present: false,
            last_error: None,
            placeholder_index: 0,
        }
    }

    /// Создает лексер с настройками из конфигурации
    pub fn with_config(input: &'a str, config: &LexerConfig) -> Self {
        Self::new(input).with_comments(config.allow_comments)
    }

    pub fn with_comments(mut self, allow_comments: bool) -> Self {
        self.allow_comments = allow_comments;
        self
    }

    pub fn allow_comments(&self) -> bool {
        self.allow_comments
    }

    /// Обрывает разбор: дальше выдается только конец ввода
    pub fn force_eof(&mut self) {
        self.force_eof = true;
    }

    pub fn is_force_eof(&self) -> bool {
        self.force_eof
    }

    /// Позиция текущего символа lookahead, начиная с 1
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Сколько `?` уже заменено синтезированными именами
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_index
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Текст последнего выданного токена, если он у него был
    pub fn last_error_token(&self) -> Option<&[u8]> {
        self.error_token_present.then_some(self.error_token.as_slice())
    }
}

// Подключаем методы из отдельных файлов
include!("lexer_methods.rs");
include!("lexer_readers.rs");
