//! Токены для SQL лексера shardsql
//!
//! Определяет все типы токенов, которые может распознать лексический анализатор:
//! ключевые слова, идентификаторы, литералы, операторы, комментарии и ошибки.

use crate::parser::keywords::Keyword;
use std::borrow::Cow;
use std::fmt;

/// Токен: тип, текст и позиция начала
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Декодированные байты токена; `None` для операторов и конца ввода
    pub value: Option<Vec<u8>>,
    /// Позиция первого символа токена, начиная с 1
    pub position: usize,
}

impl Token {
    pub fn new(token_type: TokenType, value: Vec<u8>, position: usize) -> Self {
        Self {
            token_type,
            value: Some(value),
            position,
        }
    }

    /// Токен без текста (оператор или конец ввода)
    pub fn bare(token_type: TokenType, position: usize) -> Self {
        Self {
            token_type,
            value: None,
            position,
        }
    }

    /// Байты токена (пустой срез, если текста нет)
    pub fn bytes(&self) -> &[u8] {
        self.value.as_deref().unwrap_or_default()
    }

    /// Текст токена; невалидные последовательности UTF-8 заменяются
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }

    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::LexError
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(_) => write!(f, "{}('{}') at {}", self.token_type, self.text(), self.position),
            None => write!(f, "{} at {}", self.token_type, self.position),
        }
    }
}

/// Типы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Зарезервированное слово
    Keyword(Keyword),

    // === Идентификаторы и литералы ===
    /// Идентификатор, в том числе в обратных кавычках
    Identifier,
    /// Строковый литерал в одинарных или двойных кавычках
    String,
    /// Числовой литерал в исходном написании
    Number,
    /// Плейсхолдер `:name` или синтезированный из `?`
    ValueArg,

    // === Операторы из одного символа ===
    Equal,        // =
    Comma,        // ,
    Semicolon,    // ;
    LeftParen,    // (
    RightParen,   // )
    Plus,         // +
    Multiply,     // *
    Modulo,       // %
    BitAnd,       // &
    BitOr,        // |
    BitXor,       // ^
    Tilde,        // ~
    Dot,          // .
    Divide,       // /
    Minus,        // -
    Less,         // <
    Greater,      // >

    // === Составные операторы ===
    NotEqual,      // <> или !=
    LessEqual,     // <=
    GreaterEqual,  // >=
    NullSafeEqual, // <=>

    // === Специальные токены ===
    /// Комментарий вместе с префиксом
    Comment,
    /// Конец ввода
    Eof,
    /// Лексическая ошибка; текст содержит проблемный фрагмент
    LexError,
}

impl TokenType {
    /// Операторы, которые не могут быть началом более длинного токена
    pub fn from_self_delimiting(ch: u8) -> Option<TokenType> {
        let token_type = match ch {
            b'=' => TokenType::Equal,
            b',' => TokenType::Comma,
            b';' => TokenType::Semicolon,
            b'(' => TokenType::LeftParen,
            b')' => TokenType::RightParen,
            b'+' => TokenType::Plus,
            b'*' => TokenType::Multiply,
            b'%' => TokenType::Modulo,
            b'&' => TokenType::BitAnd,
            b'|' => TokenType::BitOr,
            b'^' => TokenType::BitXor,
            b'~' => TokenType::Tilde,
            _ => return None,
        };
        Some(token_type)
    }

    /// Написание оператора
    pub fn operator_str(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenType::Equal => "=",
            TokenType::Comma => ",",
            TokenType::Semicolon => ";",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::Plus => "+",
            TokenType::Multiply => "*",
            TokenType::Modulo => "%",
            TokenType::BitAnd => "&",
            TokenType::BitOr => "|",
            TokenType::BitXor => "^",
            TokenType::Tilde => "~",
            TokenType::Dot => ".",
            TokenType::Divide => "/",
            TokenType::Minus => "-",
            TokenType::Less => "<",
            TokenType::Greater => ">",
            TokenType::NotEqual => "<>",
            TokenType::LessEqual => "<=",
            TokenType::GreaterEqual => ">=",
            TokenType::NullSafeEqual => "<=>",
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Keyword(keyword) => write!(f, "{}", keyword),
            TokenType::Identifier => write!(f, "IDENTIFIER"),
            TokenType::String => write!(f, "STRING"),
            TokenType::Number => write!(f, "NUMBER"),
            TokenType::ValueArg => write!(f, "VALUE_ARG"),
            TokenType::Comment => write!(f, "COMMENT"),
            TokenType::Eof => write!(f, "EOF"),
            TokenType::LexError => write!(f, "LEX_ERROR"),
            operator => write!(f, "{}", operator.operator_str().unwrap_or_default()),
        }
    }
}
