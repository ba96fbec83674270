//! Обработка ошибок для shardsql

use thiserror::Error;

/// Основной тип ошибки для shardsql
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка разбора SQL (лексическая ошибка, переданная потребителю)
    #[error("SQL parsing error: {message}")]
    SqlParsing { message: String },

    /// Ошибка привязки аргументов к плейсхолдерам
    #[error("Binding error: {message}")]
    Binding { message: String },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для shardsql
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку SQL парсинга
    pub fn sql_parsing(message: impl Into<String>) -> Self {
        Self::SqlParsing {
            message: message.into(),
        }
    }

    /// Создает ошибку привязки аргументов
    pub fn binding(message: impl Into<String>) -> Self {
        Self::Binding {
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::sql_parsing("syntax error at position 3 near !");
        assert_eq!(
            err.to_string(),
            "SQL parsing error: syntax error at position 3 near !"
        );

        let err = Error::binding("expected 2 arguments, got 1");
        assert_eq!(err.to_string(), "Binding error: expected 2 arguments, got 1");

        let err = Error::configuration("unknown log level 'loud'");
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown log level 'loud'"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
