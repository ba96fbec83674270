//! Конфигурация для shardsql
//!
//! Предоставляет структуры конфигурации лексера и логирования

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Допустимые уровни логирования
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub const ENV_ALLOW_COMMENTS: &str = "SHARDSQL_ALLOW_COMMENTS";
pub const ENV_LOG_LEVEL: &str = "SHARDSQL_LOG_LEVEL";

/// Основная конфигурация
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Настройки лексического анализатора
    pub lexer: LexerConfig,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

/// Конфигурация лексического анализатора
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Возвращать комментарии потребителю вместо того, чтобы пропускать их
    pub allow_comments: bool,
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Перекрывает значения переменными окружения, если они заданы
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(allow) = std::env::var(ENV_ALLOW_COMMENTS) {
            self.lexer.allow_comments = parse_bool(&allow).ok_or_else(|| {
                Error::configuration(format!("invalid {} value: {}", ENV_ALLOW_COMMENTS, allow))
            })?;
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
