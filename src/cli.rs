//! CLI интерфейс для shardsql
//!
//! Позволяет разобрать запрос на токены и посмотреть, что увидит парсер прокси

use crate::common::{Config, Error, Result};
use crate::parser::{Keyword, Lexer, Token, TokenType};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// shardsql - лексический анализатор SQL для шардирующего прокси
#[derive(Parser)]
#[command(name = "shardsql")]
#[command(about = "shardsql - SQL tokenizer of a MySQL sharding proxy")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разбить запрос на токены
    Tokenize {
        /// SQL запрос
        sql: Option<String>,

        /// Прочитать запрос из файла
        #[arg(short, long, conflicts_with = "sql")]
        file: Option<PathBuf>,

        /// Показывать комментарии
        #[arg(long)]
        allow_comments: bool,

        /// Вывод в формате JSON
        #[arg(long)]
        json: bool,
    },

    /// Показать плейсхолдеры запроса: позиционные с номером аргумента,
    /// именованные без номера
    Placeholders {
        /// SQL запрос
        sql: String,
    },

    /// Показать зарезервированные слова
    Keywords,
}

/// Токен в виде, пригодном для вывода
#[derive(Debug, Serialize)]
struct TokenView {
    kind: String,
    text: Option<String>,
    position: usize,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.token_type.to_string(),
            text: token.value.as_ref().map(|_| token.text().into_owned()),
            position: token.position,
        }
    }
}

impl Cli {
    /// Загружает конфигурацию: файл, затем окружение, затем аргументы
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env()?;

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду
    pub fn execute(&self, config: &Config, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Commands::Tokenize {
                sql,
                file,
                allow_comments,
                json,
            } => {
                let sql = match (sql, file) {
                    (Some(sql), _) => sql.clone(),
                    (None, Some(path)) => std::fs::read_to_string(path)?,
                    (None, None) => {
                        return Err(Error::configuration("either SQL text or --file is required"))
                    }
                };
                let allow_comments = *allow_comments || config.lexer.allow_comments;
                self.tokenize(&sql, allow_comments, *json, out)
            }
            Commands::Placeholders { sql } => self.placeholders(sql, out),
            Commands::Keywords => {
                for keyword in Keyword::ALL {
                    writeln!(out, "{}", keyword.as_str())?;
                }
                Ok(())
            }
        }
    }

    fn tokenize(
        &self,
        sql: &str,
        allow_comments: bool,
        json: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let span = tracing::info_span!("tokenize", bytes = sql.len(), allow_comments);
        let _guard = span.enter();

        let mut lexer = Lexer::new(sql).with_comments(allow_comments);
        let mut views = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.token_type == TokenType::LexError {
                return Err(syntax_error(&mut lexer));
            }
            if token.is_eof() {
                break;
            }
            views.push(TokenView::from(&token));
        }

        if json {
            serde_json::to_writer_pretty(&mut *out, &views)?;
            writeln!(out)?;
        } else {
            for view in &views {
                match &view.text {
                    Some(text) => writeln!(out, "{}\t{}\t{}", view.position, view.kind, text)?,
                    None => writeln!(out, "{}\t{}", view.position, view.kind)?,
                }
            }
        }

        tracing::debug!(tokens = views.len(), "tokenized statement");
        Ok(())
    }

    /// Номер выводится только у `?`: N-й из них получает N-й аргумент
    fn placeholders(&self, sql: &str, out: &mut impl Write) -> Result<()> {
        let span = tracing::info_span!("placeholders");
        let _guard = span.enter();

        let mut lexer = Lexer::new(sql);
        loop {
            let before = lexer.placeholder_count();
            let token = lexer.next_token();
            match token.token_type {
                TokenType::Eof => break,
                TokenType::LexError => return Err(syntax_error(&mut lexer)),
                TokenType::ValueArg if lexer.placeholder_count() > before => {
                    writeln!(out, "{}\t{}", lexer.placeholder_count(), token.text())?
                }
                TokenType::ValueArg => writeln!(out, "-\t{}", token.text())?,
                _ => {}
            }
        }
        Ok(())
    }
}

fn syntax_error(lexer: &mut Lexer<'_>) -> Error {
    lexer.report_error("syntax error");
    let message = lexer.last_error().unwrap_or_default().to_string();
    tracing::warn!("{}", message);
    Error::sql_parsing(message)
}

/// Настраивает вывод логов; `RUST_LOG` имеет приоритет над конфигурацией
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::test_env::EnvGuard;
    use crate::common::{ENV_ALLOW_COMMENTS, ENV_LOG_LEVEL};
    use tempfile::TempDir;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        cli.execute(&Config::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_parsing() {
        let args = vec!["shardsql", "--log-level", "debug", "tokenize", "select 1"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Tokenize { .. }));
    }

    #[test]
    fn test_tokenize_text_output() {
        let output = run(&["shardsql", "tokenize", "select a from t where id = ?"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "1\tSELECT\tselect");
        assert_eq!(lines[1], "8\tIDENTIFIER\ta");
        assert_eq!(lines[6], "26\t=");
        assert_eq!(lines[7], "28\tVALUE_ARG\t:v1");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_tokenize_json_output() {
        let args = ["shardsql", "tokenize", "--json", "--allow-comments", "1 /* c */"];
        let output = run(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["kind"], "NUMBER");
        assert_eq!(value[0]["text"], "1");
        assert_eq!(value[1]["kind"], "COMMENT");
        assert_eq!(value[1]["text"], "/* c */");
        assert_eq!(value[1]["position"], 3);
    }

    #[test]
    fn test_tokenize_reports_error() {
        let err = run(&["shardsql", "tokenize", "select 'oops"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SQL parsing error: syntax error at position 13 near oops"
        );
    }

    #[test]
    fn test_placeholders_command() {
        let output = run(&["shardsql", "placeholders", "select ?, :a, ?"]).unwrap();
        assert_eq!(output, "1\t:v1\n-\t:a\n2\t:v2\n");

        // Именованный `:v1` не занимает позицию аргумента
        let output = run(&["shardsql", "placeholders", "select :v1, ?, :b.c, ?"]).unwrap();
        assert_eq!(output, "-\t:v1\n1\t:v1\n-\t:b.c\n2\t:v2\n");

        let err = run(&["shardsql", "placeholders", "select ?, 'open"]).unwrap_err();
        assert!(matches!(err, Error::SqlParsing { .. }));
    }

    #[test]
    fn test_keywords_command() {
        let output = run(&["shardsql", "keywords"]).unwrap();
        assert_eq!(output.lines().count(), Keyword::ALL.len());
        assert!(output.lines().any(|line| line == "utf8mb4"));
    }

    #[test]
    fn test_load_config_applies_log_level() {
        let _env = EnvGuard::acquire();
        let cli = Cli::try_parse_from(["shardsql", "--log-level", "trace", "keywords"]).unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.logging.level, "trace");

        let cli = Cli::try_parse_from(["shardsql", "--log-level", "loud", "keywords"]).unwrap();
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_load_config_precedence() {
        let env = EnvGuard::acquire();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shardsql.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
        let path = path.to_str().unwrap();

        // Только файл
        let cli = Cli::try_parse_from(["shardsql", "--config", path, "keywords"]).unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.lexer.allow_comments);

        // Окружение перекрывает файл
        env.set(ENV_LOG_LEVEL, "warn");
        env.set(ENV_ALLOW_COMMENTS, "true");
        let config = cli.load_config().unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.lexer.allow_comments);

        // Аргумент перекрывает окружение
        let args = ["shardsql", "--config", path, "--log-level", "error", "keywords"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.load_config().unwrap().logging.level, "error");

        // Неверное значение в окружении не проходит проверку
        env.set(ENV_LOG_LEVEL, "chatty");
        let cli = Cli::try_parse_from(["shardsql", "--config", path, "keywords"]).unwrap();
        assert!(matches!(
            cli.load_config(),
            Err(Error::Configuration { .. })
        ));
    }
}
