//! Передача подготовленного оператора на исполнение
//!
//! Лексер заменяет каждый `?` на `:v1`, `:v2`, ... в порядке появления.
//! Аргументы при исполнении передаются позиционно в том же порядке:
//! N-й `?` в тексте получает N-й аргумент.

use crate::common::{Error, Result};
use crate::parser::Lexer;

/// Значение аргумента подготовленного оператора
pub type BindValue = serde_json::Value;

/// Подготовленный оператор на стороне бэкенда
pub trait PreparedStatement {
    /// Результат исполнения (набор строк, число затронутых строк и т.п.)
    type Output;

    /// Исполняет оператор с позиционными аргументами
    fn execute(&mut self, args: &[BindValue]) -> Result<Self::Output>;

    /// Освобождает оператор на бэкенде
    fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Текст оператора вместе с именами его позиционных плейсхолдеров
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundStatement {
    sql: String,
    placeholders: Vec<String>,
}

impl BoundStatement {
    /// Разбирает текст оператора; лексическая ошибка возвращается как `SqlParsing`
    pub fn new(sql: impl Into<String>) -> Result<Self> {
        let sql = sql.into();
        let placeholders = Lexer::positional_placeholders(&sql)?;
        Ok(Self { sql, placeholders })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Синтезированные имена в лексическом порядке
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn param_count(&self) -> usize {
        self.placeholders.len()
    }

    /// Сопоставляет аргументы с именами плейсхолдеров
    pub fn bind<'s, 'v>(
        &'s self,
        args: &'v [BindValue],
    ) -> Result<Vec<(&'s str, &'v BindValue)>> {
        self.check_arity(args.len())?;

        Ok(self
            .placeholders
            .iter()
            .map(String::as_str)
            .zip(args.iter())
            .collect())
    }

    /// Проверяет число аргументов и исполняет оператор
    pub fn execute<S: PreparedStatement>(
        &self,
        stmt: &mut S,
        args: &[BindValue],
    ) -> Result<S::Output> {
        self.check_arity(args.len())?;
        log::debug!("executing statement with {} bound arguments", args.len());
        stmt.execute(args)
    }

    fn check_arity(&self, given: usize) -> Result<()> {
        if given != self.placeholders.len() {
            return Err(Error::binding(format!(
                "statement expects {} arguments, got {}",
                self.placeholders.len(),
                given
            )));
        }
        Ok(())
    }
}
