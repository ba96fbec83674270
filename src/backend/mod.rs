//! Связь с бэкендом MySQL: исполнение подготовленных операторов

pub mod stmt;

pub use stmt::{BindValue, BoundStatement, PreparedStatement};
