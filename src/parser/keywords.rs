//! Зарезервированные слова диалекта MySQL
//!
//! Таблица строится один раз при первом обращении и дальше только читается,
//! поэтому ее можно использовать из любого числа лексеров одновременно.

use std::collections::HashMap;
use std::fmt;

macro_rules! define_keywords {
    ($($variant:ident => $spelling:literal,)*) => {
        /// Ключевое слово SQL
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Все ключевые слова в порядке объявления
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Написание в нижнем регистре, под которым слово лежит в таблице
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $spelling,)*
                }
            }
        }
    };
}

define_keywords! {
    // DML
    Select => "select",
    Insert => "insert",
    Update => "update",
    Delete => "delete",
    From => "from",
    Where => "where",
    Group => "group",
    Having => "having",
    Order => "order",
    By => "by",
    Limit => "limit",
    Offset => "offset",
    For => "for",
    Into => "into",
    Values => "values",
    Duplicate => "duplicate",
    Key => "key",
    Default => "default",
    Set => "set",
    Lock => "lock",
    Replace => "replace",

    // Операции над множествами
    Union => "union",
    All => "all",
    Minus => "minus",
    Except => "except",
    Intersect => "intersect",

    // JOIN
    Join => "join",
    Full => "full",
    StraightJoin => "straight_join",
    Left => "left",
    Right => "right",
    Inner => "inner",
    Outer => "outer",
    Cross => "cross",
    Natural => "natural",
    Use => "use",
    Force => "force",
    On => "on",
    Using => "using",

    // Выражения
    Distinct => "distinct",
    Case => "case",
    When => "when",
    Then => "then",
    Else => "else",
    End => "end",
    As => "as",
    And => "and",
    Or => "or",
    Not => "not",
    Exists => "exists",
    In => "in",
    Is => "is",
    Like => "like",
    Between => "between",
    Null => "null",
    Asc => "asc",
    Desc => "desc",

    // DDL
    Create => "create",
    Alter => "alter",
    Rename => "rename",
    Drop => "drop",
    Table => "table",
    Index => "index",
    View => "view",
    To => "to",
    Ignore => "ignore",
    If => "if",
    Unique => "unique",

    // Транзакции и уровни изоляции
    Begin => "begin",
    Rollback => "rollback",
    Commit => "commit",
    Start => "start",
    Transaction => "transaction",
    Isolation => "isolation",
    Level => "level",
    Repeatable => "repeatable",
    Read => "read",
    Committed => "committed",
    Uncommitted => "uncommitted",
    Serializable => "serializable",

    // Кодировки и сессия
    Names => "names",
    Collate => "collate",
    Charset => "charset",
    Character => "character",
    Collation => "collation",
    Session => "session",
    Global => "global",

    // SHOW / DESCRIBE
    Show => "show",
    Describe => "describe",
    Explain => "explain",
    Variables => "variables",
    Status => "status",
    Databases => "databases",
    Database => "database",
    Tables => "tables",
    Columns => "columns",
    Procedure => "procedure",
    Function => "function",
    Engines => "engines",
    Storage => "storage",
    Plugins => "plugins",
    Processlist => "processlist",
    Indexes => "indexes",
    Keys => "keys",
    Triggers => "triggers",
    Trigger => "trigger",
    Slave => "slave",

    // Имена кодировок
    Armscii8 => "armscii8",
    Ascii => "ascii",
    Big5 => "big5",
    Binary => "binary",
    Cp1250 => "cp1250",
    Cp1251 => "cp1251",
    Cp1256 => "cp1256",
    Cp1257 => "cp1257",
    Cp850 => "cp850",
    Cp852 => "cp852",
    Cp866 => "cp866",
    Cp932 => "cp932",
    Dec8 => "dec8",
    Eucjpms => "eucjpms",
    Euckr => "euckr",
    Gb2312 => "gb2312",
    Gbk => "gbk",
    Geostd8 => "geostd8",
    Greek => "greek",
    Hebrew => "hebrew",
    Hp8 => "hp8",
    Keybcs2 => "keybcs2",
    Koi8r => "koi8r",
    Koi8u => "koi8u",
    Latin1 => "latin1",
    Latin2 => "latin2",
    Latin5 => "latin5",
    Latin7 => "latin7",
    Macce => "macce",
    Macroman => "macroman",
    Sjis => "sjis",
    Swe7 => "swe7",
    Tis620 => "tis620",
    Ucs2 => "ucs2",
    Ujis => "ujis",
    Utf16 => "utf16",
    Utf16le => "utf16le",
    Utf32 => "utf32",
    Utf8 => "utf8",
    Utf8mb4 => "utf8mb4",

    // Администрирование прокси
    Admin => "admin",
    Help => "help",
}

impl Keyword {
    /// Ищет ключевое слово по написанию в нижнем регистре
    pub fn lookup(lowered: &[u8]) -> Option<Keyword> {
        KEYWORDS.get(lowered).copied()
    }

    /// Является ли слово именем кодировки
    pub fn is_charset(&self) -> bool {
        matches!(
            self,
            Keyword::Armscii8
                | Keyword::Ascii
                | Keyword::Big5
                | Keyword::Binary
                | Keyword::Cp1250
                | Keyword::Cp1251
                | Keyword::Cp1256
                | Keyword::Cp1257
                | Keyword::Cp850
                | Keyword::Cp852
                | Keyword::Cp866
                | Keyword::Cp932
                | Keyword::Dec8
                | Keyword::Eucjpms
                | Keyword::Euckr
                | Keyword::Gb2312
                | Keyword::Gbk
                | Keyword::Geostd8
                | Keyword::Greek
                | Keyword::Hebrew
                | Keyword::Hp8
                | Keyword::Keybcs2
                | Keyword::Koi8r
                | Keyword::Koi8u
                | Keyword::Latin1
                | Keyword::Latin2
                | Keyword::Latin5
                | Keyword::Latin7
                | Keyword::Macce
                | Keyword::Macroman
                | Keyword::Sjis
                | Keyword::Swe7
                | Keyword::Tis620
                | Keyword::Ucs2
                | Keyword::Ujis
                | Keyword::Utf16
                | Keyword::Utf16le
                | Keyword::Utf32
                | Keyword::Utf8
                | Keyword::Utf8mb4
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}

lazy_static::lazy_static! {
    /// Карта ключевых слов для быстрого поиска
    static ref KEYWORDS: HashMap<&'static [u8], Keyword> = Keyword::ALL
        .iter()
        .map(|keyword| (keyword.as_str().as_bytes(), *keyword))
        .collect();
}
