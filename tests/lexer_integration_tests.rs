//! Интеграционные тесты shardsql
//!
//! Проверяют поведение лексера через публичный API так, как его видит парсер прокси

use shardsql::backend::BoundStatement;
use shardsql::common::Config;
use shardsql::parser::encode_sql_string;
use shardsql::{Error, Keyword, Lexer, Token, TokenType};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pull_all(sql: &str, allow_comments: bool) -> Vec<Token> {
    let mut lexer = Lexer::new(sql).with_comments(allow_comments);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

/// Имитация парсера: забирает токены до конца или до ошибки
fn parse_like_consumer(sql: &str) -> std::result::Result<usize, String> {
    let mut lexer = Lexer::new(sql);
    let mut count = 0;
    loop {
        let token = lexer.next_token();
        match token.token_type {
            TokenType::Eof => return Ok(count),
            TokenType::LexError => {
                lexer.report_error("syntax error");
                return Err(lexer.last_error().unwrap_or_default().to_string());
            }
            _ => count += 1,
        }
    }
}

#[test]
fn test_statement_corpus_tokenizes_cleanly() {
    init_logging();

    let corpus = [
        "select * from t where id in (1, 2, 3)",
        "insert into t (a, b) values (?, 'x') on duplicate key update b = values(b)",
        "update t set a = a + 1 where b <=> null limit 10",
        "delete from t where a >= 0x1F and b != .5",
        "show full processlist",
        "set names utf8mb4 collate utf8mb4_general_ci",
        "start transaction",
        "select `order`, @@session.autocommit from `db`.`t` force index (idx)",
        "admin help",
    ];

    for sql in corpus {
        let tokens = Lexer::new(sql).tokenize().unwrap();
        assert!(tokens.last().unwrap().is_eof(), "{}", sql);
        assert!(tokens.iter().all(|t| !t.is_error()), "{}", sql);
    }
}

#[test]
fn test_retokenization_is_deterministic() {
    let sql = "select a, b, ? from t /* hint */ where c = :name and d = ? -- tail";

    assert_eq!(pull_all(sql, true), pull_all(sql, true));
    assert_eq!(pull_all(sql, false), pull_all(sql, false));
}

#[test]
fn test_placeholder_numbering_ignores_named() {
    let sql = "select ? , :a, ?, :b.c, ?";
    let names: Vec<String> = pull_all(sql, false)
        .iter()
        .filter(|t| t.token_type == TokenType::ValueArg)
        .map(|t| t.text().into_owned())
        .collect();

    assert_eq!(names, vec![":v1", ":a", ":v2", ":b.c", ":v3"]);
    assert_eq!(
        Lexer::positional_placeholders(sql).unwrap(),
        vec![":v1", ":v2", ":v3"]
    );
}

#[test]
fn test_comment_visibility() {
    let hidden: Vec<TokenType> = pull_all("SELECT /* x */ 1", false)
        .iter()
        .map(|t| t.token_type)
        .collect();
    assert_eq!(
        hidden,
        vec![
            TokenType::Keyword(Keyword::Select),
            TokenType::Number,
            TokenType::Eof
        ]
    );

    let shown: Vec<TokenType> = pull_all("SELECT /* x */ 1", true)
        .iter()
        .map(|t| t.token_type)
        .collect();
    assert_eq!(
        shown,
        vec![
            TokenType::Keyword(Keyword::Select),
            TokenType::Comment,
            TokenType::Number,
            TokenType::Eof
        ]
    );
}

#[test]
fn test_lexical_errors_reach_consumer() {
    init_logging();

    assert_eq!(parse_like_consumer("select 1 from t"), Ok(4));
    assert_eq!(
        parse_like_consumer("select 089"),
        Err("syntax error at position 11 near 089".to_string())
    );
    assert_eq!(
        parse_like_consumer("select 'abc"),
        Err("syntax error at position 12 near abc".to_string())
    );
    assert_eq!(
        parse_like_consumer("select /* abc"),
        Err("syntax error at position 14 near /* abc".to_string())
    );
    assert_eq!(
        parse_like_consumer("select a ! b"),
        Err("syntax error at position 11 near !".to_string())
    );
}

#[test]
fn test_force_eof_truncates_multi_statement_input() {
    let mut lexer = Lexer::new("select 1; drop table t");
    let mut seen = Vec::new();

    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        if token.token_type == TokenType::Semicolon {
            lexer.force_eof();
        }
        seen.push(token.token_type);
    }

    assert_eq!(
        seen,
        vec![
            TokenType::Keyword(Keyword::Select),
            TokenType::Number,
            TokenType::Semicolon
        ]
    );
}

#[test]
fn test_rewritten_literal_survives_relexing() {
    let value = "O'Brien\\\n\t\u{0}";
    let sql = format!(
        "select * from t where name = {}",
        String::from_utf8(encode_sql_string(value.as_bytes())).unwrap()
    );

    let tokens = Lexer::new(&sql).tokenize().unwrap();
    let literal = tokens
        .iter()
        .find(|t| t.token_type == TokenType::String)
        .unwrap();
    assert_eq!(literal.bytes(), value.as_bytes());
}

#[test]
fn test_bound_statement_ordering() {
    let stmt = BoundStatement::new("select * from t where a = ? and b = ?").unwrap();
    let args = vec![serde_json::json!(1), serde_json::json!("two")];
    let bound = stmt.bind(&args).unwrap();

    assert_eq!(bound[0].0, ":v1");
    assert_eq!(bound[0].1, &args[0]);
    assert_eq!(bound[1].0, ":v2");
    assert_eq!(bound[1].1, &args[1]);

    assert!(matches!(
        stmt.bind(&args[..1]),
        Err(Error::Binding { .. })
    ));
}

#[test]
fn test_lexer_from_config() {
    let mut config = Config::default();
    config.lexer.allow_comments = true;

    let mut lexer = Lexer::with_config("# not a comment", &config.lexer);
    let token = lexer.next_token();
    // `#` не начинает комментарий в этом диалекте
    assert!(token.is_error());
    assert_eq!(token.bytes(), b"#");
}
