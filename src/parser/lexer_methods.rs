// Методы лексического анализатора

impl Lexer<'_> {
    /// Возвращает следующий значимый токен.
    ///
    /// Комментарии пропускаются, если лексер создан без `allow_comments`.
    pub fn next_token(&mut self) -> Token {
        let mut token = self.scan();
        while token.token_type == TokenType::Comment && !self.allow_comments {
            token = self.scan();
        }

        match &token.value {
            Some(value) => {
                self.error_token.clear();
                self.error_token.extend_from_slice(value);
                self.error_token_present = true;
            }
            None => self.error_token_present = false,
        }

        log::trace!("token {}", token);
        token
    }

    /// Записывает сообщение об ошибке вместе с позицией и текстом последнего токена
    pub fn report_error(&mut self, message: &str) {
        let formatted = match self.last_error_token() {
            Some(token) => format!(
                "{} at position {} near {}",
                message,
                self.position(),
                String::from_utf8_lossy(token)
            ),
            None => format!("{} at position {}", message, self.position()),
        };
        log::debug!("{}", formatted);
        self.last_error = Some(formatted);
    }

    /// Возвращает все токены до конца ввода включительно
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            if token.is_error() {
                self.report_error("syntax error");
                return Err(Error::sql_parsing(
                    self.last_error.clone().unwrap_or_default(),
                ));
            }

            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Возвращает имена синтезированных плейсхолдеров (`:v1`, `:v2`, ...)
    /// в том порядке, в котором `?` встречаются в тексте
    pub fn positional_placeholders(sql: &str) -> Result<Vec<String>> {
        let mut lexer = Lexer::new(sql);
        lexer.tokenize()?;
        Ok((1..=lexer.placeholder_count())
            .map(|index| format!(":v{}", index))
            .collect())
    }

    /// Возвращает все плейсхолдеры запроса, именованные и позиционные
    pub fn placeholders(sql: &str) -> Result<Vec<String>> {
        let tokens = Lexer::new(sql).tokenize()?;
        Ok(tokens
            .into_iter()
            .filter(|token| token.token_type == TokenType::ValueArg)
            .map(|token| token.text().into_owned())
            .collect())
    }

    /// Возвращает следующий токен, включая комментарии
    pub fn scan(&mut self) -> Token {
        if self.force_eof {
            return Token::bare(TokenType::Eof, self.position());
        }

        self.skip_blank();

        let start = self.position();
        let Some(ch) = self.reader.current() else {
            return Token::bare(TokenType::Eof, start);
        };

        if is_letter(ch) {
            return self.read_identifier_or_keyword(start);
        }
        if is_digit(ch) {
            return self.read_number(start, false);
        }
        if ch == b':' {
            return self.read_bind_var(start);
        }

        self.reader.advance();
        if let Some(token_type) = TokenType::from_self_delimiting(ch) {
            return Token::bare(token_type, start);
        }

        match ch {
            b'?' => {
                self.placeholder_index += 1;
                let name = format!(":v{}", self.placeholder_index);
                Token::new(TokenType::ValueArg, name.into_bytes(), start)
            }
            b'.' => {
                if self.reader.current().is_some_and(is_digit) {
                    self.read_number(start, true)
                } else {
                    Token::bare(TokenType::Dot, start)
                }
            }
            b'/' => match self.reader.current() {
                Some(b'/') => {
                    self.reader.advance();
                    self.read_line_comment(start, b"//")
                }
                Some(b'*') => {
                    self.reader.advance();
                    self.read_block_comment(start)
                }
                _ => Token::bare(TokenType::Divide, start),
            },
            b'-' => {
                if self.reader.advance_if(b'-') {
                    self.read_line_comment(start, b"--")
                } else {
                    Token::bare(TokenType::Minus, start)
                }
            }
            b'<' => self.read_less_operator(start),
            b'>' => {
                if self.reader.advance_if(b'=') {
                    Token::bare(TokenType::GreaterEqual, start)
                } else {
                    Token::bare(TokenType::Greater, start)
                }
            }
            // В диалекте нет самостоятельного `!`
            b'!' => {
                if self.reader.advance_if(b'=') {
                    Token::bare(TokenType::NotEqual, start)
                } else {
                    Token::new(TokenType::LexError, b"!".to_vec(), start)
                }
            }
            b'\'' | b'"' => self.read_quoted(start, ch, TokenType::String),
            b'`' => self.read_quoted(start, ch, TokenType::Identifier),
            _ => Token::new(TokenType::LexError, vec![ch], start),
        }
    }

    // === Вспомогательные методы ===

    /// Пропускает пробельные символы
    pub(crate) fn skip_blank(&mut self) {
        while self.reader.current().is_some_and(is_blank) {
            self.reader.advance();
        }
    }

    /// `<`, `<>`, `<=`, `<=>`; первый `<` уже потреблен
    pub(crate) fn read_less_operator(&mut self, start: usize) -> Token {
        if self.reader.advance_if(b'>') {
            return Token::bare(TokenType::NotEqual, start);
        }
        if self.reader.advance_if(b'=') {
            if self.reader.advance_if(b'>') {
                return Token::bare(TokenType::NullSafeEqual, start);
            }
            return Token::bare(TokenType::LessEqual, start);
        }
        Token::bare(TokenType::Less, start)
    }
}
