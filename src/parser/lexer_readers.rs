// Методы чтения специальных токенов для лексического анализатора

/// Состояния разбора числового литерала
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    /// Первая цифра `0`: дальше hex или восьмеричное число
    LeadingZero,
    Hex,
    Octal,
    Mantissa,
    Fraction,
    Exponent,
    Done,
    /// Восьмеричное число с цифрами 8 или 9 без точки и экспоненты
    IllegalOctal,
}

impl Lexer<'_> {
    /// Читает идентификатор или ключевое слово
    pub(crate) fn read_identifier_or_keyword(&mut self, start: usize) -> Token {
        let mut value = Vec::with_capacity(8);
        self.reader.consume_into(&mut value);

        // Читаем буквы и цифры
        while let Some(ch) = self.reader.current() {
            if !is_letter(ch) && !is_digit(ch) {
                break;
            }
            self.reader.consume_into(&mut value);
        }

        let lowered = value.to_ascii_lowercase();
        match Keyword::lookup(&lowered) {
            Some(keyword) => Token::new(TokenType::Keyword(keyword), lowered, start),
            None => Token::new(TokenType::Identifier, value, start),
        }
    }

    /// Читает именованный плейсхолдер `:name`
    pub(crate) fn read_bind_var(&mut self, start: usize) -> Token {
        let mut value = Vec::with_capacity(8);
        self.reader.consume_into(&mut value);

        while let Some(ch) = self.reader.current() {
            if !is_letter(ch) && !is_digit(ch) && ch != b'.' {
                break;
            }
            self.reader.consume_into(&mut value);
        }

        if value.len() == 1 {
            return Token::new(TokenType::LexError, value, start);
        }
        Token::new(TokenType::ValueArg, value, start)
    }

    /// Читает цифры, значение которых меньше `base`
    pub(crate) fn read_mantissa(&mut self, base: u32, value: &mut Vec<u8>) {
        while digit_val(self.reader.current()) < base {
            self.reader.consume_into(value);
        }
    }

    /// Читает числовой литерал.
    ///
    /// `seen_decimal_point` означает, что точка уже потреблена в `scan`
    /// (литерал вида `.5`). Текст токена совпадает с исходным написанием.
    pub(crate) fn read_number(&mut self, start: usize, seen_decimal_point: bool) -> Token {
        let mut value = Vec::with_capacity(8);
        let mut state = if seen_decimal_point {
            value.push(b'.');
            self.read_mantissa(10, &mut value);
            NumberState::Exponent
        } else {
            NumberState::Start
        };

        loop {
            state = match state {
                NumberState::Start => {
                    if self.reader.current() == Some(b'0') {
                        NumberState::LeadingZero
                    } else {
                        NumberState::Mantissa
                    }
                }
                NumberState::LeadingZero => {
                    self.reader.consume_into(&mut value);
                    if matches!(self.reader.current(), Some(b'x' | b'X')) {
                        self.reader.consume_into(&mut value);
                        NumberState::Hex
                    } else {
                        NumberState::Octal
                    }
                }
                NumberState::Hex => {
                    self.read_mantissa(16, &mut value);
                    NumberState::Done
                }
                NumberState::Octal => {
                    self.read_mantissa(8, &mut value);
                    let seen_decimal_digit = matches!(self.reader.current(), Some(b'8' | b'9'));
                    if seen_decimal_digit {
                        self.read_mantissa(10, &mut value);
                    }
                    if matches!(self.reader.current(), Some(b'.' | b'e' | b'E')) {
                        NumberState::Fraction
                    } else if seen_decimal_digit {
                        NumberState::IllegalOctal
                    } else {
                        NumberState::Done
                    }
                }
                NumberState::Mantissa => {
                    self.read_mantissa(10, &mut value);
                    NumberState::Fraction
                }
                NumberState::Fraction => {
                    if self.reader.current() == Some(b'.') {
                        self.reader.consume_into(&mut value);
                        self.read_mantissa(10, &mut value);
                    }
                    NumberState::Exponent
                }
                NumberState::Exponent => {
                    if matches!(self.reader.current(), Some(b'e' | b'E')) {
                        self.reader.consume_into(&mut value);
                        if matches!(self.reader.current(), Some(b'+' | b'-')) {
                            self.reader.consume_into(&mut value);
                        }
                        self.read_mantissa(10, &mut value);
                    }
                    NumberState::Done
                }
                NumberState::Done => return Token::new(TokenType::Number, value, start),
                NumberState::IllegalOctal => {
                    return Token::new(TokenType::LexError, value, start)
                }
            };
        }
    }

    /// Читает строку или идентификатор в кавычках; открывающая кавычка уже потреблена.
    ///
    /// Удвоенный ограничитель дает сам ограничитель, `\` декодируется по таблице
    /// escape-последовательностей. Конец ввода до закрывающей кавычки - ошибка.
    pub(crate) fn read_quoted(&mut self, start: usize, delim: u8, token_type: TokenType) -> Token {
        let mut value = Vec::with_capacity(8);

        loop {
            let Some(mut ch) = self.reader.current() else {
                return Token::new(TokenType::LexError, value, start);
            };
            self.reader.advance();

            if ch == delim {
                if !self.reader.advance_if(delim) {
                    break;
                }
            } else if ch == b'\\' {
                let Some(escaped) = self.reader.current() else {
                    return Token::new(TokenType::LexError, value, start);
                };
                ch = decode_escape(escaped);
                self.reader.advance();
            }

            value.push(ch);
        }

        Token::new(token_type, value, start)
    }

    /// Читает однострочный комментарий вместе с переводом строки
    pub(crate) fn read_line_comment(&mut self, start: usize, prefix: &[u8]) -> Token {
        let mut value = prefix.to_vec();

        while let Some(ch) = self.reader.current() {
            self.reader.consume_into(&mut value);
            if ch == b'\n' {
                break;
            }
        }

        Token::new(TokenType::Comment, value, start)
    }

    /// Читает многострочный комментарий; `/*` уже потреблен
    pub(crate) fn read_block_comment(&mut self, start: usize) -> Token {
        let mut value = b"/*".to_vec();

        loop {
            match self.reader.current() {
                None => return Token::new(TokenType::LexError, value, start),
                Some(b'*') => {
                    self.reader.consume_into(&mut value);
                    if self.reader.current() == Some(b'/') {
                        self.reader.consume_into(&mut value);
                        break;
                    }
                }
                Some(_) => self.reader.consume_into(&mut value),
            }
        }

        Token::new(TokenType::Comment, value, start)
    }
}
