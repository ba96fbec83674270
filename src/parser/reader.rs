//! Посимвольное чтение входного SQL текста
//!
//! Лексер видит ровно один символ вперед и никогда не возвращается назад.
//! Символы здесь - это байты: многобайтовые последовательности UTF-8 внутри
//! строк копируются без изменений.

/// Поток символов с одним символом lookahead
#[derive(Debug, Clone)]
pub struct CharReader<'a> {
    input: &'a [u8],
    /// Смещение текущего (еще не потребленного) символа
    offset: usize,
    /// Позиция текущего символа, начиная с 1
    position: usize,
}

impl<'a> CharReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            position: 1,
        }
    }

    /// Текущий символ или `None` в конце ввода
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Потребляет текущий символ.
    ///
    /// # Panics
    ///
    /// Вызов в конце ввода - ошибка в самом лексере, а не во входных данных.
    #[inline]
    pub fn advance(&mut self) {
        if self.offset >= self.input.len() {
            panic!("unexpected end of input at position {}", self.position);
        }
        self.offset += 1;
        self.position += 1;
    }

    /// Потребляет текущий символ, если он равен `expected`
    #[inline]
    pub fn advance_if(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Дописывает текущий символ в буфер и потребляет его
    #[inline]
    pub fn consume_into(&mut self, buffer: &mut Vec<u8>) {
        if let Some(ch) = self.current() {
            buffer.push(ch);
        }
        self.advance();
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// Буква идентификатора: латиница, `_` и `@`
#[inline]
pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_' || ch == b'@'
}

#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Значение шестнадцатеричной цифры; 16 для всего остального, включая конец ввода
#[inline]
pub fn digit_val(ch: Option<u8>) -> u32 {
    match ch {
        Some(c @ b'0'..=b'9') => u32::from(c - b'0'),
        Some(c @ b'a'..=b'f') => u32::from(c - b'a') + 10,
        Some(c @ b'A'..=b'F') => u32::from(c - b'A') + 10,
        _ => 16,
    }
}

#[inline]
pub fn is_blank(ch: u8) -> bool {
    matches!(ch, b' ' | b'\n' | b'\r' | b'\t')
}
