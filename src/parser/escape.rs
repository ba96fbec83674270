//! Таблицы escape-последовательностей строковых литералов MySQL
//!
//! Декодирование используется лексером для `\n`, `\t` и т.п. внутри кавычек,
//! кодирование - при обратной сборке литерала в текст запроса.

/// Метка "символ не экранируется"
pub const DONT_ESCAPE: u8 = 255;

/// Пары (исходный байт, символ после обратной косой черты)
const ESCAPE_PAIRS: [(u8, u8); 9] = [
    (0x00, b'0'),
    (b'\'', b'\''),
    (b'"', b'"'),
    (0x08, b'b'),
    (b'\n', b'n'),
    (b'\r', b'r'),
    (b'\t', b't'),
    (0x1a, b'Z'),
    (b'\\', b'\\'),
];

const fn build_map(decode: bool) -> [u8; 256] {
    let mut map = [DONT_ESCAPE; 256];
    let mut i = 0;
    while i < ESCAPE_PAIRS.len() {
        let (raw, code) = ESCAPE_PAIRS[i];
        if decode {
            map[code as usize] = raw;
        } else {
            map[raw as usize] = code;
        }
        i += 1;
    }
    map
}

/// Символ после `\` -> декодированный байт
pub static SQL_DECODE_MAP: [u8; 256] = build_map(true);

/// Байт -> символ, который пишется после `\`
pub static SQL_ENCODE_MAP: [u8; 256] = build_map(false);

/// Декодирует символ, следующий за обратной косой чертой.
/// Неизвестные последовательности пропускаются как есть: `\x` дает `x`.
#[inline]
pub fn decode_escape(ch: u8) -> u8 {
    match SQL_DECODE_MAP[ch as usize] {
        DONT_ESCAPE => ch,
        decoded => decoded,
    }
}

/// Собирает строковый литерал в одинарных кавычках, который лексер
/// прочитает обратно в те же байты
pub fn encode_sql_string(value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() + 2);
    out.push(b'\'');
    for &ch in value {
        match SQL_ENCODE_MAP[ch as usize] {
            DONT_ESCAPE => out.push(ch),
            code => {
                out.push(b'\\');
                out.push(code);
            }
        }
    }
    out.push(b'\'');
    out
}
