use crate::error_handling::Position;

use super::{Result, TranslateError, TranslateErrorType};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Token {
    Open,
    Close,
    Or,
    Star,
    Symbol(char)
}

// Whitespace is skipped; anything outside the supported subset is rejected
// with the column it was found at
pub fn lex_pattern(pattern: &str) -> Result<Vec<(Position, Token)>> {
    let mut tokens = Vec::new();

    for (i, c) in pattern.chars().enumerate() {
        let position = Position { column: i + 1 };
        let token = match c {
            '(' => Token::Open,
            ')' => Token::Close,
            '|' => Token::Or,
            '*' => Token::Star,
            c if c.is_ascii_alphabetic() => Token::Symbol(c),
            c if c.is_whitespace() => continue,
            c => return Err(TranslateError {
                position,
                error: TranslateErrorType::UnsupportedCharacter(c)
            })
        };
        tokens.push((position, token));
    }

    return Ok(tokens);
}
