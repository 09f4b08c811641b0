//! Filter expression tokenizer

use std::collections::VecDeque;

use super::tokens::{Spanned, Token};
use crate::error::SyntaxError;

/// Characters allowed inside a bare identifier
#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '@' | '*')
}

/// Split `input` into tokens, terminated by [`Token::EOF`]
pub fn tokenize(input: &str) -> Result<VecDeque<Spanned>, SyntaxError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = VecDeque::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            ',' => Token::Comma,
            '|' => Token::Pipe,
            '.' => Token::Dot,
            '-' => Token::Minus,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '\'' | '"' => {
                let (literal, next) = read_quoted(input, &chars, i)?;
                tokens.push_back(Spanned::new(Token::Quoted(literal), i));
                i = next;
                continue;
            }
            c if is_identifier_char(c) => {
                let start = i;
                let mut name = String::new();
                // '-' is only a negation prefix at the start of a selector
                while i < chars.len() && (is_identifier_char(chars[i]) || chars[i] == '-') {
                    name.push(chars[i]);
                    i += 1;
                }
                tokens.push_back(Spanned::new(Token::Identifier(name), start));
                continue;
            }
            other => {
                return Err(SyntaxError::new(
                    input,
                    i,
                    format!("unexpected character '{other}'"),
                ));
            }
        };
        tokens.push_back(Spanned::new(token, i));
        i += 1;
    }

    tokens.push_back(Spanned::new(Token::EOF, chars.len()));
    Ok(tokens)
}

/// Read a quoted literal starting at `start`; returns the literal and the
/// index just past the closing quote
fn read_quoted(input: &str, chars: &[char], start: usize) -> Result<(String, usize), SyntaxError> {
    let quote = chars[start];
    let mut literal = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                literal.push(chars[i + 1]);
                i += 2;
            }
            c if c == quote => return Ok((literal, i + 1)),
            c => {
                literal.push(c);
                i += 1;
            }
        }
    }

    Err(SyntaxError::new(input, start, "unterminated quoted name"))
}
