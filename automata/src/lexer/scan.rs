
use std::iter::Peekable;
use std::str::Chars;

use super::types::Token;

/*
 * Lazily splits a string into tokens.
 * Whitespace only separates tokens, a letter absorbs the
 * apostrophe right after it, and every other character
 * stands for itself.
 */
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(raw: &'a str) -> Self {
        Tokens {chars: raw.chars().peekable()}
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = loop {
            match self.chars.next() {
                Some(c) if c.is_whitespace() => continue,
                Some(c) => break c,
                None => return None,
            }
        };

        if c.is_alphabetic() && self.chars.peek() == Some(&'\'') {
            self.chars.next();
            Token::primed(c)
        } else {
            Some(Token::new(c))
        }
    }
}

pub fn tokens(raw: &str) -> Tokens<'_> {
    Tokens::new(raw)
}

pub fn tokenize(raw: &str) -> Vec<Token> {
    tokens(raw).collect()
}
