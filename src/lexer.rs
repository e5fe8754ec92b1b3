use crate::{polynomial::Variable, Error};
use log::trace;
use num_bigint::BigUint;
use std::{
    iter::{FusedIterator, Peekable},
    str::Chars,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Always non-negative; a leading `-` is its own token.
    Number(BigUint),
    Variable(Variable),
    Plus,
    Minus,
    Asterisk,
    OpenParenthesis,
    CloseParenthesis,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Variable(variable) => write!(f, "{variable}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

/// Splits an expression into tokens, ignoring spaces.
///
/// A `-` directly in front of a variable is followed by a synthetic `1 *`,
/// so `-x` reaches the parser as `- 1 * x`.
pub struct Lexer<'source> {
    source: &'source str,
    chars: Peekable<Chars<'source>>,
    pending: Vec<Token>,
    failed: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            pending: vec![],
            failed: false,
        }
    }

    fn next_significant_char(&self) -> Option<char> {
        self.chars.clone().find(|&c| c != ' ')
    }

    fn skip_spaces(&mut self) {
        while self.chars.next_if_eq(&' ').is_some() {}
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(token) = self.pending.pop() {
            trace!("token {token}");
            return Some(Ok(token));
        }

        let token = loop {
            break match self.chars.next()? {
                ' ' => continue,

                c @ '0'..='9' => {
                    let mut value = BigUint::from(c as u8 - b'0');
                    loop {
                        self.skip_spaces();
                        let Some(digit) = self.chars.next_if(char::is_ascii_digit) else {
                            break;
                        };
                        value = value * 10u8 + (digit as u8 - b'0');
                    }
                    Token::Number(value)
                }

                '-' => {
                    if self
                        .next_significant_char()
                        .map_or(false, |c| Variable::from_char(c).is_some())
                    {
                        // popped in reverse
                        self.pending.push(Token::Asterisk);
                        self.pending.push(Token::Number(BigUint::from(1u8)));
                    }
                    Token::Minus
                }

                '+' => Token::Plus,
                '*' => Token::Asterisk,
                '(' => Token::OpenParenthesis,
                ')' => Token::CloseParenthesis,

                c => match Variable::from_char(c) {
                    Some(variable) => Token::Variable(variable),
                    None => {
                        trace!("unexpected character {c:?} in {:?}", self.source);
                        self.failed = true;
                        return Some(Err(Error::InvalidExpression));
                    }
                },
            };
        };

        trace!("token {token}");
        Some(Ok(token))
    }
}

impl<'source> FusedIterator for Lexer<'source> {}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).collect()
}
