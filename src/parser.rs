use crate::{
    lexer::{tokenize, Token},
    polynomial::Polynomial,
    Error,
};
use log::{debug, trace};
use num_bigint::BigInt;

/// Parses and simplifies a whole expression. Every token must be consumed.
pub fn parse(source: &str) -> Result<Polynomial, Error> {
    let tokens = tokenize(source)?;
    let (polynomial, position) = parse_expression(&tokens, 0)?;
    if position != tokens.len() {
        debug!(
            "unexpected '{}' after a complete expression at token {position}",
            tokens[position]
        );
        return Err(Error::InvalidExpression);
    }
    Ok(polynomial)
}

pub fn parse_expression(tokens: &[Token], position: usize) -> Result<(Polynomial, usize), Error> {
    if position >= tokens.len() {
        debug!("expected an expression but reached the end of input");
        return Err(Error::InvalidExpression);
    }
    parse_additive(tokens, position)
}

pub fn parse_additive(tokens: &[Token], position: usize) -> Result<(Polynomial, usize), Error> {
    let (mut polynomial, mut position) = parse_multiplicative(tokens, position)?;
    while let Some(operator @ (Token::Plus | Token::Minus)) = tokens.get(position) {
        let (right, next) = parse_multiplicative(tokens, position + 1)?;
        polynomial = match operator {
            Token::Plus => polynomial.add(&right),
            _ => polynomial.sub(&right),
        };
        trace!("additive {operator} reduced to {polynomial}");
        position = next;
    }
    Ok((polynomial, position))
}

pub fn parse_multiplicative(
    tokens: &[Token],
    position: usize,
) -> Result<(Polynomial, usize), Error> {
    let (mut polynomial, mut position) = parse_primary(tokens, position)?;
    while let Some(Token::Asterisk) = tokens.get(position) {
        let (right, next) = parse_primary(tokens, position + 1)?;
        polynomial = polynomial.mul(&right);
        trace!("multiplicative reduced to {polynomial}");
        position = next;
    }
    Ok((polynomial, position))
}

pub fn parse_primary(tokens: &[Token], position: usize) -> Result<(Polynomial, usize), Error> {
    Ok(match tokens.get(position..).unwrap_or_default() {
        [Token::Variable(variable), ..] => (Polynomial::variable(*variable), position + 1),
        [Token::Number(value), ..] => (Polynomial::constant(value.clone()), position + 1),
        [Token::Minus, Token::Number(value), ..] => (
            Polynomial::constant(-BigInt::from(value.clone())),
            position + 2,
        ),
        [Token::OpenParenthesis, ..] => {
            let (polynomial, position) = parse_expression(tokens, position + 1)?;
            match tokens.get(position) {
                Some(Token::CloseParenthesis) => (polynomial, position + 1),
                Some(token) => {
                    debug!("expected ')' but got '{token}' at token {position}");
                    return Err(Error::InvalidExpression);
                }
                None => {
                    debug!("unclosed parenthesis");
                    return Err(Error::InvalidExpression);
                }
            }
        }
        [token, ..] => {
            debug!("unexpected '{token}' at token {position}");
            return Err(Error::InvalidExpression);
        }
        [] => {
            debug!("unexpected end of input when parsing a primary");
            return Err(Error::InvalidExpression);
        }
    })
}
