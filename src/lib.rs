#![deny(rust_2018_idioms)]

pub mod error;
pub mod lexer;
pub mod parser;
pub mod polynomial;

pub use error::Error;
pub use polynomial::{Monomial, Polynomial, Term, Variable};

use log::debug;

/// Expands an expression over `x`, `y` and `z` and renders it in canonical
/// form: like terms collected, zero terms dropped, higher-degree monomials
/// first and ties broken alphabetically, constant last.
///
/// ```
/// assert_eq!(
///     poly_simplify::simplify("2 * (3 * x + 4 * y) - 7 * y + 9").unwrap(),
///     "6 * x + y + 9"
/// );
/// assert!(poly_simplify::simplify("3 * ((").is_err());
/// ```
pub fn simplify(source: &str) -> Result<String, Error> {
    let polynomial = parser::parse(source).inspect_err(|_| debug!("rejected {source:?}"))?;
    let rendered = polynomial.to_string();
    debug!("{source:?} simplified to {rendered:?}");
    Ok(rendered)
}

/// Inputs paired with the canonical output they must produce, `None` where
/// the input must be rejected.
pub const SELF_TEST_CASES: &[(&str, Option<&str>)] = &[
    ("2 * (3 * x + 4 * y) - 7 * y + 9", Some("6 * x + y + 9")),
    ("z + z + 2 + 3 - 2 * z", Some("5")),
    ("3 * ((", None),
    ("3 * a + 5 * b + 3 * c", None),
    ("x * y + 2 * x * y", Some("3 * x * y")),
    ("x * 5 - 5 * x", Some("0")),
    ("5 * (x + 1)", Some("5 * x + 5")),
    (
        "(x + 1) * (x + 1) * (x + 1)",
        Some("x * x * x + 3 * x * x + 3 * x + 1"),
    ),
    ("(x + (1 + x + x * (x + 1)))", Some("x * x + 3 * x + 1")),
    ("3 * 5 * 2 * x", Some("30 * x")),
    ("3 * y * x - 2 * x * y", Some("x * y")),
    ("(x + 7) * 3", Some("3 * x + 21")),
    (
        "-5 * x * y + 20 * y - 5 * z * ( - x + 25 * y)",
        Some("-5 * x * y + 5 * x * z + -125 * y * z + 20 * y"),
    ),
];
