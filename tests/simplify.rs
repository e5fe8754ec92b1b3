use poly_simplify::{simplify, Error, SELF_TEST_CASES};
use pretty_assertions::assert_eq;

#[test]
fn factor_order_is_canonical() {
    assert_eq!(simplify("x*y").unwrap(), "x * y");
    assert_eq!(simplify("y*x").unwrap(), "x * y");
    assert_eq!(simplify("z*y*x*y").unwrap(), "x * y * y * z");
}

#[test]
fn zero_terms_are_dropped() {
    assert_eq!(simplify("x - x").unwrap(), "0");
    assert_eq!(simplify("5*x - 5*x").unwrap(), "0");
    assert_eq!(simplify("x*y - y*x + 2").unwrap(), "2");
    assert_eq!(simplify("(x + y) * 0").unwrap(), "0");
}

#[test]
fn distribution() {
    assert_eq!(
        simplify("(x+1)*(x+1)*(x+1)").unwrap(),
        "x * x * x + 3 * x * x + 3 * x + 1"
    );
    assert_eq!(
        simplify("(x + y + z) * (x - y)").unwrap(),
        "x * x + x * z + -1 * y * y + -1 * y * z"
    );
}

#[test]
fn negative_coefficients_stay_after_plus() {
    assert_eq!(
        simplify("-5*x*y + 20*y - 5*z*(-x+25*y)").unwrap(),
        "-5 * x * y + 5 * x * z + -125 * y * z + 20 * y"
    );
    assert_eq!(simplify("x - 3").unwrap(), "x + -3");
}

#[test]
fn term_ordering() {
    assert_eq!(simplify("2*(3*x+4*y) - 7*y + 9").unwrap(), "6 * x + y + 9");
    assert_eq!(simplify("1 + z + y*y + x").unwrap(), "y * y + x + z + 1");
}

#[test]
fn malformed_input() {
    assert_eq!(simplify("3 * (("), Err(Error::InvalidExpression));
    assert_eq!(simplify("3*a+5*b"), Err(Error::InvalidExpression));
    assert_eq!(simplify(""), Err(Error::InvalidExpression));
    assert_eq!(simplify("x +"), Err(Error::InvalidExpression));
    assert_eq!(simplify("(x))"), Err(Error::InvalidExpression));
    assert_eq!(simplify("x / 2"), Err(Error::InvalidExpression));
    assert_eq!(simplify("2.5 * x"), Err(Error::InvalidExpression));
    assert_eq!(
        Error::InvalidExpression.to_string(),
        "invalid expression"
    );
}

#[test]
fn coefficients_are_not_bounded() {
    assert_eq!(
        simplify("10000000000 * 10000000000").unwrap(),
        "100000000000000000000"
    );
    assert_eq!(
        simplify("99999999999999999999 * x").unwrap(),
        "99999999999999999999 * x"
    );
    assert_eq!(
        simplify("-9223372036854775808").unwrap(),
        "-9223372036854775808"
    );
    assert_eq!(
        simplify("9223372036854775807 * x + x").unwrap(),
        "9223372036854775808 * x"
    );
    assert_eq!(
        simplify("(10000000000 * x + 1) * (10000000000 * x - 1)").unwrap(),
        "100000000000000000000 * x * x + -1"
    );
}

#[test]
fn unary_minus_controls() {
    assert_eq!(simplify("- ( x )"), Err(Error::InvalidExpression));
    assert_eq!(simplify("-x*-y").unwrap(), "x * y");
}

#[test]
fn simplification_is_idempotent() {
    let extra = [
        "(x + y + z) * (x - y)",
        "-x - y - z",
        "x - 3",
        "-1 * x * x + 0",
    ];
    let sources = SELF_TEST_CASES
        .iter()
        .map(|&(input, _)| input)
        .chain(extra);
    for source in sources {
        let Ok(once) = simplify(source) else {
            continue;
        };
        assert_eq!(simplify(&once).as_deref(), Ok(once.as_str()), "{source:?}");
    }
}

#[test]
fn independent_calls_in_parallel() {
    let handles = SELF_TEST_CASES
        .iter()
        .map(|&(input, expected)| {
            std::thread::spawn(move || (simplify(input).ok(), expected))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        let (result, expected) = handle.join().unwrap();
        assert_eq!(result.as_deref(), expected);
    }
}
