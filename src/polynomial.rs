use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::collections::HashMap;

/// One of the three symbols an expression may mention.
///
/// Declaration order is alphabetical, so the derived `Ord` is the order used
/// both for sorting the factors of a monomial and for tie-breaking terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    X,
    Y,
    Z,
}

impl Variable {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Variable::X),
            'y' => Some(Variable::Y),
            'z' => Some(Variable::Z),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variable::X => write!(f, "x"),
            Variable::Y => write!(f, "y"),
            Variable::Z => write!(f, "z"),
        }
    }
}

/// A product of variables, stored with its factors sorted so that `x*y` and
/// `y*x` are the same key. The empty product is the constant monomial.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial(Vec<Variable>);

impl Monomial {
    pub fn one() -> Self {
        Self(vec![])
    }

    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Self {
        let mut variables = variables.into_iter().collect::<Vec<_>>();
        variables.sort();
        Self(variables)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.0
    }

    /// Number of variable factors, counting repeats.
    pub fn degree(&self) -> usize {
        self.0.len()
    }

    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges the factors of both monomials, keeping them sorted.
    pub fn times(&self, other: &Monomial) -> Monomial {
        let mut variables = Vec::with_capacity(self.0.len() + other.0.len());
        let (mut i, mut j) = (0, 0);
        while i < self.0.len() && j < other.0.len() {
            if self.0[i] <= other.0[j] {
                variables.push(self.0[i]);
                i += 1;
            } else {
                variables.push(other.0[j]);
                j += 1;
            }
        }
        variables.extend_from_slice(&self.0[i..]);
        variables.extend_from_slice(&other.0[j..]);
        Monomial(variables)
    }

    /// Ordering used when rendering: more factors first, then alphabetical.
    fn canonical_cmp(&self, other: &Monomial) -> std::cmp::Ordering {
        other
            .degree()
            .cmp(&self.degree())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl std::fmt::Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, variable) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            write!(f, "{variable}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    pub coefficient: BigInt,
    pub monomial: Monomial,
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Term {
            coefficient,
            monomial,
        } = self;
        if monomial.is_constant() {
            write!(f, "{coefficient}")
        } else if coefficient.is_one() {
            write!(f, "{monomial}")
        } else {
            write!(f, "{coefficient} * {monomial}")
        }
    }
}

/// A sum of terms, keyed by monomial. The empty polynomial is zero.
///
/// Arithmetic returns a new, pruned polynomial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: HashMap<Monomial, BigInt>,
}

impl Polynomial {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn constant(value: impl Into<BigInt>) -> Self {
        let mut polynomial = Self::zero();
        polynomial.terms.insert(Monomial::one(), value.into());
        polynomial.prune();
        polynomial
    }

    pub fn variable(variable: Variable) -> Self {
        let mut polynomial = Self::zero();
        polynomial
            .terms
            .insert(Monomial::new([variable]), BigInt::one());
        polynomial
    }

    pub fn is_zero(&self) -> bool {
        self.terms.values().all(|coefficient| coefficient.is_zero())
    }

    pub fn coefficient(&self, monomial: &Monomial) -> BigInt {
        self.terms.get(monomial).cloned().unwrap_or_default()
    }

    /// Adds `term` onto whatever coefficient its monomial already has.
    /// Does not prune.
    pub fn add_term(&mut self, term: Term) {
        let Term {
            coefficient,
            monomial,
        } = term;
        *self.terms.entry(monomial).or_default() += coefficient;
    }

    pub fn prune(&mut self) {
        self.terms.retain(|_, coefficient| !coefficient.is_zero());
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (monomial, coefficient) in &other.terms {
            result.add_term(Term {
                coefficient: coefficient.clone(),
                monomial: monomial.clone(),
            });
        }
        result.prune();
        result
    }

    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (monomial, coefficient) in &other.terms {
            result.add_term(Term {
                coefficient: -coefficient,
                monomial: monomial.clone(),
            });
        }
        result.prune();
        result
    }

    /// Full distribution: every term of `self` times every term of `other`.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::zero();
        for (a_monomial, a_coefficient) in &self.terms {
            for (b_monomial, b_coefficient) in &other.terms {
                result.add_term(Term {
                    coefficient: a_coefficient * b_coefficient,
                    monomial: a_monomial.times(b_monomial),
                });
            }
        }
        result.prune();
        result
    }

    /// Non-zero terms in rendering order.
    pub fn terms(&self) -> Vec<Term> {
        let mut terms = self
            .terms
            .iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(monomial, coefficient)| Term {
                coefficient: coefficient.clone(),
                monomial: monomial.clone(),
            })
            .collect::<Vec<_>>();
        terms.sort_by(|a, b| a.monomial.canonical_cmp(&b.monomial));
        terms
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self.terms();
        if terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
