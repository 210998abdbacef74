use core::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_VARIABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// An unknown the solver assigns a value to.
///
/// Variables are process-unique handles. The value lives in whichever [`Solver`](crate::Solver)
/// the variable was used with; a variable the solver has never seen resolves to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(usize);

impl Variable {
	/// Creates a fresh variable.
	pub fn new() -> Self {
		Self(NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// The process-unique id of this variable.
	pub const fn id(self) -> usize {
		self.0
	}
}

impl Default for Variable {
	fn default() -> Self {
		Self::new()
	}
}

/// A variable scaled by a coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
	/// The variable.
	pub variable: Variable,
	/// Its coefficient.
	pub coefficient: f64,
}

impl Term {
	/// Creates a term.
	pub const fn new(variable: Variable, coefficient: f64) -> Self {
		Self {
			variable,
			coefficient,
		}
	}
}

/// A linear expression `Σ cᵢ·vᵢ + constant`.
///
/// Terms are not merged; the same variable may appear more than once and the solver sums the
/// coefficients when the expression is turned into a tableau row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
	/// The variable terms.
	pub terms: Vec<Term>,
	/// The constant offset.
	pub constant: f64,
}

impl Expression {
	/// Creates an expression from terms and a constant.
	pub const fn new(terms: Vec<Term>, constant: f64) -> Self {
		Self { terms, constant }
	}

	/// An expression with no terms.
	pub const fn from_constant(constant: f64) -> Self {
		Self::new(Vec::new(), constant)
	}

	/// Multiplies every term and the constant.
	#[must_use = "method returns the modified value"]
	pub fn scaled(mut self, factor: f64) -> Self {
		for term in &mut self.terms {
			term.coefficient *= factor;
		}
		self.constant *= factor;
		self
	}

	fn combine(mut self, other: Self, sign: f64) -> Self {
		self.terms.extend(
			other
				.terms
				.into_iter()
				.map(|term| Term::new(term.variable, term.coefficient * sign)),
		);
		self.constant += other.constant * sign;
		self
	}
}

impl From<f64> for Expression {
	fn from(constant: f64) -> Self {
		Self::from_constant(constant)
	}
}

impl From<Variable> for Expression {
	fn from(variable: Variable) -> Self {
		Self::from(Term::new(variable, 1.0))
	}
}

impl From<Term> for Expression {
	fn from(term: Term) -> Self {
		Self::new(vec![term], 0.0)
	}
}

/// `+` and `-` between any two operands convertible into an [`Expression`].
macro_rules! impl_additive_ops {
	($($lhs:ty => [$($rhs:ty),*]);* $(;)?) => {$($(
		impl Add<$rhs> for $lhs {
			type Output = Expression;

			fn add(self, rhs: $rhs) -> Expression {
				Expression::from(self).combine(Expression::from(rhs), 1.0)
			}
		}

		impl Sub<$rhs> for $lhs {
			type Output = Expression;

			fn sub(self, rhs: $rhs) -> Expression {
				Expression::from(self).combine(Expression::from(rhs), -1.0)
			}
		}
	)*)*};
}

impl_additive_ops! {
	Variable => [Variable, Term, Expression, f64];
	Term => [Variable, Term, Expression, f64];
	Expression => [Variable, Term, Expression, f64];
	f64 => [Variable, Term, Expression];
}

impl Mul<f64> for Variable {
	type Output = Term;

	fn mul(self, rhs: f64) -> Term {
		Term::new(self, rhs)
	}
}

impl Mul<Variable> for f64 {
	type Output = Term;

	fn mul(self, rhs: Variable) -> Term {
		Term::new(rhs, self)
	}
}

impl Div<f64> for Variable {
	type Output = Term;

	fn div(self, rhs: f64) -> Term {
		Term::new(self, 1.0 / rhs)
	}
}

impl Neg for Variable {
	type Output = Term;

	fn neg(self) -> Term {
		Term::new(self, -1.0)
	}
}

impl Mul<f64> for Term {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self {
		Self::new(self.variable, self.coefficient * rhs)
	}
}

impl Mul<Term> for f64 {
	type Output = Term;

	fn mul(self, rhs: Term) -> Term {
		rhs * self
	}
}

impl Div<f64> for Term {
	type Output = Self;

	fn div(self, rhs: f64) -> Self {
		Self::new(self.variable, self.coefficient / rhs)
	}
}

impl Neg for Term {
	type Output = Self;

	fn neg(self) -> Self {
		Self::new(self.variable, -self.coefficient)
	}
}

impl Mul<f64> for Expression {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self {
		self.scaled(rhs)
	}
}

impl Mul<Expression> for f64 {
	type Output = Expression;

	fn mul(self, rhs: Expression) -> Expression {
		rhs.scaled(self)
	}
}

impl Div<f64> for Expression {
	type Output = Self;

	fn div(self, rhs: f64) -> Self {
		self.scaled(1.0 / rhs)
	}
}

impl Neg for Expression {
	type Output = Self;

	fn neg(self) -> Self {
		self.scaled(-1.0)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn variables_are_unique() {
		let a = Variable::new();
		let b = Variable::new();
		assert_ne!(a, b);
		assert!(b.id() > a.id());
	}

	#[test]
	fn difference_of_variables() {
		let start = Variable::new();
		let end = Variable::new();
		let size = end - start;
		assert_eq!(size.terms, vec![Term::new(end, 1.0), Term::new(start, -1.0)]);
		assert_eq!(size.constant, 0.0);
	}

	#[test]
	fn scaling_applies_to_constant() {
		let x = Variable::new();
		let expression = (x + 4.0) * 2.0 / 4.0;
		assert_eq!(expression.terms, vec![Term::new(x, 0.5)]);
		assert_eq!(expression.constant, 2.0);
	}

	#[test]
	fn constant_minus_expression() {
		let x = Variable::new();
		let expression = 10.0 - 3.0 * x;
		assert_eq!(expression.terms, vec![Term::new(x, -3.0)]);
		assert_eq!(expression.constant, 10.0);
	}
}
