use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::BitOr;
use std::sync::Arc;

use crate::{Expression, Strength, Term, Variable};

/// The relation between a constraint's expression and zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOperator {
	/// `expression <= 0`
	LessOrEqual,
	/// `expression == 0`
	Equal,
	/// `expression >= 0`
	GreaterOrEqual,
}

impl fmt::Display for RelationalOperator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::LessOrEqual => write!(f, "<="),
			Self::Equal => write!(f, "=="),
			Self::GreaterOrEqual => write!(f, ">="),
		}
	}
}

#[derive(Debug)]
struct ConstraintData {
	expression: Expression,
	strength: Strength,
	operator: RelationalOperator,
}

/// A linear constraint `expression <op> 0` with a strength.
///
/// Constraints have identity semantics: clones refer to the same constraint, while two
/// constraints built separately from identical parts are distinct and can both be added to a
/// solver.
#[derive(Debug, Clone)]
pub struct Constraint(Arc<ConstraintData>);

impl Constraint {
	/// Creates a constraint. The strength is clipped to `[0, REQUIRED]`.
	pub fn new(expression: Expression, operator: RelationalOperator, strength: Strength) -> Self {
		Self(Arc::new(ConstraintData {
			expression,
			strength: strength.clip(),
			operator,
		}))
	}

	/// The constrained expression.
	pub fn expression(&self) -> &Expression {
		&self.0.expression
	}

	/// The relational operator.
	pub fn operator(&self) -> RelationalOperator {
		self.0.operator
	}

	/// The strength.
	pub fn strength(&self) -> Strength {
		self.0.strength
	}
}

impl PartialEq for Constraint {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for Constraint {}

impl Hash for Constraint {
	fn hash<H: Hasher>(&self, state: &mut H) {
		Arc::as_ptr(&self.0).hash(state);
	}
}

/// A relation together with its strength, used as the middle operand of `lhs | rel | rhs`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightedRelation {
	/// `lhs == rhs`
	EQ(Strength),
	/// `lhs <= rhs`
	LE(Strength),
	/// `lhs >= rhs`
	GE(Strength),
}

impl WeightedRelation {
	const fn split(self) -> (RelationalOperator, Strength) {
		match self {
			Self::EQ(strength) => (RelationalOperator::Equal, strength),
			Self::LE(strength) => (RelationalOperator::LessOrEqual, strength),
			Self::GE(strength) => (RelationalOperator::GreaterOrEqual, strength),
		}
	}
}

/// The left half of a constraint, `lhs | rel`, waiting for its right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialConstraint(Expression, WeightedRelation);

macro_rules! impl_constraint_syntax {
	($($operand:ty),*) => {$(
		impl BitOr<WeightedRelation> for $operand {
			type Output = PartialConstraint;

			fn bitor(self, relation: WeightedRelation) -> PartialConstraint {
				PartialConstraint(Expression::from(self), relation)
			}
		}

		impl BitOr<$operand> for PartialConstraint {
			type Output = Constraint;

			fn bitor(self, rhs: $operand) -> Constraint {
				let PartialConstraint(lhs, relation) = self;
				let (operator, strength) = relation.split();
				Constraint::new(lhs - Expression::from(rhs), operator, strength)
			}
		}
	)*};
}

impl_constraint_syntax!(f64, Variable, Term, Expression);

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::WeightedRelation::{EQ, GE, LE};

	#[test]
	fn syntax_moves_rhs_to_the_left() {
		let x = Variable::new();
		let constraint = x | LE(Strength::STRONG) | 10.0;
		assert_eq!(constraint.expression().terms, vec![Term::new(x, 1.0)]);
		assert_eq!(constraint.expression().constant, -10.0);
		assert_eq!(constraint.operator(), RelationalOperator::LessOrEqual);
		assert_eq!(constraint.strength(), Strength::STRONG);
	}

	#[test]
	fn strength_is_clipped() {
		let x = Variable::new();
		let constraint = x | GE(Strength::REQUIRED * 10.0) | 0.0;
		assert_eq!(constraint.strength(), Strength::REQUIRED);
	}

	#[test]
	fn constraints_compare_by_identity() {
		let x = Variable::new();
		let a = x | EQ(Strength::WEAK) | 1.0;
		let b = x | EQ(Strength::WEAK) | 1.0;
		assert_eq!(a, a.clone());
		assert_ne!(a, b);
	}
}
