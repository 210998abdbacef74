//! Incremental linear constraint solver based on the Cassowary algorithm.
//!
//! The solver maintains a set of linear equalities and inequalities over [`Variable`]s. Each
//! constraint carries a [`Strength`]: required constraints must hold, everything weaker is
//! satisfied as well as possible, stronger constraints taking precedence over weaker ones.
//!
//! Constraints are written with the `lhs | RELATION(strength) | rhs` operator syntax:
//!
//! ```
//! use tessel_solver::WeightedRelation::{EQ, GE};
//! use tessel_solver::{Solver, Strength, Variable};
//!
//! let left = Variable::new();
//! let right = Variable::new();
//!
//! let mut solver = Solver::new();
//! solver.add_constraint(left | EQ(Strength::REQUIRED) | 0.0).unwrap();
//! solver.add_constraint(right - left | GE(Strength::REQUIRED) | 100.0).unwrap();
//! solver.add_constraint(right | EQ(Strength::WEAK) | 50.0).unwrap();
//!
//! assert_eq!(solver.get_value(right), 100.0);
//! ```
//!
//! Rows and symbols are kept in ordered maps so that pivot selection, and with it every solution,
//! only depends on the order in which constraints were added.

/// Constraints, relations and the `|` operator syntax.
pub mod constraint;
/// Solver error types.
pub mod error;
/// Variables, terms and linear expressions.
pub mod expression;
mod row;
/// The simplex tableau and its public operations.
pub mod solver;
/// Constraint strengths.
pub mod strength;

pub use constraint::{Constraint, PartialConstraint, RelationalOperator, WeightedRelation};
pub use error::{
	AddConstraintError, AddEditVariableError, RemoveConstraintError, RemoveEditVariableError,
	SuggestValueError,
};
pub use expression::{Expression, Term, Variable};
pub use solver::Solver;
pub use strength::Strength;
