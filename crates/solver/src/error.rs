use thiserror::Error;

/// Errors from [`Solver::add_constraint`](crate::Solver::add_constraint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddConstraintError {
	/// The constraint is already registered with the solver.
	#[error("the constraint has already been added to the solver")]
	DuplicateConstraint,
	/// A required constraint contradicts the required constraints already present.
	#[error("the required constraint cannot be satisfied")]
	UnsatisfiableConstraint,
	/// The tableau reached a state the algorithm does not allow.
	#[error("internal solver error: {0}")]
	InternalSolverError(&'static str),
}

/// Errors from [`Solver::remove_constraint`](crate::Solver::remove_constraint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveConstraintError {
	/// The constraint is not registered with the solver.
	#[error("the constraint has not been added to the solver")]
	UnknownConstraint,
	/// The tableau reached a state the algorithm does not allow.
	#[error("internal solver error: {0}")]
	InternalSolverError(&'static str),
}

/// Errors from [`Solver::add_edit_variable`](crate::Solver::add_edit_variable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddEditVariableError {
	/// The variable is already an edit variable.
	#[error("the variable is already an edit variable")]
	DuplicateEditVariable,
	/// Edit variables cannot be required.
	#[error("an edit variable cannot have a required strength")]
	BadRequiredStrength,
	/// The tableau reached a state the algorithm does not allow.
	#[error("internal solver error: {0}")]
	InternalSolverError(&'static str),
}

/// Errors from [`Solver::remove_edit_variable`](crate::Solver::remove_edit_variable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveEditVariableError {
	/// The variable is not an edit variable.
	#[error("the variable is not an edit variable")]
	UnknownEditVariable,
	/// The tableau reached a state the algorithm does not allow.
	#[error("internal solver error: {0}")]
	InternalSolverError(&'static str),
}

/// Errors from [`Solver::suggest_value`](crate::Solver::suggest_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuggestValueError {
	/// The variable is not an edit variable.
	#[error("the variable is not an edit variable")]
	UnknownEditVariable,
	/// The tableau reached a state the algorithm does not allow.
	#[error("internal solver error: {0}")]
	InternalSolverError(&'static str),
}
