use tessel_solver::AddConstraintError;
use thiserror::Error;

/// Errors from splitting an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
	/// The solver rejected a constraint derived from the layout.
	#[error("layout could not be solved: {0}")]
	Solver(#[from] AddConstraintError),
	/// The split produced a different number of areas than the caller asked for.
	#[error("expected {expected} areas, layout produced {actual}")]
	AreaCount {
		/// Areas requested by the caller.
		expected: usize,
		/// Areas the layout produced.
		actual: usize,
	},
}
