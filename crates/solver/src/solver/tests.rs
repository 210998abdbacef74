use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::WeightedRelation::{EQ, GE, LE};

fn assert_close(actual: f64, expected: f64) {
	assert!(
		(actual - expected).abs() < 1.0e-6,
		"expected {expected}, got {actual}"
	);
}

#[test]
fn required_equalities_chain() {
	let x = Variable::new();
	let y = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | EQ(Strength::REQUIRED) | 10.0).unwrap();
	solver.add_constraint(y | EQ(Strength::REQUIRED) | x + 5.0).unwrap();
	assert_close(solver.get_value(x), 10.0);
	assert_close(solver.get_value(y), 15.0);
}

#[rstest]
#[case::strong_beats_weak(Strength::WEAK, Strength::STRONG, 20.0)]
#[case::medium_beats_weak(Strength::WEAK, Strength::MEDIUM, 20.0)]
#[case::strong_beats_medium(Strength::STRONG, Strength::MEDIUM, 10.0)]
fn stronger_preference_wins(#[case] first: Strength, #[case] second: Strength, #[case] expected: f64) {
	let x = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | EQ(first) | 10.0).unwrap();
	solver.add_constraint(x | EQ(second) | 20.0).unwrap();
	assert_close(solver.get_value(x), expected);
}

#[test]
fn required_inequality_bounds_preference() {
	let x = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | GE(Strength::REQUIRED) | 5.0).unwrap();
	solver.add_constraint(x | EQ(Strength::WEAK) | 0.0).unwrap();
	assert_close(solver.get_value(x), 5.0);

	let y = Variable::new();
	solver.add_constraint(y | LE(Strength::REQUIRED) | 3.0).unwrap();
	solver.add_constraint(y | EQ(Strength::STRONG) | 8.0).unwrap();
	assert_close(solver.get_value(y), 3.0);
}

#[test]
fn width_grows_past_weak_right_edge() {
	let left = Variable::new();
	let right = Variable::new();
	let mut solver = Solver::new();
	solver
		.add_constraints([
			left | EQ(Strength::REQUIRED) | 0.0,
			right - left | GE(Strength::REQUIRED) | 100.0,
			right | EQ(Strength::WEAK) | 50.0,
		])
		.unwrap();
	assert_close(solver.get_value(right), 100.0);
}

#[test]
fn contradictory_required_constraints_fail() {
	let x = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | EQ(Strength::REQUIRED) | 10.0).unwrap();
	let conflicting = x | EQ(Strength::REQUIRED) | 20.0;
	assert_eq!(
		solver.add_constraint(conflicting.clone()),
		Err(AddConstraintError::UnsatisfiableConstraint)
	);
	assert!(!solver.has_constraint(&conflicting));
}

#[test]
fn contradictory_required_inequalities_fail() {
	let x = Variable::new();
	let y = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x + y | LE(Strength::REQUIRED) | 100.0).unwrap();
	solver.add_constraint(x | GE(Strength::REQUIRED) | 60.0).unwrap();
	assert_eq!(
		solver.add_constraint(y | GE(Strength::REQUIRED) | 60.0),
		Err(AddConstraintError::UnsatisfiableConstraint)
	);
}

#[test]
fn duplicate_constraint_is_rejected() {
	let x = Variable::new();
	let constraint = x | EQ(Strength::REQUIRED) | 1.0;
	let mut solver = Solver::new();
	solver.add_constraint(constraint.clone()).unwrap();
	assert_eq!(
		solver.add_constraint(constraint),
		Err(AddConstraintError::DuplicateConstraint)
	);
}

#[test]
fn removing_a_constraint_restores_the_weaker_one() {
	let x = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | EQ(Strength::WEAK) | 10.0).unwrap();
	let strong = x | EQ(Strength::STRONG) | 20.0;
	solver.add_constraint(strong.clone()).unwrap();
	assert_close(solver.get_value(x), 20.0);

	solver.remove_constraint(&strong).unwrap();
	assert!(!solver.has_constraint(&strong));
	assert_close(solver.get_value(x), 10.0);
}

#[test]
fn removing_a_required_bound_releases_the_variable() {
	let x = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | EQ(Strength::WEAK) | 40.0).unwrap();
	let bound = x | LE(Strength::REQUIRED) | 25.0;
	solver.add_constraint(bound.clone()).unwrap();
	assert_close(solver.get_value(x), 25.0);

	solver.remove_constraint(&bound).unwrap();
	assert_close(solver.get_value(x), 40.0);
}

#[test]
fn removing_unknown_constraint_fails() {
	let x = Variable::new();
	let mut solver = Solver::new();
	assert_eq!(
		solver.remove_constraint(&(x | EQ(Strength::WEAK) | 1.0)),
		Err(RemoveConstraintError::UnknownConstraint)
	);
}

#[test]
fn edit_variable_follows_suggestions_within_bounds() {
	let x = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | LE(Strength::REQUIRED) | 30.0).unwrap();
	solver.add_edit_variable(x, Strength::STRONG).unwrap();
	assert!(solver.has_edit_variable(x));

	solver.suggest_value(x, 20.0).unwrap();
	assert_close(solver.get_value(x), 20.0);

	solver.suggest_value(x, 42.0).unwrap();
	assert_close(solver.get_value(x), 30.0);

	solver.suggest_value(x, 5.0).unwrap();
	assert_close(solver.get_value(x), 5.0);
}

#[test]
fn edit_variable_drives_dependent_variables() {
	let left = Variable::new();
	let width = Variable::new();
	let right = Variable::new();
	let mut solver = Solver::new();
	solver
		.add_constraints([
			right | EQ(Strength::REQUIRED) | left + width,
			width | EQ(Strength::REQUIRED) | 10.0,
		])
		.unwrap();
	solver.add_edit_variable(left, Strength::STRONG).unwrap();
	solver.suggest_value(left, 7.0).unwrap();
	assert_close(solver.get_value(right), 17.0);
}

#[test]
fn edit_variable_errors() {
	let x = Variable::new();
	let mut solver = Solver::new();
	assert_eq!(
		solver.add_edit_variable(x, Strength::REQUIRED),
		Err(AddEditVariableError::BadRequiredStrength)
	);
	solver.add_edit_variable(x, Strength::MEDIUM).unwrap();
	assert_eq!(
		solver.add_edit_variable(x, Strength::MEDIUM),
		Err(AddEditVariableError::DuplicateEditVariable)
	);
	solver.remove_edit_variable(x).unwrap();
	assert!(!solver.has_edit_variable(x));
	assert_eq!(
		solver.remove_edit_variable(x),
		Err(RemoveEditVariableError::UnknownEditVariable)
	);
	assert_eq!(
		solver.suggest_value(x, 1.0),
		Err(SuggestValueError::UnknownEditVariable)
	);
}

#[test]
fn repeated_edits_leave_no_queued_rows() {
	let left = Variable::new();
	let right = Variable::new();
	let mut solver = Solver::new();
	solver
		.add_constraints([
			left | GE(Strength::REQUIRED) | 0.0,
			right | LE(Strength::REQUIRED) | 100.0,
			right - left | GE(Strength::REQUIRED) | 10.0,
			right - left | EQ(Strength::WEAK) | 40.0,
		])
		.unwrap();
	solver.add_edit_variable(left, Strength::STRONG).unwrap();
	for value in [80.0, 5.0, 95.0, 0.0, 60.0] {
		solver.suggest_value(left, value).unwrap();
		assert!(solver.infeasible_rows.is_empty());
	}
	assert_close(solver.get_value(left), 60.0);
	assert_close(solver.get_value(right), 100.0);
}

#[test]
fn fetch_changes_reports_only_updates() {
	let x = Variable::new();
	let y = Variable::new();
	let mut solver = Solver::new();
	solver.add_constraint(x | EQ(Strength::REQUIRED) | 10.0).unwrap();
	assert_eq!(solver.fetch_changes(), &[(x, 10.0)]);
	assert!(solver.fetch_changes().is_empty());

	solver.add_constraint(y | EQ(Strength::REQUIRED) | 3.0).unwrap();
	assert_eq!(solver.fetch_changes(), &[(y, 3.0)]);
}

#[test]
fn unknown_variable_reads_zero() {
	let solver = Solver::new();
	assert_eq!(solver.get_value(Variable::new()), 0.0);
}

#[test]
fn reset_forgets_everything() {
	let x = Variable::new();
	let constraint = x | EQ(Strength::REQUIRED) | 4.0;
	let mut solver = Solver::new();
	solver.add_constraint(constraint.clone()).unwrap();
	solver.reset();
	assert!(!solver.has_constraint(&constraint));
	assert_eq!(solver.get_value(x), 0.0);
	solver.add_constraint(constraint).unwrap();
	assert_close(solver.get_value(x), 4.0);
}

#[test]
fn identical_inputs_give_identical_solutions() {
	let solve = || {
		let a = Variable::new();
		let b = Variable::new();
		let c = Variable::new();
		let mut solver = Solver::new();
		solver
			.add_constraints([
				a | EQ(Strength::REQUIRED) | 0.0,
				c | EQ(Strength::REQUIRED) | 100.0,
				a | LE(Strength::REQUIRED) | b,
				b | LE(Strength::REQUIRED) | c,
				b - a | EQ(Strength::WEAK) | c - b,
			])
			.unwrap();
		solver.get_value(b)
	};
	let first = solve();
	assert_close(first, 50.0);
	assert_eq!(first.to_bits(), solve().to_bits());
}
