use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::row::{Row, Symbol, SymbolKind, near_zero};
use crate::{
	AddConstraintError, AddEditVariableError, Constraint, Expression, RelationalOperator,
	RemoveConstraintError, RemoveEditVariableError, Strength, SuggestValueError, Variable,
};

/// The symbols a constraint introduced into the tableau.
#[derive(Debug, Clone, Copy)]
struct Tag {
	marker: Symbol,
	other: Option<Symbol>,
}

#[derive(Debug, Clone)]
struct EditInfo {
	tag: Tag,
	constraint: Constraint,
	constant: f64,
}

#[derive(Debug, Clone, Copy)]
enum Objective {
	Primary,
	Artificial,
}

/// An incremental Cassowary constraint solver.
///
/// Constraints can be added and removed at any time; the tableau stays optimal after every
/// operation, so [`get_value`](Self::get_value) is always current.
#[derive(Debug, Default)]
pub struct Solver {
	constraints: FxHashMap<Constraint, Tag>,
	variables: FxHashMap<Variable, Symbol>,
	edits: FxHashMap<Variable, EditInfo>,
	rows: BTreeMap<Symbol, Row>,
	infeasible_rows: Vec<Symbol>,
	objective: Row,
	artificial: Option<Row>,
	next_symbol: usize,
	last_values: FxHashMap<Variable, f64>,
	changes: Vec<(Variable, f64)>,
}

impl Solver {
	/// Creates an empty solver.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds every constraint in order, stopping at the first failure.
	pub fn add_constraints<I>(&mut self, constraints: I) -> Result<(), AddConstraintError>
	where
		I: IntoIterator<Item = Constraint>,
	{
		constraints
			.into_iter()
			.try_for_each(|constraint| self.add_constraint(constraint))
	}

	/// Adds a constraint and re-optimizes.
	///
	/// A required constraint that contradicts the required constraints already present fails
	/// with [`AddConstraintError::UnsatisfiableConstraint`] and is not registered.
	pub fn add_constraint(&mut self, constraint: Constraint) -> Result<(), AddConstraintError> {
		if self.constraints.contains_key(&constraint) {
			return Err(AddConstraintError::DuplicateConstraint);
		}

		let (mut row, tag) = self.create_row(&constraint);
		let mut subject = choose_subject(&row, tag);

		// A row made only of dummies is a required equality between constants and other
		// required equalities; it either holds already or can never hold.
		if subject.is_none() && row.all_dummies() {
			if !near_zero(row.constant) {
				tracing::debug!(
					expression = ?constraint.expression(),
					operator = %constraint.operator(),
					"required constraint is unsatisfiable"
				);
				return Err(AddConstraintError::UnsatisfiableConstraint);
			}
			subject = Some(tag.marker);
		}

		match subject {
			Some(subject) => {
				row.solve_for_symbol(subject);
				self.substitute(subject, &row);
				self.rows.insert(subject, row);
			}
			None => {
				let satisfied = self
					.add_with_artificial_variable(row)
					.map_err(AddConstraintError::InternalSolverError)?;
				if !satisfied {
					tracing::debug!(
						expression = ?constraint.expression(),
						operator = %constraint.operator(),
						"required constraint is unsatisfiable"
					);
					return Err(AddConstraintError::UnsatisfiableConstraint);
				}
			}
		}

		self.constraints.insert(constraint, tag);
		self.optimize(Objective::Primary)
			.map_err(AddConstraintError::InternalSolverError)
	}

	/// Removes a constraint and re-optimizes.
	pub fn remove_constraint(&mut self, constraint: &Constraint) -> Result<(), RemoveConstraintError> {
		let tag = self
			.constraints
			.remove(constraint)
			.ok_or(RemoveConstraintError::UnknownConstraint)?;

		self.remove_constraint_effects(constraint, tag);

		if self.rows.remove(&tag.marker).is_none() {
			let (leaving, mut row) = self
				.take_marker_leaving_row(tag.marker)
				.ok_or(RemoveConstraintError::InternalSolverError("failed to find leaving row"))?;
			row.solve_for_symbols(leaving, tag.marker);
			self.substitute(tag.marker, &row);
		}

		self.optimize(Objective::Primary)
			.map_err(RemoveConstraintError::InternalSolverError)
	}

	/// Returns true if the constraint is registered with this solver.
	pub fn has_constraint(&self, constraint: &Constraint) -> bool {
		self.constraints.contains_key(constraint)
	}

	/// Registers a variable whose value will be driven by [`suggest_value`](Self::suggest_value).
	///
	/// The strength must be weaker than [`Strength::REQUIRED`].
	pub fn add_edit_variable(
		&mut self,
		variable: Variable,
		strength: Strength,
	) -> Result<(), AddEditVariableError> {
		if self.edits.contains_key(&variable) {
			return Err(AddEditVariableError::DuplicateEditVariable);
		}
		let strength = strength.clip();
		if strength.is_required() {
			return Err(AddEditVariableError::BadRequiredStrength);
		}

		let constraint = Constraint::new(
			Expression::from(variable),
			RelationalOperator::Equal,
			strength,
		);
		self.add_constraint(constraint.clone())
			.map_err(|error| match error {
				AddConstraintError::InternalSolverError(message) => {
					AddEditVariableError::InternalSolverError(message)
				}
				AddConstraintError::DuplicateConstraint
				| AddConstraintError::UnsatisfiableConstraint => {
					AddEditVariableError::InternalSolverError("edit constraint was rejected")
				}
			})?;
		let tag = self
			.constraints
			.get(&constraint)
			.copied()
			.ok_or(AddEditVariableError::InternalSolverError("edit constraint was not registered"))?;
		self.edits.insert(
			variable,
			EditInfo {
				tag,
				constraint,
				constant: 0.0,
			},
		);
		Ok(())
	}

	/// Unregisters an edit variable and removes its edit constraint.
	pub fn remove_edit_variable(&mut self, variable: Variable) -> Result<(), RemoveEditVariableError> {
		let info = self
			.edits
			.remove(&variable)
			.ok_or(RemoveEditVariableError::UnknownEditVariable)?;
		self.remove_constraint(&info.constraint)
			.map_err(|error| match error {
				RemoveConstraintError::UnknownConstraint => {
					RemoveEditVariableError::InternalSolverError("edit constraint was not registered")
				}
				RemoveConstraintError::InternalSolverError(message) => {
					RemoveEditVariableError::InternalSolverError(message)
				}
			})
	}

	/// Returns true if the variable is an edit variable.
	pub fn has_edit_variable(&self, variable: Variable) -> bool {
		self.edits.contains_key(&variable)
	}

	/// Suggests a value for an edit variable and re-optimizes with the dual simplex.
	pub fn suggest_value(&mut self, variable: Variable, value: f64) -> Result<(), SuggestValueError> {
		let info = self
			.edits
			.get_mut(&variable)
			.ok_or(SuggestValueError::UnknownEditVariable)?;
		let delta = value - info.constant;
		info.constant = value;
		let Tag { marker, other } = info.tag;

		if let Some(row) = self.rows.get_mut(&marker) {
			if row.add(-delta) < 0.0 {
				self.infeasible_rows.push(marker);
			}
		} else if let Some((other, row)) =
			other.and_then(|other| self.rows.get_mut(&other).map(|row| (other, row)))
		{
			if row.add(delta) < 0.0 {
				self.infeasible_rows.push(other);
			}
		} else {
			for (&symbol, row) in &mut self.rows {
				let coefficient = row.coefficient_for(marker);
				if coefficient != 0.0
					&& row.add(delta * coefficient) < 0.0
					&& symbol.kind != SymbolKind::External
				{
					self.infeasible_rows.push(symbol);
				}
			}
		}

		self.dual_optimize()
			.map_err(SuggestValueError::InternalSolverError)
	}

	/// The current value of a variable; `0.0` for variables this solver has never seen.
	pub fn get_value(&self, variable: Variable) -> f64 {
		self.variables
			.get(&variable)
			.and_then(|symbol| self.rows.get(symbol))
			.map_or(0.0, |row| row.constant)
	}

	/// Variables whose value changed since the previous call, with their new values.
	pub fn fetch_changes(&mut self) -> &[(Variable, f64)] {
		self.changes.clear();
		for (&variable, symbol) in &self.variables {
			let value = self.rows.get(symbol).map_or(0.0, |row| row.constant);
			let last = self.last_values.entry(variable).or_insert(0.0);
			if *last != value {
				*last = value;
				self.changes.push((variable, value));
			}
		}
		&self.changes
	}

	/// Drops every constraint, variable and edit variable.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	fn new_symbol(&mut self, kind: SymbolKind) -> Symbol {
		let symbol = Symbol::new(self.next_symbol, kind);
		self.next_symbol += 1;
		symbol
	}

	fn variable_symbol(&mut self, variable: Variable) -> Symbol {
		if let Some(&symbol) = self.variables.get(&variable) {
			return symbol;
		}
		let symbol = self.new_symbol(SymbolKind::External);
		self.variables.insert(variable, symbol);
		symbol
	}

	/// Builds the tableau row for a constraint, substituting basic variables, and registers the
	/// constraint's error symbols with the objective.
	fn create_row(&mut self, constraint: &Constraint) -> (Row, Tag) {
		let expression = constraint.expression();
		let strength = constraint.strength();
		let mut row = Row::new(expression.constant);

		for term in &expression.terms {
			if near_zero(term.coefficient) {
				continue;
			}
			let symbol = self.variable_symbol(term.variable);
			match self.rows.get(&symbol) {
				Some(basic) => row.insert_row(basic, term.coefficient),
				None => row.insert_symbol(symbol, term.coefficient),
			}
		}

		let tag = match constraint.operator() {
			RelationalOperator::LessOrEqual | RelationalOperator::GreaterOrEqual => {
				let coefficient = if constraint.operator() == RelationalOperator::LessOrEqual {
					1.0
				} else {
					-1.0
				};
				let slack = self.new_symbol(SymbolKind::Slack);
				row.insert_symbol(slack, coefficient);
				if strength.is_required() {
					Tag {
						marker: slack,
						other: None,
					}
				} else {
					let error = self.new_symbol(SymbolKind::Error);
					row.insert_symbol(error, -coefficient);
					self.objective.insert_symbol(error, strength.value());
					Tag {
						marker: slack,
						other: Some(error),
					}
				}
			}
			RelationalOperator::Equal => {
				if strength.is_required() {
					let dummy = self.new_symbol(SymbolKind::Dummy);
					row.insert_symbol(dummy, 1.0);
					Tag {
						marker: dummy,
						other: None,
					}
				} else {
					let plus = self.new_symbol(SymbolKind::Error);
					let minus = self.new_symbol(SymbolKind::Error);
					row.insert_symbol(plus, -1.0);
					row.insert_symbol(minus, 1.0);
					self.objective.insert_symbol(plus, strength.value());
					self.objective.insert_symbol(minus, strength.value());
					Tag {
						marker: plus,
						other: Some(minus),
					}
				}
			}
		};

		if row.constant < 0.0 {
			row.reverse_sign();
		}
		(row, tag)
	}

	/// Adds a row that has no obvious subject by minimising an artificial objective. Returns
	/// false if the row cannot be made feasible.
	fn add_with_artificial_variable(&mut self, row: Row) -> Result<bool, &'static str> {
		let artificial = self.new_symbol(SymbolKind::Slack);
		self.rows.insert(artificial, row.clone());
		self.artificial = Some(row);

		self.optimize(Objective::Artificial)?;
		let success = self
			.artificial
			.take()
			.is_some_and(|row| near_zero(row.constant));

		if let Some(mut row) = self.rows.remove(&artificial) {
			if row.cells.is_empty() {
				return Ok(success);
			}
			let Some(entering) = row.any_pivotable_symbol() else {
				return Ok(false);
			};
			row.solve_for_symbols(artificial, entering);
			self.substitute(entering, &row);
			self.rows.insert(entering, row);
		}

		for row in self.rows.values_mut() {
			row.remove(artificial);
		}
		self.objective.remove(artificial);
		Ok(success)
	}

	/// Replaces `symbol` everywhere with `row`, queueing rows whose constant turned negative.
	fn substitute(&mut self, symbol: Symbol, row: &Row) {
		for (&basic, other) in &mut self.rows {
			let changed = other.substitute(symbol, row);
			if changed && basic.kind != SymbolKind::External && other.constant < 0.0 {
				self.infeasible_rows.push(basic);
			}
		}
		self.objective.substitute(symbol, row);
		if let Some(artificial) = &mut self.artificial {
			artificial.substitute(symbol, row);
		}
	}

	/// Primal simplex: pivots until no objective coefficient can improve.
	fn optimize(&mut self, objective: Objective) -> Result<(), &'static str> {
		let mut pivots = 0usize;
		loop {
			let entering = match objective {
				Objective::Primary => entering_symbol(&self.objective),
				Objective::Artificial => self.artificial.as_ref().and_then(entering_symbol),
			};
			let Some(entering) = entering else {
				tracing::trace!(?objective, pivots, "objective optimized");
				return Ok(());
			};
			let (leaving, mut row) = self
				.take_leaving_row(entering)
				.ok_or("the objective is unbounded")?;
			row.solve_for_symbols(leaving, entering);
			self.substitute(entering, &row);
			self.rows.insert(entering, row);
			pivots += 1;
		}
	}

	/// Dual simplex: restores feasibility of the queued rows after an edit.
	fn dual_optimize(&mut self) -> Result<(), &'static str> {
		while let Some(leaving) = self.infeasible_rows.pop() {
			let entering = match self.rows.get(&leaving) {
				Some(row) if row.constant < 0.0 => self
					.dual_entering_symbol(row)
					.ok_or("dual optimize failed")?,
				_ => continue,
			};
			let Some(mut row) = self.rows.remove(&leaving) else {
				continue;
			};
			row.solve_for_symbols(leaving, entering);
			self.substitute(entering, &row);
			self.rows.insert(entering, row);
		}
		Ok(())
	}

	/// The restricted row that limits `entering` the most (minimum ratio test).
	fn take_leaving_row(&mut self, entering: Symbol) -> Option<(Symbol, Row)> {
		let mut ratio = f64::MAX;
		let mut found = None;
		for (&symbol, row) in &self.rows {
			if symbol.kind == SymbolKind::External {
				continue;
			}
			let coefficient = row.coefficient_for(entering);
			if coefficient < 0.0 {
				let candidate = -row.constant / coefficient;
				if candidate < ratio {
					ratio = candidate;
					found = Some(symbol);
				}
			}
		}
		let symbol = found?;
		self.rows.remove(&symbol).map(|row| (symbol, row))
	}

	fn dual_entering_symbol(&self, row: &Row) -> Option<Symbol> {
		let mut ratio = f64::MAX;
		let mut entering = None;
		for (&symbol, &coefficient) in &row.cells {
			if coefficient > 0.0 && symbol.kind != SymbolKind::Dummy {
				let candidate = self.objective.coefficient_for(symbol) / coefficient;
				if candidate < ratio {
					ratio = candidate;
					entering = Some(symbol);
				}
			}
		}
		entering
	}

	/// The row to pivot a non-basic marker into when its constraint is removed.
	fn take_marker_leaving_row(&mut self, marker: Symbol) -> Option<(Symbol, Row)> {
		let mut negative_ratio = f64::MAX;
		let mut positive_ratio = f64::MAX;
		let mut negative = None;
		let mut positive = None;
		let mut external = None;

		for (&symbol, row) in &self.rows {
			let coefficient = row.coefficient_for(marker);
			if coefficient == 0.0 {
				continue;
			}
			if symbol.kind == SymbolKind::External {
				external = Some(symbol);
			} else if coefficient < 0.0 {
				let ratio = -row.constant / coefficient;
				if ratio < negative_ratio {
					negative_ratio = ratio;
					negative = Some(symbol);
				}
			} else {
				let ratio = row.constant / coefficient;
				if ratio < positive_ratio {
					positive_ratio = ratio;
					positive = Some(symbol);
				}
			}
		}

		let symbol = negative.or(positive).or(external)?;
		self.rows.remove(&symbol).map(|row| (symbol, row))
	}

	/// Takes the constraint's error symbols out of the objective.
	fn remove_constraint_effects(&mut self, constraint: &Constraint, tag: Tag) {
		let strength = constraint.strength().value();
		for marker in core::iter::once(tag.marker).chain(tag.other) {
			if marker.kind != SymbolKind::Error {
				continue;
			}
			match self.rows.get(&marker) {
				Some(row) => self.objective.insert_row(row, -strength),
				None => self.objective.insert_symbol(marker, -strength),
			}
		}
	}
}

/// Picks the symbol a new row can be solved for without an artificial variable.
///
/// External symbols are always valid subjects. Otherwise a slack or error marker with a
/// negative coefficient keeps the row feasible.
fn choose_subject(row: &Row, tag: Tag) -> Option<Symbol> {
	if let Some(&symbol) = row
		.cells
		.keys()
		.find(|symbol| symbol.kind == SymbolKind::External)
	{
		return Some(symbol);
	}
	core::iter::once(tag.marker)
		.chain(tag.other)
		.find(|&symbol| symbol.is_restricted() && row.coefficient_for(symbol) < 0.0)
}

/// The first non-dummy symbol whose objective coefficient is negative.
fn entering_symbol(objective: &Row) -> Option<Symbol> {
	objective
		.cells
		.iter()
		.find(|&(symbol, &coefficient)| symbol.kind != SymbolKind::Dummy && coefficient < 0.0)
		.map(|(&symbol, _)| symbol)
}

#[cfg(test)]
mod tests;
