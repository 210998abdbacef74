use std::collections::BTreeMap;

const EPSILON: f64 = 1.0e-8;

pub(crate) fn near_zero(value: f64) -> bool {
	value.abs() < EPSILON
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum SymbolKind {
	/// Stands for a user [`Variable`](crate::Variable).
	External,
	/// Turns an inequality into an equality.
	Slack,
	/// Measures how far a non-required constraint is violated.
	Error,
	/// Marks a required equality; never pivots.
	Dummy,
}

/// A tableau column. Ordered by creation so that iteration, and therefore pivoting, is
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Symbol {
	id: usize,
	pub(crate) kind: SymbolKind,
}

impl Symbol {
	pub(crate) const fn new(id: usize, kind: SymbolKind) -> Self {
		Self { id, kind }
	}

	pub(crate) const fn is_restricted(self) -> bool {
		matches!(self.kind, SymbolKind::Slack | SymbolKind::Error)
	}
}

/// One tableau row: `basic = constant + Σ coefficient·symbol`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Row {
	pub(crate) cells: BTreeMap<Symbol, f64>,
	pub(crate) constant: f64,
}

impl Row {
	pub(crate) fn new(constant: f64) -> Self {
		Self {
			cells: BTreeMap::new(),
			constant,
		}
	}

	/// Adds to the constant and returns the new value.
	pub(crate) fn add(&mut self, value: f64) -> f64 {
		self.constant += value;
		self.constant
	}

	pub(crate) fn insert_symbol(&mut self, symbol: Symbol, coefficient: f64) {
		let cell = self.cells.entry(symbol).or_insert(0.0);
		*cell += coefficient;
		if near_zero(*cell) {
			self.cells.remove(&symbol);
		}
	}

	pub(crate) fn insert_row(&mut self, other: &Self, coefficient: f64) {
		self.constant += other.constant * coefficient;
		for (&symbol, &cell) in &other.cells {
			self.insert_symbol(symbol, cell * coefficient);
		}
	}

	pub(crate) fn remove(&mut self, symbol: Symbol) {
		self.cells.remove(&symbol);
	}

	pub(crate) fn reverse_sign(&mut self) {
		self.constant = -self.constant;
		for cell in self.cells.values_mut() {
			*cell = -*cell;
		}
	}

	/// Rewrites `0 = row` as `symbol = row'`, dropping `symbol` from the cells.
	pub(crate) fn solve_for_symbol(&mut self, symbol: Symbol) {
		let Some(cell) = self.cells.remove(&symbol) else {
			return;
		};
		let coefficient = -1.0 / cell;
		self.constant *= coefficient;
		for cell in self.cells.values_mut() {
			*cell *= coefficient;
		}
	}

	/// Rewrites `lhs = row` as `rhs = row'`.
	pub(crate) fn solve_for_symbols(&mut self, lhs: Symbol, rhs: Symbol) {
		self.insert_symbol(lhs, -1.0);
		self.solve_for_symbol(rhs);
	}

	pub(crate) fn coefficient_for(&self, symbol: Symbol) -> f64 {
		self.cells.get(&symbol).copied().unwrap_or(0.0)
	}

	/// Replaces `symbol` with the expression held in `row`.
	///
	/// Returns true if the constant changed.
	pub(crate) fn substitute(&mut self, symbol: Symbol, row: &Self) -> bool {
		let Some(coefficient) = self.cells.remove(&symbol) else {
			return false;
		};
		let constant = self.constant;
		self.insert_row(row, coefficient);
		self.constant != constant
	}

	pub(crate) fn all_dummies(&self) -> bool {
		self.cells.keys().all(|symbol| symbol.kind == SymbolKind::Dummy)
	}

	/// The first slack or error symbol, in creation order.
	pub(crate) fn any_pivotable_symbol(&self) -> Option<Symbol> {
		self.cells.keys().copied().find(|symbol| symbol.is_restricted())
	}
}
