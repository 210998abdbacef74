use core::iter;

use itertools::Itertools;
use tessel_solver::WeightedRelation::{EQ, GE, LE};
use tessel_solver::{
	AddConstraintError, Constraint as SolverConstraint, Expression, Solver, Strength, Variable,
};
use tracing::trace;

use self::strengths::{
	ALL_SEGMENT_GROW, FILL_GROW, GROW, LENGTH_SIZE_EQ, MAX_SIZE_EQ, MAX_SIZE_LE, MIN_SIZE_EQ,
	MIN_SIZE_GE, PERCENTAGE_SIZE_EQ, RATIO_SIZE_EQ, SPACE_GROW, SPACER_SIZE_EQ,
};
use super::Layout;
use crate::{Constraint, Direction, Flex, Rect, Splitted};

/// Solver values are scaled by this before solving and divided by it afterwards, which keeps two
/// decimal digits of precision until the final rounding to whole cells.
pub(super) const FLOAT_PRECISION_MULTIPLIER: f64 = 100.0;

/// Solves `layout` over `area` with a fresh solver, returning the segments and the spacers.
pub(super) fn split(layout: &Layout, area: Rect) -> Result<(Splitted, Splitted), AddConstraintError> {
	let mut solver = Solver::new();
	let inner_area = if layout.padding.is_zero() {
		area
	} else {
		area.inner(layout.padding)
	};

	let (area_start, area_end) = match layout.direction {
		Direction::Horizontal => (
			f64::from(inner_area.x) * FLOAT_PRECISION_MULTIPLIER,
			f64::from(inner_area.right()) * FLOAT_PRECISION_MULTIPLIER,
		),
		Direction::Vertical => (
			f64::from(inner_area.y) * FLOAT_PRECISION_MULTIPLIER,
			f64::from(inner_area.bottom()) * FLOAT_PRECISION_MULTIPLIER,
		),
	};

	// ```plain
	// <───────────────────────────────────area_size──────────────────────────────────>
	// ┌─area_start                                                          area_end─┐
	// V                                                                              V
	// ┌────┬───────────────────┬────┬─────variables─────┬────┬───────────────────┬────┐
	// │    │                   │    │                   │    │                   │    │
	// V    V                   V    V                   V    V                   V    V
	// ┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐
	//      │     Max(20)      │     │      Max(20)     │     │      Max(20)     │
	// └   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘
	// ^    ^                   ^    ^                   ^    ^                   ^    ^
	// │    │                   │    │                   │    │                   │    │
	// └─┬──┶━━━━━━━━━┳━━━━━━━━━┵─┬──┶━━━━━━━━━┳━━━━━━━━━┵─┬──┶━━━━━━━━━┳━━━━━━━━━┵─┬──┘
	//   │            ┃           │            ┃           │            ┃           │
	//   └────────────╂───────────┴────────────╂───────────┴────────────╂──Spacers──┘
	//                ┃                        ┃                        ┃
	//                ┗━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━Segments━━━━━━━━┛
	// ```
	let variable_count = layout.constraints.len() * 2 + 2;
	let variables = iter::repeat_with(Variable::new)
		.take(variable_count)
		.collect_vec();
	let spacers = variables
		.iter()
		.tuples()
		.map(|(&start, &end)| Element::from((start, end)))
		.collect_vec();
	let segments = variables
		.iter()
		.skip(1)
		.tuples()
		.map(|(&start, &end)| Element::from((start, end)))
		.collect_vec();

	let flex = layout.flex;
	let spacing = layout.spacing.signed();
	let constraints = &layout.constraints;

	let area_size = Element::from((variables[0], variables[variable_count - 1]));
	configure_area(&mut solver, area_size, area_start, area_end)?;
	configure_variable_in_area_constraints(&mut solver, &variables, area_size)?;
	configure_variable_constraints(&mut solver, &variables, spacing)?;
	configure_flex_constraints(&mut solver, area_size, &spacers, flex, spacing)?;
	configure_constraints(&mut solver, area_size, &segments, constraints, flex)?;
	configure_fill_constraints(&mut solver, &segments, constraints, flex)?;

	if flex != Flex::Legacy {
		for (left, right) in segments.iter().tuple_windows() {
			solver.add_constraint(left.has_size(right, ALL_SEGMENT_GROW))?;
		}
	}

	let segment_rects = to_rects(&solver, &segments, inner_area, layout.direction);
	let spacer_rects = to_rects(&solver, &spacers, inner_area, layout.direction);
	trace!(
		%area,
		segments = ?&segment_rects[..],
		spacers = ?&spacer_rects[..],
		"layout solved"
	);

	Ok((segment_rects, spacer_rects))
}

fn configure_area(
	solver: &mut Solver,
	area: Element,
	area_start: f64,
	area_end: f64,
) -> Result<(), AddConstraintError> {
	solver.add_constraint(area.start | EQ(Strength::REQUIRED) | area_start)?;
	solver.add_constraint(area.end | EQ(Strength::REQUIRED) | area_end)?;
	Ok(())
}

fn configure_variable_in_area_constraints(
	solver: &mut Solver,
	variables: &[Variable],
	area: Element,
) -> Result<(), AddConstraintError> {
	// all variables are in the range [area.start, area.end]
	for &variable in variables {
		solver.add_constraint(variable | GE(Strength::REQUIRED) | area.start)?;
		solver.add_constraint(variable | LE(Strength::REQUIRED) | area.end)?;
	}

	Ok(())
}

/// Keeps every segment, and every spacer unless segments overlap, from inverting.
///
/// ```plain
/// ┌────┬───────────────────┬────┬─────variables─────┬────┬───────────────────┬────┐
/// │    │                   │    │                   │    │                   │    │
/// v    v                   v    v                   v    v                   v    v
/// ┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐
///      │     Max(20)      │     │      Max(20)     │     │      Max(20)     │
/// └   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘
/// ^    ^                   ^    ^                   ^    ^                   ^    ^
/// └v0  └v1                 └v2  └v3                 └v4  └v5                 └v6  └v7
/// ```
fn configure_variable_constraints(
	solver: &mut Solver,
	variables: &[Variable],
	spacing: i32,
) -> Result<(), AddConstraintError> {
	for (&left, &right) in variables.iter().skip(1).tuples() {
		solver.add_constraint(left | LE(Strength::REQUIRED) | right)?;
	}
	// an overlap is a spacer whose end precedes its start
	if spacing >= 0 {
		for (&left, &right) in variables.iter().tuples() {
			solver.add_constraint(left | LE(Strength::REQUIRED) | right)?;
		}
	}
	Ok(())
}

fn configure_constraints(
	solver: &mut Solver,
	area: Element,
	segments: &[Element],
	constraints: &[Constraint],
	flex: Flex,
) -> Result<(), AddConstraintError> {
	for (&constraint, &segment) in constraints.iter().zip(segments.iter()) {
		match constraint {
			Constraint::Max(max) => {
				solver.add_constraint(segment.has_max_size(max, MAX_SIZE_LE))?;
				solver.add_constraint(segment.has_int_size(max, MAX_SIZE_EQ))?;
			}
			Constraint::Min(min) => {
				solver.add_constraint(segment.has_min_size(i32::from(min), MIN_SIZE_GE))?;
				if flex == Flex::Legacy {
					solver.add_constraint(segment.has_int_size(min, MIN_SIZE_EQ))?;
				} else {
					solver.add_constraint(segment.has_size(area, FILL_GROW))?;
				}
			}
			Constraint::Length(length) => {
				solver.add_constraint(segment.has_int_size(length, LENGTH_SIZE_EQ))?;
			}
			Constraint::Percentage(p) => {
				let size = area.size() * f64::from(p.min(100)) / 100.0;
				solver.add_constraint(segment.has_size(size, PERCENTAGE_SIZE_EQ))?;
			}
			Constraint::Ratio(num, den) => {
				let ratio = if den == 0 {
					0.0
				} else {
					f64::from(num) / f64::from(den)
				};
				let size = area.size() * ratio;
				solver.add_constraint(segment.has_size(size, RATIO_SIZE_EQ))?;
			}
			Constraint::Fill(_) => {
				// given no other constraints, this segment will grow as much as possible.
				solver.add_constraint(segment.has_size(area, FILL_GROW))?;
			}
		}
	}
	Ok(())
}

fn configure_flex_constraints(
	solver: &mut Solver,
	area: Element,
	spacers: &[Element],
	flex: Flex,
	spacing: i32,
) -> Result<(), AddConstraintError> {
	let spacers_except_first_and_last = spacers.get(1..spacers.len() - 1).unwrap_or(&[]);
	let spacing_f64 = f64::from(spacing) * FLOAT_PRECISION_MULTIPLIER;
	match flex {
		Flex::Legacy => {
			for spacer in spacers_except_first_and_last {
				solver.add_constraint(spacer.has_size(spacing_f64, SPACER_SIZE_EQ))?;
			}
			if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
				solver.add_constraint(first.is_empty())?;
				solver.add_constraint(last.is_empty())?;
			}
		}

		// every spacer is the same size and grows to fill any remaining space after the
		// constraints are satisfied
		Flex::SpaceEvenly => configure_even_spacers(solver, area, spacers, spacing)?,

		// interior spacers are the same size, the first and last are half of that
		Flex::SpaceAround => {
			if spacers.len() <= 2 {
				configure_even_spacers(solver, area, spacers, spacing)?;
			} else if let (Some((first, rest)), Some((last, _))) =
				(spacers.split_first(), spacers.split_last())
			{
				let middle = &rest[..rest.len() - 1];
				for (left, right) in middle.iter().tuple_combinations() {
					solver.add_constraint(left.has_size(right, SPACER_SIZE_EQ))?;
				}
				if let Some(first_middle) = middle.first() {
					solver.add_constraint(first_middle.has_double_size(first, SPACER_SIZE_EQ))?;
					solver.add_constraint(first_middle.has_double_size(last, SPACER_SIZE_EQ))?;
				}
				for spacer in spacers {
					solver.add_constraint(spacer.has_min_size(spacing, SPACER_SIZE_EQ))?;
					solver.add_constraint(spacer.has_size(area, SPACE_GROW))?;
				}
			}
		}

		// interior spacers are the same size and grow to fill any remaining space after the
		// constraints are satisfied, but the first and last spacers are zero size
		Flex::SpaceBetween => {
			for (left, right) in spacers_except_first_and_last.iter().tuple_combinations() {
				solver.add_constraint(left.has_size(right, SPACER_SIZE_EQ))?;
			}
			for spacer in spacers_except_first_and_last {
				solver.add_constraint(spacer.has_min_size(spacing, SPACER_SIZE_EQ))?;
				solver.add_constraint(spacer.has_size(area, SPACE_GROW))?;
			}
			if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
				solver.add_constraint(first.is_empty())?;
				solver.add_constraint(last.is_empty())?;
			}
		}
		Flex::Start => {
			for spacer in spacers_except_first_and_last {
				solver.add_constraint(spacer.has_size(spacing_f64, SPACER_SIZE_EQ))?;
			}
			if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
				solver.add_constraint(first.is_empty())?;
				solver.add_constraint(last.has_size(area, GROW))?;
			}
		}
		Flex::Center => {
			for spacer in spacers_except_first_and_last {
				solver.add_constraint(spacer.has_size(spacing_f64, SPACER_SIZE_EQ))?;
			}
			if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
				solver.add_constraint(first.has_size(area, GROW))?;
				solver.add_constraint(last.has_size(area, GROW))?;
				solver.add_constraint(first.has_size(last, SPACER_SIZE_EQ))?;
			}
		}
		Flex::End => {
			for spacer in spacers_except_first_and_last {
				solver.add_constraint(spacer.has_size(spacing_f64, SPACER_SIZE_EQ))?;
			}
			if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
				solver.add_constraint(last.is_empty())?;
				solver.add_constraint(first.has_size(area, GROW))?;
			}
		}
	}
	Ok(())
}

fn configure_even_spacers(
	solver: &mut Solver,
	area: Element,
	spacers: &[Element],
	spacing: i32,
) -> Result<(), AddConstraintError> {
	for (left, right) in spacers.iter().tuple_combinations() {
		solver.add_constraint(left.has_size(right, SPACER_SIZE_EQ))?;
	}
	for spacer in spacers {
		solver.add_constraint(spacer.has_min_size(spacing, SPACER_SIZE_EQ))?;
		solver.add_constraint(spacer.has_size(area, SPACE_GROW))?;
	}
	Ok(())
}

/// Make every `Fill` constraint proportionally equal to each other
/// This will make it fill up empty spaces equally
///
/// [Fill(1), Fill(1)]
/// ┌──────┐┌──────┐
/// │abcdef││abcdef│
/// └──────┘└──────┘
///
/// [Min(0), Fill(2)]
/// ┌──────┐┌────────────┐
/// │abcdef││abcdefabcdef│
/// └──────┘└────────────┘
///
/// `size == base_element * scaling_factor`
fn configure_fill_constraints(
	solver: &mut Solver,
	segments: &[Element],
	constraints: &[Constraint],
	flex: Flex,
) -> Result<(), AddConstraintError> {
	let scaling_factor = |constraint: &Constraint| match *constraint {
		Constraint::Fill(scale) => Some(f64::from(scale).max(1e-6)),
		Constraint::Min(_) if flex != Flex::Legacy => Some(1.0),
		_ => None,
	};
	for ((left_scaling_factor, left_segment), (right_scaling_factor, right_segment)) in constraints
		.iter()
		.zip(segments.iter())
		.filter_map(|(constraint, segment)| Some((scaling_factor(constraint)?, segment)))
		.tuple_combinations()
	{
		solver.add_constraint(
			(right_scaling_factor * left_segment.size())
				| EQ(GROW)
				| (left_scaling_factor * right_segment.size()),
		)?;
	}
	Ok(())
}

fn to_rects(solver: &Solver, elements: &[Element], area: Rect, direction: Direction) -> Splitted {
	elements
		.iter()
		.map(|element| {
			let start = solver.get_value(element.start);
			let end = solver.get_value(element.end);
			// values are bounded by the area, which fits in u16 once unscaled
			let start = (start / FLOAT_PRECISION_MULTIPLIER).round() as u16;
			let end = (end / FLOAT_PRECISION_MULTIPLIER).round() as u16;
			let size = end.saturating_sub(start);
			match direction {
				Direction::Horizontal => Rect {
					x: start,
					y: area.y,
					width: size,
					height: area.height,
				},
				Direction::Vertical => Rect {
					x: area.x,
					y: start,
					width: area.width,
					height: size,
				},
			}
		})
		.collect()
}

/// The pair of solver variables bounding one segment or spacer along the main axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
struct Element {
	start: Variable,
	end: Variable,
}

impl From<(Variable, Variable)> for Element {
	fn from((start, end): (Variable, Variable)) -> Self {
		Self { start, end }
	}
}

impl Element {
	fn size(&self) -> Expression {
		self.end - self.start
	}

	fn has_max_size(&self, size: u16, strength: Strength) -> SolverConstraint {
		self.size() | LE(strength) | (f64::from(size) * FLOAT_PRECISION_MULTIPLIER)
	}

	fn has_min_size(&self, size: i32, strength: Strength) -> SolverConstraint {
		self.size() | GE(strength) | (f64::from(size) * FLOAT_PRECISION_MULTIPLIER)
	}

	fn has_int_size(&self, size: u16, strength: Strength) -> SolverConstraint {
		self.size() | EQ(strength) | (f64::from(size) * FLOAT_PRECISION_MULTIPLIER)
	}

	fn has_size<E: Into<Expression>>(&self, size: E, strength: Strength) -> SolverConstraint {
		self.size() | EQ(strength) | size.into()
	}

	fn has_double_size<E: Into<Expression>>(&self, size: E, strength: Strength) -> SolverConstraint {
		self.size() | EQ(strength) | (size.into() * 2.0)
	}

	fn is_empty(&self) -> SolverConstraint {
		self.size() | EQ(Strength::REQUIRED - Strength::WEAK) | 0.0
	}
}

/// allow the element to represent its own size in expressions
impl From<Element> for Expression {
	fn from(element: Element) -> Self {
		element.size()
	}
}

/// allow the element to represent its own size in expressions
impl From<&Element> for Expression {
	fn from(element: &Element) -> Self {
		element.size()
	}
}

pub(super) mod strengths {
	use tessel_solver::Strength;

	/// The strength to apply to Spacers to ensure that their sizes are equal.
	///
	/// ┌     ┐┌───┐┌     ┐┌───┐┌     ┐
	///   ==x  │   │  ==x  │   │  ==x
	/// └     ┘└───┘└     ┘└───┘└     ┘
	pub const SPACER_SIZE_EQ: Strength = Strength::REQUIRED.div_f64(10.0);

	/// The strength to apply to Min inequality constraints.
	///
	/// ┌────────┐
	/// │Min(>=x)│
	/// └────────┘
	pub const MIN_SIZE_GE: Strength = Strength::STRONG.mul_f64(100.0);

	/// The strength to apply to Max inequality constraints.
	///
	/// ┌────────┐
	/// │Max(<=x)│
	/// └────────┘
	///
	/// Below [`MIN_SIZE_GE`] so a Min bound wins when the two pull against each other.
	pub const MAX_SIZE_LE: Strength = Strength::STRONG.mul_f64(50.0);

	/// The strength to apply to Length constraints.
	///
	/// ┌───────────┐
	/// │Length(==x)│
	/// └───────────┘
	pub const LENGTH_SIZE_EQ: Strength = Strength::STRONG.mul_f64(10.0);

	/// The strength to apply to Percentage constraints.
	///
	/// ┌───────────────┐
	/// │Percentage(==x)│
	/// └───────────────┘
	pub const PERCENTAGE_SIZE_EQ: Strength = Strength::STRONG;

	/// The strength to apply to Ratio constraints.
	///
	/// ┌────────────┐
	/// │Ratio(==x,y)│
	/// └────────────┘
	pub const RATIO_SIZE_EQ: Strength = Strength::STRONG.div_f64(10.0);

	/// The strength to apply to Min equality constraints.
	///
	/// ┌────────┐
	/// │Min(==x)│
	/// └────────┘
	pub const MIN_SIZE_EQ: Strength = Strength::MEDIUM.mul_f64(10.0);

	/// The strength to apply to Max equality constraints.
	///
	/// ┌────────┐
	/// │Max(==x)│
	/// └────────┘
	pub const MAX_SIZE_EQ: Strength = Strength::MEDIUM.mul_f64(10.0);

	/// The strength to apply to Fill growing constraints.
	///
	/// ┌─────────────────────┐
	/// │<=     Fill(x)     =>│
	/// └─────────────────────┘
	pub const FILL_GROW: Strength = Strength::MEDIUM;

	/// The strength to apply to growing constraints.
	///
	/// ┌────────────┐
	/// │<= Min(x) =>│
	/// └────────────┘
	pub const GROW: Strength = Strength::MEDIUM.div_f64(10.0);

	/// The strength to apply to Spacer growing constraints.
	///
	/// ┌       ┐
	///  <= x =>
	/// └       ┘
	pub const SPACE_GROW: Strength = Strength::WEAK.mul_f64(10.0);

	/// The strength to apply to growing the size of all segments equally.
	///
	/// ┌───────┐
	/// │<= x =>│
	/// └───────┘
	pub const ALL_SEGMENT_GROW: Strength = Strength::WEAK;
}
