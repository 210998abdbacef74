use tracing::debug;

use crate::{Constraint, Direction, Flex, LayoutError, Padding, Rect, Spacing, Splitted};

mod solve;


/// A layout is a set of constraints that can be applied to a given area to split it into smaller
/// ones.
///
/// A layout is composed of:
/// - a direction (horizontal or vertical)
/// - a set of constraints (length, ratio, percentage, fill, min, max)
/// - a padding (horizontal and vertical), the space between the edge of the main area and the
///   split areas
/// - a flex option
/// - a spacing option
///
/// The algorithm used to compute the layout is based on the [`tessel_solver`] crate. It is a
/// linear solver that can be used to solve linear equations and inequalities. In our case, we
/// define a set of variables that are used to represent the layout elements, and we define a set
/// of constraints that are used to determine the size of those elements. The solver then computes
/// the values of the variables that satisfy the constraints as closely as possible.
///
/// A layout owns no solver state. Every split builds a fresh solver, so splitting is a pure
/// function of the layout and the area. Use a [`LayoutCache`](crate::LayoutCache) to avoid
/// solving the same layout repeatedly.
///
/// # Constructors
///
/// - [`Layout::default`]: create a new layout with default values
/// - [`Layout::new`]: create a new layout with a given direction and constraints
/// - [`Layout::vertical`]: create a new vertical layout with the given constraints
/// - [`Layout::horizontal`]: create a new horizontal layout with the given constraints
///
/// # Setters
///
/// Each setter consumes the layout and returns the modified one.
///
/// - [`Layout::direction`]: set the direction of the layout
/// - [`Layout::constraints`]: set the constraints of the layout
/// - [`Layout::padding`]: set the padding around the split areas
/// - [`Layout::flex`]: set the way the space is distributed when the constraints are satisfied
/// - [`Layout::spacing`]: set the gap between the segments of the layout
///
/// # Example
///
/// ```rust
/// use tessel_layout::{Constraint, Layout, Rect};
///
/// let area = Rect::new(0, 0, 10, 10);
/// let layout = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]);
/// let [left, right] = layout.areas(area);
/// assert_eq!(left, Rect::new(0, 0, 10, 5));
/// assert_eq!(right, Rect::new(0, 5, 10, 5));
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Layout {
	pub(crate) direction: Direction,
	pub(crate) constraints: Vec<Constraint>,
	pub(crate) padding: Padding,
	pub(crate) flex: Flex,
	pub(crate) spacing: Spacing,
}

impl Layout {
	/// Creates a new layout with default values.
	///
	/// The `constraints` parameter accepts any type that implements `IntoIterator<Item =
	/// Into<Constraint>>`. This includes arrays, slices, vectors, iterators. `Into<Constraint>` is
	/// implemented on `u16`, so you can pass an array, `Vec`, etc. of `u16` to this function to
	/// create a layout with fixed size chunks.
	///
	/// Default values for the other fields are:
	///
	/// - `padding`: 0, 0
	/// - `flex`: [`Flex::Start`]
	/// - `spacing`: 0
	///
	/// # Examples
	///
	/// ```rust
	/// use tessel_layout::{Constraint, Direction, Layout};
	///
	/// Layout::new(
	/// 	Direction::Horizontal,
	/// 	[Constraint::Length(5), Constraint::Min(0)],
	/// );
	///
	/// Layout::new(
	/// 	Direction::Vertical,
	/// 	[1, 2, 3].iter().map(|&c| Constraint::Length(c)),
	/// );
	///
	/// Layout::new(Direction::Horizontal, vec![1u16, 2]);
	/// ```
	pub fn new<I>(direction: Direction, constraints: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Constraint>,
	{
		Self {
			direction,
			constraints: constraints.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}

	/// Creates a new vertical layout with default values.
	///
	/// The `constraints` parameter accepts any type that implements `IntoIterator<Item =
	/// Into<Constraint>>`.
	pub fn vertical<I>(constraints: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Constraint>,
	{
		Self::new(Direction::Vertical, constraints)
	}

	/// Creates a new horizontal layout with default values.
	///
	/// The `constraints` parameter accepts any type that implements `IntoIterator<Item =
	/// Into<Constraint>>`.
	pub fn horizontal<I>(constraints: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Constraint>,
	{
		Self::new(Direction::Horizontal, constraints)
	}

	/// Set the direction of the layout.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub const fn direction(mut self, direction: Direction) -> Self {
		self.direction = direction;
		self
	}

	/// Sets the constraints of the layout.
	///
	/// The `constraints` parameter accepts any type that implements `IntoIterator<Item =
	/// Into<Constraint>>`. This includes arrays, slices, vectors, iterators. `Into<Constraint>` is
	/// implemented on u16, so you can pass an array or vec of u16 to this function to create a
	/// layout with fixed size chunks.
	///
	/// Note that the constraints are applied to the whole area that is to be split, so using
	/// percentages and ratios with the other constraints may not have the desired effect of
	/// splitting the area up. (e.g. splitting 100 into [min 20, 50%, 50%], may not result in [20,
	/// 40, 40] but rather an indeterminate result between [20, 50, 30] and [20, 30, 50]).
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn constraints<I>(mut self, constraints: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Constraint>,
	{
		self.constraints = constraints.into_iter().map(Into::into).collect();
		self
	}

	/// Set the padding applied to the area before it is split.
	///
	/// ```rust
	/// use tessel_layout::{Constraint, Layout, Padding, Rect};
	///
	/// let layout = Layout::default()
	/// 	.constraints([Constraint::Min(0)])
	/// 	.padding(Padding::uniform(2))
	/// 	.split(Rect::new(0, 0, 10, 10));
	/// assert_eq!(layout[..], [Rect::new(2, 2, 6, 6)]);
	/// ```
	#[must_use = "method moves the value of self and returns the modified value"]
	pub const fn padding(mut self, padding: Padding) -> Self {
		self.padding = padding;
		self
	}

	/// The `flex` method allows you to specify the flex behavior of the layout.
	///
	/// # Arguments
	///
	/// * `flex`: A [`Flex`] enum value that represents the flex behavior of the layout. It can be
	///   one of the following:
	///   - [`Flex::Legacy`]: The last item is stretched to fill the excess space.
	///   - [`Flex::Start`]: The items are aligned to the start of the layout.
	///   - [`Flex::Center`]: The items are aligned to the center of the layout.
	///   - [`Flex::End`]: The items are aligned to the end of the layout.
	///   - [`Flex::SpaceBetween`]: The items are evenly distributed with equal space between
	///     them.
	///   - [`Flex::SpaceEvenly`]: The items are evenly distributed with equal space around them,
	///     the outer gaps included.
	///   - [`Flex::SpaceAround`]: The items are evenly distributed with the outer gaps half the
	///     size of the inner ones.
	///
	/// # Examples
	///
	/// In this example, the items in the layout will be aligned to the start.
	///
	/// ```rust
	/// use tessel_layout::{Constraint::*, Flex, Layout};
	///
	/// let layout = Layout::horizontal([Length(20), Length(20), Length(20)]).flex(Flex::Start);
	/// ```
	///
	/// In this example, the items in the layout will be stretched equally to fill the available
	/// space.
	///
	/// ```rust
	/// use tessel_layout::{Constraint::*, Flex, Layout};
	///
	/// let layout = Layout::horizontal([Length(20), Length(20), Length(20)]).flex(Flex::Legacy);
	/// ```
	#[must_use = "method moves the value of self and returns the modified value"]
	pub const fn flex(mut self, flex: Flex) -> Self {
		self.flex = flex;
		self
	}

	/// Sets the spacing between items in the layout.
	///
	/// The `spacing` method sets the spacing between items in the layout. The spacing is applied
	/// evenly between all segments. The spacing value represents the number of cells between each
	/// item.
	///
	/// Spacing can be positive integers, representing gaps between segments; or negative
	/// integers representing overlaps. Additionally, one of the variants of the [`Spacing`] enum
	/// can be passed to this function.
	///
	/// If the layout has only one item, the spacing will not be applied. Spacing is respected
	/// before any flex distribution, so the surplus is computed after the gaps are reserved.
	///
	/// # Examples
	///
	/// In this example, the spacing between each item in the layout is set to 2 cells.
	///
	/// ```rust
	/// use tessel_layout::{Constraint::*, Layout};
	///
	/// let layout = Layout::horizontal([Length(20), Length(20), Length(20)]).spacing(2);
	/// ```
	///
	/// In this example, the spacing between each item in the layout is set to -1 cells, i.e. the
	/// three segments will have an overlapping border.
	///
	/// ```rust
	/// use tessel_layout::{Constraint::*, Layout};
	/// let layout = Layout::horizontal([Length(20), Length(20), Length(20)]).spacing(-1);
	/// ```
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn spacing<T>(mut self, spacing: T) -> Self
	where
		T: Into<Spacing>,
	{
		self.spacing = spacing.into();
		self
	}

	/// Split the rect into a number of sub-rects according to the given [`Layout`].
	///
	/// An ergonomic wrapper around [`Layout::split`] that returns an array of `Rect`s instead of
	/// `Splitted`. This method requires the number of constraints to be known at compile time. If
	/// you don't know the number of constraints at compile time, use [`Layout::split`] instead.
	///
	/// # Panics
	///
	/// Panics if the number of constraints is not equal to the length of the returned array.
	///
	/// # Examples
	///
	/// ```rust
	/// use tessel_layout::{Constraint, Layout, Rect};
	///
	/// let area = Rect::new(0, 0, 10, 10);
	/// let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]);
	/// let [top, main] = layout.areas(area);
	///
	/// // or explicitly specify the number of constraints:
	/// let areas = layout.areas::<2>(area);
	/// ```
	pub fn areas<const N: usize>(&self, area: Rect) -> [Rect; N] {
		self.try_areas(area)
			.unwrap_or_else(|error| panic!("invalid number of rects: {error}"))
	}

	/// Split the rect into a number of sub-rects according to the given [`Layout`].
	///
	/// # Errors
	///
	/// Returns [`LayoutError::AreaCount`] if the number of constraints is not `N`, or
	/// [`LayoutError::Solver`] if the constraints could not be solved.
	pub fn try_areas<const N: usize>(&self, area: Rect) -> Result<[Rect; N], LayoutError> {
		let (segments, _) = self.try_split(area)?;
		segments.to_array()
	}

	/// Split the rect into a number of sub-rects according to the given [`Layout`] and return
	/// just the spacers between the areas.
	///
	/// # Panics
	///
	/// Panics if the number of constraints + 1 is not equal to the length of the returned array.
	///
	/// # Examples
	///
	/// ```rust
	/// use tessel_layout::{Constraint, Layout, Rect};
	///
	/// let area = Rect::new(0, 0, 10, 10);
	/// let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]);
	/// let [before, inbetween, after] = layout.spacers(area);
	/// ```
	pub fn spacers<const N: usize>(&self, area: Rect) -> [Rect; N] {
		let (_, spacers) = self.split_with_spacers(area);
		spacers
			.to_array()
			.unwrap_or_else(|error| panic!("invalid number of rects: {error}"))
	}

	/// Wrapper function around the solver which splits the given area into smaller ones based on
	/// the preferred widths or heights and the direction.
	///
	/// This method does not cache. Callers that split the same layouts repeatedly should go
	/// through [`LayoutCache::split`](crate::LayoutCache::split).
	///
	/// # Panics
	///
	/// Panics if the solver rejects the constraints; see [`Layout::try_split`].
	///
	/// # Examples
	///
	/// ```
	/// use tessel_layout::{Constraint, Direction, Layout, Rect};
	///
	/// let layout = Layout::default()
	/// 	.direction(Direction::Vertical)
	/// 	.constraints([Constraint::Length(5), Constraint::Min(0)])
	/// 	.split(Rect::new(2, 2, 10, 10));
	/// assert_eq!(layout[..], [Rect::new(2, 2, 10, 5), Rect::new(2, 7, 10, 5)]);
	///
	/// let layout = Layout::default()
	/// 	.direction(Direction::Horizontal)
	/// 	.constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
	/// 	.split(Rect::new(0, 0, 9, 2));
	/// assert_eq!(layout[..], [Rect::new(0, 0, 3, 2), Rect::new(3, 0, 6, 2)]);
	/// ```
	pub fn split(&self, area: Rect) -> Splitted {
		self.split_with_spacers(area).0
	}

	/// Wrapper function around the solver that splits the given area into smaller ones based on
	/// the preferred widths or heights and the direction, with the ability to include spacers
	/// between the areas.
	///
	/// This method is similar to `split`, but it returns two sets of rectangles: one for the areas
	/// and one for the spacers. There are always `constraints.len() + 1` spacers.
	///
	/// # Panics
	///
	/// Panics if the solver rejects the constraints; see [`Layout::try_split`].
	///
	/// # Examples
	///
	/// ```
	/// use tessel_layout::{Constraint, Direction, Layout, Rect};
	///
	/// let (areas, spacers) = Layout::default()
	/// 	.direction(Direction::Vertical)
	/// 	.constraints([Constraint::Length(5), Constraint::Min(0)])
	/// 	.split_with_spacers(Rect::new(2, 2, 10, 10));
	/// assert_eq!(areas[..], [Rect::new(2, 2, 10, 5), Rect::new(2, 7, 10, 5)]);
	/// assert_eq!(
	/// 	spacers[..],
	/// 	[
	/// 		Rect::new(2, 2, 10, 0),
	/// 		Rect::new(2, 7, 10, 0),
	/// 		Rect::new(2, 12, 10, 0)
	/// 	]
	/// );
	/// ```
	pub fn split_with_spacers(&self, area: Rect) -> (Splitted, Splitted) {
		self.try_split(area)
			.unwrap_or_else(|error| panic!("failed to split {area}: {error}"))
	}

	/// Splits the area, returning the segments and spacers, or the reason the layout could not
	/// be solved.
	///
	/// # Errors
	///
	/// Returns [`LayoutError::Solver`] if a required constraint derived from the layout
	/// contradicts the others. The area bounds and ordering constraints are always consistent,
	/// so ordinary layouts never fail.
	pub fn try_split(&self, area: Rect) -> Result<(Splitted, Splitted), LayoutError> {
		solve::split(self, area).map_err(|error| {
			debug!(
				%area,
				direction = %self.direction,
				flex = %self.flex,
				constraints = ?self.constraints,
				%error,
				"layout split failed"
			);
			LayoutError::from(error)
		})
	}
}
