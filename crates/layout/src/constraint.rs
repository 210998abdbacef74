use core::fmt;

/// A constraint that defines the size of a layout element.
///
/// Constraints can be used to specify a fixed size, a percentage of the available space, a ratio
/// of the available space, a minimum or maximum size or a proportional value for a layout
/// element.
///
/// Relative constraints (percentage, ratio) are calculated relative to the entire space being
/// divided, rather than the space available after applying more fixed constraints (min, max,
/// length).
///
/// Constraints are prioritized in the following order:
///
/// 1. [`Constraint::Min`]
/// 2. [`Constraint::Max`]
/// 3. [`Constraint::Length`]
/// 4. [`Constraint::Percentage`]
/// 5. [`Constraint::Ratio`]
/// 6. [`Constraint::Fill`]
///
/// # Examples
///
/// ```rust
/// use tessel_layout::Constraint;
///
/// // Create a layout with specified lengths for each element
/// let constraints = Constraint::from_lengths([10, 20, 10]);
///
/// // Create a centered layout using ratio or percentage constraints
/// let constraints = Constraint::from_ratios([(1, 4), (1, 2), (1, 4)]);
/// let constraints = Constraint::from_percentages([25, 50, 25]);
///
/// // Create a centered layout with a minimum size constraint for specific elements
/// let constraints = Constraint::from_mins([0, 100, 0]);
///
/// // Create a sidebar layout specifying maximum sizes for the columns
/// let constraints = Constraint::from_maxes([30, 170]);
///
/// // Create a layout with fill proportional sizes for each element
/// let constraints = Constraint::from_fills([1, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
	/// Applies a minimum size constraint to the element
	///
	/// The element size is set to at least the specified amount.
	///
	/// # Examples
	///
	/// `[Percentage(100), Min(20)]`
	///
	/// ```plain
	/// ┌────────────────────────────┐┌──────────────────┐
	/// │            30 px           ││       20 px      │
	/// └────────────────────────────┘└──────────────────┘
	/// ```
	Min(u16),

	/// Applies a maximum size constraint to the element
	///
	/// The element size is set to at most the specified amount.
	///
	/// # Examples
	///
	/// `[Percentage(0), Max(20)]`
	///
	/// ```plain
	/// ┌────────────────────────────┐┌──────────────────┐
	/// │            30 px           ││       20 px      │
	/// └────────────────────────────┘└──────────────────┘
	/// ```
	Max(u16),

	/// Applies a length constraint to the element
	///
	/// The element size is set to the specified amount.
	///
	/// # Examples
	///
	/// `[Length(20), Length(20)]`
	///
	/// ```plain
	/// ┌──────────────────┐┌──────────────────┐
	/// │       20 px      ││       20 px      │
	/// └──────────────────┘└──────────────────┘
	/// ```
	Length(u16),

	/// Applies a percentage of the available space to the element
	///
	/// Converts the given percentage to a floating-point value and multiplies that with area.
	/// Values above 100 are treated as 100.
	///
	/// # Examples
	///
	/// `[Percentage(75), Fill(1)]`
	///
	/// ```plain
	/// ┌────────────────────────────────────┐┌──────────┐
	/// │                38 px               ││   12 px  │
	/// └────────────────────────────────────┘└──────────┘
	/// ```
	Percentage(u16),

	/// Applies a ratio of the available space to the element
	///
	/// Converts the given ratio to a floating-point value and multiplies that with area. A zero
	/// denominator yields a zero size.
	///
	/// # Examples
	///
	/// `[Ratio(1, 2) ; 2]`
	///
	/// ```plain
	/// ┌────────────────────────┐┌────────────────────────┐
	/// │         25 px          ││         25 px          │
	/// └────────────────────────┘└────────────────────────┘
	/// ```
	Ratio(u32, u32),

	/// Applies the scaling factor proportional to all other [`Constraint::Fill`] elements
	/// to fill excess space
	///
	/// The element will only expand or fill into excess available space, proportionally matching
	/// other [`Constraint::Fill`] elements while satisfying all other constraints.
	///
	/// # Examples
	///
	/// `[Fill(1), Fill(2), Fill(3)]`
	///
	/// ```plain
	/// ┌──────┐┌───────────────┐┌───────────────────────┐
	/// │ 8 px ││     17 px     ││         25 px         │
	/// └──────┘└───────────────┘└───────────────────────┘
	/// ```
	Fill(u16),
}

impl Constraint {
	/// Sizes a segment of `length` cells without running the solver.
	///
	/// This is what a single constraint resolves to when it is alone in an area: percentages and
	/// ratios scale `length`, lengths and maxima cap at it, minima grow past it and fills take
	/// all of it.
	///
	/// ```rust
	/// use tessel_layout::Constraint;
	///
	/// assert_eq!(Constraint::Percentage(50).apply(100), 50);
	/// assert_eq!(Constraint::Ratio(1, 3).apply(90), 30);
	/// assert_eq!(Constraint::Max(120).apply(100), 100);
	/// assert_eq!(Constraint::Min(120).apply(100), 120);
	/// ```
	pub fn apply(&self, length: u16) -> u16 {
		match *self {
			Self::Percentage(p) => {
				let p = f32::from(p.min(100)) / 100.0;
				let length = f32::from(length);
				(p * length).floor() as u16
			}
			Self::Ratio(_, 0) => 0,
			Self::Ratio(num, den) => {
				let scaled = u64::from(length) * u64::from(num) / u64::from(den);
				scaled.min(u64::from(length)) as u16
			}
			Self::Length(l) | Self::Max(l) => length.min(l),
			Self::Min(m) => length.max(m),
			Self::Fill(_) => length,
		}
	}

	/// Convert an iterator of lengths into a vector of constraints
	///
	/// # Examples
	///
	/// ```rust
	/// use tessel_layout::{Constraint, Layout, Rect};
	///
	/// let area = Rect::new(0, 0, 100, 10);
	/// let constraints = Constraint::from_lengths([1, 2, 3]);
	/// let layout = Layout::default().constraints(constraints).split(area);
	/// assert_eq!(layout.len(), 3);
	/// ```
	pub fn from_lengths<T>(lengths: T) -> Vec<Self>
	where
		T: IntoIterator<Item = u16>,
	{
		lengths.into_iter().map(Self::Length).collect()
	}

	/// Convert an iterator of ratios into a vector of constraints
	pub fn from_ratios<T>(ratios: T) -> Vec<Self>
	where
		T: IntoIterator<Item = (u32, u32)>,
	{
		ratios
			.into_iter()
			.map(|(n, d)| Self::Ratio(n, d))
			.collect()
	}

	/// Convert an iterator of percentages into a vector of constraints
	pub fn from_percentages<T>(percentages: T) -> Vec<Self>
	where
		T: IntoIterator<Item = u16>,
	{
		percentages.into_iter().map(Self::Percentage).collect()
	}

	/// Convert an iterator of maxes into a vector of constraints
	pub fn from_maxes<T>(maxes: T) -> Vec<Self>
	where
		T: IntoIterator<Item = u16>,
	{
		maxes.into_iter().map(Self::Max).collect()
	}

	/// Convert an iterator of mins into a vector of constraints
	pub fn from_mins<T>(mins: T) -> Vec<Self>
	where
		T: IntoIterator<Item = u16>,
	{
		mins.into_iter().map(Self::Min).collect()
	}

	/// Convert an iterator of proportional factors into a vector of constraints
	pub fn from_fills<T>(proportional_factors: T) -> Vec<Self>
	where
		T: IntoIterator<Item = u16>,
	{
		proportional_factors.into_iter().map(Self::Fill).collect()
	}
}

impl From<u16> for Constraint {
	/// Convert a `u16` into a [`Constraint::Length`]
	fn from(length: u16) -> Self {
		Self::Length(length)
	}
}

impl From<&Self> for Constraint {
	fn from(constraint: &Self) -> Self {
		*constraint
	}
}

impl Default for Constraint {
	fn default() -> Self {
		Self::Percentage(100)
	}
}

impl fmt::Display for Constraint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Percentage(p) => write!(f, "Percentage({p})"),
			Self::Ratio(n, d) => write!(f, "Ratio({n}, {d})"),
			Self::Length(l) => write!(f, "Length({l})"),
			Self::Fill(l) => write!(f, "Fill({l})"),
			Self::Max(m) => write!(f, "Max({m})"),
			Self::Min(m) => write!(f, "Min({m})"),
		}
	}
}
