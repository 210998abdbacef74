use core::cmp::{max, min};
use core::fmt;

use crate::{Constraint, Flex, Layout, LayoutError, Padding};

/// A position in the terminal, in cells from the top-left corner.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
	/// The column.
	pub x: u16,
	/// The row.
	pub y: u16,
}

impl Position {
	/// The top-left corner.
	pub const ORIGIN: Self = Self::new(0, 0);

	/// Creates a position.
	pub const fn new(x: u16, y: u16) -> Self {
		Self { x, y }
	}
}

impl From<(u16, u16)> for Position {
	fn from((x, y): (u16, u16)) -> Self {
		Self::new(x, y)
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// A width and height in cells.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
	/// The width.
	pub width: u16,
	/// The height.
	pub height: u16,
}

impl Size {
	/// A size with no area.
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a size.
	pub const fn new(width: u16, height: u16) -> Self {
		Self { width, height }
	}
}

impl From<(u16, u16)> for Size {
	fn from((width, height): (u16, u16)) -> Self {
		Self::new(width, height)
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

/// A rectangular area in the terminal.
///
/// A `Rect` is defined by its top-left corner and its dimensions. The coordinate system has its
/// origin at the top-left of the terminal, with x growing to the right and y growing downward.
/// `right()` and `bottom()` are exclusive: they are the first column and row outside the area.
///
/// Layouts consume a `Rect` and produce one `Rect` per segment and spacer:
///
/// ```rust
/// use tessel_layout::{Constraint, Layout, Rect};
///
/// let area = Rect::new(0, 0, 10, 10);
/// let [top, main] = area.layout(&Layout::vertical([Constraint::Length(1), Constraint::Min(0)]));
/// assert_eq!(top, Rect::new(0, 0, 10, 1));
/// assert_eq!(main, Rect::new(0, 1, 10, 9));
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
	/// The x coordinate of the top left corner of the `Rect`.
	pub x: u16,
	/// The y coordinate of the top left corner of the `Rect`.
	pub y: u16,
	/// The width of the `Rect`.
	pub width: u16,
	/// The height of the `Rect`.
	pub height: u16,
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
	}
}

impl Rect {
	/// A zero sized Rect at position 0,0
	pub const ZERO: Self = Self {
		x: 0,
		y: 0,
		width: 0,
		height: 0,
	};

	/// Creates a new `Rect`, with width and height limited to keep both bounds within `u16`.
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		let width = x.saturating_add(width) - x;
		let height = y.saturating_add(height) - y;
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// The area of the `Rect`.
	pub const fn area(self) -> u32 {
		(self.width as u32) * (self.height as u32)
	}

	/// Returns true if the `Rect` has no area.
	pub const fn is_empty(self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns the left coordinate of the `Rect`.
	pub const fn left(self) -> u16 {
		self.x
	}

	/// Returns the right coordinate of the `Rect`. This is the first coordinate outside of the
	/// `Rect`.
	pub const fn right(self) -> u16 {
		self.x.saturating_add(self.width)
	}

	/// Returns the top coordinate of the `Rect`.
	pub const fn top(self) -> u16 {
		self.y
	}

	/// Returns the bottom coordinate of the `Rect`. This is the first coordinate outside of the
	/// `Rect`.
	pub const fn bottom(self) -> u16 {
		self.y.saturating_add(self.height)
	}

	/// Returns a new `Rect` inside the current one, inset by the given padding.
	///
	/// Insets that do not fit collapse the corresponding extent to zero; the collapsed `Rect`
	/// stays anchored inside the original one.
	#[must_use = "method returns the modified value"]
	pub const fn inner(self, padding: Padding) -> Self {
		let left = if padding.left < self.width {
			padding.left
		} else {
			self.width
		};
		let top = if padding.top < self.height {
			padding.top
		} else {
			self.height
		};
		Self {
			x: self.x.saturating_add(left),
			y: self.y.saturating_add(top),
			width: self
				.width
				.saturating_sub(padding.left)
				.saturating_sub(padding.right),
			height: self
				.height
				.saturating_sub(padding.top)
				.saturating_sub(padding.bottom),
		}
	}

	/// Returns a new `Rect` that contains both the current one and the given one.
	#[must_use = "method returns the modified value"]
	pub fn union(self, other: Self) -> Self {
		let x1 = min(self.x, other.x);
		let y1 = min(self.y, other.y);
		let x2 = max(self.right(), other.right());
		let y2 = max(self.bottom(), other.bottom());
		Self {
			x: x1,
			y: y1,
			width: x2.saturating_sub(x1),
			height: y2.saturating_sub(y1),
		}
	}

	/// Returns a new `Rect` that is the intersection of the current one and the given one.
	///
	/// If the two `Rect`s do not intersect, the returned `Rect` will have no area.
	#[must_use = "method returns the modified value"]
	pub fn intersection(self, other: Self) -> Self {
		let x1 = max(self.x, other.x);
		let y1 = max(self.y, other.y);
		let x2 = min(self.right(), other.right());
		let y2 = min(self.bottom(), other.bottom());
		Self {
			x: x1,
			y: y1,
			width: x2.saturating_sub(x1),
			height: y2.saturating_sub(y1),
		}
	}

	/// Returns true if the two `Rect`s intersect.
	pub const fn intersects(self, other: Self) -> bool {
		self.x < other.right()
			&& self.right() > other.x
			&& self.y < other.bottom()
			&& self.bottom() > other.y
	}

	/// Returns true if the given position is inside the `Rect`.
	pub const fn contains(self, position: Position) -> bool {
		position.x >= self.x
			&& position.x < self.right()
			&& position.y >= self.y
			&& position.y < self.bottom()
	}

	/// Returns a [`Position`] with the same coordinates as this `Rect`.
	pub const fn as_position(self) -> Position {
		Position {
			x: self.x,
			y: self.y,
		}
	}

	/// Converts the `Rect` into a size struct.
	pub const fn as_size(self) -> Size {
		Size {
			width: self.width,
			height: self.height,
		}
	}

	/// Returns a new Rect, centered horizontally based on the provided constraint.
	#[must_use]
	pub fn centered_horizontally(self, constraint: Constraint) -> Self {
		let [area] = self.layout(&Layout::horizontal([constraint]).flex(Flex::Center));
		area
	}

	/// Returns a new Rect, centered vertically based on the provided constraint.
	#[must_use]
	pub fn centered_vertically(self, constraint: Constraint) -> Self {
		let [area] = self.layout(&Layout::vertical([constraint]).flex(Flex::Center));
		area
	}

	/// Returns a new Rect, centered horizontally and vertically based on the provided constraints.
	///
	/// ```rust
	/// use tessel_layout::{Constraint, Rect};
	///
	/// let area = Rect::new(0, 0, 100, 50).centered(Constraint::Length(20), Constraint::Length(10));
	/// assert_eq!(area, Rect::new(40, 20, 20, 10));
	/// ```
	#[must_use]
	pub fn centered(self, horizontal_constraint: Constraint, vertical_constraint: Constraint) -> Self {
		self.centered_horizontally(horizontal_constraint)
			.centered_vertically(vertical_constraint)
	}

	/// Split the rect into a number of sub-rects according to the given [`Layout`].
	///
	/// # Panics
	///
	/// Panics if the number of constraints is not equal to the length of the returned array.
	#[must_use]
	pub fn layout<const N: usize>(self, layout: &Layout) -> [Self; N] {
		layout.areas(self)
	}

	/// Split the rect into a number of sub-rects according to the given [`Layout`].
	///
	/// # Errors
	///
	/// Returns [`LayoutError::AreaCount`] if the number of constraints is not `N`.
	pub fn try_layout<const N: usize>(self, layout: &Layout) -> Result<[Self; N], LayoutError> {
		layout.try_areas(self)
	}
}

impl From<(Position, Size)> for Rect {
	fn from((position, size): (Position, Size)) -> Self {
		Self {
			x: position.x,
			y: position.y,
			width: size.width,
			height: size.height,
		}
	}
}

impl From<Size> for Rect {
	/// Creates a new `Rect` with the given size at [`Position::ORIGIN`] (0, 0).
	fn from(size: Size) -> Self {
		Self::from((Position::ORIGIN, size))
	}
}

#[cfg(test)]
mod tests;
