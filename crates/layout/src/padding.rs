/// Insets applied to an area before it is split.
///
/// Each side is a cell count. Insets that exceed the area collapse it along that axis rather than
/// wrapping; see [`Rect::inner`](crate::Rect::inner).
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
	/// Cells removed from the left edge.
	pub left: u16,
	/// Cells removed from the right edge.
	pub right: u16,
	/// Cells removed from the top edge.
	pub top: u16,
	/// Cells removed from the bottom edge.
	pub bottom: u16,
}

impl Padding {
	/// No padding.
	pub const ZERO: Self = Self::new(0, 0, 0, 0);

	/// Creates padding from each side, in `left, right, top, bottom` order.
	pub const fn new(left: u16, right: u16, top: u16, bottom: u16) -> Self {
		Self {
			left,
			right,
			top,
			bottom,
		}
	}

	/// The same inset on all four sides.
	pub const fn uniform(value: u16) -> Self {
		Self::new(value, value, value, value)
	}

	/// Left and right insets only.
	pub const fn horizontal(value: u16) -> Self {
		Self::new(value, value, 0, 0)
	}

	/// Top and bottom insets only.
	pub const fn vertical(value: u16) -> Self {
		Self::new(0, 0, value, value)
	}

	/// `x` on the left and right, `y` on the top and bottom.
	pub const fn symmetric(x: u16, y: u16) -> Self {
		Self::new(x, x, y, y)
	}

	/// Returns true if no side is inset.
	pub const fn is_zero(self) -> bool {
		self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
	}
}
