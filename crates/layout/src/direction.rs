use strum::{Display, EnumIs, EnumString};

/// The axis along which a [`Layout`](crate::Layout) places its segments.
#[derive(Debug, Default, Display, EnumString, EnumIs, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
	/// Segments are placed left to right.
	Horizontal,
	/// Segments are placed top to bottom.
	#[default]
	Vertical,
}
