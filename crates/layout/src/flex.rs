use strum::{Display, EnumIs, EnumString};

/// Defines the options for layout flex justify content in a container.
///
/// This enumeration controls the distribution of space when layout constraints are met and
/// space is left over.
///
/// The strategies only constrain the spacers around and between segments; every segment is sized
/// the same way regardless of the flex mode.
///
/// ```plain
/// Start         ┌────┐┌────┐
///               └────┘└────┘
/// End                         ┌────┐┌────┐
///                             └────┘└────┘
/// Center              ┌────┐┌────┐
///                     └────┘└────┘
/// SpaceBetween  ┌────┐                ┌────┐
///               └────┘                └────┘
/// SpaceEvenly          ┌────┐  ┌────┐
///                      └────┘  └────┘
/// SpaceAround       ┌────┐      ┌────┐
///                   └────┘      └────┘
/// ```
#[derive(Debug, Default, Display, EnumString, EnumIs, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flex {
	/// Fills the available space, giving any excess to the lowest priority segment.
	///
	/// The first and last spacers are empty, so segments and spacers always cover the whole
	/// area.
	Legacy,

	/// Aligns items to the start of the container.
	#[default]
	Start,

	/// Aligns items to the end of the container.
	End,

	/// Centers items within the container.
	Center,

	/// Adds excess space between each item; nothing before the first or after the last.
	SpaceBetween,

	/// Distributes excess space evenly into the gaps around and between items.
	///
	/// With `n` segments there are `n + 1` equal gaps.
	SpaceEvenly,

	/// Distributes excess space around each item, so the outer gaps are half the inner ones.
	///
	/// With a single segment this behaves like [`Flex::SpaceEvenly`].
	SpaceAround,
}

#[cfg(test)]
mod tests {
	use core::str::FromStr;

	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Flex::Legacy, "Legacy")]
	#[case(Flex::Start, "Start")]
	#[case(Flex::End, "End")]
	#[case(Flex::Center, "Center")]
	#[case(Flex::SpaceBetween, "SpaceBetween")]
	#[case(Flex::SpaceEvenly, "SpaceEvenly")]
	#[case(Flex::SpaceAround, "SpaceAround")]
	fn round_trips_through_strings(#[case] flex: Flex, #[case] text: &str) {
		assert_eq!(flex.to_string(), text);
		assert_eq!(Flex::from_str(text), Ok(flex));
	}

	#[test]
	fn default_is_start() {
		assert!(Flex::default().is_start());
	}
}
