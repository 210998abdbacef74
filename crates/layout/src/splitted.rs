use core::ops::Deref;
use std::sync::Arc;

use crate::{LayoutError, Rect};

/// The rectangles produced by a split, in segment (or spacer) order.
///
/// Cloning is cheap: the rectangles are shared, so a cached split can be handed out to every
/// caller without copying.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Splitted(Arc<[Rect]>);

impl Splitted {
	/// Writes the rectangles into `targets` by position, skipping `None` slots.
	///
	/// ```rust
	/// use tessel_layout::{Constraint, Layout, Rect};
	///
	/// let layout = Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)]);
	/// let (mut header, mut footer) = (Rect::ZERO, Rect::ZERO);
	/// layout
	/// 	.split(Rect::new(0, 0, 10, 10))
	/// 	.assign([Some(&mut header), None, Some(&mut footer)])
	/// 	.unwrap();
	/// assert_eq!(header, Rect::new(0, 0, 10, 1));
	/// assert_eq!(footer, Rect::new(0, 9, 10, 1));
	/// ```
	///
	/// # Errors
	///
	/// Returns [`LayoutError::AreaCount`] if there are fewer rectangles than targets. Nothing is
	/// written in that case.
	pub fn assign<const N: usize>(&self, targets: [Option<&mut Rect>; N]) -> Result<(), LayoutError> {
		if self.0.len() < N {
			return Err(LayoutError::AreaCount {
				expected: N,
				actual: self.0.len(),
			});
		}
		for (target, rect) in targets.into_iter().zip(self.0.iter()) {
			if let Some(target) = target {
				*target = *rect;
			}
		}
		Ok(())
	}

	/// Copies the rectangles into an array.
	pub(crate) fn to_array<const N: usize>(&self) -> Result<[Rect; N], LayoutError> {
		<[Rect; N]>::try_from(&*self.0).map_err(|_| LayoutError::AreaCount {
			expected: N,
			actual: self.0.len(),
		})
	}
}

impl Deref for Splitted {
	type Target = [Rect];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl FromIterator<Rect> for Splitted {
	fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl From<Vec<Rect>> for Splitted {
	fn from(rects: Vec<Rect>) -> Self {
		Self(rects.into())
	}
}

impl<'a> IntoIterator for &'a Splitted {
	type Item = &'a Rect;
	type IntoIter = core::slice::Iter<'a, Rect>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
