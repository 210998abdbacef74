//! Constraint-based layout for terminal user interfaces.
//!
//! A [`Layout`] splits a [`Rect`] into a sequence of non-overlapping sub-rectangles along one
//! axis. Each segment is sized by a [`Constraint`]; the space left over once every constraint is
//! satisfied is distributed according to a [`Flex`] strategy. Splitting is done by translating the
//! request into linear constraints for the [`tessel_solver`] Cassowary solver.
//!
//! ```rust
//! use tessel_layout::{Constraint, Flex, Layout, Rect};
//!
//! let layout = Layout::horizontal([Constraint::Length(25), Constraint::Length(25)])
//! 	.flex(Flex::SpaceBetween);
//! let [left, right] = layout.areas(Rect::new(0, 0, 100, 1));
//! assert_eq!(left, Rect::new(0, 0, 25, 1));
//! assert_eq!(right, Rect::new(75, 0, 25, 1));
//! ```
//!
//! Solving is cheap but not free. Render loops that split the same areas every frame should go
//! through a shared [`LayoutCache`].

mod cache;
mod constraint;
mod direction;
mod error;
mod flex;
mod geometry;
mod layout;
mod padding;
mod spacing;
mod splitted;

pub use cache::{DEFAULT_CACHE_SIZE, LayoutCache, LayoutCacheStats};
pub use constraint::Constraint;
pub use direction::Direction;
pub use error::LayoutError;
pub use flex::Flex;
pub use geometry::{Position, Rect, Size};
pub use layout::Layout;
pub use padding::Padding;
pub use spacing::Spacing;
pub use splitted::Splitted;
pub use tessel_solver::AddConstraintError;
