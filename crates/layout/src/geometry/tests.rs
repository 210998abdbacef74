use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn display() {
	assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "3x4+1+2");
	assert_eq!(Size::new(80, 24).to_string(), "80x24");
	assert_eq!(Position::new(5, 6).to_string(), "(5, 6)");
}

#[test]
fn new_saturates_at_the_edge() {
	assert_eq!(Rect::new(u16::MAX - 10, 0, 100, 5).width, 10);
	assert_eq!(Rect::new(0, u16::MAX, 5, 100).height, 0);
	assert_eq!(Rect::new(1, 2, 3, 4), Rect { x: 1, y: 2, width: 3, height: 4 });
}

#[test]
fn edges_and_area() {
	let rect = Rect::new(1, 2, 3, 4);
	assert_eq!(rect.left(), 1);
	assert_eq!(rect.right(), 4);
	assert_eq!(rect.top(), 2);
	assert_eq!(rect.bottom(), 6);
	assert_eq!(rect.area(), 12);
	assert!(!rect.is_empty());
	assert!(Rect::new(1, 2, 0, 4).is_empty());
	assert!(Rect::ZERO.is_empty());
	assert_eq!(Rect::new(0, 0, u16::MAX, u16::MAX).area(), 4_294_836_225);
}

#[rstest]
#[case::zero(Padding::ZERO, Rect::new(10, 20, 30, 40))]
#[case::uniform(Padding::uniform(1), Rect::new(11, 21, 28, 38))]
#[case::uneven(Padding::new(1, 2, 3, 4), Rect::new(11, 23, 27, 33))]
#[case::horizontal(Padding::horizontal(15), Rect::new(25, 20, 0, 40))]
#[case::oversized(Padding::uniform(50), Rect::new(40, 60, 0, 0))]
fn inner(#[case] padding: Padding, #[case] expected: Rect) {
	assert_eq!(Rect::new(10, 20, 30, 40).inner(padding), expected);
}

#[test]
fn inner_stays_inside() {
	let area = Rect::new(5, 5, 4, 4);
	let inner = area.inner(Padding::new(10, 0, 0, 10));
	assert_eq!(inner, Rect::new(9, 5, 0, 0));
	assert_eq!(area.union(inner), area);
}

#[test]
fn union() {
	assert_eq!(
		Rect::new(1, 2, 3, 4).union(Rect::new(2, 3, 4, 5)),
		Rect::new(1, 2, 5, 6)
	);
	assert_eq!(
		Rect::new(0, 0, 1, 1).union(Rect::new(9, 9, 1, 1)),
		Rect::new(0, 0, 10, 10)
	);
}

#[rstest]
#[case::overlapping(Rect::new(2, 3, 4, 5), Rect::new(2, 3, 2, 3))]
#[case::nested(Rect::new(2, 3, 1, 1), Rect::new(2, 3, 1, 1))]
#[case::touching(Rect::new(4, 2, 3, 4), Rect::new(4, 2, 0, 4))]
#[case::disjoint(Rect::new(10, 10, 2, 2), Rect::new(10, 10, 0, 0))]
fn intersection(#[case] other: Rect, #[case] expected: Rect) {
	let rect = Rect::new(1, 2, 3, 4);
	assert_eq!(rect.intersection(other), expected);
	assert_eq!(rect.intersects(other), !expected.is_empty());
}

#[rstest]
#[case::top_left(Position::new(1, 2), true)]
#[case::bottom_right(Position::new(3, 5), true)]
#[case::right_edge(Position::new(4, 2), false)]
#[case::bottom_edge(Position::new(1, 6), false)]
#[case::before(Position::new(0, 2), false)]
fn contains(#[case] position: Position, #[case] expected: bool) {
	assert_eq!(Rect::new(1, 2, 3, 4).contains(position), expected);
}

#[test]
fn conversions() {
	let rect = Rect::new(1, 2, 3, 4);
	assert_eq!(rect.as_position(), Position::new(1, 2));
	assert_eq!(rect.as_size(), Size::new(3, 4));
	assert_eq!(Rect::from((rect.as_position(), rect.as_size())), rect);
	assert_eq!(Rect::from(Size::new(3, 4)), Rect::new(0, 0, 3, 4));
	assert_eq!(Position::from((7u16, 8u16)), Position::new(7, 8));
	assert_eq!(Size::from((7u16, 8u16)), Size::new(7, 8));
}

#[test]
fn centered() {
	let area = Rect::new(0, 0, 100, 50);
	assert_eq!(
		area.centered_horizontally(Constraint::Length(20)),
		Rect::new(40, 0, 20, 50)
	);
	assert_eq!(
		area.centered_vertically(Constraint::Percentage(40)),
		Rect::new(0, 15, 100, 20)
	);
	assert_eq!(
		Rect::new(10, 10, 20, 20).centered(Constraint::Length(4), Constraint::Length(8)),
		Rect::new(18, 16, 4, 8)
	);
}

#[test]
fn layout() {
	let area = Rect::new(0, 0, 10, 3);
	let layout = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]);
	let [header, body] = area.layout(&layout);
	assert_eq!(header, Rect::new(0, 0, 10, 1));
	assert_eq!(body, Rect::new(0, 1, 10, 2));
	assert_eq!(
		area.try_layout::<3>(&layout),
		Err(LayoutError::AreaCount {
			expected: 3,
			actual: 2
		})
	);
}
