use core::num::NonZeroUsize;

use pretty_assertions::assert_eq;

use super::*;
use crate::Constraint::*;

fn capacity(n: usize) -> NonZeroUsize {
	NonZeroUsize::new(n).unwrap()
}

fn layout() -> Layout {
	Layout::horizontal([Length(10), Fill(1), Percentage(20)])
}

#[test]
fn hit_returns_the_stored_split() {
	let cache = LayoutCache::default();
	let area = Rect::new(0, 0, 100, 1);

	let first = cache.split_with_spacers(&layout(), area);
	let second = cache.split_with_spacers(&layout(), area);

	assert_eq!(first, second);
	assert!(core::ptr::eq(first.0.as_ptr(), second.0.as_ptr()));
	assert_eq!(
		cache.stats(),
		LayoutCacheStats {
			hits: 1,
			misses: 1,
			evictions: 0
		}
	);
}

#[test]
fn cached_and_uncached_agree() {
	let cache = LayoutCache::default();
	let area = Rect::new(4, 2, 73, 9);
	let layout = layout().flex(Flex::SpaceAround).spacing(2);
	assert_eq!(cache.split_with_spacers(&layout, area), layout.split_with_spacers(area));
	assert_eq!(cache.split(&layout, area), layout.split(area));
}

#[test]
fn every_layout_field_is_part_of_the_key() {
	let cache = LayoutCache::default();
	let area = Rect::new(0, 0, 100, 10);
	let base = layout();
	let variants = [
		base.clone(),
		base.clone().direction(Direction::Vertical),
		base.clone().flex(Flex::End),
		base.clone().spacing(1),
		base.clone().padding(Padding::uniform(1)),
		base.clone().constraints([Fill(1), Length(10), Percentage(20)]),
		base.clone().constraints([Length(10), Fill(2), Percentage(20)]),
		base.clone().constraints([Length(10), Fill(1), Ratio(1, 5)]),
	];
	for layout in &variants {
		assert_eq!(cache.split(layout, area), layout.split(area));
	}
	cache.split(&base, Rect::new(0, 0, 100, 11));

	assert_eq!(cache.len(), variants.len() + 1);
	assert_eq!(cache.stats().hits, 0);
}

#[test]
fn least_recently_used_split_is_evicted() {
	let cache = LayoutCache::new(capacity(2));
	let a = Rect::new(0, 0, 10, 1);
	let b = Rect::new(0, 0, 20, 1);
	let c = Rect::new(0, 0, 30, 1);

	cache.split(&layout(), a);
	cache.split(&layout(), b);
	// touch `a` so that `b` becomes the oldest
	cache.split(&layout(), a);
	cache.split(&layout(), c);

	assert_eq!(cache.len(), 2);
	assert_eq!(cache.stats().evictions, 1);

	cache.split(&layout(), a);
	assert_eq!(cache.stats().hits, 2);
	cache.split(&layout(), b);
	assert_eq!(cache.stats().misses, 4);
}

#[test]
fn resize_evicts_down_to_capacity() {
	let cache = LayoutCache::new(capacity(4));
	for width in 1..=4 {
		cache.split(&layout(), Rect::new(0, 0, width, 1));
	}
	cache.resize(capacity(1));
	assert_eq!(cache.capacity(), capacity(1));
	assert_eq!(cache.len(), 1);
	assert_eq!(cache.stats().evictions, 3);

	// the most recent split survives
	cache.split(&layout(), Rect::new(0, 0, 4, 1));
	assert_eq!(cache.stats().hits, 1);
}

#[test]
fn clear_keeps_stats() {
	let cache = LayoutCache::default();
	cache.split(&layout(), Rect::new(0, 0, 10, 1));
	assert!(!cache.is_empty());
	cache.clear();
	assert!(cache.is_empty());
	assert_eq!(cache.stats().misses, 1);
}

#[test]
fn capacities() {
	assert_eq!(LayoutCache::default().capacity().get(), DEFAULT_CACHE_SIZE);
	assert_eq!(
		LayoutCache::for_terminal(Size::new(200, 50)).capacity().get(),
		500
	);
	assert_eq!(LayoutCache::for_terminal(Size::ZERO).capacity().get(), 1);
}

#[test]
fn areas_and_spacers_go_through_the_cache() {
	let cache = LayoutCache::default();
	let layout = Layout::horizontal([Length(10), Length(10)]).spacing(2);
	let area = Rect::new(0, 0, 30, 1);

	let [left, right] = cache.areas(&layout, area);
	assert_eq!(left, Rect::new(0, 0, 10, 1));
	assert_eq!(right, Rect::new(12, 0, 10, 1));

	let [_, between, _] = cache.spacers(&layout, area);
	assert_eq!(between, Rect::new(10, 0, 2, 1));

	assert_eq!(
		cache.try_areas::<3>(&layout, area),
		Err(LayoutError::AreaCount {
			expected: 3,
			actual: 2
		})
	);
	assert_eq!(cache.stats().misses, 1);
	assert_eq!(cache.stats().hits, 2);
}

#[test]
fn key_depends_on_constraint_order() {
	let forward = Layout::horizontal([Length(1), Length(2)]);
	let backward = Layout::horizontal([Length(2), Length(1)]);
	let area = Rect::new(0, 0, 10, 1);
	assert_ne!(
		LayoutCacheKey::new(&forward, area),
		LayoutCacheKey::new(&backward, area)
	);
	assert_eq!(
		LayoutCacheKey::new(&forward, area),
		LayoutCacheKey::new(&forward.clone(), area)
	);
}

#[test]
fn colliding_constraint_digests_do_not_share_entries() {
	let area = Rect::new(0, 0, 100, 1);
	let first = Layout::horizontal([Ratio(1, 19514), Ratio(1, 29664)]);
	let second = Layout::horizontal([Ratio(25197, 1), Ratio(32425, 1)]);
	let cache = LayoutCache::default();

	assert_eq!(cache.split(&first, area), first.split(area));
	let segments = cache.split(&second, area);
	assert_eq!(segments, second.split(area));
	assert_eq!(segments.to_vec(), [Rect::new(0, 0, 50, 1), Rect::new(50, 0, 50, 1)]);
	assert_eq!(cache.stats().misses, 2);
	assert_eq!(cache.stats().hits, 0);
	assert_ne!(
		LayoutCacheKey::new(&first, area),
		LayoutCacheKey::new(&second, area)
	);
}

#[test]
fn cache_is_send_and_sync() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<LayoutCache>();
}
