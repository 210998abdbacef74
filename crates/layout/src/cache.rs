use core::hash::{Hash, Hasher};
use core::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use rustc_hash::{FxBuildHasher, FxHasher};
use tracing::{debug, trace};

use crate::{Constraint, Direction, Flex, Layout, LayoutError, Padding, Rect, Size, Spacing, Splitted};

#[cfg(test)]
mod tests;

/// Default number of splits a [`LayoutCache`] keeps.
///
/// Enough for every row and column of a large terminal to be laid out twice.
pub const DEFAULT_CACHE_SIZE: usize = 500;

/// Identifies one split: the area plus everything in the layout that affects the result.
///
/// Lookups hash a digest of the constraints but compare the constraints themselves, so two
/// layouts with colliding digests never share an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LayoutCacheKey {
	area: Rect,
	direction: Direction,
	digest: u64,
	constraints: Box<[Constraint]>,
	padding: Padding,
	spacing: Spacing,
	flex: Flex,
}

impl LayoutCacheKey {
	fn new(layout: &Layout, area: Rect) -> Self {
		let mut hasher = FxHasher::default();
		layout.constraints.hash(&mut hasher);
		Self {
			area,
			direction: layout.direction,
			digest: hasher.finish(),
			constraints: layout.constraints.as_slice().into(),
			padding: layout.padding,
			spacing: layout.spacing,
			flex: layout.flex,
		}
	}
}

impl Hash for LayoutCacheKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.area.hash(state);
		self.direction.hash(state);
		self.digest.hash(state);
		self.padding.hash(state);
		self.spacing.hash(state);
		self.flex.hash(state);
	}
}

/// Counters describing how well a [`LayoutCache`] is sized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCacheStats {
	/// Splits answered from the cache.
	pub hits: u64,
	/// Splits that had to be solved.
	pub misses: u64,
	/// Entries dropped to make room, including those dropped by shrinking the cache.
	pub evictions: u64,
}

#[derive(Debug)]
struct Inner {
	entries: LruCache<LayoutCacheKey, (Splitted, Splitted), FxBuildHasher>,
	stats: LayoutCacheStats,
}

/// A shared, bounded memo of solved layouts.
///
/// Splitting the same layout over the same area is answered without running the solver. The
/// least recently used split is evicted once the cache is full. Only successful splits are
/// stored, so a cached result is always complete.
///
/// The cache is `Send + Sync`; one lock covers lookup, solving and insertion, so concurrent
/// callers never solve the same miss twice.
///
/// ```rust
/// use tessel_layout::{Constraint, Layout, LayoutCache, Rect};
///
/// let cache = LayoutCache::default();
/// let layout = Layout::horizontal([Constraint::Length(10), Constraint::Fill(1)]);
/// let area = Rect::new(0, 0, 80, 24);
///
/// let first = cache.split(&layout, area);
/// let second = cache.split(&layout, area);
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct LayoutCache {
	inner: Mutex<Inner>,
}

impl LayoutCache {
	/// Creates a cache holding at most `capacity` splits.
	pub fn new(capacity: NonZeroUsize) -> Self {
		Self {
			inner: Mutex::new(Inner {
				entries: LruCache::with_hasher(capacity, FxBuildHasher),
				stats: LayoutCacheStats::default(),
			}),
		}
	}

	/// Creates a cache sized for a terminal: two entries per row and per column.
	pub fn for_terminal(size: Size) -> Self {
		let capacity = (usize::from(size.width) + usize::from(size.height)) * 2;
		Self::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN))
	}

	/// Splits `area` with `layout`, returning the segments.
	///
	/// # Panics
	///
	/// Panics if the layout cannot be solved; see [`Layout::try_split`].
	pub fn split(&self, layout: &Layout, area: Rect) -> Splitted {
		self.split_with_spacers(layout, area).0
	}

	/// Splits `area` with `layout`, returning the segments and the spacers.
	///
	/// # Panics
	///
	/// Panics if the layout cannot be solved; see [`Layout::try_split`].
	pub fn split_with_spacers(&self, layout: &Layout, area: Rect) -> (Splitted, Splitted) {
		self.try_split_with_spacers(layout, area)
			.unwrap_or_else(|error| panic!("failed to split {area}: {error}"))
	}

	/// Splits `area` with `layout`, answering from the cache when possible.
	///
	/// # Errors
	///
	/// Returns [`LayoutError::Solver`] if the layout cannot be solved. Failures are not cached.
	pub fn try_split_with_spacers(
		&self,
		layout: &Layout,
		area: Rect,
	) -> Result<(Splitted, Splitted), LayoutError> {
		let key = LayoutCacheKey::new(layout, area);
		let mut inner = self.inner.lock();

		if let Some(hit) = inner.entries.get(&key).cloned() {
			inner.stats.hits += 1;
			trace!(%area, constraints = layout.constraints.len(), "layout cache hit");
			return Ok(hit);
		}

		inner.stats.misses += 1;
		trace!(%area, constraints = layout.constraints.len(), "layout cache miss");
		let result = layout.try_split(area)?;
		if let Some((evicted, _)) = inner.entries.push(key, result.clone()) {
			inner.stats.evictions += 1;
			debug!(
				area = %evicted.area,
				capacity = inner.entries.cap().get(),
				"layout cache evicted least recently used split"
			);
		}
		Ok(result)
	}

	/// Cached counterpart of [`Layout::areas`].
	///
	/// # Panics
	///
	/// Panics if the layout cannot be solved or does not have `N` constraints.
	pub fn areas<const N: usize>(&self, layout: &Layout, area: Rect) -> [Rect; N] {
		self.try_areas(layout, area)
			.unwrap_or_else(|error| panic!("invalid number of rects: {error}"))
	}

	/// Cached counterpart of [`Layout::try_areas`].
	///
	/// # Errors
	///
	/// Returns [`LayoutError::AreaCount`] if the layout does not have `N` constraints, or
	/// [`LayoutError::Solver`] if it cannot be solved.
	pub fn try_areas<const N: usize>(&self, layout: &Layout, area: Rect) -> Result<[Rect; N], LayoutError> {
		let (segments, _) = self.try_split_with_spacers(layout, area)?;
		segments.to_array()
	}

	/// Cached counterpart of [`Layout::spacers`].
	///
	/// # Panics
	///
	/// Panics if the layout cannot be solved or does not have `N - 1` constraints.
	pub fn spacers<const N: usize>(&self, layout: &Layout, area: Rect) -> [Rect; N] {
		let (_, spacers) = self.split_with_spacers(layout, area);
		spacers
			.to_array()
			.unwrap_or_else(|error| panic!("invalid number of rects: {error}"))
	}

	/// Changes the capacity, evicting the least recently used splits if it shrinks.
	pub fn resize(&self, capacity: NonZeroUsize) {
		let mut inner = self.inner.lock();
		let before = inner.entries.len();
		inner.entries.resize(capacity);
		let evicted = before - inner.entries.len();
		if evicted > 0 {
			inner.stats.evictions += evicted as u64;
			debug!(evicted, capacity = capacity.get(), "layout cache shrunk");
		}
	}

	/// Drops every cached split. Statistics are kept.
	pub fn clear(&self) {
		self.inner.lock().entries.clear();
	}

	/// Number of cached splits.
	pub fn len(&self) -> usize {
		self.inner.lock().entries.len()
	}

	/// Returns true if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.inner.lock().entries.is_empty()
	}

	/// Maximum number of cached splits.
	pub fn capacity(&self) -> NonZeroUsize {
		self.inner.lock().entries.cap()
	}

	/// Hit, miss and eviction counts since the cache was created.
	pub fn stats(&self) -> LayoutCacheStats {
		self.inner.lock().stats
	}
}

impl Default for LayoutCache {
	fn default() -> Self {
		Self::new(NonZeroUsize::new(DEFAULT_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN))
	}
}
