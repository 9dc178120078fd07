//! A module containing [`RangeData`], a container keeping a data
//! sequence in lock-step with a finite range's logical length, and its
//! slicing/merge engine.

mod ops;

use crate::domain::Domain;
use crate::error::{RangeDataError, ValidationError};
use crate::range::{PointType, Range};

/// A finite [`Range`] bound to a data sequence holding exactly one
/// element per domain step the range encloses.
///
/// The invariant is `data.len() == logical length of range`, where the
/// logical length is the domain distance between the bound values plus
/// one, minus one per exclusive bound. Constructors reject unbounded
/// ranges but do not count the data; [`validate`](RangeData::validate)
/// is the on-demand recheck. The internal operations
/// ([`union`](RangeData::union), [`intersect`](RangeData::intersect),
/// the trims and [`slice`](RangeData::slice)) preserve the invariant on
/// their own.
///
/// # Examples
/// ```
/// use rangekit::domain::numeric::Unit;
/// use rangekit::interval::ii;
/// use rangekit::RangeData;
///
/// let prices = RangeData::new(ii(10_i64, 20), Unit, 1..=11).unwrap();
///
/// assert_eq!(prices.logical_len(), 11);
/// assert_eq!(prices.get(&10), Some(&1));
/// assert_eq!(prices.get(&20), Some(&11));
/// assert_eq!(prices.get(&21), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeData<T, V, D> {
	range: Range<T>,
	domain: D,
	data: Vec<V>,
}

impl<T, V, D> RangeData<T, V, D>
where
	T: PointType,
	D: Domain<T>,
{
	/// Creates a new `RangeData` binding `range` to the given data
	/// sequence under `domain`. The sequence is materialized but not
	/// counted; call [`validate`](RangeData::validate) to check it
	/// against the range's logical length.
	///
	/// # Errors
	///
	/// Returns [`RangeDataError::UnboundedRange`] if either bound of
	/// `range` is infinite.
	pub fn new(
		range: Range<T>,
		domain: D,
		data: impl IntoIterator<Item = V>,
	) -> Result<Self, RangeDataError> {
		if !range.is_bounded() {
			return Err(RangeDataError::UnboundedRange { param: "range" });
		}
		Ok(Self {
			range,
			domain,
			data: data.into_iter().collect(),
		})
	}

	/// The range the data is aligned to.
	pub fn range(&self) -> &Range<T> {
		&self.range
	}

	/// The domain interpreting the range's step grid.
	pub fn domain(&self) -> &D {
		&self.domain
	}

	/// The data sequence, in range order.
	pub fn data(&self) -> &[V] {
		&self.data
	}

	/// Consumes the container and returns the data sequence.
	pub fn into_data(self) -> Vec<V> {
		self.data
	}

	/// The finite bound values of the range.
	fn bound_values(&self) -> (T, T) {
		let start = self
			.range
			.start()
			.into_finite()
			.expect("the range is finite by construction");
		let end = self
			.range
			.end()
			.into_finite()
			.expect("the range is finite by construction");
		(start, end)
	}

	/// The number of domain steps the range spans, which is the number
	/// of elements the data sequence must hold.
	///
	/// # Examples
	/// ```
	/// use rangekit::domain::numeric::Unit;
	/// use rangekit::interval::{ee, ii};
	/// use rangekit::RangeData;
	///
	/// let closed = RangeData::new(ii(10_i64, 20), Unit, 1..=11).unwrap();
	/// assert_eq!(closed.logical_len(), 11);
	///
	/// let open = RangeData::<_, i64, _>::new(ee(10_i64, 20), Unit, []).unwrap();
	/// assert_eq!(open.logical_len(), 9);
	/// ```
	pub fn logical_len(&self) -> usize {
		let (start, end) = self.bound_values();
		let mut count = self.domain.distance(start, end).saturating_add(1);
		if !self.range.start_inclusive() {
			count -= 1;
		}
		if !self.range.end_inclusive() {
			count -= 1;
		}
		usize::try_from(count).unwrap_or(0)
	}

	/// The index into the data sequence addressed by a grid-aligned
	/// value, ignoring whether the data is actually that long. Negative
	/// offsets (and offsets beyond `usize`) report `None`.
	fn index_of(&self, value: T) -> Option<usize> {
		let (start, _) = self.bound_values();
		let mut offset = self.domain.distance(start, value);
		if !self.range.start_inclusive() {
			offset = offset.checked_sub(1)?;
		}
		usize::try_from(offset).ok()
	}

	/// Returns a reference to the element addressed by the given point,
	/// or `None` — never a panic — if the point lies outside the range,
	/// its offset cannot be addressed, or the data sequence is shorter
	/// than required.
	///
	/// # Examples
	/// ```
	/// use rangekit::domain::numeric::Unit;
	/// use rangekit::interval::ei;
	/// use rangekit::RangeData;
	///
	/// let scores = RangeData::new(ei(0_i64, 5), Unit, ["a", "b", "c", "d", "e"])
	/// 	.unwrap();
	///
	/// // the exclusive start shifts every offset down by one
	/// assert_eq!(scores.get(&1), Some(&"a"));
	/// assert_eq!(scores.get(&5), Some(&"e"));
	/// assert_eq!(scores.get(&0), None);
	/// ```
	pub fn get(&self, point: &T) -> Option<&V> {
		if !self.range.contains(point) {
			return None;
		}
		self.data.get(self.index_of(*point)?)
	}

	/// Returns a new `RangeData` over the part of the data addressed by
	/// `sub`, or `None` if `sub` is not contained in the range or an
	/// offset cannot be addressed.
	///
	/// A contained sub-range whose logical length is zero (for example
	/// an exclusive-exclusive range one step wide) yields empty data,
	/// not `None`.
	///
	/// # Examples
	/// ```
	/// use rangekit::domain::numeric::Unit;
	/// use rangekit::interval::ii;
	/// use rangekit::RangeData;
	///
	/// let all = RangeData::new(ii(10_i64, 20), Unit, 1..=11).unwrap();
	/// let mid = all.slice(&ii(14, 16)).unwrap();
	///
	/// assert_eq!(mid.data(), [5, 6, 7]);
	/// assert_eq!(all.slice(&ii(15, 25)), None);
	/// ```
	pub fn slice(&self, sub: &Range<T>) -> Option<Self>
	where
		V: Clone,
		D: Clone,
	{
		if !sub.is_bounded() || !self.range.contains_range(sub) {
			return None;
		}

		let (start, _) = self.bound_values();
		let adjust = i64::from(!self.range.start_inclusive());

		let mut first = self
			.domain
			.distance(start, sub.start().into_finite().ok()?)
			.saturating_sub(adjust);
		if !sub.start_inclusive() {
			first = first.saturating_add(1);
		}
		let mut last = self
			.domain
			.distance(start, sub.end().into_finite().ok()?)
			.saturating_sub(adjust);
		if !sub.end_inclusive() {
			last = last.saturating_sub(1);
		}

		let data = if first > last {
			// a contained sub-range admitting no grid points is empty,
			// not an error
			Vec::new()
		} else {
			let first = usize::try_from(first).ok()?;
			let last = usize::try_from(last).ok()?;
			self.data.get(first..=last)?.to_vec()
		};
		Some(Self {
			range: *sub,
			domain: self.domain.clone(),
			data,
		})
	}

	/// Recomputes the expected element count from the range and domain
	/// and walks the data against it, looking at most one element past
	/// the expectation so a malformed sequence never causes unbounded
	/// work.
	///
	/// # Errors
	///
	/// Returns [`ValidationError::TooShort`] or
	/// [`ValidationError::TooLong`] when the data is out of step with
	/// the range.
	///
	/// # Examples
	/// ```
	/// use rangekit::domain::numeric::Unit;
	/// use rangekit::error::ValidationError;
	/// use rangekit::interval::ii;
	/// use rangekit::RangeData;
	///
	/// let good = RangeData::new(ii(1_i64, 3), Unit, ["a", "b", "c"]).unwrap();
	/// assert_eq!(good.validate(), Ok(()));
	///
	/// let short = RangeData::new(ii(1_i64, 3), Unit, ["a"]).unwrap();
	/// assert_eq!(
	/// 	short.validate(),
	/// 	Err(ValidationError::TooShort {
	/// 		expected: 3,
	/// 		actual: 1
	/// 	})
	/// );
	/// ```
	pub fn validate(&self) -> Result<(), ValidationError> {
		let expected = self.logical_len();
		let walked = self
			.data
			.iter()
			.take(expected.saturating_add(1))
			.count();
		if walked < expected {
			Err(ValidationError::TooShort {
				expected,
				actual: walked,
			})
		} else if walked > expected {
			Err(ValidationError::TooLong { expected })
		} else {
			Ok(())
		}
	}
}
