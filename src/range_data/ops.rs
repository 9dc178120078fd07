//! The binary operations on [`RangeData`]: right-biased union and
//! intersection, boundary trims and the adjacency queries.

use itertools::chain;
use smallvec::SmallVec;

use crate::domain::Domain;
use crate::error::RangeDataError;
use crate::extended::Extended;
use crate::range::{PointType, Range};

use super::RangeData;

impl<T, V, D> RangeData<T, V, D>
where
	T: PointType,
	V: Clone,
	D: Domain<T> + Clone + PartialEq,
{
	/// Returns a new `RangeData` over the overlap of the two ranges,
	/// carrying `other`'s data for every shared point, or `Ok(None)`
	/// when the ranges do not overlap.
	///
	/// # Errors
	///
	/// Returns [`RangeDataError::DomainMismatch`] when the two operands
	/// disagree on their domain.
	///
	/// # Examples
	/// ```
	/// use rangekit::domain::numeric::Unit;
	/// use rangekit::interval::ii;
	/// use rangekit::RangeData;
	///
	/// let left = RangeData::new(ii(10_i64, 20), Unit, 1..=11).unwrap();
	/// let right = RangeData::new(ii(15_i64, 25), Unit, 100..=110).unwrap();
	///
	/// let shared = left.intersect(&right).unwrap().unwrap();
	/// assert_eq!(shared.range(), &ii(15, 20));
	/// // the right operand's data wins on every shared point
	/// assert_eq!(shared.get(&15), Some(&100));
	/// ```
	pub fn intersect(&self, other: &Self) -> Result<Option<Self>, RangeDataError> {
		if self.domain != other.domain {
			return Err(RangeDataError::DomainMismatch);
		}
		let Some(shared) = self.range.intersect(&other.range) else {
			return Ok(None);
		};
		let sliced = other
			.slice(&shared)
			.expect("the intersection is contained in the right operand");
		Ok(Some(sliced))
	}

	/// Returns a new `RangeData` over the union of the two ranges, or
	/// `Ok(None)` when the ranges neither overlap nor touch. On every
	/// shared point `other`'s data wins; `self` contributes only the
	/// parts sticking out past `other`.
	///
	/// # Errors
	///
	/// Returns [`RangeDataError::DomainMismatch`] when the two operands
	/// disagree on their domain.
	///
	/// # Examples
	/// ```
	/// use rangekit::domain::numeric::Unit;
	/// use rangekit::interval::ii;
	/// use rangekit::RangeData;
	///
	/// let left = RangeData::new(ii(10_i64, 20), Unit, 1..=11).unwrap();
	/// let right = RangeData::new(ii(20_i64, 30), Unit, 11..=21).unwrap();
	///
	/// let merged = left.union(&right).unwrap().unwrap();
	/// assert_eq!(merged.range(), &ii(10, 30));
	/// assert_eq!(merged.logical_len(), 21);
	/// assert_eq!(merged.get(&20), Some(&11));
	/// ```
	pub fn union(&self, other: &Self) -> Result<Option<Self>, RangeDataError> {
		if self.domain != other.domain {
			return Err(RangeDataError::DomainMismatch);
		}
		let Some(combined) = self.range.union(&other.range) else {
			return Ok(None);
		};

		let data = if !self.range.overlaps(&other.range) {
			// pure adjacency, concatenate in range order
			if self.range.is_before(&other.range) {
				chain!(self.data.iter(), other.data.iter()).cloned().collect()
			} else {
				chain!(other.data.iter(), self.data.iter()).cloned().collect()
			}
		} else {
			let leftovers: SmallVec<[Range<T>; 2]> =
				self.range.except(&other.range).collect();
			match leftovers.as_slice() {
				[] => other.data.clone(),
				[leftover] => {
					let kept = self
						.slice(leftover)
						.expect("an except leftover is contained in its base");
					if leftover.is_before(&other.range) {
						chain!(kept.data.iter(), other.data.iter())
							.cloned()
							.collect()
					} else {
						chain!(other.data.iter(), kept.data.iter())
							.cloned()
							.collect()
					}
				}
				[left, right] => {
					let head = self
						.slice(left)
						.expect("an except leftover is contained in its base");
					let tail = self
						.slice(right)
						.expect("an except leftover is contained in its base");
					chain!(head.data.iter(), other.data.iter(), tail.data.iter())
						.cloned()
						.collect()
				}
				_ => unreachable!(
					"subtracting one range from another leaves at most two leftovers"
				),
			}
		};

		Ok(Some(Self {
			range: combined,
			domain: self.domain.clone(),
			data,
		}))
	}

	/// Returns a new `RangeData` starting at `new_start` (keeping the
	/// original start inclusivity) with the data realigned, or `None`
	/// when the moved boundary falls outside the original range or
	/// would invert it.
	///
	/// # Examples
	/// ```
	/// use rangekit::domain::numeric::Unit;
	/// use rangekit::interval::ii;
	/// use rangekit::RangeData;
	///
	/// let all = RangeData::new(ii(10_i64, 20), Unit, 1..=11).unwrap();
	///
	/// let tail = all.trim_start(15).unwrap();
	/// assert_eq!(tail.range(), &ii(15, 20));
	/// assert_eq!(tail.data(), [6, 7, 8, 9, 10, 11]);
	///
	/// assert_eq!(all.trim_start(5), None);
	/// ```
	pub fn trim_start(&self, new_start: T) -> Option<Self> {
		let trimmed = Range::new(
			Extended::Finite(new_start),
			self.range.end(),
			self.range.start_inclusive(),
			self.range.end_inclusive(),
		)
		.ok()?;
		if !trimmed.overlaps(&self.range) {
			return None;
		}
		self.slice(&trimmed)
	}

	/// Returns a new `RangeData` ending at `new_end` (keeping the
	/// original end inclusivity) with the data realigned, or `None`
	/// when the moved boundary falls outside the original range or
	/// would invert it.
	pub fn trim_end(&self, new_end: T) -> Option<Self> {
		let trimmed = Range::new(
			self.range.start(),
			Extended::Finite(new_end),
			self.range.start_inclusive(),
			self.range.end_inclusive(),
		)
		.ok()?;
		if !trimmed.overlaps(&self.range) {
			return None;
		}
		self.slice(&trimmed)
	}

	/// Whether the two ranges overlap or sit flush against each other,
	/// which is exactly the condition under which
	/// [`union`](RangeData::union) produces a result.
	pub fn is_touching(&self, other: &Self) -> bool {
		self.range.overlaps(&other.range) || self.range.is_adjacent(&other.range)
	}

	/// Whether `self` ends exactly where `other` begins, sharing the
	/// boundary value without overlapping.
	pub fn is_before_and_adjacent_to(&self, other: &Self) -> bool {
		self.range.is_adjacent(&other.range) && self.range.is_before(&other.range)
	}

	/// Whether `self` begins exactly where `other` ends, sharing the
	/// boundary value without overlapping.
	pub fn is_after_and_adjacent_to(&self, other: &Self) -> bool {
		other.is_before_and_adjacent_to(self)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::domain::numeric::{Grid, Unit};
	use crate::interval::{ee, ei, ie, ii};

	fn unit_data(
		range: Range<i64>,
		data: impl IntoIterator<Item = i64>,
	) -> RangeData<i64, i64, Unit> {
		RangeData::new(range, Unit, data).unwrap()
	}

	#[test]
	fn intersect_takes_the_right_operands_data() {
		let left = unit_data(ii(10, 20), 1..=11);
		let right = unit_data(ii(15, 25), 100..=110);

		let shared = left.intersect(&right).unwrap().unwrap();
		assert_eq!(shared.range(), &ii(15, 20));
		assert_eq!(shared.data(), [100, 101, 102, 103, 104, 105]);
		assert_eq!(shared.validate(), Ok(()));

		// swapping the operands swaps which data survives
		let shared = right.intersect(&left).unwrap().unwrap();
		assert_eq!(shared.data(), [6, 7, 8, 9, 10, 11]);
	}

	#[test]
	fn intersect_of_disjoint_operands_is_none() {
		let left = unit_data(ii(10, 20), 1..=11);
		let right = unit_data(ii(30, 40), 1..=11);
		assert_eq!(left.intersect(&right), Ok(None));
	}

	#[test]
	fn operations_reject_mismatched_domains() {
		let left = RangeData::new(ii(0.0, 2.0), Grid::new(0.5), 1..=5).unwrap();
		let right = RangeData::new(ii(1.0, 3.0), Grid::new(0.25), 1..=9).unwrap();
		assert_eq!(
			left.intersect(&right),
			Err(RangeDataError::DomainMismatch)
		);
		assert_eq!(left.union(&right), Err(RangeDataError::DomainMismatch));
	}

	#[test]
	fn union_of_ranges_sharing_a_boundary_point() {
		let left = unit_data(ii(10, 20), 1..=11);
		let right = unit_data(ii(20, 30), 11..=21);

		let merged = left.union(&right).unwrap().unwrap();
		assert_eq!(merged.range(), &ii(10, 30));
		assert_eq!(merged.logical_len(), 21);
		assert_eq!(merged.validate(), Ok(()));
		// the shared point 20 carries the right operand's value
		assert_eq!(merged.get(&20), Some(&11));
		assert_eq!(merged.get(&19), Some(&10));
		assert_eq!(merged.get(&21), Some(&12));
	}

	#[test]
	fn union_of_adjacent_ranges_concatenates_in_order() {
		let left = unit_data(ie(10, 20), 1..=10);
		let right = unit_data(ii(20, 25), 100..=105);

		let merged = left.union(&right).unwrap().unwrap();
		assert_eq!(merged.range(), &ii(10, 25));
		assert_eq!(merged.data().len(), 16);
		assert_eq!(merged.get(&19), Some(&10));
		assert_eq!(merged.get(&20), Some(&100));

		// the reversed call concatenates the same way round
		let merged = right.union(&left).unwrap().unwrap();
		assert_eq!(merged.range(), &ii(10, 25));
		assert_eq!(merged.get(&19), Some(&10));
		assert_eq!(merged.get(&20), Some(&100));
	}

	#[test]
	fn union_with_contained_operand_keeps_both_flanks() {
		let outer = unit_data(ii(10, 30), 1..=21);
		let inner = unit_data(ii(15, 25), 100..=110);

		let merged = outer.union(&inner).unwrap().unwrap();
		assert_eq!(merged.range(), &ii(10, 30));
		assert_eq!(merged.validate(), Ok(()));
		assert_eq!(merged.get(&14), Some(&5));
		assert_eq!(merged.get(&15), Some(&100));
		assert_eq!(merged.get(&25), Some(&110));
		assert_eq!(merged.get(&26), Some(&17));
	}

	#[test]
	fn union_with_containing_operand_is_the_containing_operand() {
		let outer = unit_data(ii(10, 30), 1..=21);
		let inner = unit_data(ii(15, 25), 100..=110);

		let merged = inner.union(&outer).unwrap().unwrap();
		assert_eq!(merged.range(), &ii(10, 30));
		assert_eq!(merged.data(), outer.data());
	}

	#[test]
	fn union_of_disjoint_operands_is_none() {
		let left = unit_data(ii(10, 20), 1..=11);
		let right = unit_data(ii(22, 30), 1..=9);
		assert_eq!(left.union(&right), Ok(None));
	}

	#[test]
	fn trim_start_realigns_the_data() {
		let all = unit_data(ii(10, 20), 1..=11);

		let tail = all.trim_start(15).unwrap();
		assert_eq!(tail.range(), &ii(15, 20));
		assert_eq!(tail.data(), [6, 7, 8, 9, 10, 11]);
		assert_eq!(tail.validate(), Ok(()));

		// keeping the boundary is a no-op trim
		assert_eq!(all.trim_start(10), Some(all.clone()));
		// widening or inverting is refused
		assert_eq!(all.trim_start(5), None);
		assert_eq!(all.trim_start(25), None);
	}

	#[test]
	fn trim_end_realigns_the_data() {
		let all = unit_data(ii(10, 20), 1..=11);

		let head = all.trim_end(14).unwrap();
		assert_eq!(head.range(), &ii(10, 14));
		assert_eq!(head.data(), [1, 2, 3, 4, 5]);

		assert_eq!(all.trim_end(20), Some(all.clone()));
		assert_eq!(all.trim_end(25), None);
		assert_eq!(all.trim_end(5), None);
	}

	#[test]
	fn trim_keeps_the_original_inclusivity() {
		let all = unit_data(ei(10, 20), 1..=10);
		let tail = all.trim_start(15).unwrap();
		assert_eq!(tail.range(), &ei(15, 20));
		assert_eq!(tail.data(), [6, 7, 8, 9, 10]);
	}

	#[test]
	fn adjacency_queries() {
		let left = unit_data(ie(10, 20), 1..=10);
		let right = unit_data(ii(20, 30), 1..=11);
		let far = unit_data(ii(40, 50), 1..=11);

		assert!(left.is_touching(&right));
		assert!(left.is_before_and_adjacent_to(&right));
		assert!(right.is_after_and_adjacent_to(&left));
		assert!(!right.is_before_and_adjacent_to(&left));
		assert!(!left.is_touching(&far));

		// overlap is touching but not adjacency
		let overlapping = unit_data(ii(15, 25), 1..=11);
		assert!(left.is_touching(&overlapping));
		assert!(!left.is_before_and_adjacent_to(&overlapping));

		// both-exclusive boundaries leave a gap
		let gap_left = unit_data(ie(10, 20), 1..=10);
		let gap_right = unit_data(ei(20, 30), 1..=10);
		assert!(!gap_left.is_before_and_adjacent_to(&gap_right));
	}

	#[test]
	fn union_preserves_the_alignment_invariant() {
		let cases = [
			(ii(10, 20), ii(15, 25)),
			(ie(10, 20), ii(20, 30)),
			(ii(10, 30), ee(12, 18)),
			(ii(10, 20), ii(10, 20)),
			(ei(10, 20), ie(12, 22)),
		];
		fn sized(range: Range<i64>, base: i64) -> RangeData<i64, i64, Unit> {
			let len = RangeData::<_, i64, _>::new(range, Unit, [])
				.unwrap()
				.logical_len() as i64;
			RangeData::new(range, Unit, base..base + len).unwrap()
		}

		for (a, b) in cases {
			let left = sized(a, 0);
			let right = sized(b, 100);
			let merged = left.union(&right).unwrap().unwrap();
			assert_eq!(merged.validate(), Ok(()), "{a} and {b}");
		}
	}
}
