//! A module containing [`Range`] and its boundary-aware interval algebra.

use core::fmt::Debug;

use smallvec::SmallVec;

use crate::error::RangeError;
use crate::extended::Extended;

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so
/// you shouldn't need to implement this yourself.
///
/// The ordering is required to be total over every value a range is ever
/// built from; `f64` qualifies as long as `NaN` never reaches a bound.
pub trait PointType: Copy + PartialOrd + Debug {}
impl<T> PointType for T where T: Copy + PartialOrd + Debug {}

/// An immutable interval over a totally-ordered value, with an
/// independently inclusive or exclusive bound on each side and support
/// for infinite bounds.
///
/// Every operation of the algebra is pure and returns a new instance.
/// The step semantics of the point type are never stored on the range;
/// operations that need them (see [`Domain`]) take the domain as a call
/// argument instead.
///
/// # Examples
/// ```
/// use rangekit::interval::{ie, ii};
///
/// let a = ii(10, 20);
/// let b = ii(15, 25);
///
/// assert_eq!(a.intersect(&b), Some(ii(15, 20)));
/// assert_eq!(a.union(&b), Some(ii(10, 25)));
/// assert_eq!(a.except(&b).collect::<Vec<_>>(), [ie(10, 15)]);
/// ```
///
/// [`Domain`]: crate::Domain
#[derive(Debug, Clone, Copy, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
	start: Extended<T>,
	end: Extended<T>,
	start_inclusive: bool,
	end_inclusive: bool,
}

impl<T: Eq> Eq for Range<T> {}

impl<T> Range<T>
where
	T: PointType,
{
	/// Creates a new `Range` from its two bounds and their inclusivity
	/// flags, validating the range invariants.
	///
	/// Infinite bounds bypass the ordering check and are canonicalized
	/// to exclusive.
	///
	/// # Errors
	///
	/// Returns a [`RangeError`] if `start` is greater than `end`, or if
	/// the bounds are equal and both exclusive (such a range denotes no
	/// points).
	///
	/// # Examples
	/// ```
	/// use rangekit::{Extended, Range};
	///
	/// let range = Range::new(
	/// 	Extended::Finite(10),
	/// 	Extended::Finite(20),
	/// 	true,
	/// 	false,
	/// )
	/// .unwrap();
	/// assert_eq!(range.to_string(), "[10, 20)");
	///
	/// assert!(Range::new(
	/// 	Extended::Finite(20),
	/// 	Extended::Finite(10),
	/// 	true,
	/// 	true
	/// )
	/// .is_err());
	/// ```
	pub fn new(
		start: Extended<T>,
		end: Extended<T>,
		start_inclusive: bool,
		end_inclusive: bool,
	) -> Result<Self, RangeError> {
		match (&start, &end) {
			(Extended::Finite(s), Extended::Finite(e)) => {
				if !(s <= e) {
					return Err(RangeError::DecreasingBounds {
						start: format!("{s:?}"),
						end: format!("{e:?}"),
					});
				}
				if s == e && !start_inclusive && !end_inclusive {
					return Err(RangeError::EmptyExclusiveBounds {
						value: format!("{s:?}"),
					});
				}
			}
			// a range cannot start above everything or end below
			// everything
			(Extended::PosInfinity, _) | (_, Extended::NegInfinity) => {
				return Err(RangeError::DecreasingBounds {
					start: format!("{start:?}"),
					end: format!("{end:?}"),
				});
			}
			_ => {}
		}

		Ok(Self::new_unchecked(start, end, start_inclusive, end_inclusive))
	}

	/// Creates a new `Range` without validating the range invariants.
	///
	/// This is the trusted fast path for callers that have already
	/// proved the bounds correct, such as the bracket parser. Invariants
	/// are still debug-asserted.
	pub fn new_unchecked(
		start: Extended<T>,
		end: Extended<T>,
		start_inclusive: bool,
		end_inclusive: bool,
	) -> Self {
		if let (Extended::Finite(s), Extended::Finite(e)) = (&start, &end) {
			debug_assert!(s <= e);
			debug_assert!(s != e || start_inclusive || end_inclusive);
		}
		// inclusivity is meaningless on an infinite bound
		let start_inclusive = start_inclusive && start.is_finite();
		let end_inclusive = end_inclusive && end.is_finite();
		Self {
			start,
			end,
			start_inclusive,
			end_inclusive,
		}
	}

	/// The start bound of the range.
	pub fn start(&self) -> Extended<T> {
		self.start
	}

	/// The end bound of the range.
	pub fn end(&self) -> Extended<T> {
		self.end
	}

	/// Whether the start value itself belongs to the range. Always
	/// `false` for an infinite start.
	pub fn start_inclusive(&self) -> bool {
		self.start_inclusive
	}

	/// Whether the end value itself belongs to the range. Always `false`
	/// for an infinite end.
	pub fn end_inclusive(&self) -> bool {
		self.end_inclusive
	}

	/// Returns `true` if the range contains no points: equal finite
	/// bounds of which only one is inclusive.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ei, ii};
	///
	/// assert_eq!(ii(5, 5).is_empty(), false);
	/// assert_eq!(ei(5, 5).is_empty(), true);
	/// ```
	pub fn is_empty(&self) -> bool {
		match (&self.start, &self.end) {
			(Extended::Finite(s), Extended::Finite(e)) => {
				s == e && !(self.start_inclusive && self.end_inclusive)
			}
			_ => false,
		}
	}

	/// Returns `true` if both bounds are finite.
	pub fn is_bounded(&self) -> bool {
		self.start.is_finite() && self.end.is_finite()
	}

	/// Returns `true` if at least one bound is infinite.
	pub fn is_unbounded(&self) -> bool {
		!self.is_bounded()
	}

	/// Returns `true` if both bounds are infinite, that is the range
	/// covers the whole line.
	pub fn is_infinite(&self) -> bool {
		self.start.is_infinite() && self.end.is_infinite()
	}

	/// Returns `true` if the given value lies within the range,
	/// respecting bound inclusivity. An infinite bound trivially
	/// contains every value on its side.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ie, ui};
	///
	/// assert_eq!(ie(10, 20).contains(&10), true);
	/// assert_eq!(ie(10, 20).contains(&20), false);
	/// assert_eq!(ui(20).contains(&i64::MIN), true);
	/// ```
	pub fn contains(&self, value: &T) -> bool {
		let above_start = match &self.start {
			Extended::NegInfinity => true,
			Extended::PosInfinity => false,
			Extended::Finite(s) => {
				s < value || (s == value && self.start_inclusive)
			}
		};
		let below_end = match &self.end {
			Extended::PosInfinity => true,
			Extended::NegInfinity => false,
			Extended::Finite(e) => {
				e > value || (e == value && self.end_inclusive)
			}
		};
		above_start && below_end
	}

	/// Returns `true` if every point of `other` also lies within `self`.
	///
	/// On a boundary value tie the outer bound must be inclusive if the
	/// inner one is; infinite sides of `self` auto-satisfy their side.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ei, ie, ii};
	///
	/// assert_eq!(ii(10, 20).contains_range(&ei(10, 20)), true);
	/// assert_eq!(ei(10, 20).contains_range(&ii(10, 20)), false);
	/// assert_eq!(ie(10, 20).contains_range(&ii(10, 19)), true);
	/// ```
	pub fn contains_range(&self, other: &Self) -> bool {
		let start_ok = if self.start < other.start {
			true
		} else if self.start == other.start {
			self.start_inclusive || !other.start_inclusive
		} else {
			false
		};
		let end_ok = if self.end > other.end {
			true
		} else if self.end == other.end {
			self.end_inclusive || !other.end_inclusive
		} else {
			false
		};
		start_ok && end_ok
	}

	/// Returns `true` if `self` ends strictly before `other` starts,
	/// sharing no point. Always `false` when the deciding bound is
	/// infinite.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ie, ii};
	///
	/// assert_eq!(ie(10, 20).is_before(&ii(20, 30)), true);
	/// assert_eq!(ii(10, 20).is_before(&ii(20, 30)), false);
	/// ```
	pub fn is_before(&self, other: &Self) -> bool {
		match (&self.end, &other.start) {
			(Extended::Finite(e), Extended::Finite(s)) => {
				e < s
					|| (e == s
						&& !(self.end_inclusive && other.start_inclusive))
			}
			_ => false,
		}
	}

	/// Returns `true` if `self` starts strictly after `other` ends,
	/// sharing no point. Always `false` when the deciding bound is
	/// infinite.
	pub fn is_after(&self, other: &Self) -> bool {
		other.is_before(self)
	}

	/// Returns `true` if the two ranges share at least one point.
	///
	/// Equal touching bound values still overlap unless at least one of
	/// the touching bounds is exclusive.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ei, ie, ii};
	///
	/// assert_eq!(ii(10, 20).overlaps(&ii(20, 30)), true);
	/// assert_eq!(ie(10, 20).overlaps(&ii(20, 30)), false);
	/// assert_eq!(ii(10, 20).overlaps(&ei(20, 30)), false);
	/// ```
	pub fn overlaps(&self, other: &Self) -> bool {
		!self.is_before(other) && !other.is_before(self)
	}

	/// Returns `true` if one range's end value equals the other's start
	/// value with exactly one of the two touching bounds inclusive, so
	/// the ranges share no point yet leave no gap. Never `true` across
	/// an infinite bound.
	///
	/// Adjacency and overlap are mutually exclusive.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ee, ie, ii};
	///
	/// assert_eq!(ie(10, 20).is_adjacent(&ii(20, 30)), true);
	/// assert_eq!(ii(10, 20).is_adjacent(&ii(20, 30)), false);
	/// assert_eq!(ie(10, 20).is_adjacent(&ee(20, 30)), false);
	/// ```
	pub fn is_adjacent(&self, other: &Self) -> bool {
		touching(&self.end, self.end_inclusive, &other.start, other.start_inclusive)
			|| touching(
				&other.end,
				other.end_inclusive,
				&self.start,
				self.start_inclusive,
			)
	}

	/// Returns the overlap of the two ranges, or `None` if they are
	/// disjoint.
	///
	/// The tighter bound wins on each side; on a value tie the resulting
	/// bound is inclusive only if both inputs are.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ie, ii};
	///
	/// assert_eq!(ii(10, 20).intersect(&ii(15, 25)), Some(ii(15, 20)));
	/// assert_eq!(ii(10, 20).intersect(&ie(20, 30)), Some(ii(20, 20)));
	/// assert_eq!(ii(10, 20).intersect(&ii(25, 30)), None);
	/// ```
	pub fn intersect(&self, other: &Self) -> Option<Self> {
		if !self.overlaps(other) {
			return None;
		}
		let (start, start_inclusive) = if self.start > other.start {
			(self.start, self.start_inclusive)
		} else if self.start < other.start {
			(other.start, other.start_inclusive)
		} else {
			(self.start, self.start_inclusive && other.start_inclusive)
		};
		let (end, end_inclusive) = if self.end < other.end {
			(self.end, self.end_inclusive)
		} else if self.end > other.end {
			(other.end, other.end_inclusive)
		} else {
			(self.end, self.end_inclusive && other.end_inclusive)
		};
		// overlapping inputs always leave a valid overlap region
		Some(Self::new_unchecked(start, end, start_inclusive, end_inclusive))
	}

	/// Returns the combined extent of the two ranges, or `None` if they
	/// neither overlap nor are adjacent (combining them would invent
	/// points in the gap).
	///
	/// The looser bound wins on each side; on a value tie the resulting
	/// bound is inclusive if either input is.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ie, ii};
	///
	/// assert_eq!(ii(10, 20).union(&ii(15, 25)), Some(ii(10, 25)));
	/// assert_eq!(ie(10, 20).union(&ii(20, 30)), Some(ii(10, 30)));
	/// assert_eq!(ii(10, 20).union(&ii(25, 30)), None);
	/// ```
	pub fn union(&self, other: &Self) -> Option<Self> {
		if !self.overlaps(other) && !self.is_adjacent(other) {
			return None;
		}
		let (start, start_inclusive) = if self.start < other.start {
			(self.start, self.start_inclusive)
		} else if self.start > other.start {
			(other.start, other.start_inclusive)
		} else {
			(self.start, self.start_inclusive || other.start_inclusive)
		};
		let (end, end_inclusive) = if self.end > other.end {
			(self.end, self.end_inclusive)
		} else if self.end < other.end {
			(other.end, other.end_inclusive)
		} else {
			(self.end, self.end_inclusive || other.end_inclusive)
		};
		Some(Self::new_unchecked(start, end, start_inclusive, end_inclusive))
	}

	/// Returns the parts of `self` not covered by `other` as an iterator
	/// of zero, one, or two remainder ranges.
	///
	/// Zero remainders mean `self` is fully covered; one means `other`
	/// truncates one side of `self` (or misses it entirely, in which
	/// case `self` survives whole); two mean `other` is a proper
	/// sub-interval of `self` and splits it. A remainder bound created
	/// at a cut takes the inverse inclusivity of the subtracted bound so
	/// the cut point is not re-included; a remainder that collapses to a
	/// single point surviving on both sides comes out as a fully
	/// inclusive single-point range.
	///
	/// # Examples
	/// ```
	/// use rangekit::interval::{ei, ie, ii};
	///
	/// assert_eq!(
	/// 	ii(10, 20).except(&ii(15, 25)).collect::<Vec<_>>(),
	/// 	[ie(10, 15)]
	/// );
	/// assert_eq!(
	/// 	ii(10, 30).except(&ie(15, 25)).collect::<Vec<_>>(),
	/// 	[ie(10, 15), ii(25, 30)]
	/// );
	/// assert_eq!(ii(10, 20).except(&ei(10, 25)).collect::<Vec<_>>(), [
	/// 	ii(10, 10)
	/// ]);
	/// assert_eq!(ii(10, 20).except(&ii(0, 100)).count(), 0);
	/// ```
	pub fn except(&self, other: &Self) -> impl Iterator<Item = Range<T>> {
		let mut leftovers = SmallVec::<[Range<T>; 2]>::new();

		if !self.overlaps(other) {
			leftovers.push(*self);
			return leftovers.into_iter();
		}

		// the remainder left of the cut exists iff self's start bound
		// admits points that other's start bound does not
		let start_sticks_out = self.start < other.start
			|| (self.start == other.start
				&& self.start.is_finite()
				&& self.start_inclusive
				&& !other.start_inclusive);
		if start_sticks_out {
			leftovers.push(Self::new_unchecked(
				self.start,
				other.start,
				self.start_inclusive,
				!other.start_inclusive,
			));
		}

		let end_sticks_out = self.end > other.end
			|| (self.end == other.end
				&& self.end.is_finite()
				&& self.end_inclusive
				&& !other.end_inclusive);
		if end_sticks_out {
			leftovers.push(Self::new_unchecked(
				other.end,
				self.end,
				!other.end_inclusive,
				self.end_inclusive,
			));
		}

		leftovers.into_iter()
	}
}

fn touching<T>(
	end: &Extended<T>,
	end_inclusive: bool,
	start: &Extended<T>,
	start_inclusive: bool,
) -> bool
where
	T: PointType,
{
	match (end, start) {
		(Extended::Finite(e), Extended::Finite(s)) => {
			e == s && (end_inclusive != start_inclusive)
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ee, ei, eu, ie, ii, iu, ue, ui, uu};

	fn all_test_ranges() -> Vec<Range<i8>> {
		let mut ranges = vec![uu()];
		for x in [2i8, 4, 6, 8] {
			ranges.push(ui(x));
			ranges.push(ue(x));
			ranges.push(iu(x));
			ranges.push(eu(x));
			ranges.push(ii(x, x));
			for y in [4i8, 6, 8, 10] {
				if x < y {
					ranges.push(ii(x, y));
					ranges.push(ie(x, y));
					ranges.push(ei(x, y));
					ranges.push(ee(x, y));
				}
			}
		}
		ranges
	}

	#[test]
	fn construction_tests() {
		assert_eq!(
			Range::new(Extended::Finite(20), Extended::Finite(10), true, true),
			Err(RangeError::DecreasingBounds {
				start: "20".to_string(),
				end: "10".to_string(),
			})
		);
		assert_eq!(
			Range::new(Extended::Finite(5), Extended::Finite(5), false, false),
			Err(RangeError::EmptyExclusiveBounds {
				value: "5".to_string(),
			})
		);
		assert_eq!(
			Range::new(Extended::PosInfinity, Extended::Finite(5), true, true),
			Err(RangeError::DecreasingBounds {
				start: "PosInfinity".to_string(),
				end: "Finite(5)".to_string(),
			})
		);
		// equal bounds with one inclusive side construct fine
		assert!(
			Range::new(Extended::Finite(5), Extended::Finite(5), false, true)
				.is_ok()
		);
	}

	#[test]
	fn infinite_bounds_are_canonically_exclusive() {
		let range = Range::<i8>::new(
			Extended::NegInfinity,
			Extended::PosInfinity,
			true,
			true,
		)
		.unwrap();
		assert_eq!(range.start_inclusive(), false);
		assert_eq!(range.end_inclusive(), false);
	}

	#[test]
	fn structural_predicate_tests() {
		assert_eq!(ii(5, 5).is_empty(), false);
		assert_eq!(ei(5, 5).is_empty(), true);
		assert_eq!(ie(5, 5).is_empty(), true);
		assert_eq!(uu::<i8>().is_empty(), false);

		assert_eq!(ii(5, 6).is_bounded(), true);
		assert_eq!(iu(5).is_bounded(), false);
		assert_eq!(iu(5).is_unbounded(), true);
		assert_eq!(iu(5).is_infinite(), false);
		assert_eq!(uu::<i8>().is_infinite(), true);
	}

	#[test]
	fn contains_tests() {
		assert_eq!(ie(10, 20).contains(&10), true);
		assert_eq!(ee(10, 20).contains(&10), false);
		assert_eq!(ie(10, 20).contains(&20), false);
		assert_eq!(ii(10, 20).contains(&20), true);
		assert_eq!(ui(20).contains(&i8::MIN), true);
		assert_eq!(iu(10).contains(&i8::MAX), true);
		assert_eq!(uu::<i8>().contains(&0), true);
	}

	#[test]
	fn contains_range_tests() {
		assert_eq!(ii(10, 20).contains_range(&ei(10, 20)), true);
		assert_eq!(ei(10, 20).contains_range(&ii(10, 20)), false);
		assert_eq!(uu::<i8>().contains_range(&ii(10, 20)), true);
		assert_eq!(ii(10, 20).contains_range(&uu()), false);
		assert_eq!(iu(10).contains_range(&ii(10, 100)), true);
	}

	#[test]
	fn overlap_tie_break_tests() {
		// equal touching values overlap only when both touching bounds
		// are inclusive
		assert_eq!(ii(10, 20).overlaps(&ii(20, 30)), true);
		assert_eq!(ie(10, 20).overlaps(&ii(20, 30)), false);
		assert_eq!(ii(10, 20).overlaps(&ei(20, 30)), false);
		assert_eq!(ie(10, 20).overlaps(&ei(20, 30)), false);
		// an infinite deciding bound always overlaps
		assert_eq!(iu(10).overlaps(&ii(50, 60)), true);
		assert_eq!(uu::<i8>().overlaps(&uu()), true);
	}

	#[test]
	fn before_after_tests() {
		assert_eq!(ii(10, 19).is_before(&ii(20, 30)), true);
		assert_eq!(ie(10, 20).is_before(&ii(20, 30)), true);
		assert_eq!(ii(10, 20).is_before(&ii(20, 30)), false);
		assert_eq!(iu(10).is_before(&ii(20, 30)), false);
		assert_eq!(ii(20, 30).is_after(&ie(10, 20)), true);
	}

	#[test]
	fn adjacency_tests() {
		assert_eq!(ie(10, 20).is_adjacent(&ii(20, 30)), true);
		assert_eq!(ii(10, 20).is_adjacent(&ei(20, 30)), true);
		assert_eq!(ii(10, 20).is_adjacent(&ii(20, 30)), false);
		assert_eq!(ie(10, 20).is_adjacent(&ei(20, 30)), false);
		// symmetric
		assert_eq!(ii(20, 30).is_adjacent(&ie(10, 20)), true);
		// never across an infinite bound
		assert_eq!(ue(20).is_adjacent(&ii(20, 30)), true);
		assert_eq!(iu(10).is_adjacent(&uu()), false);
	}

	#[test]
	fn adjacency_and_overlap_are_mutually_exclusive() {
		for a in all_test_ranges() {
			for b in all_test_ranges() {
				assert!(
					!(a.is_adjacent(&b) && a.overlaps(&b)),
					"{a:?} and {b:?} both adjacent and overlapping"
				);
			}
		}
	}

	#[test]
	fn intersect_tests() {
		assert_eq!(ii(10, 20).intersect(&ii(15, 25)), Some(ii(15, 20)));
		assert_eq!(ii(10, 20).intersect(&ii(25, 30)), None);
		assert_eq!(ii(10, 20).intersect(&uu()), Some(ii(10, 20)));
		// tie on both sides takes the AND of the inclusivities
		assert_eq!(ii(10, 20).intersect(&ee(10, 20)), Some(ee(10, 20)));
		assert_eq!(ie(10, 20).intersect(&ei(10, 20)), Some(ee(10, 20)));
		// single shared point
		assert_eq!(ii(10, 20).intersect(&ii(20, 30)), Some(ii(20, 20)));
	}

	#[test]
	fn union_tests() {
		assert_eq!(ii(10, 20).union(&ii(15, 25)), Some(ii(10, 25)));
		assert_eq!(ii(10, 20).union(&ii(25, 30)), None);
		// adjacency unions too
		assert_eq!(ie(10, 20).union(&ii(20, 30)), Some(ii(10, 30)));
		// tie takes the OR of the inclusivities
		assert_eq!(ie(10, 20).union(&ei(10, 20)), Some(ii(10, 20)));
		assert_eq!(iu(10).union(&ii(15, 20)), Some(iu(10)));
	}

	#[test]
	fn except_truncates_one_side() {
		assert_eq!(ii(10, 20).except(&ii(15, 25)).collect::<Vec<_>>(), [ie(
			10, 15
		)]);
		assert_eq!(ii(10, 20).except(&ii(5, 15)).collect::<Vec<_>>(), [ei(
			15, 20
		)]);
	}

	#[test]
	fn except_splits_on_proper_sub_interval() {
		assert_eq!(ii(10, 30).except(&ie(15, 25)).collect::<Vec<_>>(), [
			ie(10, 15),
			ii(25, 30)
		]);
		assert_eq!(ii(10, 30).except(&ee(15, 25)).collect::<Vec<_>>(), [
			ii(10, 15),
			ii(25, 30)
		]);
	}

	#[test]
	fn except_covered_yields_nothing() {
		assert_eq!(ii(10, 20).except(&ii(0, 100)).count(), 0);
		assert_eq!(ii(10, 20).except(&ii(10, 20)).count(), 0);
		assert_eq!(ii(10, 20).except(&uu()).count(), 0);
	}

	#[test]
	fn except_disjoint_survives_whole() {
		assert_eq!(
			ii(10, 20).except(&ii(30, 40)).collect::<Vec<_>>(),
			[ii(10, 20)]
		);
	}

	#[test]
	fn except_degenerate_single_point() {
		// the single surviving point comes out as a fully inclusive
		// single-point range
		assert_eq!(ii(10, 20).except(&ei(10, 25)).collect::<Vec<_>>(), [ii(
			10, 10
		)]);
		assert_eq!(ii(10, 20).except(&ie(5, 20)).collect::<Vec<_>>(), [ii(
			20, 20
		)]);
		// and does not survive when the base excludes it as well
		assert_eq!(ei(10, 20).except(&ei(10, 25)).count(), 0);
	}

	#[test]
	fn except_with_infinite_base() {
		assert_eq!(uu::<i8>().except(&ii(10, 20)).collect::<Vec<_>>(), [
			ue(10),
			eu(20)
		]);
		assert_eq!(iu(10).except(&iu(15)).collect::<Vec<_>>(), [ie(10, 15)]);
	}

	#[test]
	fn except_completeness() {
		// leftovers plus the intersection reconstruct the base exactly
		for a in all_test_ranges() {
			for b in all_test_ranges() {
				let Some(overlap) = a.intersect(&b) else {
					continue;
				};
				let mut pieces: Vec<Range<i8>> = a.except(&b).collect();
				pieces.push(overlap);
				let mut rebuilt = pieces.pop().unwrap();
				// union the pieces back together in whichever order
				// they merge
				let mut remaining = pieces;
				while !remaining.is_empty() {
					let i = remaining
						.iter()
						.position(|piece| {
							rebuilt.overlaps(piece)
								|| rebuilt.is_adjacent(piece)
						})
						.unwrap_or_else(|| {
							panic!("pieces of {a:?} \\ {b:?} do not rejoin")
						});
					rebuilt = rebuilt.union(&remaining.remove(i)).unwrap();
				}
				assert_eq!(rebuilt, a, "rebuilding {a:?} from cut by {b:?}");
			}
		}
	}
}
