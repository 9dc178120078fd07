//! A module containing the short constructor functions for [`Range`],
//! used throughout the examples and tests of this crate and available to
//! library users who want terse range literals.
//!
//! The two-letter names spell out the two bounds in order: `i` for
//! included, `e` for excluded, `u` for unbounded. So `ie(1, 5)` is
//! `[1, 5)` and `ui(5)` is `(-∞, 5]`.

use crate::extended::Extended;
use crate::range::{PointType, Range};

fn make<T>(
	start: Extended<T>,
	end: Extended<T>,
	start_inclusive: bool,
	end_inclusive: bool,
) -> Range<T>
where
	T: PointType,
{
	match Range::new(start, end, start_inclusive, end_inclusive) {
		Ok(range) => range,
		Err(error) => panic!("invalid range: {error}"),
	}
}

/// An included-included range: `[start, end]`.
///
/// # Panics
///
/// Panics if `start` is greater than `end`.
pub fn ii<T: PointType>(start: T, end: T) -> Range<T> {
	make(Extended::Finite(start), Extended::Finite(end), true, true)
}

/// An included-excluded range: `[start, end)`.
///
/// # Panics
///
/// Panics if `start` is greater than `end`.
pub fn ie<T: PointType>(start: T, end: T) -> Range<T> {
	make(Extended::Finite(start), Extended::Finite(end), true, false)
}

/// An excluded-included range: `(start, end]`.
///
/// # Panics
///
/// Panics if `start` is greater than `end`.
pub fn ei<T: PointType>(start: T, end: T) -> Range<T> {
	make(Extended::Finite(start), Extended::Finite(end), false, true)
}

/// An excluded-excluded range: `(start, end)`.
///
/// # Panics
///
/// Panics if `start` is not strictly less than `end`.
pub fn ee<T: PointType>(start: T, end: T) -> Range<T> {
	make(Extended::Finite(start), Extended::Finite(end), false, false)
}

/// An included-unbounded range: `[start, ∞)`.
pub fn iu<T: PointType>(start: T) -> Range<T> {
	make(Extended::Finite(start), Extended::PosInfinity, true, false)
}

/// An excluded-unbounded range: `(start, ∞)`.
pub fn eu<T: PointType>(start: T) -> Range<T> {
	make(Extended::Finite(start), Extended::PosInfinity, false, false)
}

/// An unbounded-included range: `(-∞, end]`.
pub fn ui<T: PointType>(end: T) -> Range<T> {
	make(Extended::NegInfinity, Extended::Finite(end), false, true)
}

/// An unbounded-excluded range: `(-∞, end)`.
pub fn ue<T: PointType>(end: T) -> Range<T> {
	make(Extended::NegInfinity, Extended::Finite(end), false, false)
}

/// An unbounded-unbounded range: `(-∞, ∞)`.
pub fn uu<T: PointType>() -> Range<T> {
	make(Extended::NegInfinity, Extended::PosInfinity, false, false)
}

/// A single-point range: `[value, value]`.
pub fn point<T: PointType>(value: T) -> Range<T> {
	make(Extended::Finite(value), Extended::Finite(value), true, true)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn constructor_bound_tests() {
		assert_eq!(ii(1, 5).start(), Extended::Finite(1));
		assert_eq!(ii(1, 5).start_inclusive(), true);
		assert_eq!(ie(1, 5).end_inclusive(), false);
		assert_eq!(ei(1, 5).start_inclusive(), false);
		assert_eq!(ui(5).start(), Extended::NegInfinity);
		assert_eq!(iu(5).end(), Extended::PosInfinity);
		assert_eq!(point(5), ii(5, 5));
	}

	#[test]
	#[should_panic(expected = "invalid range")]
	fn decreasing_bounds_panic() {
		ii(5, 1);
	}
}
