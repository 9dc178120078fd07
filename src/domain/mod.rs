//! A module containing the [`Domain`] strategy trait and the domain
//! implementations shipped with this crate.
//!
//! A domain describes how to step through, measure distance in, and
//! round values of a point type. Domains are small independent strategy
//! values, implemented once per (value type, granularity) pair and
//! passed to every operation that needs them as a call argument — a
//! [`Range`](crate::Range) never stores one, so the same range can be
//! reinterpreted under multiple domains.
//!
//! ## Fixed-step and variable-step domains
//!
//! A *fixed-step* domain has elementary steps of equal width and runs
//! all five operations in O(1): [`numeric::Unit`], [`numeric::Grid`] and
//! the [`calendar`] granularities. A *variable-step* domain restricts
//! the valid points to a non-uniform subset of an underlying continuum,
//! such as [`business::BusinessDays`]; its `add`, `subtract` and
//! `distance` walk elementary steps one at a time and cost O(n) in the
//! steps traversed, while `floor` and `ceiling` only have to reach the
//! nearest valid point.

pub mod business;
pub mod calendar;
pub mod numeric;

use crate::error::DomainError;

/// The strategy contract for stepping through, measuring distance in,
/// and rounding values of a point type.
///
/// # Contract
///
/// Implementations must uphold, for all grid-aligned `x`, `y` and all
/// `a`, `b`:
///
/// - `floor` and `ceiling` are idempotent:
///   `floor(floor(a)) == floor(a)` and the same for `ceiling`;
/// - `distance` is antisymmetric: `distance(a, b) == -distance(b, a)`;
/// - `add` inverts `distance`: `add(x, distance(x, y)) == Ok(y)`.
///
/// Domains are expected to be stateless or read-only configuration, and
/// thus freely shareable; binary [`RangeData`](crate::RangeData)
/// operations value-compare their two domain operands before doing any
/// work.
///
/// # Examples
/// ```
/// use rangekit::domain::numeric::Unit;
/// use rangekit::Domain;
///
/// assert_eq!(Unit.add(10_i64, 5), Ok(15));
/// assert_eq!(Unit.distance(15_i64, 10), -5);
/// assert_eq!(Unit.floor(10_i64), 10);
/// ```
pub trait Domain<T> {
	/// Moves `value` forward by `count` steps (backward when negative).
	///
	/// # Errors
	///
	/// Returns a [`DomainError`] if `count` is not representable by the
	/// domain's step primitive or the result falls outside `T`'s range.
	fn add(&self, value: T, count: i64) -> Result<T, DomainError>;

	/// Moves `value` backward by `count` steps (forward when negative).
	///
	/// # Errors
	///
	/// Returns a [`DomainError`] under the same conditions as
	/// [`add`](Domain::add).
	fn subtract(&self, value: T, count: i64) -> Result<T, DomainError>;

	/// The signed number of whole steps from `from` to `to`, counted
	/// between the floors of the two values. Negative when `to`
	/// precedes `from`.
	fn distance(&self, from: T, to: T) -> i64;

	/// The greatest grid-aligned value not above `value`. Idempotent.
	fn floor(&self, value: T) -> T;

	/// The smallest grid-aligned value not below `value`. Idempotent,
	/// and the identity on values already equal to their floor.
	fn ceiling(&self, value: T) -> T;
}
