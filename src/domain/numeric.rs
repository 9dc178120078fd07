//! A module containing the fixed-step numeric domains: [`Unit`] over the
//! primitive integer types and [`Grid`] over `f64`.

use crate::error::DomainError;

use super::Domain;

/// The unit-step domain over primitive integers: every value is on the
/// grid and one step is one.
///
/// All five operations are O(1). `distance` saturates at the `i64`
/// limits for spans wider than 2⁶³ steps.
///
/// # Examples
/// ```
/// use rangekit::domain::numeric::Unit;
/// use rangekit::Domain;
///
/// assert_eq!(Unit.add(250_u8, 5), Ok(255));
/// assert!(Unit.add(250_u8, 6).is_err());
/// assert_eq!(Unit.distance(20_i32, 10), -10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unit;

macro_rules! unit_domain {
	() => {};
	($t:ident, $($rest:tt)*) => {
		impl Domain<$t> for Unit {
			fn add(&self, value: $t, count: i64) -> Result<$t, DomainError> {
				let shifted = value as i128 + count as i128;
				<$t>::try_from(shifted)
					.map_err(|_| DomainError::ValueOutOfRange { param: "count" })
			}

			fn subtract(&self, value: $t, count: i64) -> Result<$t, DomainError> {
				let shifted = value as i128 - count as i128;
				<$t>::try_from(shifted)
					.map_err(|_| DomainError::ValueOutOfRange { param: "count" })
			}

			fn distance(&self, from: $t, to: $t) -> i64 {
				(to as i128 - from as i128)
					.clamp(i64::MIN as i128, i64::MAX as i128) as i64
			}

			fn floor(&self, value: $t) -> $t {
				value
			}

			fn ceiling(&self, value: $t) -> $t {
				value
			}
		}

		unit_domain!($($rest)*);
	};
}

unit_domain!(u8, i8, u16, i16, u32, i32, u64, i64,);

/// A fixed-step domain over `f64` whose grid points are the whole
/// multiples of a configurable step width.
///
/// All five operations are O(1). Values between grid points floor and
/// ceil to their neighbours; `distance` counts whole steps between the
/// floors of its inputs.
///
/// # Examples
/// ```
/// use rangekit::domain::numeric::Grid;
/// use rangekit::Domain;
///
/// let quarters = Grid::new(0.25);
///
/// assert_eq!(quarters.floor(1.1), 1.0);
/// assert_eq!(quarters.ceiling(1.1), 1.25);
/// assert_eq!(quarters.ceiling(1.25), 1.25);
/// assert_eq!(quarters.distance(0.0, 2.0), 8);
/// assert_eq!(quarters.add(1.0, 2), Ok(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
	step: f64,
}

impl Grid {
	/// Creates a new `Grid` with the given step width.
	///
	/// # Panics
	///
	/// Panics if `step` is not a positive finite number.
	pub fn new(step: f64) -> Self {
		assert!(
			step.is_finite() && step > 0.0,
			"step must be positive and finite, received {step}"
		);
		Self { step }
	}

	/// The step width of the grid.
	pub fn step(&self) -> f64 {
		self.step
	}
}

impl Domain<f64> for Grid {
	fn add(&self, value: f64, count: i64) -> Result<f64, DomainError> {
		let shifted = value + count as f64 * self.step;
		if shifted.is_finite() {
			Ok(shifted)
		} else {
			Err(DomainError::ValueOutOfRange { param: "count" })
		}
	}

	fn subtract(&self, value: f64, count: i64) -> Result<f64, DomainError> {
		let shifted = value - count as f64 * self.step;
		if shifted.is_finite() {
			Ok(shifted)
		} else {
			Err(DomainError::ValueOutOfRange { param: "count" })
		}
	}

	fn distance(&self, from: f64, to: f64) -> i64 {
		((self.floor(to) - self.floor(from)) / self.step).round() as i64
	}

	fn floor(&self, value: f64) -> f64 {
		// the division can land a hair off the integer it should hit,
		// so correct the quotient against the original value
		let mut q = (value / self.step).floor();
		if q * self.step > value {
			q -= 1.0;
		} else if (q + 1.0) * self.step <= value {
			q += 1.0;
		}
		q * self.step
	}

	fn ceiling(&self, value: f64) -> f64 {
		let mut q = (value / self.step).ceil();
		if q * self.step < value {
			q += 1.0;
		} else if (q - 1.0) * self.step >= value {
			q -= 1.0;
		}
		q * self.step
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn unit_add_subtract_tests() {
		assert_eq!(Unit.add(10_i32, 5), Ok(15));
		assert_eq!(Unit.add(10_i32, -5), Ok(5));
		assert_eq!(Unit.subtract(10_i32, 5), Ok(5));
		assert_eq!(Unit.subtract(10_i32, -5), Ok(15));
		assert_eq!(
			Unit.add(i32::MAX, 1),
			Err(DomainError::ValueOutOfRange { param: "count" })
		);
		assert_eq!(
			Unit.subtract(0_u8, 1),
			Err(DomainError::ValueOutOfRange { param: "count" })
		);
	}

	#[test]
	fn unit_add_inverts_distance() {
		for (from, to) in [(0_i64, 10), (10, 0), (-5, 5), (7, 7)] {
			assert_eq!(Unit.add(from, Unit.distance(from, to)), Ok(to));
		}
	}

	#[test]
	fn grid_snapping_tests() {
		let halves = Grid::new(0.5);
		assert_eq!(halves.floor(1.3), 1.0);
		assert_eq!(halves.ceiling(1.3), 1.5);
		assert_eq!(halves.floor(-0.3), -0.5);
		assert_eq!(halves.ceiling(-0.3), 0.0);
		// already aligned values stay put
		assert_eq!(halves.floor(1.5), 1.5);
		assert_eq!(halves.ceiling(1.5), 1.5);
	}

	#[test]
	fn grid_distance_tests() {
		let halves = Grid::new(0.5);
		assert_eq!(halves.distance(0.0, 3.0), 6);
		assert_eq!(halves.distance(3.0, 0.0), -6);
		// off-grid inputs floor before counting
		assert_eq!(halves.distance(0.2, 3.2), 6);
	}

	proptest! {
		#[test]
		fn unit_distance_antisymmetric(a in -1_000_000_i64..1_000_000, b in -1_000_000_i64..1_000_000) {
			prop_assert_eq!(Unit.distance(a, b), -Unit.distance(b, a));
		}

		#[test]
		fn grid_floor_ceiling_idempotent(value in -1e9_f64..1e9, step in 0.001_f64..1000.0) {
			let grid = Grid::new(step);
			prop_assert_eq!(grid.floor(grid.floor(value)), grid.floor(value));
			prop_assert_eq!(
				grid.ceiling(grid.ceiling(value)),
				grid.ceiling(value)
			);
		}

		#[test]
		fn grid_distance_antisymmetric(
			a in -1e6_f64..1e6,
			b in -1e6_f64..1e6,
			step in 0.25_f64..100.0,
		) {
			let grid = Grid::new(step);
			prop_assert_eq!(grid.distance(a, b), -grid.distance(b, a));
		}
	}
}
