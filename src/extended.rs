//! A module containing [`Extended`], a value extended with positive and
//! negative infinity.

use core::cmp::Ordering;
use core::fmt;

use crate::error::InfiniteValueError;

/// A value of `T` extended with positive and negative infinity.
///
/// The ordering is total whenever `T`'s ordering is:
/// `NegInfinity < Finite(_) < PosInfinity`, equal-kind infinities compare
/// equal and finite values compare with `T`'s own ordering.
///
/// # Examples
/// ```
/// use rangekit::Extended;
///
/// assert!(Extended::NegInfinity < Extended::Finite(i64::MIN));
/// assert!(Extended::Finite(i64::MAX) < Extended::PosInfinity);
/// assert_eq!(Extended::<u8>::PosInfinity, Extended::PosInfinity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extended<T> {
	/// Below every finite value.
	NegInfinity,
	/// A finite value of `T`.
	Finite(T),
	/// Above every finite value.
	PosInfinity,
}

impl<T> Extended<T> {
	/// Returns `true` if the value is [`Extended::Finite`].
	pub fn is_finite(&self) -> bool {
		matches!(self, Extended::Finite(_))
	}

	/// Returns `true` if the value is either infinity.
	pub fn is_infinite(&self) -> bool {
		!self.is_finite()
	}

	/// Returns the finite value, if there is one.
	///
	/// # Examples
	/// ```
	/// use rangekit::Extended;
	///
	/// assert_eq!(Extended::Finite(5).finite(), Some(&5));
	/// assert_eq!(Extended::<u8>::PosInfinity.finite(), None);
	/// ```
	pub fn finite(&self) -> Option<&T> {
		match self {
			Extended::Finite(value) => Some(value),
			_ => None,
		}
	}

	/// Consumes the value and returns the finite inner value.
	///
	/// # Errors
	///
	/// Returns an [`InfiniteValueError`] if the value is either infinity.
	///
	/// # Examples
	/// ```
	/// use rangekit::Extended;
	///
	/// assert_eq!(Extended::Finite(5).into_finite(), Ok(5));
	/// assert!(Extended::<u8>::NegInfinity.into_finite().is_err());
	/// ```
	pub fn into_finite(self) -> Result<T, InfiniteValueError> {
		match self {
			Extended::Finite(value) => Ok(value),
			Extended::NegInfinity => Err(InfiniteValueError { positive: false }),
			Extended::PosInfinity => Err(InfiniteValueError { positive: true }),
		}
	}
}

impl<T> From<T> for Extended<T> {
	fn from(value: T) -> Self {
		Extended::Finite(value)
	}
}

impl<T> PartialOrd for Extended<T>
where
	T: PartialOrd,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Extended::Finite(a), Extended::Finite(b)) => a.partial_cmp(b),
			(Extended::NegInfinity, Extended::NegInfinity) => {
				Some(Ordering::Equal)
			}
			(Extended::PosInfinity, Extended::PosInfinity) => {
				Some(Ordering::Equal)
			}
			(Extended::NegInfinity, _) | (_, Extended::PosInfinity) => {
				Some(Ordering::Less)
			}
			(Extended::PosInfinity, _) | (_, Extended::NegInfinity) => {
				Some(Ordering::Greater)
			}
		}
	}
}

impl<T> Ord for Extended<T>
where
	T: Ord,
{
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Extended::Finite(a), Extended::Finite(b)) => a.cmp(b),
			(Extended::NegInfinity, Extended::NegInfinity) => Ordering::Equal,
			(Extended::PosInfinity, Extended::PosInfinity) => Ordering::Equal,
			(Extended::NegInfinity, _) | (_, Extended::PosInfinity) => {
				Ordering::Less
			}
			(Extended::PosInfinity, _) | (_, Extended::NegInfinity) => {
				Ordering::Greater
			}
		}
	}
}

impl<T> fmt::Display for Extended<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Extended::NegInfinity => write!(f, "-∞"),
			Extended::Finite(value) => value.fmt(f),
			Extended::PosInfinity => write!(f, "∞"),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn ordering_tests() {
		let values = [
			Extended::NegInfinity,
			Extended::Finite(i32::MIN),
			Extended::Finite(-1),
			Extended::Finite(0),
			Extended::Finite(i32::MAX),
			Extended::PosInfinity,
		];
		for (i, a) in values.iter().enumerate() {
			for (j, b) in values.iter().enumerate() {
				assert_eq!(a.cmp(b), i.cmp(&j), "{a:?} vs {b:?}");
			}
		}
	}

	#[test]
	fn equal_kind_infinities_compare_equal() {
		assert_eq!(Extended::<i32>::NegInfinity, Extended::NegInfinity);
		assert_eq!(Extended::<i32>::PosInfinity, Extended::PosInfinity);
		assert!(Extended::<i32>::NegInfinity < Extended::PosInfinity);
	}

	#[test]
	fn extraction_tests() {
		assert_eq!(Extended::Finite(7).finite(), Some(&7));
		assert_eq!(Extended::<i32>::PosInfinity.finite(), None);
		assert_eq!(Extended::Finite(7).into_finite(), Ok(7));
		assert_eq!(
			Extended::<i32>::PosInfinity.into_finite(),
			Err(InfiniteValueError { positive: true })
		);
		assert_eq!(
			Extended::<i32>::NegInfinity.into_finite(),
			Err(InfiniteValueError { positive: false })
		);
	}

	#[test]
	fn display_tests() {
		assert_eq!(Extended::Finite(42).to_string(), "42");
		assert_eq!(Extended::<i32>::NegInfinity.to_string(), "-∞");
		assert_eq!(Extended::<i32>::PosInfinity.to_string(), "∞");
	}
}
