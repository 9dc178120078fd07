//! A module containing the error types returned by the fallible
//! operations of this crate, organized by subsystem: range construction,
//! extended-value access, domains, and range-aligned data.

use core::fmt;
use std::error::Error;

/// The error returned when constructing a range whose bounds violate the
/// range invariants.
///
/// Bound values are captured in their `Debug` rendering so the error can
/// stay independent of the point type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
	/// The `start` bound is greater than the `end` bound.
	DecreasingBounds {
		/// `Debug` rendering of the received start bound.
		start: String,
		/// `Debug` rendering of the received end bound.
		end: String,
	},
	/// Both bounds are equal and exclusive, which denotes no points.
	EmptyExclusiveBounds {
		/// `Debug` rendering of the shared bound value.
		value: String,
	},
}

impl fmt::Display for RangeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DecreasingBounds { start, end } => write!(
				f,
				"start must not be greater than end, received start: {start}, end: {end}"
			),
			Self::EmptyExclusiveBounds { value } => write!(
				f,
				"equal bounds require at least one inclusive side, received start: {value}, end: {value}, both exclusive"
			),
		}
	}
}

impl Error for RangeError {}

/// The error returned when reading the finite value of an infinite
/// [`Extended`](crate::Extended) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfiniteValueError {
	/// `true` for positive infinity, `false` for negative infinity.
	pub positive: bool,
}

impl fmt::Display for InfiniteValueError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let sign = if self.positive { "positive" } else { "negative" };
		write!(f, "value is {sign} infinity and has no finite value")
	}
}

impl Error for InfiniteValueError {}

/// Errors from [`Domain`](crate::Domain) step operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
	/// The step count lies outside the range representable by the
	/// domain's underlying step primitive.
	OffsetOutOfRange {
		/// Name of the offending parameter.
		param: &'static str,
		/// Smallest accepted step count.
		min: i64,
		/// Largest accepted step count.
		max: i64,
		/// The step count that was received.
		value: i64,
	},
	/// Applying the steps moved the value outside its representable
	/// range.
	ValueOutOfRange {
		/// Name of the offending parameter.
		param: &'static str,
	},
}

impl fmt::Display for DomainError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OffsetOutOfRange {
				param,
				min,
				max,
				value,
			} => write!(
				f,
				"parameter '{param}' must be in {min}..={max}, received {value}"
			),
			Self::ValueOutOfRange { param } => write!(
				f,
				"parameter '{param}' stepped outside the representable value range"
			),
		}
	}
}

impl Error for DomainError {}

/// Errors from [`RangeData`](crate::RangeData) construction and its
/// binary operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeDataError {
	/// The range given to a constructor is not finite on both ends.
	UnboundedRange {
		/// Name of the offending parameter.
		param: &'static str,
	},
	/// The two operands of a binary operation carry domains that are not
	/// value-equal.
	DomainMismatch,
}

impl fmt::Display for RangeDataError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnboundedRange { param } => write!(
				f,
				"parameter '{param}' must be a finite range on both ends"
			),
			Self::DomainMismatch => write!(
				f,
				"operands of a binary operation must use value-equal domains"
			),
		}
	}
}

impl Error for RangeDataError {}

/// The report produced when [`RangeData::validate`] finds the data
/// sequence out of step with the range's logical length.
///
/// [`RangeData::validate`]: crate::RangeData::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	/// The data sequence holds fewer elements than the range spans.
	TooShort {
		/// The logical length of the range.
		expected: usize,
		/// The number of elements actually present.
		actual: usize,
	},
	/// The data sequence holds more elements than the range spans. The
	/// walk stops at the first excess element, so only the lower bound
	/// is known.
	TooLong {
		/// The logical length of the range.
		expected: usize,
	},
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TooShort { expected, actual } => write!(
				f,
				"data holds {actual} elements but the range spans {expected}"
			),
			Self::TooLong { expected } => write!(
				f,
				"data holds more than the {expected} elements the range spans"
			),
		}
	}
}

impl Error for ValidationError {}

/// The error returned when parsing a range from its canonical text form
/// fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRangeError {
	/// The text does not begin with `[` or `(`.
	MissingOpenBracket,
	/// The text does not end with `]` or `)`.
	MissingCloseBracket,
	/// The text has no `,` separating the two bound values.
	MissingSeparator,
	/// A bound value failed to parse with the point type's parser.
	InvalidValue {
		/// The text of the bound that failed to parse.
		text: String,
	},
	/// Both bounds parsed but the resulting range is invalid.
	InvalidRange(RangeError),
}

impl fmt::Display for ParseRangeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingOpenBracket => {
				write!(f, "expected '[' or '(' at the start")
			}
			Self::MissingCloseBracket => {
				write!(f, "expected ']' or ')' at the end")
			}
			Self::MissingSeparator => {
				write!(f, "expected ', ' between the bound values")
			}
			Self::InvalidValue { text } => {
				write!(f, "could not parse bound value '{text}'")
			}
			Self::InvalidRange(inner) => inner.fmt(f),
		}
	}
}

impl Error for ParseRangeError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::InvalidRange(inner) => Some(inner),
			_ => None,
		}
	}
}

impl From<RangeError> for ParseRangeError {
	fn from(inner: RangeError) -> Self {
		Self::InvalidRange(inner)
	}
}
