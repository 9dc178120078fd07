//! A module containing the canonical text form of [`Range`]:
//! `<open><start>, <end><close>` with `[`/`(` and `]`/`)` per bound
//! inclusivity and `-∞`/`∞` for infinite bounds.
//!
//! [`Display`] renders the form and [`FromStr`] parses it back; the two
//! round-trip exactly for every bracket combination. Infinite bounds
//! always render with the exclusive bracket, though the parser accepts
//! either bracket next to an infinity.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::error::ParseRangeError;
use crate::extended::Extended;
use crate::range::{PointType, Range};

impl<T> Display for Range<T>
where
	T: PointType + Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = if self.start_inclusive() { '[' } else { '(' };
		let close = if self.end_inclusive() { ']' } else { ')' };
		write!(f, "{open}{}, {}{close}", self.start(), self.end())
	}
}

/// The states of the bracket-value-separator-value-bracket parser, in
/// the order the text walks through them.
enum ParseState {
	OpenBracket,
	StartValue,
	EndValue,
	Done,
}

impl<T> FromStr for Range<T>
where
	T: PointType + FromStr,
{
	type Err = ParseRangeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut state = ParseState::OpenBracket;
		let mut start_inclusive = false;
		let mut end_inclusive = false;
		let mut start_text = String::new();
		let mut end_text = String::new();

		for c in s.chars() {
			state = match state {
				ParseState::OpenBracket => match c {
					'[' => {
						start_inclusive = true;
						ParseState::StartValue
					}
					'(' => ParseState::StartValue,
					_ => return Err(ParseRangeError::MissingOpenBracket),
				},
				ParseState::StartValue => {
					if c == ',' {
						ParseState::EndValue
					} else {
						start_text.push(c);
						ParseState::StartValue
					}
				}
				ParseState::EndValue => match c {
					']' => {
						end_inclusive = true;
						ParseState::Done
					}
					')' => ParseState::Done,
					_ => {
						end_text.push(c);
						ParseState::EndValue
					}
				},
				// trailing characters after the close bracket
				ParseState::Done => {
					return Err(ParseRangeError::MissingCloseBracket);
				}
			};
		}

		match state {
			ParseState::Done => {}
			ParseState::EndValue => {
				return Err(ParseRangeError::MissingCloseBracket);
			}
			_ => return Err(ParseRangeError::MissingSeparator),
		}

		let start = parse_bound(start_text.trim())?;
		let end = parse_bound(end_text.trim())?;
		Ok(Range::new(start, end, start_inclusive, end_inclusive)?)
	}
}

fn parse_bound<T>(text: &str) -> Result<Extended<T>, ParseRangeError>
where
	T: FromStr,
{
	match text {
		"-∞" => Ok(Extended::NegInfinity),
		"∞" | "+∞" => Ok(Extended::PosInfinity),
		_ => match text.parse() {
			Ok(value) => Ok(Extended::Finite(value)),
			Err(_) => Err(ParseRangeError::InvalidValue {
				text: text.to_string(),
			}),
		},
	}
}
