//! A module containing [`BusinessDays`], the variable-step calendar
//! domain over [`NaiveDate`] that skips weekends and configured
//! holidays.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::DomainError;

use super::Domain;

/// A variable-step domain over [`NaiveDate`] whose valid points are
/// business days: Monday through Friday, minus a configured holiday set.
///
/// The elementary step is one day; [`add`](Domain::add),
/// [`subtract`](Domain::subtract) and [`distance`](Domain::distance)
/// test every elementary increment against the validity predicate and
/// skip the invalid ones, so they cost O(n) in days traversed.
/// [`floor`](Domain::floor) and [`ceiling`](Domain::ceiling) only walk
/// to the nearest valid day. `distance` floors both inputs before
/// counting and stays antisymmetric.
///
/// The holiday set is read-only configuration; two `BusinessDays`
/// values compare equal exactly when their holiday sets do.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rangekit::domain::business::BusinessDays;
/// use rangekit::Domain;
///
/// let fri = NaiveDate::from_ymd_opt(2024, 4, 19).unwrap();
/// let mon = NaiveDate::from_ymd_opt(2024, 4, 22).unwrap();
///
/// assert_eq!(BusinessDays::new().add(fri, 1), Ok(mon));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessDays {
	holidays: BTreeSet<NaiveDate>,
}

impl BusinessDays {
	/// Creates a `BusinessDays` domain with no holidays: every weekday
	/// is valid.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a `BusinessDays` domain that additionally skips the
	/// given holidays.
	///
	/// # Examples
	/// ```
	/// use chrono::NaiveDate;
	/// use rangekit::domain::business::BusinessDays;
	/// use rangekit::Domain;
	///
	/// // 2024-05-01 is a Wednesday
	/// let mayday = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
	/// let domain = BusinessDays::with_holidays([mayday]);
	///
	/// let tue = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
	/// let thu = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
	/// assert_eq!(domain.add(tue, 1), Ok(thu));
	/// ```
	pub fn with_holidays(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
		Self {
			holidays: holidays.into_iter().collect(),
		}
	}

	/// The validity predicate: `true` if the date is a weekday and not
	/// a configured holiday.
	pub fn is_valid(&self, value: NaiveDate) -> bool {
		!matches!(value.weekday(), Weekday::Sat | Weekday::Sun)
			&& !self.holidays.contains(&value)
	}
}

impl Domain<NaiveDate> for BusinessDays {
	fn add(&self, value: NaiveDate, count: i64) -> Result<NaiveDate, DomainError> {
		let mut current = value;
		let mut remaining = count;
		while remaining > 0 {
			current = current
				.succ_opt()
				.ok_or(DomainError::ValueOutOfRange { param: "count" })?;
			if self.is_valid(current) {
				remaining -= 1;
			}
		}
		while remaining < 0 {
			current = current
				.pred_opt()
				.ok_or(DomainError::ValueOutOfRange { param: "count" })?;
			if self.is_valid(current) {
				remaining += 1;
			}
		}
		Ok(current)
	}

	fn subtract(
		&self,
		value: NaiveDate,
		count: i64,
	) -> Result<NaiveDate, DomainError> {
		let mut current = value;
		let mut remaining = count;
		while remaining > 0 {
			current = current
				.pred_opt()
				.ok_or(DomainError::ValueOutOfRange { param: "count" })?;
			if self.is_valid(current) {
				remaining -= 1;
			}
		}
		while remaining < 0 {
			current = current
				.succ_opt()
				.ok_or(DomainError::ValueOutOfRange { param: "count" })?;
			if self.is_valid(current) {
				remaining += 1;
			}
		}
		Ok(current)
	}

	fn distance(&self, from: NaiveDate, to: NaiveDate) -> i64 {
		let from = self.floor(from);
		let to = self.floor(to);
		let (mut current, target, sign) = if from <= to {
			(from, to, 1)
		} else {
			(to, from, -1)
		};
		let mut steps = 0;
		while current < target {
			current = current
				.succ_opt()
				.expect("current is below another valid date");
			if self.is_valid(current) {
				steps += 1;
			}
		}
		sign * steps
	}

	fn floor(&self, value: NaiveDate) -> NaiveDate {
		let mut current = value;
		while !self.is_valid(current) {
			match current.pred_opt() {
				Some(previous) => current = previous,
				// saturates at the calendar's lower edge
				None => return value,
			}
		}
		current
	}

	fn ceiling(&self, value: NaiveDate) -> NaiveDate {
		let mut current = value;
		while !self.is_valid(current) {
			match current.succ_opt() {
				Some(next) => current = next,
				None => return value,
			}
		}
		current
	}
}
