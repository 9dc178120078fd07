//! A module containing the fixed-step calendar domains over
//! [`NaiveDate`] and [`NaiveDateTime`], one small strategy type per
//! granularity.
//!
//! Distances count whole steps between the floors of the two inputs, so
//! `Months.distance(2024-04-20, 2024-01-15)` is `-3` even though the
//! day-of-month runs the other way. `Months` and `Years` drive chrono's
//! month-stepping primitive, which is narrower than an `i64` step count;
//! offsets outside its range are rejected with
//! [`DomainError::OffsetOutOfRange`]. Rounding near the edges of the
//! representable calendar saturates instead of panicking.

use chrono::{
	Datelike, Days as DaySpan, Months as MonthSpan, NaiveDate, NaiveDateTime,
	TimeDelta, Timelike,
};

use crate::error::DomainError;

use super::Domain;

fn add_days(value: NaiveDate, count: i64) -> Result<NaiveDate, DomainError> {
	let stepped = if count >= 0 {
		value.checked_add_days(DaySpan::new(count as u64))
	} else {
		value.checked_sub_days(DaySpan::new(count.unsigned_abs()))
	};
	stepped.ok_or(DomainError::ValueOutOfRange { param: "count" })
}

fn add_months(value: NaiveDate, months: i32) -> Result<NaiveDate, DomainError> {
	let stepped = if months >= 0 {
		value.checked_add_months(MonthSpan::new(months as u32))
	} else {
		value.checked_sub_months(MonthSpan::new(months.unsigned_abs()))
	};
	stepped.ok_or(DomainError::ValueOutOfRange { param: "count" })
}

fn first_of_month(value: NaiveDate) -> NaiveDate {
	value.with_day(1).expect("day 1 exists in every month")
}

/// The one-day domain over [`NaiveDate`]. Every date is on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Days;

impl Domain<NaiveDate> for Days {
	fn add(&self, value: NaiveDate, count: i64) -> Result<NaiveDate, DomainError> {
		add_days(value, count)
	}

	fn subtract(
		&self,
		value: NaiveDate,
		count: i64,
	) -> Result<NaiveDate, DomainError> {
		let stepped = if count >= 0 {
			value.checked_sub_days(DaySpan::new(count as u64))
		} else {
			value.checked_add_days(DaySpan::new(count.unsigned_abs()))
		};
		stepped.ok_or(DomainError::ValueOutOfRange { param: "count" })
	}

	fn distance(&self, from: NaiveDate, to: NaiveDate) -> i64 {
		to.signed_duration_since(from).num_days()
	}

	fn floor(&self, value: NaiveDate) -> NaiveDate {
		value
	}

	fn ceiling(&self, value: NaiveDate) -> NaiveDate {
		value
	}
}

/// The one-week domain over [`NaiveDate`], aligned to Mondays.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rangekit::domain::calendar::Weeks;
/// use rangekit::Domain;
///
/// let wed = NaiveDate::from_ymd_opt(2024, 4, 17).unwrap();
/// let mon = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
///
/// assert_eq!(Weeks.floor(wed), mon);
/// assert_eq!(Weeks.ceiling(mon), mon);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Weeks;

impl Domain<NaiveDate> for Weeks {
	fn add(&self, value: NaiveDate, count: i64) -> Result<NaiveDate, DomainError> {
		let days = count.checked_mul(7).ok_or(DomainError::OffsetOutOfRange {
			param: "count",
			min: i64::MIN / 7,
			max: i64::MAX / 7,
			value: count,
		})?;
		add_days(value, days)
	}

	fn subtract(
		&self,
		value: NaiveDate,
		count: i64,
	) -> Result<NaiveDate, DomainError> {
		let days = count.checked_mul(-7).ok_or(DomainError::OffsetOutOfRange {
			param: "count",
			min: i64::MIN / 7,
			max: i64::MAX / 7,
			value: count,
		})?;
		add_days(value, days)
	}

	fn distance(&self, from: NaiveDate, to: NaiveDate) -> i64 {
		self.floor(to)
			.signed_duration_since(self.floor(from))
			.num_days() / 7
	}

	fn floor(&self, value: NaiveDate) -> NaiveDate {
		let offset = value.weekday().num_days_from_monday() as u64;
		// saturates at the calendar's lower edge
		value.checked_sub_days(DaySpan::new(offset)).unwrap_or(value)
	}

	fn ceiling(&self, value: NaiveDate) -> NaiveDate {
		let floored = self.floor(value);
		if floored == value {
			value
		} else {
			floored
				.checked_add_days(DaySpan::new(7))
				.unwrap_or(value)
		}
	}
}

/// The one-month domain over [`NaiveDate`], aligned to the first of the
/// month.
///
/// The step count is driven by chrono's month primitive and must fit an
/// `i32`; offsets outside that range are rejected with an error naming
/// the parameter, the valid bounds and the received value.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rangekit::domain::calendar::Months;
/// use rangekit::Domain;
///
/// let apr = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
/// let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
///
/// assert_eq!(Months.distance(jan, apr), 3);
/// assert_eq!(Months.distance(apr, jan), -3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Months;

fn month_count(count: i64) -> Result<i32, DomainError> {
	i32::try_from(count).map_err(|_| DomainError::OffsetOutOfRange {
		param: "count",
		min: i32::MIN as i64,
		max: i32::MAX as i64,
		value: count,
	})
}

impl Domain<NaiveDate> for Months {
	fn add(&self, value: NaiveDate, count: i64) -> Result<NaiveDate, DomainError> {
		add_months(value, month_count(count)?)
	}

	fn subtract(
		&self,
		value: NaiveDate,
		count: i64,
	) -> Result<NaiveDate, DomainError> {
		let months = month_count(count)?;
		// i32::MIN months cannot be negated in place, step the long way
		if months == i32::MIN {
			return add_months(add_months(value, i32::MAX)?, 1);
		}
		add_months(value, -months)
	}

	fn distance(&self, from: NaiveDate, to: NaiveDate) -> i64 {
		let (from, to) = (self.floor(from), self.floor(to));
		(to.year() as i64 - from.year() as i64) * 12
			+ (to.month() as i64 - from.month() as i64)
	}

	fn floor(&self, value: NaiveDate) -> NaiveDate {
		first_of_month(value)
	}

	fn ceiling(&self, value: NaiveDate) -> NaiveDate {
		let floored = self.floor(value);
		if floored == value {
			value
		} else {
			floored
				.checked_add_months(MonthSpan::new(1))
				.unwrap_or(value)
		}
	}
}

/// The one-year domain over [`NaiveDate`], aligned to January 1st.
///
/// Like [`Months`] this drives chrono's month primitive, so the step
/// count must fit `i32::MIN / 12 ..= i32::MAX / 12`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Years;

fn year_count(count: i64) -> Result<i32, DomainError> {
	let bounds = (i32::MIN as i64 / 12)..=(i32::MAX as i64 / 12);
	if bounds.contains(&count) {
		Ok((count * 12) as i32)
	} else {
		Err(DomainError::OffsetOutOfRange {
			param: "count",
			min: *bounds.start(),
			max: *bounds.end(),
			value: count,
		})
	}
}

impl Domain<NaiveDate> for Years {
	fn add(&self, value: NaiveDate, count: i64) -> Result<NaiveDate, DomainError> {
		add_months(value, year_count(count)?)
	}

	fn subtract(
		&self,
		value: NaiveDate,
		count: i64,
	) -> Result<NaiveDate, DomainError> {
		add_months(value, -year_count(count)?)
	}

	fn distance(&self, from: NaiveDate, to: NaiveDate) -> i64 {
		to.year() as i64 - from.year() as i64
	}

	fn floor(&self, value: NaiveDate) -> NaiveDate {
		first_of_month(value)
			.with_month(1)
			.expect("January exists in every year")
	}

	fn ceiling(&self, value: NaiveDate) -> NaiveDate {
		let floored = self.floor(value);
		if floored == value {
			value
		} else {
			floored
				.checked_add_months(MonthSpan::new(12))
				.unwrap_or(value)
		}
	}
}

macro_rules! time_domain {
	($name:ident, $doc:literal, $truncate:expr, $try_delta:expr, $num_steps:expr,) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
		pub struct $name;

		impl Domain<NaiveDateTime> for $name {
			fn add(
				&self,
				value: NaiveDateTime,
				count: i64,
			) -> Result<NaiveDateTime, DomainError> {
				let delta: TimeDelta = $try_delta(count).ok_or(
					DomainError::OffsetOutOfRange {
						param: "count",
						min: $num_steps(TimeDelta::MIN),
						max: $num_steps(TimeDelta::MAX),
						value: count,
					},
				)?;
				value
					.checked_add_signed(delta)
					.ok_or(DomainError::ValueOutOfRange { param: "count" })
			}

			fn subtract(
				&self,
				value: NaiveDateTime,
				count: i64,
			) -> Result<NaiveDateTime, DomainError> {
				let delta: TimeDelta = $try_delta(count).ok_or(
					DomainError::OffsetOutOfRange {
						param: "count",
						min: $num_steps(TimeDelta::MIN),
						max: $num_steps(TimeDelta::MAX),
						value: count,
					},
				)?;
				value
					.checked_sub_signed(delta)
					.ok_or(DomainError::ValueOutOfRange { param: "count" })
			}

			fn distance(&self, from: NaiveDateTime, to: NaiveDateTime) -> i64 {
				$num_steps(
					self.floor(to).signed_duration_since(self.floor(from)),
				)
			}

			fn floor(&self, value: NaiveDateTime) -> NaiveDateTime {
				$truncate(value)
			}

			fn ceiling(&self, value: NaiveDateTime) -> NaiveDateTime {
				let floored = self.floor(value);
				if floored == value {
					value
				} else {
					$try_delta(1)
						.and_then(|delta| floored.checked_add_signed(delta))
						.unwrap_or(value)
				}
			}
		}
	};
}

time_domain!(
	Hours,
	"The one-hour domain over [`NaiveDateTime`], aligned to the whole hour.",
	|value: NaiveDateTime| {
		value
			.with_nanosecond(0)
			.and_then(|v| v.with_second(0))
			.and_then(|v| v.with_minute(0))
			.expect("zeroed time components are always valid")
	},
	TimeDelta::try_hours,
	|delta: TimeDelta| delta.num_hours(),
);

time_domain!(
	Minutes,
	"The one-minute domain over [`NaiveDateTime`], aligned to the whole minute.",
	|value: NaiveDateTime| {
		value
			.with_nanosecond(0)
			.and_then(|v| v.with_second(0))
			.expect("zeroed time components are always valid")
	},
	TimeDelta::try_minutes,
	|delta: TimeDelta| delta.num_minutes(),
);

time_domain!(
	Seconds,
	"The one-second domain over [`NaiveDateTime`], aligned to the whole second.",
	|value: NaiveDateTime| {
		value
			.with_nanosecond(0)
			.expect("a zeroed nanosecond is always valid")
	},
	TimeDelta::try_seconds,
	|delta: TimeDelta| delta.num_seconds(),
);

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn month_distance_is_signed() {
		assert_eq!(Months.distance(date(2024, 1, 15), date(2024, 4, 20)), 3);
		assert_eq!(Months.distance(date(2024, 4, 20), date(2024, 1, 15)), -3);
		assert_eq!(Months.distance(date(2023, 11, 1), date(2024, 2, 1)), 3);
		assert_eq!(Months.distance(date(2024, 4, 1), date(2024, 4, 30)), 0);
	}

	#[test]
	fn month_add_clamps_to_month_end() {
		assert_eq!(Months.add(date(2024, 1, 31), 1), Ok(date(2024, 2, 29)));
		assert_eq!(Months.subtract(date(2024, 3, 31), 1), Ok(date(2024, 2, 29)));
	}

	#[test]
	fn month_offset_guard() {
		assert_eq!(
			Months.add(date(2024, 1, 1), i32::MAX as i64 + 1),
			Err(DomainError::OffsetOutOfRange {
				param: "count",
				min: i32::MIN as i64,
				max: i32::MAX as i64,
				value: i32::MAX as i64 + 1,
			})
		);
		assert_eq!(
			Years.add(date(2024, 1, 1), i64::MAX),
			Err(DomainError::OffsetOutOfRange {
				param: "count",
				min: i32::MIN as i64 / 12,
				max: i32::MAX as i64 / 12,
				value: i64::MAX,
			})
		);
	}

	#[test]
	fn floor_ceiling_idempotence() {
		let d = date(2024, 4, 17);
		for domain in [&Months as &dyn Domain<NaiveDate>, &Years, &Weeks] {
			assert_eq!(domain.floor(domain.floor(d)), domain.floor(d));
			assert_eq!(domain.ceiling(domain.ceiling(d)), domain.ceiling(d));
		}
	}

	#[test]
	fn week_floor_is_monday() {
		// 2024-04-17 is a Wednesday
		assert_eq!(Weeks.floor(date(2024, 4, 17)), date(2024, 4, 15));
		assert_eq!(Weeks.floor(date(2024, 4, 15)), date(2024, 4, 15));
		assert_eq!(Weeks.ceiling(date(2024, 4, 17)), date(2024, 4, 22));
		assert_eq!(Weeks.distance(date(2024, 4, 17), date(2024, 4, 23)), 1);
		assert_eq!(Weeks.distance(date(2024, 4, 23), date(2024, 4, 17)), -1);
	}

	#[test]
	fn day_arithmetic() {
		assert_eq!(Days.add(date(2024, 2, 28), 2), Ok(date(2024, 3, 1)));
		assert_eq!(Days.distance(date(2024, 1, 1), date(2024, 12, 31)), 365);
		assert_eq!(Days.distance(date(2024, 12, 31), date(2024, 1, 1)), -365);
	}

	#[test]
	fn year_floor_and_distance() {
		assert_eq!(Years.floor(date(2024, 4, 17)), date(2024, 1, 1));
		assert_eq!(Years.distance(date(2024, 12, 31), date(2025, 1, 1)), 1);
		assert_eq!(Years.add(date(2024, 2, 29), 1), Ok(date(2025, 2, 28)));
	}

	#[test]
	fn time_of_day_granularities() {
		let t = date(2024, 4, 17).and_hms_opt(13, 45, 30).unwrap();
		assert_eq!(
			Hours.floor(t),
			date(2024, 4, 17).and_hms_opt(13, 0, 0).unwrap()
		);
		assert_eq!(
			Hours.ceiling(t),
			date(2024, 4, 17).and_hms_opt(14, 0, 0).unwrap()
		);
		assert_eq!(
			Minutes.floor(t),
			date(2024, 4, 17).and_hms_opt(13, 45, 0).unwrap()
		);
		assert_eq!(Seconds.floor(t), t);

		let later = date(2024, 4, 17).and_hms_opt(16, 10, 0).unwrap();
		assert_eq!(Hours.distance(t, later), 3);
		assert_eq!(Hours.distance(later, t), -3);
		assert_eq!(Minutes.distance(t, later), 145);
		assert_eq!(Hours.add(t, 2), Ok(t + TimeDelta::hours(2)));
	}
}
