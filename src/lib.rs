//! This crate provides a boundary-aware interval algebra over any
//! totally ordered value and [`RangeData`], a container that keeps a
//! data sequence in lock-step with a range's logical length.
//!
//! There are three layers:
//!
//! - [`Range`] is an interval over [`Extended`] values, where each
//!   bound is independently inclusive or exclusive and may be infinite.
//!   Ranges support the usual interval algebra: overlap, adjacency,
//!   containment, intersection, union and subtraction, all of which
//!   resolve shared-boundary ties from the bound inclusivities alone.
//! - [`Domain`] is a strategy trait describing how to step through,
//!   measure and round values of a point type. The crate ships
//!   fixed-step numeric domains ([`domain::numeric`]), calendar and
//!   time-of-day granularities over [`chrono`] types
//!   ([`domain::calendar`]) and a variable-step business-day domain
//!   ([`domain::business`]). A range never stores a domain, so one
//!   range can be reinterpreted under several.
//! - [`RangeData`] binds a finite range and a domain to a data
//!   sequence holding one element per enclosed step, and provides
//!   point lookup, sub-range slicing, trims and right-biased
//!   union/intersection.
//!
//! ## Example using an integer range
//!
//! ```rust
//! use rangekit::domain::numeric::Unit;
//! use rangekit::interval::ii;
//! use rangekit::RangeData;
//!
//! let april = RangeData::new(ii(1_i64, 10), Unit, 1..=10).unwrap();
//! let revised = RangeData::new(ii(8_i64, 12), Unit, [80, 90, 100, 110, 120])
//! 	.unwrap();
//!
//! // on shared points the right operand's data wins
//! let merged = april.union(&revised).unwrap().unwrap();
//! assert_eq!(merged.range(), &ii(1, 12));
//! assert_eq!(merged.get(&7), Some(&7));
//! assert_eq!(merged.get(&8), Some(&80));
//! ```
//!
//! ## Example using a calendar domain
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rangekit::domain::calendar::Months;
//! use rangekit::interval::ii;
//! use rangekit::{Domain, RangeData};
//!
//! let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let jun = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! // one element per month, first half of 2024
//! let budget = RangeData::new(ii(jan, jun), Months, [10, 12, 9, 14, 11, 13])
//! 	.unwrap();
//!
//! let may = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
//! assert_eq!(budget.get(&Months.floor(may)), Some(&11));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Boundary inclusivity
//!
//! Both bounds of a [`Range`] carry their own inclusivity flag, and
//! every tie at a shared boundary value is resolved from those flags:
//! two ranges overlap on a shared boundary only when both touching
//! bounds are inclusive, an intersection keeps a shared bound inclusive
//! only when both operands do, a union keeps it inclusive when either
//! operand does, and two ranges are adjacent when they share a finite
//! boundary value with exactly one of the two touching bounds
//! inclusive.
//!
//! ### Invalid Ranges
//!
//! Not all bound combinations are considered valid ranges. A range is
//! valid when its start does not exceed its end, with one exception:
//! equal bounds are only valid when both are inclusive (a single-point
//! range), since equal bounds with any exclusive side would contain
//! nothing. Constructors reject invalid combinations instead of
//! producing them.
//!
//! | range            | valid |
//! | ---------------- | ----- |
//! | `[5, 10]`        | YES   |
//! | `[5, 5]`         | YES   |
//! | `(5, 5]`         | NO    |
//! | `[10, 5]`        | NO    |
//! | `[-∞, 5]`        | YES, canonicalized to `(-∞, 5]` |
//!
//! An infinite bound can never be attained, so construction
//! canonicalizes it to exclusive.
//!
//! ### Domains
//!
//! A *fixed-step* domain has uniform elementary steps and answers in
//! O(1); a *variable-step* domain restricts the valid points to a
//! non-uniform subset and walks elementary steps, costing O(n) in the
//! steps traversed. Both kinds honour the same contract: `floor` and
//! `ceiling` are idempotent, `distance` is antisymmetric, and `add`
//! inverts `distance` on grid-aligned values.
//!
//! ### Alignment
//!
//! A [`RangeData`] holds exactly one element per domain step its range
//! encloses: the domain distance between the bound values plus one,
//! minus one per exclusive bound. The binary operations preserve this
//! invariant themselves; [`RangeData::validate`] rechecks it on demand
//! for data that arrived from outside.

#![allow(clippy::tabs_in_doc_comments)]

pub mod domain;
pub mod error;
pub mod extended;
pub mod interval;
mod parse;
pub mod range;
pub mod range_data;

pub use crate::domain::Domain;
pub use crate::extended::Extended;
pub use crate::range::{PointType, Range};
pub use crate::range_data::RangeData;
