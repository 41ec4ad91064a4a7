//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! cycle tracking domain.

mod calendar_date;
mod errors;
mod year_month;

pub use calendar_date::{CalendarDate, DATE_FORMAT};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use year_month::{month_name, YearMonth, DAY_NAMES, MONTH_NAMES};
