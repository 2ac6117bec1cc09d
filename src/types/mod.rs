//! Scalar types for the vendor's nonstandard JSON conventions.

mod boolean;
mod datetime;
mod decimal;
mod localized;

pub use boolean::Bool;
pub use datetime::{Date, DateTime, DATE_PATTERN, DATE_TIME_PATTERN, EMPTY_DATE, EMPTY_DATE_TIME};
pub use decimal::{Decimal, DecimalLike};
pub use localized::LocalizedString;

/// Language used when the caller does not pick one.
pub const DEFAULT_LANG: &str = "eng";
