//! Small, dependency-light helpers shared by the input crates.

pub mod locale;
pub mod number;

pub use locale::NumberLocale;
pub use number::{ParseNumberError, format_number, format_number_in, parse_number};
