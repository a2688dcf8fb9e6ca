//! Value Printers
//!
//! `ValuePrinter` is the formatter half of a boxed payload's dispatch table.
//! Each payload type has exactly one implementation, chosen at compile time;
//! there is no fallback for types that do not implement it.

pub mod time;

use std::collections::BTreeSet;

pub use time::{format_duration, format_system_time, format_time, format_time_delta};

/// Canonical text form of a payload type.
///
/// Implementations may read private state that the type does not otherwise
/// expose, since the output is meant for traces and debugging.
pub trait ValuePrinter {
    fn print_value(&self) -> String;
}

macro_rules! display_printer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValuePrinter for $ty {
                fn print_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

// Booleans print as `true`/`false` and integers as plain decimal. Floats use
// the shortest representation that round-trips and never switch to exponent
// notation.
display_printer!(bool);
display_printer!(i8, i16, i32, i64, i128, isize);
display_printer!(u8, u16, u32, u64, u128, usize);
display_printer!(f32, f64);
display_printer!(String, &'static str);

/// Members in ascending order, comma-joined.
impl<T: ValuePrinter> ValuePrinter for BTreeSet<T> {
    fn print_value(&self) -> String {
        self.iter()
            .map(ValuePrinter::print_value)
            .collect::<Vec<_>>()
            .join(",")
    }
}
