//! Payload Enumerations
//!
//! Network and updater state reported by providers and stored as boxed
//! values. Each enumeration has a fixed human-readable label per variant.

pub mod connection;
pub mod stage;

pub use connection::{ConnectionTethering, ConnectionType};
pub use stage::Stage;

/// Lowercase `name` and drop separators so that "Not Detected",
/// "not-detected" and "not_detected" compare equal.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | ','))
        .flat_map(char::to_lowercase)
        .collect()
}
