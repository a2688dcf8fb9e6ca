//! Policy Manager Values - Core Library
//!
//! Public API surface for boxed policy values: the type-erased `BoxedValue`,
//! the `ValuePrinter` capability and the payload kinds shipped with it.

pub mod error;
pub mod config;
pub mod boxed;
pub mod printer;
pub mod types;
pub mod literal;

// Re-export commonly used types
pub use error::{PmvError, PmvResult};
pub use config::PmvConfig;
pub use boxed::BoxedValue;
pub use printer::ValuePrinter;
pub use types::{ConnectionTethering, ConnectionType, Stage};
pub use literal::{parse_literal, LiteralKind};
