//! PMV store crate: named boxed values for policy evaluation
//!
//! Providers publish facts of many different types; the store keeps them
//! side by side as `BoxedValue`s under string names and can dump their text
//! forms for tracing.

pub use pmv_core::{BoxedValue, PmvConfig, PmvError, PmvResult, ValuePrinter};

pub mod store;

pub use store::{VariableStore, EMPTY_LABEL};
