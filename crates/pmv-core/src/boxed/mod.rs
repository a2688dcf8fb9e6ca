pub(crate) mod dispatch;
pub mod value;

pub use value::BoxedValue;
