//! Boxed Value
//!
//! A type-erased, exclusively owning holder for any payload with a registered
//! printer. The box keeps only an opaque pointer and the payload type's
//! dispatch table; the static type is gone once construction returns.
//!
//! Ownership transfers with ordinary Rust moves. The explicit empty state
//! exists for containers and for the `take`/`assign` transfers, which leave
//! their source empty the way a moved-from holder is.

use std::any::TypeId;
use std::fmt;
use std::ptr::{self, NonNull};

use tracing::{trace, warn};

use super::dispatch::Dispatch;
use crate::error::{PmvError, PmvResult};
use crate::printer::ValuePrinter;

/// Erased payload pointer paired with the callbacks bound to its type.
struct Payload {
    data: NonNull<()>,
    dispatch: &'static Dispatch,
}

/// Type-erased owning box with per-type destruction and stringification.
///
/// ```
/// use pmv_core::BoxedValue;
///
/// let boxed = BoxedValue::new(42u64);
/// assert_eq!(boxed.to_string(), "42");
/// ```
#[derive(Default)]
pub struct BoxedValue {
    payload: Option<Payload>,
}

impl BoxedValue {
    /// Box an owned value. `T` must implement [`ValuePrinter`]; a type
    /// without a printer is rejected at compile time.
    pub fn new<T: ValuePrinter + 'static>(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Take ownership of an already heap-allocated value.
    pub fn from_box<T: ValuePrinter + 'static>(value: Box<T>) -> Self {
        let data = NonNull::from(Box::leak(value)).cast::<()>();
        BoxedValue {
            payload: Some(Payload {
                data,
                dispatch: Dispatch::of::<T>(),
            }),
        }
    }

    /// A box with no payload (the moved-from state).
    pub fn empty() -> Self {
        BoxedValue { payload: None }
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    pub fn has_value(&self) -> bool {
        self.payload.is_some()
    }

    /// Move the payload out into a new box, leaving `self` empty.
    pub fn take(&mut self) -> BoxedValue {
        BoxedValue {
            payload: self.payload.take(),
        }
    }

    /// Move-assign from `source`.
    ///
    /// The payload previously held by `self` is destroyed first, through its
    /// own destroyer. `source` is left empty.
    pub fn assign(&mut self, source: &mut BoxedValue) {
        self.release();
        self.payload = source.payload.take();
    }

    /// Destroy the payload now. Calling this on an empty box does nothing.
    pub fn release(&mut self) {
        if let Some(payload) = self.payload.take() {
            trace!(
                payload_type = (payload.dispatch.type_name)(),
                "destroying boxed value"
            );
            // SAFETY: `data` was produced by `Box::leak` for the type the
            // dispatch table was built for, and `take` above guarantees this
            // is the only release of it.
            unsafe { (payload.dispatch.drop)(payload.data) }
        }
    }

    /// Raw pointer to the payload, or null for an empty box. Ownership stays
    /// with the box; callers casting it must know the stored type.
    pub fn as_ptr(&self) -> *const () {
        match &self.payload {
            Some(payload) => payload.data.as_ptr() as *const (),
            None => ptr::null(),
        }
    }

    /// Checked typed access to the payload.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        let payload = self.payload.as_ref()?;
        if (payload.dispatch.type_id)() != TypeId::of::<T>() {
            return None;
        }
        // SAFETY: the type id matches the type the pointer was leaked as, and
        // the returned borrow is tied to `self`, which owns the payload.
        Some(unsafe { payload.data.cast::<T>().as_ref() })
    }

    /// Like [`downcast_ref`](Self::downcast_ref), with the reason for a miss.
    pub fn try_downcast_ref<T: 'static>(&self) -> PmvResult<&T> {
        let found = self.type_name().ok_or(PmvError::EmptyBox)?;
        self.downcast_ref::<T>().ok_or(PmvError::TypeMismatch {
            expected: std::any::type_name::<T>(),
            found,
        })
    }

    /// Name of the payload's concrete type, for diagnostics.
    pub fn type_name(&self) -> Option<&'static str> {
        self.payload
            .as_ref()
            .map(|payload| (payload.dispatch.type_name)())
    }

    /// Render the payload, failing on an empty box.
    pub fn try_to_string(&self) -> PmvResult<String> {
        self.render().ok_or(PmvError::EmptyBox)
    }

    fn render(&self) -> Option<String> {
        let payload = self.payload.as_ref()?;
        // SAFETY: the payload is live for as long as `self` holds it, and
        // `print` only reads through the pointer.
        Some(unsafe { (payload.dispatch.print)(payload.data) })
    }
}

impl Drop for BoxedValue {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Display for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(text) => f.write_str(&text),
            None => {
                warn!("formatting an empty boxed value");
                Ok(())
            }
        }
    }
}

impl fmt::Debug for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.type_name(), self.render()) {
            (Some(type_name), Some(text)) => f
                .debug_struct("BoxedValue")
                .field("type", &type_name)
                .field("value", &text)
                .finish(),
            _ => f.write_str("BoxedValue(<empty>)"),
        }
    }
}
