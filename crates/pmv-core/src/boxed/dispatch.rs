//! Per-type dispatch tables
//!
//! A `Dispatch` is resolved once per concrete payload type at the point the
//! type is still statically known. It carries the deletion and
//! stringification callbacks that later run against the erased pointer.

use std::any::TypeId;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::printer::ValuePrinter;

/// Type-bound callbacks stored alongside an erased payload pointer.
pub(crate) struct Dispatch {
    pub(crate) type_id: fn() -> TypeId,
    pub(crate) type_name: fn() -> &'static str,
    pub(crate) drop: unsafe fn(NonNull<()>),
    pub(crate) print: unsafe fn(NonNull<()>) -> String,
}

struct DispatchFor<T>(PhantomData<T>);

impl<T: ValuePrinter + 'static> DispatchFor<T> {
    const TABLE: Dispatch = Dispatch {
        type_id: TypeId::of::<T>,
        type_name: std::any::type_name::<T>,
        drop: drop_payload::<T>,
        print: print_payload::<T>,
    };
}

impl Dispatch {
    /// The table for `T`. Every call for the same `T` yields equivalent
    /// callbacks, so destroyer and formatter can never disagree.
    pub(crate) fn of<T: ValuePrinter + 'static>() -> &'static Dispatch {
        &DispatchFor::<T>::TABLE
    }
}

/// # Safety
/// `data` must come from `Box::<T>::leak` and must not be used afterwards.
unsafe fn drop_payload<T>(data: NonNull<()>) {
    drop(Box::from_raw(data.cast::<T>().as_ptr()));
}

/// # Safety
/// `data` must point to a live `T`.
unsafe fn print_payload<T: ValuePrinter>(data: NonNull<()>) -> String {
    data.cast::<T>().as_ref().print_value()
}
