//! Value trait for mapped types.

use std::any::Any;

/// A marker trait for the source and destination types of a mapping.
///
/// Values cross the registry's type-erased storage as `Box<dyn Any + Send>`,
/// so they must be `Send + 'static`. Every such type is a `Value`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be mapped by the registry",
    label = "must be `Send + 'static`",
    note = "Mapped types are boxed as `dyn Any + Send` inside the registry."
)]
pub trait Value: Any + Send + 'static {}

impl<T: Any + Send + 'static> Value for T {}
