//! # Type-Erased Converters
//!
//! The registry stores every mapper behind one object-safe interface,
//! [`ErasedConverter`], regardless of its real source and destination types.
//! [`TypedConverter`] bridges a strongly typed closure into that interface;
//! [`FnConverter`] wraps a closure that already speaks the erased signature.
//!
//! Only the registry's convert path downcasts the erased output back to the
//! destination type, so callers never see a `dyn Any`.

use crate::{
    args::Args,
    error::{BoxError, ConvertError},
    value::Value,
};
use std::any::{Any, type_name};
use std::marker::PhantomData;

/// A boxed, type-erased value travelling through the registry.
pub type AnyValue = Box<dyn Any + Send>;

/// Type-erased conversion interface.
///
/// Implementations receive the source value as [`AnyValue`] and must return
/// the destination value boxed the same way.
pub trait ErasedConverter: Send + Sync {
    /// Convert a type-erased value.
    fn convert_erased(&self, value: AnyValue, args: &Args) -> Result<AnyValue, ConvertError>;
}

/// Wrapper implementing [`ErasedConverter`] for a typed mapper.
///
/// The mapper has the shape `Fn(S, &Args) -> Result<D, E>`; the source is
/// downcast on the way in and the result boxed on the way out.
pub struct TypedConverter<D, S, F, E> {
    func: F,
    _phantom: PhantomData<fn(S) -> Result<D, E>>,
}

impl<D, S, F, E> TypedConverter<D, S, F, E>
where
    F: Fn(S, &Args) -> Result<D, E>,
{
    /// Create a new wrapper around a typed mapper.
    pub const fn new(func: F) -> Self {
        Self {
            func,
            _phantom: PhantomData,
        }
    }
}

impl<D, S, F, E> ErasedConverter for TypedConverter<D, S, F, E>
where
    D: Value,
    S: Value,
    F: Fn(S, &Args) -> Result<D, E> + Send + Sync,
    E: Into<BoxError>,
{
    fn convert_erased(&self, value: AnyValue, args: &Args) -> Result<AnyValue, ConvertError> {
        let value = value
            .downcast::<S>()
            .map_err(|_| ConvertError::WrongSourceType {
                expected: type_name::<S>(),
            })?;
        let converted =
            (self.func)(*value, args).map_err(|err| ConvertError::from_mapper(err.into()))?;
        Ok(Box::new(converted))
    }
}

/// Wrapper implementing [`ErasedConverter`] for an untyped closure.
///
/// Nothing checks what the closure returns until the registry downcasts it.
pub struct FnConverter<F>(F);

impl<F> FnConverter<F>
where
    F: Fn(AnyValue, &Args) -> Result<AnyValue, ConvertError> + Send + Sync,
{
    /// Wrap an erased closure.
    pub const fn new(func: F) -> Self {
        Self(func)
    }
}

impl<F> ErasedConverter for FnConverter<F>
where
    F: Fn(AnyValue, &Args) -> Result<AnyValue, ConvertError> + Send + Sync,
{
    fn convert_erased(&self, value: AnyValue, args: &Args) -> Result<AnyValue, ConvertError> {
        (self.0)(value, args)
    }
}
