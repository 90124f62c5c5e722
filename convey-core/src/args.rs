//! Extra positional arguments handed to a mapper.

use crate::error::ConvertError;
use std::any::{Any, type_name};
use std::fmt;

/// An ordered list of untyped extra arguments.
///
/// Mappers receive `&Args` next to the source value and pick arguments out
/// by position and type.
///
/// # Example
///
/// ```rust
/// use convey_core::{Args, args};
///
/// let args = args![3u32, String::from("eur")];
/// assert_eq!(args.get::<u32>(0), Some(&3));
/// assert_eq!(args.get::<String>(1).map(String::as_str), Some("eur"));
/// assert!(args.get::<u32>(1).is_none());
/// ```
#[derive(Default)]
pub struct Args {
    items: Vec<Box<dyn Any + Send>>,
}

impl Args {
    /// An empty argument list.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an argument.
    pub fn push<T: Any + Send>(&mut self, value: T) {
        self.items.push(Box::new(value));
    }

    /// Append an argument, builder style.
    pub fn with<T: Any + Send>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The argument at `index`, if present and of type `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.items.get(index)?.downcast_ref::<T>()
    }

    /// Like [`get`](Self::get), but reports a [`ConvertError::MissingArgument`].
    ///
    /// Inside a fallible mapper the error can be propagated with `?`; the
    /// registry hands it back to the caller unchanged.
    pub fn require<T: Any>(&self, index: usize) -> Result<&T, ConvertError> {
        self.get::<T>(index).ok_or(ConvertError::MissingArgument {
            index,
            expected: type_name::<T>(),
        })
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.items.len()).finish()
    }
}

impl FromIterator<Box<dyn Any + Send>> for Args {
    fn from_iter<I: IntoIterator<Item = Box<dyn Any + Send>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Build an [`Args`] list from a sequence of expressions.
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::new()$(.with($value))+
    };
}
