//! Ordered type-pair keys.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a mapping by its destination and source types.
///
/// The pair is ordered: the key for "`A` into `B`" differs from the key for
/// "`B` into `A`". Only the [`TypeId`]s take part in equality and hashing;
/// the type names are carried along for diagnostics.
///
/// # Example
///
/// ```rust
/// use convey_core::TypePairKey;
///
/// struct Dto;
/// struct Entity;
///
/// let key = TypePairKey::of::<Dto, Entity>();
/// assert_ne!(key, TypePairKey::of::<Entity, Dto>());
/// ```
#[derive(Clone, Copy)]
pub struct TypePairKey {
    destination: TypeId,
    source: TypeId,
    destination_name: &'static str,
    source_name: &'static str,
}

impl TypePairKey {
    /// Key for converting an `S` into a `D`.
    pub fn of<D: 'static, S: 'static>() -> Self {
        Self {
            destination: TypeId::of::<D>(),
            source: TypeId::of::<S>(),
            destination_name: type_name::<D>(),
            source_name: type_name::<S>(),
        }
    }

    /// The destination type id.
    pub fn destination(&self) -> TypeId {
        self.destination
    }

    /// The source type id.
    pub fn source(&self) -> TypeId {
        self.source
    }

    /// The destination type name.
    pub fn destination_name(&self) -> &'static str {
        self.destination_name
    }

    /// The source type name.
    pub fn source_name(&self) -> &'static str {
        self.source_name
    }

    /// The key for the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            destination: self.source,
            source: self.destination,
            destination_name: self.source_name,
            source_name: self.destination_name,
        }
    }
}

impl PartialEq for TypePairKey {
    fn eq(&self, other: &Self) -> bool {
        self.destination == other.destination && self.source == other.source
    }
}

impl Eq for TypePairKey {}

impl Hash for TypePairKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.destination.hash(state);
        self.source.hash(state);
    }
}

impl fmt::Debug for TypePairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePairKey")
            .field("destination", &self.destination_name)
            .field("source", &self.source_name)
            .finish()
    }
}

impl fmt::Display for TypePairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` -> `{}`", self.source_name, self.destination_name)
    }
}
