use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Static description of a Rust type, returned by `element_type` and
/// `momentum_type`.
///
/// Equality and hashing only consider the [`TypeId`]; the name is kept for
/// diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Describes the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the described type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the compiler-provided name of the described type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` when the descriptor describes `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_compare_by_type() {
        assert_eq!(TypeDescriptor::of::<f64>(), TypeDescriptor::of::<f64>());
        assert_ne!(TypeDescriptor::of::<f64>(), TypeDescriptor::of::<f32>());
        assert!(TypeDescriptor::of::<Vec<u8>>().is::<Vec<u8>>());
        assert!(TypeDescriptor::of::<u8>().name().contains("u8"));
    }
}
