//! Type identity used as the registry's map key.

use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies one logical service type inside a [`Registry`](crate::Registry).
///
/// Built from [`TypeId`], so two keys for the same type are equal across every
/// call site and crate in the process. The type name is carried along for error
/// messages only and takes no part in equality or hashing.
#[derive(Clone, Copy)]
pub struct TypeKey {
  id: TypeId,
  name: &'static str,
}

impl TypeKey {
  /// Returns the key for `T`. Works for trait objects as well as sized types.
  pub fn of<T: ?Sized + 'static>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: any::type_name::<T>(),
    }
  }

  /// The human-readable type name this key was created from.
  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.name)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  trait Marker {}
  struct Concrete;

  #[test]
  fn test_same_type_yields_equal_keys() {
    assert_eq!(TypeKey::of::<Concrete>(), TypeKey::of::<Concrete>());
    assert_eq!(TypeKey::of::<dyn Marker>(), TypeKey::of::<dyn Marker>());
  }

  #[test]
  fn test_distinct_types_yield_distinct_keys() {
    let keys: HashSet<TypeKey> = [
      TypeKey::of::<Concrete>(),
      TypeKey::of::<dyn Marker>(),
      TypeKey::of::<String>(),
      TypeKey::of::<&'static str>(),
      TypeKey::of::<Vec<u8>>(),
      TypeKey::of::<Vec<u16>>(),
    ]
    .into_iter()
    .collect();

    assert_eq!(keys.len(), 6);
  }

  #[test]
  fn test_key_formats_with_type_name() {
    let key = TypeKey::of::<Concrete>();
    assert!(key.name().ends_with("Concrete"));
    assert_eq!(key.to_string(), key.name());
    assert_eq!(format!("{:?}", key), format!("TypeKey({})", key.name()));
  }
}
