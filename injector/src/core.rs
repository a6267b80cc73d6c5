//! Core, non-public data structures for the registry.

use crate::error::{Error, Result};
use crate::key::TypeKey;
use crate::registry::Registry;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A shared handle whose concrete type is only known through its key.
///
/// Holds an `Arc<T>` behind `dyn Any`, so `T` may itself be unsized.
#[derive(Clone)]
pub(crate) struct ErasedHandle(Arc<dyn Any + Send + Sync>);

impl ErasedHandle {
  pub(crate) fn new<T: ?Sized + Send + Sync + 'static>(handle: Arc<T>) -> Self {
    Self(Arc::new(handle))
  }

  /// Checked unwrap back to the typed handle.
  pub(crate) fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
    self
      .0
      .downcast_ref::<Arc<T>>()
      .cloned()
      .ok_or(Error::TypeMismatch {
        key: TypeKey::of::<T>(),
      })
  }
}

/// Builds a value for a key, resolving whatever it depends on from the registry.
pub(crate) type BuildFn = Arc<dyn Fn(&Registry) -> Result<ErasedHandle> + Send + Sync>;

#[derive(Clone)]
pub(crate) struct Binding {
  pub(crate) implementation: TypeKey,
  pub(crate) bind: BuildFn,
}

/// The strategy recorded for a key, as selected by [`Tables::lookup`].
pub(crate) enum Registration {
  FixedInstance(ErasedHandle),
  Factory(BuildFn),
  InterfaceBinding(Binding),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Table {
  Instances,
  Factories,
  Bindings,
}

impl Table {
  pub(crate) fn name(self) -> &'static str {
    match self {
      Table::Instances => "instances",
      Table::Factories => "factories",
      Table::Bindings => "bindings",
    }
  }
}

#[derive(Default)]
pub(crate) struct Tables {
  instances: HashMap<TypeKey, ErasedHandle>,
  factories: HashMap<TypeKey, BuildFn>,
  bindings: HashMap<TypeKey, Binding>,
}

impl Tables {
  // The insert helpers hand back the displaced entry so the caller can drop
  // it after releasing its borrow of the tables.

  pub(crate) fn insert_instance(&mut self, key: TypeKey, handle: ErasedHandle) -> Option<ErasedHandle> {
    self.instances.insert(key, handle)
  }

  pub(crate) fn insert_factory(&mut self, key: TypeKey, build: BuildFn) -> Option<BuildFn> {
    self.factories.insert(key, build)
  }

  pub(crate) fn insert_binding(&mut self, key: TypeKey, binding: Binding) -> Option<Binding> {
    self.bindings.insert(key, binding)
  }

  /// Finds the registration for `key`, checking instances, then factories,
  /// then bindings. The returned value is a cheap clone so callers can run
  /// it without borrowing the tables.
  pub(crate) fn lookup(&self, key: &TypeKey) -> Option<Registration> {
    if let Some(handle) = self.instances.get(key) {
      return Some(Registration::FixedInstance(handle.clone()));
    }
    if let Some(build) = self.factories.get(key) {
      return Some(Registration::Factory(build.clone()));
    }
    self
      .bindings
      .get(key)
      .map(|binding| Registration::InterfaceBinding(binding.clone()))
  }

  /// Tables other than `except` that also hold `key`.
  pub(crate) fn other_tables_holding(&self, key: &TypeKey, except: Table) -> Vec<Table> {
    [Table::Instances, Table::Factories, Table::Bindings]
      .into_iter()
      .filter(|table| *table != except && self.holds(*table, key))
      .collect()
  }

  pub(crate) fn contains(&self, key: &TypeKey) -> bool {
    self.instances.contains_key(key)
      || self.factories.contains_key(key)
      || self.bindings.contains_key(key)
  }

  fn holds(&self, table: Table, key: &TypeKey) -> bool {
    match table {
      Table::Instances => self.instances.contains_key(key),
      Table::Factories => self.factories.contains_key(key),
      Table::Bindings => self.bindings.contains_key(key),
    }
  }
}
