//! The `Registry` struct: registration, resolution and the lock around both.

use crate::core::{Binding, BuildFn, ErasedHandle, Registration, Table, Tables};
use crate::deps::{Construct, Dependencies};
use crate::error::{Error, Result};
use crate::interface::Interface;
use crate::key::TypeKey;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The Inversion of Control (IoC) container.
///
/// A `Registry` maps service types to the strategy used to produce them: a
/// fixed instance, a factory that builds a fresh value on every resolution, or
/// an interface binding that forwards to another registered type. It is an
/// ordinary value owned by the caller; build one in your composition root and
/// pass it to whatever needs to resolve services.
///
/// All operations take `&self` and are serialized by a re-entrant lock that is
/// held for the whole of each call, including the recursive resolution of a
/// factory's dependencies on the same thread. Resolving a deep graph therefore
/// blocks other threads until it completes.
#[derive(Default)]
pub struct Registry {
  tables: ReentrantMutex<RefCell<Tables>>,
}

impl Registry {
  /// Creates a new, empty `Registry`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- PRIVATE HELPERS ---

  fn insert_into<R>(&self, key: TypeKey, table: Table, insert: impl FnOnce(&mut Tables) -> R) {
    let guard = self.tables.lock();
    let mut tables = guard.borrow_mut();
    let shadowing = tables.other_tables_holding(&key, table);
    let displaced = insert(&mut *tables);
    // Release the borrow before anything that may call back into the registry:
    // subscribers observing the events below, or `Drop` of the replaced entry.
    drop(tables);

    if !shadowing.is_empty() {
      let held_in: Vec<&str> = shadowing.iter().map(|t| t.name()).collect();
      warn!(
        service = %key,
        table = table.name(),
        ?held_in,
        "service is registered under more than one strategy; instances win over factories, factories over bindings"
      );
    }
    debug!(service = %key, table = table.name(), "registered service");

    drop(displaced);
  }

  fn misbound<I: ?Sized + 'static>(source: Error) -> Error {
    Error::MisboundInterface {
      interface: TypeKey::of::<I>(),
      source: Box::new(source),
    }
  }

  // --- Instance Registration ---

  /// Stores an already constructed object. Every resolution of `T` returns a
  /// clone of this handle.
  pub fn register_instance<T: ?Sized + Send + Sync + 'static>(&self, instance: Arc<T>) -> &Self {
    let key = TypeKey::of::<T>();
    self.insert_into(key, Table::Instances, |tables| {
      tables.insert_instance(key, ErasedHandle::new(instance))
    });
    self
  }

  // --- Factory Registration ---

  /// Registers `T` as transient: each resolution resolves the dependency
  /// tuple `D` and builds a new `T` through [`Construct`].
  pub fn register_class<T, D>(&self) -> &Self
  where
    T: Construct<D> + Send + Sync + 'static,
    D: Dependencies,
  {
    self.register_factory::<T, D>(T::construct)
  }

  /// Registers `T` as transient, built by `ctor` from the resolved dependency
  /// tuple `D`.
  pub fn register_factory<T, D>(&self, ctor: impl Fn(D) -> T + Send + Sync + 'static) -> &Self
  where
    T: Send + Sync + 'static,
    D: Dependencies,
  {
    let key = TypeKey::of::<T>();
    let build: BuildFn = Arc::new(move |registry: &Registry| {
      let deps = D::resolve_all(registry)?;
      Ok(ErasedHandle::new(Arc::new(ctor(deps))))
    });
    self.insert_into(key, Table::Factories, |tables| tables.insert_factory(key, build));
    self
  }

  // --- Singleton Registration ---

  /// Resolves `D` right away, constructs one `T` and stores it as an
  /// instance.
  ///
  /// Fails without registering anything if a dependency cannot be resolved.
  pub fn register_singleton<T, D>(&self) -> Result<&Self>
  where
    T: Construct<D> + Send + Sync + 'static,
    D: Dependencies,
  {
    self.register_singleton_with::<T, D>(T::construct)
  }

  /// Like [`register_singleton`](Self::register_singleton), with an explicit
  /// constructor.
  pub fn register_singleton_with<T, D>(&self, ctor: impl FnOnce(D) -> T) -> Result<&Self>
  where
    T: Send + Sync + 'static,
    D: Dependencies,
  {
    let _guard = self.tables.lock();
    let deps = D::resolve_all(self)?;
    Ok(self.register_instance(Arc::new(ctor(deps))))
  }

  // --- Interface Registration ---

  /// Binds interface `I` to implementation `C`.
  ///
  /// The binding is lazy: `C` only has to be registered by the time `I` is
  /// resolved. Each resolution of `I` resolves `C` again, so `I` is a
  /// singleton exactly when `C` is.
  pub fn register_interface<I, C>(&self) -> &Self
  where
    I: ?Sized + Interface<C>,
    C: ?Sized + Send + Sync + 'static,
  {
    let key = TypeKey::of::<I>();
    let bind: BuildFn = Arc::new(|registry: &Registry| {
      let concrete = registry.resolve::<C>().map_err(Self::misbound::<I>)?;
      Ok(ErasedHandle::new(I::upcast(concrete)))
    });
    let binding = Binding {
      implementation: TypeKey::of::<C>(),
      bind,
    };
    self.insert_into(key, Table::Bindings, |tables| tables.insert_binding(key, binding));
    self
  }

  /// Resolves `C` right away and stores it as the instance for `I`.
  ///
  /// Unlike [`register_interface`](Self::register_interface), the object is
  /// fixed from now on even if `C` is registered as a factory.
  pub fn register_singleton_interface<I, C>(&self) -> Result<&Self>
  where
    I: ?Sized + Interface<C>,
    C: ?Sized + Send + Sync + 'static,
  {
    let _guard = self.tables.lock();
    let concrete = self.resolve::<C>().map_err(Self::misbound::<I>)?;
    Ok(self.register_instance::<I>(I::upcast(concrete)))
  }

  // --- Resolution ---

  /// Resolves a service from the registry.
  ///
  /// Checks the instance table, then the factory table, then the interface
  /// bindings. Factory and binding paths resolve their own dependencies
  /// recursively before constructing anything.
  pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
    let key = TypeKey::of::<T>();
    let guard = self.tables.lock();
    let registration = guard.borrow().lookup(&key);

    match registration {
      Some(Registration::FixedInstance(handle)) => {
        trace!(service = %key, "resolved from instances");
        handle.downcast::<T>()
      }
      Some(Registration::Factory(build)) => {
        trace!(service = %key, "building from factory");
        build(self)?.downcast::<T>()
      }
      Some(Registration::InterfaceBinding(binding)) => {
        trace!(service = %key, implementation = %binding.implementation, "resolving through binding");
        (binding.bind)(self)?.downcast::<T>()
      }
      None => {
        debug!(service = %key, "no registration found");
        Err(Error::Unregistered { key })
      }
    }
  }

  /// Resolves a service, discarding the reason it could not be produced.
  pub fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
    self.resolve::<T>().ok()
  }

  /// Whether `T` has an entry in any table.
  pub fn contains<T: ?Sized + 'static>(&self) -> bool {
    self.tables.lock().borrow().contains(&TypeKey::of::<T>())
  }
}
