//! Declaring what a service needs in order to be constructed.
//!
//! A service's dependencies are written as a tuple of handles, for example
//! `(Arc<dyn FileSystem>, Arc<dyn Notifier>)`. The registry resolves each
//! element in order and hands the filled tuple to the service's constructor.

use crate::error::Result;
use crate::registry::Registry;
use std::sync::Arc;

/// A single value that can be produced by resolving it from a registry.
pub trait Dependency: Sized {
  fn resolve_from(registry: &Registry) -> Result<Self>;
}

impl<T: ?Sized + Send + Sync + 'static> Dependency for Arc<T> {
  fn resolve_from(registry: &Registry) -> Result<Self> {
    registry.resolve::<T>()
  }
}

/// An ordered list of dependencies.
///
/// Implemented for `()` and for tuples of up to twelve [`Dependency`] values.
/// Elements are resolved strictly left to right and resolution stops at the
/// first failure.
pub trait Dependencies: Sized + 'static {
  fn resolve_all(registry: &Registry) -> Result<Self>;
}

impl Dependencies for () {
  fn resolve_all(_registry: &Registry) -> Result<Self> {
    Ok(())
  }
}

macro_rules! impl_dependencies {
  ($($dep:ident),+) => {
    impl<$($dep: Dependency + 'static),+> Dependencies for ($($dep,)+) {
      fn resolve_all(registry: &Registry) -> Result<Self> {
        // Tuple expressions evaluate their operands in source order.
        Ok(($($dep::resolve_from(registry)?,)+))
      }
    }
  };
}

impl_dependencies!(A);
impl_dependencies!(A, B);
impl_dependencies!(A, B, C);
impl_dependencies!(A, B, C, D);
impl_dependencies!(A, B, C, D, E);
impl_dependencies!(A, B, C, D, E, F);
impl_dependencies!(A, B, C, D, E, F, G);
impl_dependencies!(A, B, C, D, E, F, G, H);
impl_dependencies!(A, B, C, D, E, F, G, H, I);
impl_dependencies!(A, B, C, D, E, F, G, H, I, J);
impl_dependencies!(A, B, C, D, E, F, G, H, I, J, K);
impl_dependencies!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Builds a service from its resolved dependencies.
///
/// This is the constructor the registry calls for
/// [`register_class`](Registry::register_class) and
/// [`register_singleton`](Registry::register_singleton).
///
/// ```
/// use fibre_injector::{Construct, Registry};
/// use std::sync::Arc;
///
/// struct Clock;
/// impl Construct<()> for Clock {
///   fn construct(_: ()) -> Self {
///     Clock
///   }
/// }
///
/// struct Scheduler {
///   clock: Arc<Clock>,
/// }
/// impl Construct<(Arc<Clock>,)> for Scheduler {
///   fn construct((clock,): (Arc<Clock>,)) -> Self {
///     Scheduler { clock }
///   }
/// }
///
/// let registry = Registry::new();
/// registry
///   .register_class::<Clock, ()>()
///   .register_class::<Scheduler, (Arc<Clock>,)>();
///
/// let scheduler = registry.resolve::<Scheduler>().unwrap();
/// # let _ = &scheduler.clock;
/// ```
pub trait Construct<D: Dependencies>: Sized {
  fn construct(deps: D) -> Self;
}
