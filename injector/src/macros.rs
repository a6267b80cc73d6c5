//! Public macros for fail-fast service resolution.

/// Resolves a service from a registry, panicking if it cannot be produced.
///
/// Intended for composition roots, where a missing registration is a wiring
/// bug that should stop the program at startup. The panic message names the
/// requested type and the full error chain. For a fallible version use
/// [`Registry::resolve`](crate::Registry::resolve) directly.
///
/// # Panics
///
/// Panics if the service, or anything it transitively depends on, is not
/// registered.
///
/// # Examples
///
/// ```
/// use fibre_injector::{interface, resolve, Registry};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///   fn greet(&self) -> String;
/// }
/// interface!(Greeter);
///
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter {
///   fn greet(&self) -> String {
///     "Hello!".to_string()
///   }
/// }
///
/// let registry = Registry::new();
/// registry
///   .register_instance(Arc::new(EnglishGreeter))
///   .register_interface::<dyn Greeter, EnglishGreeter>();
///
/// let greeter = resolve!(registry, trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  ($registry:expr, trait $trait_ident:ident) => {
    $crate::resolve!($registry, dyn $trait_ident)
  };

  ($registry:expr, $type:ty) => {
    match $registry.resolve::<$type>() {
      ::std::result::Result::Ok(service) => service,
      ::std::result::Result::Err(err) => {
        panic!(
          "Failed to resolve required service `{}`: {}",
          ::std::any::type_name::<$type>(),
          $crate::__private::ErrorChain(&err)
        )
      }
    }
  };
}

/// Resolves a service from a registry, returning `None` if it cannot be
/// produced.
///
/// ```
/// use fibre_injector::{maybe_resolve, Registry};
///
/// struct NeverRegistered;
///
/// let registry = Registry::new();
/// assert!(maybe_resolve!(registry, NeverRegistered).is_none());
/// ```
#[macro_export]
macro_rules! maybe_resolve {
  ($registry:expr, trait $trait_ident:ident) => {
    $registry.get::<dyn $trait_ident>()
  };

  ($registry:expr, $type:ty) => {
    $registry.get::<$type>()
  };
}
