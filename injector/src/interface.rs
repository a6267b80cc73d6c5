//! Re-exposing a concrete service under a trait object's identity.

use std::sync::Arc;

/// Marks `Self` (normally a `dyn Trait`) as an interface that `C` implements.
///
/// [`Registry::register_interface`](crate::Registry::register_interface) uses
/// this to turn the concrete handle it resolved into the interface handle the
/// caller asked for. Implement it with the [`interface!`](crate::interface)
/// macro rather than by hand.
pub trait Interface<C: ?Sized>: Send + Sync + 'static {
  fn upcast(concrete: Arc<C>) -> Arc<Self>;
}

/// Declares a trait as an interface for every sized type implementing it.
///
/// The trait must have `Send + Sync` as supertraits so its handles can be
/// shared across threads.
///
/// ```
/// use fibre_injector::{interface, Construct, Registry};
///
/// trait Notifier: Send + Sync {
///   fn notify(&self, message: &str) -> String;
/// }
/// interface!(Notifier);
///
/// struct EmailNotifier;
/// impl Notifier for EmailNotifier {
///   fn notify(&self, message: &str) -> String {
///     format!("email: {}", message)
///   }
/// }
/// impl Construct<()> for EmailNotifier {
///   fn construct(_: ()) -> Self {
///     EmailNotifier
///   }
/// }
///
/// let registry = Registry::new();
/// registry
///   .register_class::<EmailNotifier, ()>()
///   .register_interface::<dyn Notifier, EmailNotifier>();
///
/// let notifier = registry.resolve::<dyn Notifier>().unwrap();
/// assert_eq!(notifier.notify("hi"), "email: hi");
/// ```
#[macro_export]
macro_rules! interface {
  ($trait_ident:ident) => {
    impl<C: $trait_ident + 'static> $crate::Interface<C> for dyn $trait_ident {
      fn upcast(concrete: ::std::sync::Arc<C>) -> ::std::sync::Arc<Self> {
        concrete
      }
    }
  };
}
