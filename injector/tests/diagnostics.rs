//! Error messages and log output that people rely on to fix their wiring.

use fibre_injector::{Construct, Registry};
use pretty_assertions::assert_eq;
use std::any::type_name;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use tracing_test::traced_test;

struct Configured;
impl Construct<()> for Configured {
  fn construct(_: ()) -> Self {
    Configured
  }
}

trait Store: Send + Sync {}
fibre_injector::interface!(Store);

struct MemoryStore;
impl Store for MemoryStore {}

#[test]
fn test_unregistered_message_names_the_type() {
  struct Missing;
  let registry = Registry::new();

  let err = registry.resolve::<Missing>().err().unwrap();

  assert_eq!(
    err.to_string(),
    format!("no registration found for `{}`", type_name::<Missing>())
  );
}

#[test]
fn test_misbound_message_names_the_interface() {
  let registry = Registry::new();
  registry.register_interface::<dyn Store, MemoryStore>();

  let err = registry.resolve::<dyn Store>().err().unwrap();

  assert_eq!(
    err.to_string(),
    format!(
      "interface `{}` is bound to an implementation that failed to resolve",
      type_name::<dyn Store>()
    )
  );
}

#[test]
#[traced_test]
fn test_registration_under_second_strategy_is_logged() {
  let registry = Registry::new();
  registry.register_class::<Configured, ()>();
  assert!(!logs_contain("more than one strategy"));

  registry.register_instance(Arc::new(Configured));

  assert!(logs_contain("more than one strategy"));
  assert!(logs_contain("factories"));
}

#[test]
#[traced_test]
fn test_registration_and_failed_lookup_are_logged() {
  struct Missing;
  let registry = Registry::new();
  registry.register_instance(Arc::new(MemoryStore));

  assert!(registry.get::<Missing>().is_none());

  assert!(logs_contain("registered service"));
  assert!(logs_contain("no registration found"));
}

/// Looks the service up again from inside every event it observes.
struct LookupOnEvent {
  registry: Weak<Registry>,
  lookups: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for LookupOnEvent {
  fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
    if let Some(registry) = self.registry.upgrade() {
      assert!(registry.contains::<Configured>());
      self.lookups.fetch_add(1, Ordering::SeqCst);
    }
  }
}

#[test]
fn test_subscriber_may_use_the_registry_while_observing_registrations() {
  let registry = Arc::new(Registry::new());
  let lookups = Arc::new(AtomicUsize::new(0));
  let subscriber = tracing_subscriber::registry().with(LookupOnEvent {
    registry: Arc::downgrade(&registry),
    lookups: lookups.clone(),
  });

  tracing::subscriber::with_default(subscriber, || {
    registry.register_class::<Configured, ()>();
    // Lands while the factory is still registered, so the warning fires too.
    registry.register_instance(Arc::new(Configured));
  });

  // One registration event each, plus the warning.
  assert_eq!(lookups.load(Ordering::SeqCst), 3);
  assert!(registry.resolve::<Configured>().is_ok());
}
