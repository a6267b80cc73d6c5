//! # Fibre Injector
//!
//! A thread-safe Inversion of Control (IoC) container that wires object graphs
//! from constructor dependencies declared at registration time.
//!
//! ## Core Concepts
//!
//! - **Registry**: The caller-owned container. Create one in your composition
//!   root and pass it by reference to whatever needs it.
//! - **Instances**: Already constructed objects, returned as the same `Arc` on
//!   every resolution. `register_singleton` builds one eagerly from its
//!   dependencies.
//! - **Factories**: `register_class` builds a new object on every resolution,
//!   resolving its declared dependencies first.
//! - **Interfaces**: `register_interface` exposes a registered concrete type as
//!   a trait object. Traits opt in with the [`interface!`] macro.
//!
//! Resolution checks instances, then factories, then interface bindings, and
//! fails with an [`Error`] naming the missing type when none of them match.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_injector::{interface, resolve, Construct, Registry};
//! use std::sync::Arc;
//!
//! trait Notifier: Send + Sync {
//!   fn notify(&self, message: &str) -> String;
//! }
//! interface!(Notifier);
//!
//! struct ConsoleNotifier;
//! impl Notifier for ConsoleNotifier {
//!   fn notify(&self, message: &str) -> String {
//!     format!("[console] {}", message)
//!   }
//! }
//! impl Construct<()> for ConsoleNotifier {
//!   fn construct(_: ()) -> Self {
//!     ConsoleNotifier
//!   }
//! }
//!
//! struct ReportService {
//!   notifier: Arc<dyn Notifier>,
//! }
//! impl Construct<(Arc<dyn Notifier>,)> for ReportService {
//!   fn construct((notifier,): (Arc<dyn Notifier>,)) -> Self {
//!     ReportService { notifier }
//!   }
//! }
//!
//! fn main() -> fibre_injector::Result<()> {
//!   let registry = Registry::new();
//!   registry
//!     .register_singleton::<ConsoleNotifier, ()>()?
//!     .register_interface::<dyn Notifier, ConsoleNotifier>()
//!     .register_class::<ReportService, (Arc<dyn Notifier>,)>();
//!
//!   let reports = resolve!(registry, ReportService);
//!   assert_eq!(reports.notifier.notify("done"), "[console] done");
//!   Ok(())
//! }
//! ```

mod core;
mod deps;
mod error;
mod interface;
mod key;
mod macros;
mod registry;

pub use deps::{Construct, Dependencies, Dependency};
pub use error::{Error, Result};
pub use interface::Interface;
pub use key::TypeKey;
pub use registry::Registry;

#[doc(hidden)]
pub mod __private {
  pub use crate::error::ErrorChain;
}
