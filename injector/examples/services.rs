use fibre_injector::{interface, resolve, Construct, Registry};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// 1. Define the abstractions (the traits)
trait Concurrency: Send + Sync {
  fn create_mutex(&self);
}
interface!(Concurrency);

trait FileSystem: Send + Sync {
  fn write_file(&self, file_name: &str);
}
interface!(FileSystem);

trait Notifier: Send + Sync {
  fn notify(&self, message: &str, target: &str);
}
interface!(Notifier);

// 2. Define concrete implementations
struct ThreadConcurrency;
impl Concurrency for ThreadConcurrency {
  fn create_mutex(&self) {
    println!("Creating mutex");
  }
}
impl Construct<()> for ThreadConcurrency {
  fn construct(_: ()) -> Self {
    ThreadConcurrency
  }
}

struct LocalFileSystem;
impl FileSystem for LocalFileSystem {
  fn write_file(&self, file_name: &str) {
    println!("Writing {}", file_name);
  }
}
impl Construct<()> for LocalFileSystem {
  fn construct(_: ()) -> Self {
    LocalFileSystem
  }
}

struct ConsoleNotifier;
impl Notifier for ConsoleNotifier {
  fn notify(&self, message: &str, target: &str) {
    println!("Notifying {} with message: {}", target, message);
  }
}
impl Construct<()> for ConsoleNotifier {
  fn construct(_: ()) -> Self {
    ConsoleNotifier
  }
}

// 3. Define a service that depends on the abstractions
struct ServicesProvider {
  concurrency: Arc<dyn Concurrency>,
  file_system: Arc<dyn FileSystem>,
  notifier: Arc<dyn Notifier>,
}

type ProviderDeps = (
  Arc<dyn Concurrency>,
  Arc<dyn FileSystem>,
  Arc<dyn Notifier>,
);

impl Construct<ProviderDeps> for ServicesProvider {
  fn construct((concurrency, file_system, notifier): ProviderDeps) -> Self {
    ServicesProvider {
      concurrency,
      file_system,
      notifier,
    }
  }
}

fn main() -> fibre_injector::Result<()> {
  // Run with RUST_LOG=fibre_injector=trace to watch the graph being resolved.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  // --- Registration ---
  let registry = Registry::new();
  registry
    .register_singleton::<ConsoleNotifier, ()>()?
    .register_interface::<dyn Notifier, ConsoleNotifier>()
    .register_class::<ThreadConcurrency, ()>()
    .register_singleton_interface::<dyn Concurrency, ThreadConcurrency>()?
    .register_class::<LocalFileSystem, ()>()
    .register_interface::<dyn FileSystem, LocalFileSystem>()
    .register_class::<ServicesProvider, ProviderDeps>();

  // --- Resolution and Usage ---
  println!("Resolving the high-level service...");
  let services = resolve!(registry, ServicesProvider);

  services.concurrency.create_mutex();
  services.file_system.write_file("report.txt");
  services.notifier.notify("report written", "ops");

  // The notifier and the concurrency binding are shared; the file system is not.
  let notifier = resolve!(registry, trait Notifier);
  let file_system = resolve!(registry, trait FileSystem);
  println!(
    "notifier shared: {}, file system shared: {}",
    Arc::as_ptr(&notifier) as *const () == Arc::as_ptr(&services.notifier) as *const (),
    Arc::as_ptr(&file_system) as *const () == Arc::as_ptr(&services.file_system) as *const ()
  );

  Ok(())
}
