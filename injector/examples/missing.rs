use fibre_injector::{resolve, Registry};
use std::panic;

struct UnregisteredService;

fn main() {
  let registry = Registry::new();

  // --- Using the fallible `resolve()` method ---
  println!("Attempting to resolve a service that was never registered...");

  match registry.resolve::<UnregisteredService>() {
    Ok(_) => panic!("Should not have found the service!"),
    Err(err) => println!("Correctly received an error: {}", err),
  }

  // --- Using the panicking `resolve!` macro ---
  println!("\nNow, attempting the same with `resolve!`...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _service = resolve!(registry, UnregisteredService);
  }));

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");
}
