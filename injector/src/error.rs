use crate::key::TypeKey;
use std::fmt;
use thiserror::Error;

/// Errors produced while resolving services from a [`Registry`](crate::Registry).
///
/// Every variant is a wiring mistake rather than a transient condition. The
/// expected reaction is to fix the registrations, typically by failing fast
/// during application startup.
#[derive(Debug, Error)]
pub enum Error {
  /// None of the registry's tables holds an entry for the requested type.
  #[error("no registration found for `{key}`")]
  Unregistered { key: TypeKey },

  /// An interface binding points at an implementation that cannot be resolved.
  #[error("interface `{interface}` is bound to an implementation that failed to resolve")]
  MisboundInterface {
    interface: TypeKey,
    #[source]
    source: Box<Error>,
  },

  /// A stored payload did not hold a handle of the type its key names.
  #[error("registration for `{key}` holds a handle of a different type")]
  TypeMismatch { key: TypeKey },
}

impl Error {
  /// The innermost type that could not be produced.
  ///
  /// For a misbound interface this walks down to the missing implementation,
  /// which is the registration that actually needs fixing.
  pub fn unresolved_key(&self) -> TypeKey {
    match self {
      Error::Unregistered { key } | Error::TypeMismatch { key } => *key,
      Error::MisboundInterface { source, .. } => source.unresolved_key(),
    }
  }
}

/// A specialized `Result` type for registry operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Formats an error followed by each of its sources, `: `-separated.
#[doc(hidden)]
pub struct ErrorChain<'a>(pub &'a Error);

impl fmt::Display for ErrorChain<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)?;
    let mut source = std::error::Error::source(self.0);
    while let Some(err) = source {
      write!(f, ": {}", err)?;
      source = std::error::Error::source(err);
    }
    Ok(())
  }
}
