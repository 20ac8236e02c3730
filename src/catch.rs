//! The one place this crate touches the host panic mechanism.
//!
//! Every other combinator is panic-transparent: a bug in a caller-supplied
//! closure unwinds past it unmodified. `catching` is the explicit adapter
//! for code that signals failure by panicking (third-party calls, mostly).

use std::any::Any;
use std::panic::{catch_unwind, UnwindSafe};

use crate::Res;

/// A captured panic payload.
///
/// Opaque on purpose: panics carry `Box<dyn Any + Send>`, which is only
/// useful as a message (the common `panic!("...")` case) or for a caller
/// who knows the concrete payload type and downcasts it themselves.
pub struct Caught(Box<dyn Any + Send + 'static>);

impl Caught {
    /// The panic message, when the payload is the usual `&str` or `String`.
    pub fn message(&self) -> Option<&str> {
        self.0
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.0.downcast_ref::<String>().map(String::as_str))
    }

    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.0
    }
}

impl core::fmt::Debug for Caught {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "Caught({:?})", message),
            None => f.write_str("Caught(..)"),
        }
    }
}

/// Runs `computation` exactly once and always yields a `Res`.
///
/// A normal return `x` becomes `Res::Ok(x)`; a panic is captured and
/// becomes `Res::Err(Caught)` instead of unwinding further. Pair with
/// `map_err` to translate the payload into a domain error:
///
/// ```
/// use res::{catching, Res};
///
/// let stored: Res<u32, &str> = catching(|| 42).map_err(|_| "storage blew up");
/// assert_eq!(stored, Res::Ok(42));
/// ```
pub fn catching<T>(computation: impl FnOnce() -> T + UnwindSafe) -> Res<T, Caught> {
    match catch_unwind(computation) {
        Ok(value) => Res::Ok(value),
        Err(payload) => Res::Err(Caught(payload)),
    }
}
