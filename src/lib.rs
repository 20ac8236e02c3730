//! A two-variant result container for composing fallible computations
//! as values instead of unwound errors.
//!
//! ```
//! use res::{AsErr, AsOk, Res};
//!
//! fn parse(input: &str) -> Res<u32, &'static str> {
//!     match input.trim().parse::<u32>() {
//!         Ok(n) => n.as_ok(),
//!         Err(_) => "not a number".as_err(),
//!     }
//! }
//!
//! let doubled = parse(" 21 ")
//!     .and_then(|n| if n > 0 { n.as_ok() } else { "zero".as_err() })
//!     .map_ok(|n| n * 2);
//!
//! assert_eq!(doubled, Res::Ok(42));
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod res;
pub use res::Res;
mod convert;
pub use convert::{err, ok, AsErr, AsOk};
mod marker;
pub use marker::{Error, Success};

#[cfg(feature = "std")]
mod catch;
#[cfg(feature = "std")]
pub use catch::{catching, Caught};
