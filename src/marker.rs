/// Generic success outcome, for operations with no value to carry.
/// Use it instead of `()` so the intent stays visible at call sites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Success;

/// Generic error outcome, for failures with no payload worth carrying.
/// Use it instead of `()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error;
