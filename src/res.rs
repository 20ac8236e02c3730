/// Outcome of a computation that may fail.
///
/// Exactly one of the two variants, always:
/// - [`Res::Ok`] carries the computed value,
/// - [`Res::Err`] carries an error payload of any caller-chosen type
///   (no trait bound, structured enums welcome).
///
/// Combinators consume `self` and hand back a fresh `Res`; nothing is
/// ever mutated in place. Callers are free to `match` on the variants
/// directly instead of going through combinators.
///
/// Fallible functions shall return `Res::Err` instead of panicking;
/// `Res` itself never converts a panic (see [`catching`](crate::catching)
/// for the one deliberate exception).
#[must_use = "a `Res` may carry a failure, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Res<Ok, Err> {
    Ok(Ok),
    Err(Err),
}

impl<Ok, Err> Res<Ok, Err> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Res::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Res::Err(_))
    }

    /// Runs `action` with the carried value if this is `Ok`, for
    /// observation only, and returns the receiver unchanged.
    pub fn on_ok(self, action: impl FnOnce(&Ok)) -> Self {
        if let Res::Ok(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` with the carried error if this is `Err`, for
    /// observation only, and returns the receiver unchanged.
    pub fn on_err(self, action: impl FnOnce(&Err)) -> Self {
        if let Res::Err(error) = &self {
            action(error);
        }
        self
    }

    /// Runs exactly one of the two actions, matching the variant, and
    /// returns the receiver unchanged.
    pub fn on_res(self, on_ok: impl FnOnce(&Ok), on_err: impl FnOnce(&Err)) -> Self {
        match &self {
            Res::Ok(value) => on_ok(value),
            Res::Err(error) => on_err(error),
        }
        self
    }

    /// Transforms the value of `Ok` with `transform` and rewraps it;
    /// an `Err` passes through untouched.
    ///
    /// `transform` must not fail. If it panics anyway, the panic
    /// propagates to the caller rather than becoming an `Err`.
    pub fn map_ok<Ok2>(self, transform: impl FnOnce(Ok) -> Ok2) -> Res<Ok2, Err> {
        match self {
            Res::Ok(value) => Res::Ok(transform(value)),
            Res::Err(error) => Res::Err(error),
        }
    }

    /// Transforms the error of `Err` with `transform` and rewraps it;
    /// an `Ok` passes through untouched.
    pub fn map_err<Err2>(self, transform: impl FnOnce(Err) -> Err2) -> Res<Ok, Err2> {
        match self {
            Res::Ok(value) => Res::Ok(value),
            Res::Err(error) => Res::Err(transform(error)),
        }
    }

    /// Chains the next fallible step.
    ///
    /// `next` is called only if the receiver is `Ok`; its result becomes
    /// the chain's new result. A pipeline of `and_then` calls therefore
    /// stops at the first `Err` and skips every later step.
    ///
    /// The error type stays fixed across the chain; `map_err` (or
    /// `or_else`) first when a step needs a different one.
    pub fn and_then<Ok2>(self, next: impl FnOnce(Ok) -> Res<Ok2, Err>) -> Res<Ok2, Err> {
        match self {
            Res::Ok(value) => next(value),
            Res::Err(error) => Res::Err(error),
        }
    }

    /// Maps an error to a whole `Res`, so recovery can turn it back
    /// into `Ok`. The error-side dual of `and_then`.
    pub fn or_else<Err2>(self, next: impl FnOnce(Err) -> Res<Ok, Err2>) -> Res<Ok, Err2> {
        match self {
            Res::Ok(value) => Res::Ok(value),
            Res::Err(error) => next(error),
        }
    }

    /// Collapses both variants into a single value.
    pub fn fold<R>(self, on_ok: impl FnOnce(Ok) -> R, on_err: impl FnOnce(Err) -> R) -> R {
        match self {
            Res::Ok(value) => on_ok(value),
            Res::Err(error) => on_err(error),
        }
    }

    /// Lossless bridge into `?`-based code.
    pub fn into_result(self) -> Result<Ok, Err> {
        match self {
            Res::Ok(value) => Ok(value),
            Res::Err(error) => Err(error),
        }
    }

    pub fn from_result(result: Result<Ok, Err>) -> Self {
        match result {
            Ok(value) => Res::Ok(value),
            Err(error) => Res::Err(error),
        }
    }
}
