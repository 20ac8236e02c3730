//! Constructing helpers, wrapping sugar, and `core::result` interop.

use crate::Res;

/// Produces the success variant carrying `value`. Never fails.
pub fn ok<Ok, Err>(value: Ok) -> Res<Ok, Err> {
    Res::Ok(value)
}

/// Produces the failure variant carrying `error`. Never fails.
pub fn err<Ok, Err>(error: Err) -> Res<Ok, Err> {
    Res::Err(error)
}

/// Tags any value as a success.
///
/// Pure notation over [`Res::Ok`], handy at the end of an expression:
/// `computed_value.as_ok()`.
pub trait AsOk: Sized {
    fn as_ok<Err>(self) -> Res<Self, Err> {
        Res::Ok(self)
    }
}

impl<T> AsOk for T {}

/// Tags any value as a failure.
///
/// Pure notation over [`Res::Err`]: `MyErr::NoConnection.as_err()`.
pub trait AsErr: Sized {
    fn as_err<Ok>(self) -> Res<Ok, Self> {
        Res::Err(self)
    }
}

impl<T> AsErr for T {}

impl<Ok, Err> From<Result<Ok, Err>> for Res<Ok, Err> {
    fn from(result: Result<Ok, Err>) -> Self {
        Res::from_result(result)
    }
}

impl<Ok, Err> From<Res<Ok, Err>> for Result<Ok, Err> {
    fn from(res: Res<Ok, Err>) -> Self {
        res.into_result()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sugar_equals_constructors() {
        assert_eq!(5.as_ok::<&str>(), ok(5));
        assert_eq!("gone".as_err::<u32>(), err("gone"));
    }

    #[test]
    fn from_result_and_back() {
        let std_ok: Result<u32, &str> = Ok(20);
        let res: Res<u32, &str> = std_ok.into();
        assert_eq!(res, ok(20));
        assert_eq!(Result::from(res), std_ok);

        let std_err: Result<u32, &str> = Err("gone");
        let res: Res<u32, &str> = std_err.into();
        assert_eq!(res, err("gone"));
        assert_eq!(Result::from(res), std_err);
    }
}
