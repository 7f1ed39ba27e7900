/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// With a second argument, the error must also match the given pattern:
///
/// ```ignore
/// let err = assert_err!(parse(input), Error::Configuration(_));
/// ```
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; actual=Ok({:?})", v),
        }
    };
    ($e:expr, $pat:pat) => {
        match $e {
            Err(e @ $pat) => e,
            actual => panic!(
                "expected `Err({})`; actual={:?}",
                stringify!($pat),
                actual
            ),
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({:?})", e),
        }
    };
}
