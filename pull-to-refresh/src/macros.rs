// `plog!(LEVEL, fields.., "message")`: a `tracing` event under this crate's target, or nothing
// when the `tracing` feature is off. `LEVEL` is a `tracing::Level` constant name.
#[cfg(feature = "tracing")]
macro_rules! plog {
    ($level:ident, $($tt:tt)*) => {
        tracing::event!(target: "pull_to_refresh", tracing::Level::$level, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! plog {
    ($level:ident, $($tt:tt)*) => {};
}
