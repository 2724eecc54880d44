#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expected {expected} context features, got {got}")]
    CtxSizeMismatch { expected: usize, got: usize },

    /// Invalid construction parameters, raised via `bail!`.
    #[error("{0}")]
    Msg(String),

    #[error(transparent)]
    Candle(#[from] candle_core::Error),
}

#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::Msg(format!($($arg)*)))
    };
}

pub type Result<T> = std::result::Result<T, Error>;
