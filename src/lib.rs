pub mod error;
pub mod hidden;
pub mod init;
pub mod pooling;

pub use error::{Error, Result};
pub use hidden::{HiddenState, rnn_hidden_state};
