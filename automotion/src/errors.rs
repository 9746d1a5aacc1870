use log::error;
use snafu::Snafu;
use tokio::task::JoinError;

pub use crate::errors::Error::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Runtime error: Are you sure your code runs inside a tokio runtime?
    RuntimeError,
    /// Invalid frame rate: {fps}fps (must be greater than 0)
    InvalidFrameRate { fps: u16 },
    /// Unknown error: {info}.
    Unknown { info: String },
}

impl From<JoinError> for Error {
    fn from(error: JoinError) -> Self {
        error!("Frame loop task failed: {:?}", error);
        let info = match error.is_cancelled() {
            true => String::from("frame loop was cancelled"),
            false => error.to_string(),
        };
        Self::Unknown { info }
    }
}
