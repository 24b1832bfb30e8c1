// pn532-ntag/src/error.rs

use derive_more::Display;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    // Backend crates are optional dependencies; their errors convert only
    // when the matching feature is enabled.
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[cfg(feature = "i2c")]
    #[error("i2c error: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),
    #[error("chip answered with NACK")]
    Nack,
    #[error("expected ACK frame, got [{0}]")]
    AckMismatch(String),
    #[error("chip reported an application error")]
    ApplicationError,
    #[error("baud rate handshake failed: {0}")]
    HandshakeMismatch(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("command failed with status {status:#04x}")]
    CommandStatus { status: u8 },
    #[error("unexpected number of targets: {found}")]
    TargetCount { found: u8 },
    #[error("tag data format error: {0}")]
    TagFormat(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("page {page:#04x} out of range {min:#04x}..={max:#04x}")]
    PageOutOfRange { page: u8, min: u8, max: u8 },
    #[error("payload too large: at most {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },
    #[error("malformed UID length {0}")]
    InvalidUidLength(usize),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("not found")]
    TagNotFound,
    #[error("UUID mismatch")]
    UidMismatch,
    #[error("Only NXP NTAG21x supports password")]
    UnsupportedModel,
    #[error("password authentication rejected (status {status:#04x})")]
    AuthenticationFailed { status: u8 },
    #[error("Unlock failed")]
    UnlockFailed,
    #[error("Failed to read tags")]
    ReadTagsFailed { source: Box<Error> },
    #[error("Failed to write tags")]
    WriteTagsFailed { source: Box<Error> },
    #[error("calibration failed")]
    CalibrationFailed { strength: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error classes used to pick a recovery policy.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// I/O failure on the underlying channel
    Transport,
    /// A ready-wait or read exceeded its bound
    Timeout,
    /// Checksum, ACK/NACK or handshake mismatch
    Frame,
    /// Well-formed frame with an unexpected opcode, status or shape
    Protocol,
    /// Caller supplied something the chip or tag cannot accept
    Argument,
    /// Card workflow guard failure, surfaced verbatim to the caller
    Workflow,
}

impl ErrorKind {
    /// Whether repeating the whole transaction is a sensible next step.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Transport | ErrorKind::Timeout)
    }

    /// Frame errors usually mean host and chip are out of step; reset the chip.
    pub fn requires_reset(self) -> bool {
        matches!(self, ErrorKind::Frame)
    }

    /// Stable numeric code reported alongside workflow failure messages.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::Transport => 1,
            ErrorKind::Timeout => 2,
            ErrorKind::Frame => 3,
            ErrorKind::Protocol => 4,
            ErrorKind::Argument => 5,
            ErrorKind::Workflow => 6,
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::Transport(_) => ErrorKind::Transport,
            #[cfg(feature = "serial")]
            Error::Serial(_) => ErrorKind::Transport,
            #[cfg(feature = "i2c")]
            Error::I2c(_) => ErrorKind::Transport,
            Error::Timeout => ErrorKind::Timeout,
            Error::ChecksumMismatch { .. }
            | Error::FrameFormat(_)
            | Error::Nack
            | Error::AckMismatch(_)
            | Error::ApplicationError
            | Error::HandshakeMismatch(_) => ErrorKind::Frame,
            Error::UnexpectedResponse { .. }
            | Error::InvalidLength { .. }
            | Error::CommandStatus { .. }
            | Error::TargetCount { .. }
            | Error::TagFormat(_) => ErrorKind::Protocol,
            Error::InvalidArgument(_)
            | Error::PageOutOfRange { .. }
            | Error::PayloadTooLarge { .. }
            | Error::InvalidUidLength(_)
            | Error::UnsupportedOperation(_) => ErrorKind::Argument,
            Error::TagNotFound
            | Error::UidMismatch
            | Error::UnsupportedModel
            | Error::AuthenticationFailed { .. }
            | Error::UnlockFailed
            | Error::ReadTagsFailed { .. }
            | Error::WriteTagsFailed { .. }
            | Error::CalibrationFailed { .. } => ErrorKind::Workflow,
        }
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}
