//! Error kinds for the print pipeline.

use std::io;

/// Failure modes a print operation can surface.
///
/// `Allocation` is only reachable if a caller's own `io::Write` sink
/// reports an allocation failure as an I/O error. `InvalidArgument` is
/// returned by builder methods given an out-of-range `LineId` or column
/// sequence number, never by a panic.
#[derive(Debug, thiserror::Error)]
pub enum ScolsError {
    #[error("failed to allocate scratch buffer")]
    Allocation,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("operation unsupported on this host")]
    Unsupported,

    #[error(transparent)]
    Io(#[from] io::Error),
}
