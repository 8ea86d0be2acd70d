//! Fatal conditions that stop the event loop.

use std::io;
use thiserror::Error;

/// Errors that end [`EventLoop::run`](crate::EventLoop::run).
///
/// Each is fatal for the stream being read: the loop stops where it is and
/// the embedding program decides whether to exit.
#[derive(Debug, Error)]
pub enum EventLoopError {
    /// Reading from the pipe failed.
    #[error("failed to read from pipe: {0}")]
    Read(#[source] io::Error),

    /// Waiting for the pipe to become readable failed.
    #[error("failed to wait for pipe to become readable: {0}")]
    Wait(#[source] io::Error),

    /// A blocking pipe reported that a read would block.
    #[error("blocking pipe reported that a read would block")]
    UnexpectedWouldBlock,

    /// The read buffer was configured with zero capacity.
    #[error("read buffer size must be greater than zero")]
    ZeroBufferSize,
}
