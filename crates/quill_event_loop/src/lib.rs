//! A single-threaded loop that drains a byte stream into a delegate.
//!
//! The [`EventLoop`] reads chunks from a [`ReadablePipe`] until end of stream
//! and hands each chunk to its [`EventLoopDelegate`]. A non-blocking pipe is
//! waited on through the operating system's readiness mechanism whenever no
//! data is available; a blocking pipe is simply read again.

#![warn(missing_docs)]

pub mod error;
pub mod event_loop;
pub mod pipe;

pub use error::EventLoopError;
pub use event_loop::{EventLoop, EventLoopDelegate, LoopState};
pub use pipe::{BlockingPipe, PipeReader, ReadablePipe};
