//! The read/wait/append loop.

use crate::error::EventLoopError;
use crate::pipe::ReadablePipe;
use quill_config::{EventLoopConfig, DEFAULT_READ_BUFFER_SIZE};
use std::io;
use tracing::{debug, error, trace};

/// The consumer of an [`EventLoop`].
///
/// The delegate owns the pipe and receives every chunk read from it.
pub trait EventLoopDelegate {
    /// The pipe this delegate reads from.
    type Pipe: ReadablePipe;

    /// Returns the pipe to drain. Called any number of times; must always
    /// return the same pipe.
    fn readable_pipe(&self) -> &Self::Pipe;

    /// Accepts the next chunk of bytes, in stream order. `data` is never empty
    /// and is only valid for the duration of the call.
    fn append(&mut self, data: &[u8]);
}

/// Where a loop is in its lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopState {
    /// End of stream has not been observed yet.
    Running,
    /// End of stream was observed; the loop will not read again.
    Done,
}

/// Drains a delegate's pipe until its writer closes it.
///
/// The loop runs on the calling thread and never spawns threads. It blocks
/// in exactly one place: waiting for a non-blocking pipe to become readable.
pub struct EventLoop<'d, D: EventLoopDelegate> {
    delegate: &'d mut D,
    buffer: Vec<u8>,
    state: LoopState,
}

impl<'d, D: EventLoopDelegate> EventLoop<'d, D> {
    /// Creates a loop with the default read buffer size.
    pub fn new(delegate: &'d mut D) -> Self {
        Self {
            delegate,
            buffer: vec![0; DEFAULT_READ_BUFFER_SIZE],
            state: LoopState::Running,
        }
    }

    /// Creates a loop that reads at most `buffer_size` bytes per iteration.
    pub fn with_buffer_size(
        delegate: &'d mut D,
        buffer_size: usize,
    ) -> Result<Self, EventLoopError> {
        if buffer_size == 0 {
            return Err(EventLoopError::ZeroBufferSize);
        }
        Ok(Self {
            delegate,
            buffer: vec![0; buffer_size],
            state: LoopState::Running,
        })
    }

    /// Creates a loop using the `[event_loop]` configuration section.
    pub fn from_config(
        delegate: &'d mut D,
        config: &EventLoopConfig,
    ) -> Result<Self, EventLoopError> {
        Self::with_buffer_size(delegate, config.read_buffer_size)
    }

    /// Returns the loop's state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Returns the maximum number of bytes read per iteration.
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the delegate.
    pub fn delegate(&self) -> &D {
        &*self.delegate
    }

    /// Reads until end of stream, appending each chunk to the delegate.
    ///
    /// Returns `Ok(())` once the writer has closed the pipe. Once the loop is
    /// [`LoopState::Done`] this returns immediately without touching the pipe.
    ///
    /// # Errors
    ///
    /// Any read or wait failure other than "no data yet" and interruption
    /// stops the loop. The stream is assumed to be a trusted local channel,
    /// so no recovery is attempted.
    pub fn run(&mut self) -> Result<(), EventLoopError> {
        if self.state == LoopState::Done {
            return Ok(());
        }
        debug!(buffer_size = self.buffer.len(), "event loop started");

        loop {
            let pipe = self.delegate.readable_pipe();
            match pipe.read(&mut self.buffer) {
                Ok(0) => {
                    debug!("end of stream");
                    self.state = LoopState::Done;
                    return Ok(());
                }
                Ok(n) => {
                    trace!(bytes = n, "read chunk");
                    self.delegate.append(&self.buffer[..n]);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => {
                    if !pipe.is_non_blocking() {
                        error!("blocking pipe reported WouldBlock");
                        return Err(EventLoopError::UnexpectedWouldBlock);
                    }
                    if let Err(err) = pipe.wait_until_readable() {
                        error!(error = %err, "waiting for pipe failed");
                        return Err(EventLoopError::Wait(err));
                    }
                }
                Err(err) => {
                    error!(error = %err, "reading from pipe failed");
                    return Err(EventLoopError::Read(err));
                }
            }
        }
    }
}
