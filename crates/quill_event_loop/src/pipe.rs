//! Byte sources the event loop can drain.

use std::cell::RefCell;
use std::io::{self, Read};

/// A readable byte stream plus a way to wait for it to have data.
///
/// This is the loop's only platform abstraction. The mode is fixed when the
/// pipe is created and must not change while a loop is running.
pub trait ReadablePipe {
    /// Returns `true` if reads return [`io::ErrorKind::WouldBlock`] instead of blocking.
    fn is_non_blocking(&self) -> bool;

    /// Reads into `buf`, returning the number of bytes read (0 at end of stream).
    fn read(&self, buf: &mut [u8]) -> io::Result<usize>;

    /// Blocks until the pipe is readable or has been closed by its writer.
    ///
    /// Waits with no timeout. Only called for non-blocking pipes after a read
    /// reported [`io::ErrorKind::WouldBlock`].
    fn wait_until_readable(&self) -> io::Result<()>;
}

impl<P: ReadablePipe + ?Sized> ReadablePipe for &P {
    fn is_non_blocking(&self) -> bool {
        (**self).is_non_blocking()
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn wait_until_readable(&self) -> io::Result<()> {
        (**self).wait_until_readable()
    }
}

/// Wraps any blocking reader, such as standard input.
///
/// Reads block until data or end of stream, so waiting is a no-op.
#[derive(Debug)]
pub struct BlockingPipe<R> {
    reader: RefCell<R>,
}

impl<R: Read> BlockingPipe<R> {
    /// Creates a pipe reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }

    /// Consumes the pipe, returning the reader.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read> ReadablePipe for BlockingPipe<R> {
    fn is_non_blocking(&self) -> bool {
        false
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.borrow_mut().read(buf)
    }

    fn wait_until_readable(&self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(unix)]
pub use self::unix::PipeReader;

#[cfg(unix)]
mod unix {
    use super::ReadablePipe;
    use mio::unix::pipe::{self, Receiver, Sender};
    use mio::unix::SourceFd;
    use mio::{Events, Interest, Poll, Token};
    use std::cell::RefCell;
    use std::io::{self, Read};
    use std::os::fd::{AsRawFd, RawFd};
    use std::process::ChildStdout;

    const PIPE: Token = Token(0);

    /// The read end of an OS pipe.
    ///
    /// In non-blocking mode (the default) waiting goes through a
    /// [`mio::Poll`] created on first use and registered for readable
    /// interest on the pipe. In blocking mode reads block and waiting is a
    /// no-op.
    #[derive(Debug)]
    pub struct PipeReader {
        receiver: Receiver,
        non_blocking: bool,
        readiness: RefCell<Option<Readiness>>,
    }

    #[derive(Debug)]
    struct Readiness {
        poll: Poll,
        events: Events,
    }

    impl Readiness {
        fn register(fd: RawFd) -> io::Result<Self> {
            let poll = Poll::new()?;
            // mio registrations are edge-triggered. The loop only waits
            // after a read returned WouldBlock, so no readiness is missed.
            poll.registry()
                .register(&mut SourceFd(&fd), PIPE, Interest::READABLE)?;
            Ok(Self {
                poll,
                events: Events::with_capacity(4),
            })
        }

        fn wait(&mut self) -> io::Result<()> {
            loop {
                match self.poll.poll(&mut self.events, None) {
                    Ok(()) => {}
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                }
                if self.events.iter().any(|event| event.token() == PIPE) {
                    return Ok(());
                }
            }
        }
    }

    impl PipeReader {
        /// Wraps `receiver`, switching it to non-blocking mode.
        pub fn new(receiver: Receiver) -> io::Result<Self> {
            receiver.set_nonblocking(true)?;
            Ok(Self {
                receiver,
                non_blocking: true,
                readiness: RefCell::new(None),
            })
        }

        /// Creates a new OS pipe, returning its write end and a reader for
        /// its read end.
        pub fn pipe() -> io::Result<(Sender, PipeReader)> {
            let (sender, receiver) = pipe::new()?;
            Ok((sender, PipeReader::new(receiver)?))
        }

        /// Reads the standard output of a spawned child process.
        pub fn from_child_stdout(stdout: ChildStdout) -> io::Result<Self> {
            Self::new(Receiver::from(stdout))
        }

        /// Switches between non-blocking and blocking reads.
        pub fn set_nonblocking(&mut self, non_blocking: bool) -> io::Result<()> {
            self.receiver.set_nonblocking(non_blocking)?;
            self.non_blocking = non_blocking;
            Ok(())
        }
    }

    impl ReadablePipe for PipeReader {
        fn is_non_blocking(&self) -> bool {
            self.non_blocking
        }

        fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
            (&self.receiver).read(buf)
        }

        fn wait_until_readable(&self) -> io::Result<()> {
            if !self.non_blocking {
                return Ok(());
            }
            let mut slot = self.readiness.borrow_mut();
            let readiness = match slot.take() {
                Some(readiness) => readiness,
                None => Readiness::register(self.receiver.as_raw_fd())?,
            };
            slot.insert(readiness).wait()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_pipe_reads_through() {
        let pipe = BlockingPipe::new(&b"hello"[..]);
        assert!(!pipe.is_non_blocking());
        let mut buf = [0u8; 3];
        assert_eq!(pipe.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"hel");
        assert_eq!(pipe.read(&mut buf).unwrap(), 2);
        assert_eq!(pipe.read(&mut buf).unwrap(), 0);
        pipe.wait_until_readable().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn pipe_reader_would_block_then_wakes() {
        use std::io::Write;

        let (mut sender, reader) = PipeReader::pipe().unwrap();
        assert!(reader.is_non_blocking());

        let mut buf = [0u8; 8];
        let err = reader.read(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WouldBlock);

        sender.write_all(b"ok").unwrap();
        reader.wait_until_readable().unwrap();
        assert_eq!(reader.read(&mut buf).unwrap(), 2);

        drop(sender);
        reader.wait_until_readable().unwrap();
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn pipe_reader_blocking_mode_skips_wait() {
        use std::io::Write;

        let (mut sender, mut reader) = PipeReader::pipe().unwrap();
        reader.set_nonblocking(false).unwrap();
        assert!(!reader.is_non_blocking());

        sender.write_all(b"z").unwrap();
        drop(sender);
        reader.wait_until_readable().unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }
}
