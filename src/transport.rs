//! The byte transport adapter

/// Abstraction over a byte stream connected to a broker
///
/// A negative return from either method signals a transport fault; the engine treats this as
/// connection-lost. A `0` return within the timeout (no fault) means "no data yet" / "not yet
/// accepted" — callers loop until their own deadline.
pub trait Transport {
    /// Reads up to `buf.len()` bytes, blocking at most `timeout_ms`
    ///
    /// Short reads are legal; returns the number of bytes actually placed in `buf`.
    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> i32;
    /// Writes up to `buf.len()` bytes, blocking at most `timeout_ms`
    ///
    /// Short writes are legal; returns the number of bytes actually accepted.
    fn write(&mut self, buf: &[u8], timeout_ms: u32) -> i32;
}

/// A [`Transport`] backed by [`std::net::TcpStream`]
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct TcpTransport {
    /// The underlying stream
    stream: std::net::TcpStream,
}
#[cfg(feature = "std")]
impl TcpTransport {
    /// Wraps an already-connected stream
    pub const fn new(stream: std::net::TcpStream) -> Self {
        Self { stream }
    }
}
#[cfg(feature = "std")]
impl Transport for TcpTransport {
    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> i32 {
        use std::io::Read;

        let timeout = (timeout_ms != 0).then(|| std::time::Duration::from_millis(u64::from(timeout_ms)));
        if self.stream.set_read_timeout(timeout).is_err() {
            return -1;
        }
        match self.stream.read(buf) {
            Ok(n) => i32::try_from(n).unwrap_or(i32::MAX),
            Err(e) if matches!(e.kind(), std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut) => 0,
            Err(_) => -1,
        }
    }

    fn write(&mut self, buf: &[u8], timeout_ms: u32) -> i32 {
        use std::io::Write;

        let timeout = (timeout_ms != 0).then(|| std::time::Duration::from_millis(u64::from(timeout_ms)));
        if self.stream.set_write_timeout(timeout).is_err() {
            return -1;
        }
        match self.stream.write(buf) {
            Ok(n) => i32::try_from(n).unwrap_or(i32::MAX),
            Err(e) if matches!(e.kind(), std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut) => 0,
            Err(_) => -1,
        }
    }
}
