//! Errors surfaced by the protocol engine and client facade
//!
//! The packet codec (`coding`, `packets`) keeps the crate's original, lighter-weight convention of
//! returning `Result<_, &'static str>` for malformed input. This module is the engine-level error
//! type: the one callers of [`crate::engine::Engine`] and [`crate::client::Client`] actually match
//! on, per the kinds enumerated below.

use core::fmt::{self, Display, Formatter};
#[cfg(feature = "backtrace")]
use std::backtrace::{Backtrace, BacktraceStatus};

/// The kind of failure that aborted an engine operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The transport reported a fault (negative return) or closed mid-packet
    TransportFault,
    /// A decoded packet violated the wire format: bad remaining-length, malformed string, or an
    /// unexpected packet type for the current state
    ProtocolFault,
    /// The command timer expired before the expected acknowledgement arrived
    Timeout,
    /// The broker refused the operation; carries its numeric reason code (CONNACK return code or
    /// SUBACK granted-QoS `0x80`)
    Refused(u8),
    /// A fixed-capacity send/receive buffer or the handler table is full
    CapacityExceeded,
}
impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransportFault => write!(f, "transport fault"),
            Self::ProtocolFault => write!(f, "protocol violation"),
            Self::Timeout => write!(f, "command timed out"),
            Self::Refused(code) => write!(f, "refused by broker (code {code})"),
            Self::CapacityExceeded => write!(f, "capacity exceeded"),
        }
    }
}

/// An engine-level error
#[derive(Debug)]
pub struct MqttError {
    /// The error kind
    kind: ErrorKind,
    /// The backtrace if captured
    #[cfg(feature = "backtrace")]
    backtrace: Backtrace,
}
impl MqttError {
    /// Creates a new error
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "backtrace")]
            backtrace: Backtrace::capture(),
        }
    }

    /// The error kind
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
    /// Whether the error has a backtrace
    #[cfg(feature = "backtrace")]
    pub fn has_backtrace(&self) -> bool {
        self.backtrace.status() == BacktraceStatus::Captured
    }
    /// The backtrace (maybe empty; to see if a backtrace has been captured, use `self.has_backtrace()`)
    #[cfg(feature = "backtrace")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}
impl Display for MqttError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
#[cfg(feature = "std")]
impl std::error::Error for MqttError {
    // Nothing to override
}
impl From<ErrorKind> for MqttError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
// The codec (`coding`, `packets`) collapsed its malformed-input and out-of-capacity cases onto the
// same `&'static str` error type, so a blanket bridge can't tell them apart; it maps to
// `ProtocolFault` as the more common case. Call sites that know a given codec call can only ever
// fail on capacity (building a packet from caller-supplied data into a fixed-capacity `AnyVec`)
// map to `CapacityExceeded` explicitly instead of relying on this impl.
impl From<&'static str> for ErrorKind {
    fn from(_reason: &'static str) -> Self {
        Self::ProtocolFault
    }
}
impl From<&'static str> for MqttError {
    fn from(reason: &'static str) -> Self {
        Self::new(ErrorKind::from(reason))
    }
}
