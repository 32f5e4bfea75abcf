use std::fmt;

use crate::buffer::{ReaderError, WriterError};

/// Top-level error for every codec operation in this crate.
///
/// A non-zero RCODE in a response header is *not* represented here: the
/// message is still well-formed wire data, and translating a policy signal
/// into an `Err` would deny a caller the chance to read it. Callers that
/// care check `MessageIter::header().flags.rcode` themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsError {
    /// Failed while reading from the wire buffer.
    Read(ReaderError),
    /// Failed while writing into the caller's buffer.
    Write(WriterError),
    /// A caller-supplied argument was invalid independent of any buffer
    /// state, e.g. an empty name passed to `build_query`.
    InvalidArgument(&'static str),
}

impl fmt::Display for DnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "read error: {e}"),
            Self::Write(e) => write!(f, "write error: {e}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for DnsError {}

impl From<ReaderError> for DnsError {
    fn from(value: ReaderError) -> Self {
        Self::Read(value)
    }
}

impl From<WriterError> for DnsError {
    fn from(value: WriterError) -> Self {
        Self::Write(value)
    }
}
