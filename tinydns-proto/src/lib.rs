//! Zero-allocation DNS wire-format codec: bounded reader/writer buffers,
//! label compression, rdata parsing, and a pull/push resource-record
//! iterator over a parsed response.

pub mod buffer;
mod error;
mod header;
mod message;
mod name;
mod question;
mod record;

pub use buffer::{Reader, ReaderError, Writer, WriterError};
pub use error::DnsError;
pub use header::{Flags, Header};
pub use message::{build_query, MessageIter};
pub use name::Name;
pub use question::{QueryType, Question, CLASS_IN};
pub use record::{Rdata, ResourceRecord, Section};

/// Structured fuzzing inputs, built from `arbitrary::Unstructured` rather
/// than raw bytes, for exercising [`build_query`] with varied names and
/// query types.
#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use arbitrary::Arbitrary;

    #[derive(Arbitrary, Debug)]
    pub struct QueryInput {
        pub id: u16,
        pub name: String,
        pub qtype_code: u16,
    }
}
