pub mod reader;
pub mod writer;

pub use reader::{Reader, ReaderError};
pub use writer::{Writer, WriterError};
