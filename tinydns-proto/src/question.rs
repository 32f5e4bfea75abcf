use crate::buffer::{Reader, ReaderError, Writer, WriterError};
use crate::name::Name;

/// The query/record types this crate understands by name. Anything else
/// round-trips through [`Rdata::Unknown`](crate::rdata::Rdata::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    A,
    Aaaa,
    Cname,
    Txt,
    Srv,
    Other(u16),
}

impl QueryType {
    pub fn code(self) -> u16 {
        match self {
            Self::A => 1,
            Self::Cname => 5,
            Self::Txt => 16,
            Self::Aaaa => 28,
            Self::Srv => 33,
            Self::Other(code) => code,
        }
    }

    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::A,
            5 => Self::Cname,
            16 => Self::Txt,
            28 => Self::Aaaa,
            33 => Self::Srv,
            other => Self::Other(other),
        }
    }
}

/// The only class this library speaks on the wire: Internet (`IN`).
pub const CLASS_IN: u16 = 1;

/// A single entry in the question section.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub name: Name,
    pub qtype: QueryType,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: Name, qtype: QueryType) -> Self {
        Self {
            name,
            qtype,
            qclass: CLASS_IN,
        }
    }

    pub fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let name = Name::decode(reader)?;
        let qtype = QueryType::from_code(reader.get_u16()?);
        let qclass = reader.get_u16()?;
        Ok(Self {
            name,
            qtype,
            qclass,
        })
    }

    pub fn write(&self, out: &mut Writer) -> Result<(), WriterError> {
        self.name.encode(out)?;
        out.put_u16(self.qtype.code())?;
        out.put_u16(self.qclass)
    }
}
