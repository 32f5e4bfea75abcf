use crate::buffer::{Reader, Writer};
use crate::error::DnsError;
use crate::header::{Flags, Header};
use crate::name::Name;
use crate::question::{Question, QueryType};
use crate::record::{ResourceRecord, Section};

/// Encodes a single-question query into `buf`, returning the number of
/// bytes written. The question name is always spelled out in full:
/// queries built by this library never emit compression pointers.
pub fn build_query(
    buf: &mut [u8],
    id: u16,
    name: &str,
    qtype: QueryType,
) -> Result<usize, DnsError> {
    if name.is_empty() {
        return Err(DnsError::InvalidArgument("name must not be empty"));
    }
    let header = Header {
        id,
        flags: Flags {
            rd: true,
            ..Default::default()
        },
        qdcount: 1,
        ancount: 0,
        nscount: 0,
        arcount: 0,
    };
    let question = Question::new(Name::from_dotted(name)?, qtype);

    let mut writer = Writer::new(buf);
    header.write(&mut writer)?;
    question.write(&mut writer)?;
    Ok(writer.written())
}

/// A stateful cursor over a parsed response's resource records, pulling
/// one record at a time out of the ANSWER, AUTHORITY and ADDITIONAL
/// sections in that order.
pub struct MessageIter<'a> {
    reader: Reader<'a>,
    header: Header,
    answers_left: u16,
    authority_left: u16,
    additional_left: u16,
}

impl<'a> MessageIter<'a> {
    /// Parses the header and skips over the question section, positioning
    /// the iterator at the first resource record.
    pub fn new(data: &'a [u8]) -> Result<Self, DnsError> {
        let mut reader = Reader::new(data);
        let header = Header::read(&mut reader)?;
        for _ in 0..header.qdcount {
            Question::read(&mut reader)?;
        }
        Ok(Self {
            reader,
            answers_left: header.ancount,
            authority_left: header.nscount,
            additional_left: header.arcount,
            header,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Pulls the next resource record, or `None` once every section has
    /// been drained. A non-zero RCODE in the header does not stop
    /// iteration: callers inspect `header().flags.rcode` themselves.
    pub fn next_rr(&mut self) -> Result<Option<(Section, ResourceRecord<'a>)>, DnsError> {
        let section = if self.answers_left > 0 {
            self.answers_left -= 1;
            Section::Answer
        } else if self.authority_left > 0 {
            self.authority_left -= 1;
            Section::Authority
        } else if self.additional_left > 0 {
            self.additional_left -= 1;
            Section::Additional
        } else {
            return Ok(None);
        };

        let rr = ResourceRecord::read(&mut self.reader)?;
        Ok(Some((section, rr)))
    }

    /// Push-style drain of every remaining record.
    pub fn for_each<F>(&mut self, mut f: F) -> Result<(), DnsError>
    where
        F: FnMut(Section, ResourceRecord<'a>),
    {
        while let Some((section, rr)) = self.next_rr()? {
            f(section, rr);
        }
        Ok(())
    }
}
