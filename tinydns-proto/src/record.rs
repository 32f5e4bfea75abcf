use std::net::{Ipv4Addr, Ipv6Addr};

use crate::buffer::{Reader, ReaderError};
use crate::name::Name;
use crate::question::QueryType;

/// Which message section a resource record was pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

/// The decoded rdata of a resource record. Borrowed variants (`Txt`,
/// `Unknown`) hold zero-copy slices tied to the lifetime of the message
/// buffer the iterator was built over; no variant allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rdata<'a> {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(Name),
    Txt(&'a [u8]),
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: Name,
    },
    Unknown { rtype: u16, data: &'a [u8] },
}

/// A fully decoded resource record.
#[derive(Debug, Clone, Copy)]
pub struct ResourceRecord<'a> {
    pub name: Name,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: Rdata<'a>,
}

impl<'a> ResourceRecord<'a> {
    pub fn read(reader: &mut Reader<'a>) -> Result<Self, ReaderError> {
        let name = Name::decode(reader)?;
        let rtype = reader.get_u16()?;
        let rclass = reader.get_u16()?;
        let ttl = reader.get_u32()?;
        let rdlength = reader.get_u16()?;
        let rdata_start = reader.pos();

        // Consume exactly rdlength bytes from the live cursor up front, so
        // the next record parses correctly even if a name inside rdata
        // resolves to fewer or more bytes than the declared length implies.
        reader.get_raw(rdlength as usize)?;

        let rdata = parse_rdata(reader.base(), rdata_start, rdlength as usize, rtype)?;

        Ok(Self {
            name,
            rtype,
            rclass,
            ttl,
            rdlength,
            rdata,
        })
    }
}

fn parse_rdata<'a>(
    base: &'a [u8],
    rdata_start: usize,
    rdlength: usize,
    rtype: u16,
) -> Result<Rdata<'a>, ReaderError> {
    let raw = base
        .get(rdata_start..rdata_start + rdlength)
        .ok_or(ReaderError::Empty)?;

    match QueryType::from_code(rtype) {
        QueryType::A => {
            if raw.len() != 4 {
                return Err(ReaderError::Empty);
            }
            Ok(Rdata::A(Ipv4Addr::new(raw[0], raw[1], raw[2], raw[3])))
        }
        QueryType::Aaaa => {
            if raw.len() != 16 {
                return Err(ReaderError::Empty);
            }
            let mut octets = [0u8; 16];
            octets.copy_from_slice(raw);
            Ok(Rdata::Aaaa(Ipv6Addr::from(octets)))
        }
        QueryType::Cname => {
            // Decode against the whole message, not just the rdlength
            // slice: a compression pointer inside the target may need to
            // resolve to bytes earlier in the message than rdata_start.
            let mut name_reader = Reader::at(base, rdata_start)?;
            let target = Name::decode(&mut name_reader)?;
            Ok(Rdata::Cname(target))
        }
        QueryType::Txt => {
            let len = raw.first().copied().ok_or(ReaderError::Empty)? as usize;
            let end = 1 + len;
            Ok(Rdata::Txt(raw.get(1..end).ok_or(ReaderError::Empty)?))
        }
        QueryType::Srv => {
            if raw.len() < 6 {
                return Err(ReaderError::Empty);
            }
            let priority = u16::from_be_bytes([raw[0], raw[1]]);
            let weight = u16::from_be_bytes([raw[2], raw[3]]);
            let port = u16::from_be_bytes([raw[4], raw[5]]);
            let mut name_reader = Reader::at(base, rdata_start + 6)?;
            let target = Name::decode(&mut name_reader)?;
            Ok(Rdata::Srv {
                priority,
                weight,
                port,
                target,
            })
        }
        QueryType::Other(_) => Ok(Rdata::Unknown { rtype, data: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Writer;
    use crate::name::Name;

    fn write_name(out: &mut Writer, dotted: &str) {
        Name::from_dotted(dotted).unwrap().encode(out).unwrap();
    }

    #[test]
    fn parses_a_record() {
        let mut backing = [0u8; 64];
        let mut writer = Writer::new(&mut backing);
        write_name(&mut writer, "example.com");
        writer.put_u16(QueryType::A.code()).unwrap();
        writer.put_u16(1).unwrap();
        writer.put_u32(300).unwrap();
        writer.put_u16(4).unwrap();
        writer.put(&[93, 184, 216, 34]).unwrap();
        let written = writer.written();

        let mut reader = Reader::new(&backing[..written]);
        let rr = ResourceRecord::read(&mut reader).unwrap();
        assert_eq!(rr.name.as_str(), "example.com");
        assert_eq!(rr.rdata, Rdata::A(Ipv4Addr::new(93, 184, 216, 34)));
        assert_eq!(reader.pos(), written);
    }

    #[test]
    fn parses_txt_as_borrowed_slice() {
        let mut backing = [0u8; 64];
        let mut writer = Writer::new(&mut backing);
        write_name(&mut writer, "example.com");
        writer.put_u16(QueryType::Txt.code()).unwrap();
        writer.put_u16(1).unwrap();
        writer.put_u32(60).unwrap();
        writer.put_u16(6).unwrap();
        writer.put(&[5]).unwrap(); // character-string length prefix
        writer.put(b"hello").unwrap();
        let written = writer.written();

        let mut reader = Reader::new(&backing[..written]);
        let rr = ResourceRecord::read(&mut reader).unwrap();
        assert_eq!(rr.rdata, Rdata::Txt(b"hello"));
    }

    #[test]
    fn parses_cname_with_compression_pointer_to_earlier_question() {
        let mut backing = [0u8; 64];
        let mut writer = Writer::new(&mut backing);
        write_name(&mut writer, "example.com"); // offset 0
        let cname_rr_start = writer.written();
        writer.put(&[0xC0, 0x00]).unwrap(); // name: pointer back to offset 0
        writer.put_u16(QueryType::Cname.code()).unwrap();
        writer.put_u16(1).unwrap();
        writer.put_u32(60).unwrap();
        writer.put_u16(2).unwrap();
        writer.put(&[0xC0, 0x00]).unwrap(); // rdata: pointer back to offset 0
        let written = writer.written();

        let mut reader = Reader::at(&backing[..written], cname_rr_start).unwrap();
        let rr = ResourceRecord::read(&mut reader).unwrap();
        assert_eq!(rr.rdata, Rdata::Cname(Name::from_dotted("example.com").unwrap()));
    }

    #[test]
    fn unknown_type_round_trips_raw_bytes() {
        let mut backing = [0u8; 64];
        let mut writer = Writer::new(&mut backing);
        write_name(&mut writer, "example.com");
        writer.put_u16(999).unwrap();
        writer.put_u16(1).unwrap();
        writer.put_u32(0).unwrap();
        writer.put_u16(3).unwrap();
        writer.put(&[9, 9, 9]).unwrap();
        let written = writer.written();

        let mut reader = Reader::new(&backing[..written]);
        let rr = ResourceRecord::read(&mut reader).unwrap();
        assert_eq!(
            rr.rdata,
            Rdata::Unknown {
                rtype: 999,
                data: &[9, 9, 9]
            }
        );
    }
}
