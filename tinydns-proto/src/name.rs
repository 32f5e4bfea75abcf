use std::fmt;

use crate::buffer::{Reader, ReaderError, Writer, WriterError};

/// Maximum encoded length of a domain name on the wire (RFC 1035 §3.1).
pub const NAME_MAX: usize = 255;
const LABEL_MAX: usize = 63;

/// A domain name, stored as a fixed-capacity dotted-form buffer with no
/// heap allocation. Never includes a leading or trailing dot, and never
/// counts a trailing NUL in its length.
#[derive(Clone, Copy)]
pub struct Name {
    buf: [u8; NAME_MAX],
    len: usize,
}

impl Name {
    pub const EMPTY: Name = Name {
        buf: [0u8; NAME_MAX],
        len: 0,
    };

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Builds a `Name` from an already-dotted string such as `example.com`,
    /// used by the query builder. Rejects labels over 63 bytes and names
    /// over the wire limit.
    pub fn from_dotted(s: &str) -> Result<Self, WriterError> {
        if s.len() >= NAME_MAX {
            return Err(WriterError::TooSmall);
        }
        for label in s.split('.') {
            if label.len() > LABEL_MAX {
                return Err(WriterError::LabelTooLong);
            }
        }
        let mut name = Name::EMPTY;
        name.buf[..s.len()].copy_from_slice(s.as_bytes());
        name.len = s.len();
        Ok(name)
    }

    /// Encodes this name as a sequence of length-prefixed labels terminated
    /// by a zero-length label. Never emits compression pointers: queries
    /// built by this library always spell the question name out in full.
    pub fn encode(&self, out: &mut Writer) -> Result<(), WriterError> {
        if self.is_empty() {
            return out.put_u8(0);
        }
        for label in self.as_str().split('.') {
            if label.len() > LABEL_MAX {
                return Err(WriterError::LabelTooLong);
            }
            out.put_u8(label.len() as u8)?;
            out.put(label.as_bytes())?;
        }
        out.put_u8(0)
    }

    /// Decodes a name starting at `reader`'s current position, following
    /// compression pointers as needed, and advances `reader` past the
    /// encoded form (exactly past the two pointer bytes on the hop where a
    /// pointer was first seen, matching the wire size of the reference
    /// rather than the expanded size).
    pub fn decode(reader: &mut Reader) -> Result<Self, ReaderError> {
        let mut scratch = [0u8; NAME_MAX + 2];
        let mut writer = Writer::new(&mut scratch);
        let start = reader.pos();
        let end = decode_inner(reader.base(), start, reader.limit(), &mut writer, 0)?;
        let produced = writer.as_slice();

        // `produced` is `.label.label...\0` (leading dot from the label
        // codec always prefixing each label, trailing NUL from the
        // terminator). Strip both: the stored Name never carries them.
        let trimmed = match produced.split_last() {
            Some((0, rest)) => rest,
            _ => produced,
        };
        let trimmed = if trimmed.first() == Some(&b'.') {
            &trimmed[1..]
        } else {
            trimmed
        };
        if trimmed.len() >= NAME_MAX {
            return Err(ReaderError::NameTooLong);
        }

        let mut name = Name::EMPTY;
        name.buf[..trimmed.len()].copy_from_slice(trimmed);
        name.len = trimmed.len();

        reader.step(end - start).map_err(|_| ReaderError::Empty)?;
        Ok(name)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Name {}

/// Follows the label chain starting at `pos` inside `base`, bounded above
/// by `limit`, writing the dotted form (with leading dot and terminator)
/// into `out`. Returns the absolute position in `base` immediately past
/// the encoded reference at the *outermost* call's own level: the byte
/// right after the terminator for a plain name, or right after the two
/// pointer bytes on the hop a pointer was first taken.
///
/// `depth` guards against pathological but structurally-valid pointer
/// chains (each hop must strictly decrease its target, which already
/// guarantees termination, but a cheap recursion cap keeps stack use
/// bounded independent of that proof).
fn decode_inner(
    base: &[u8],
    mut pos: usize,
    limit: usize,
    out: &mut Writer,
    depth: usize,
) -> Result<usize, ReaderError> {
    if depth > 128 {
        return Err(ReaderError::PointerNotBackward);
    }
    loop {
        if pos >= limit {
            return Err(ReaderError::Empty);
        }
        let marker = base[pos];
        if marker & 0xC0 == 0xC0 {
            if pos + 1 >= limit {
                return Err(ReaderError::Empty);
            }
            let target = (((marker as u16) & 0x3F) << 8) | base[pos + 1] as u16;
            let target = target as usize;
            let current = pos;
            if target >= current {
                return Err(ReaderError::PointerNotBackward);
            }
            decode_inner(base, target, current, out, depth + 1)?;
            return Ok(pos + 2);
        } else if marker & 0xC0 != 0 {
            return Err(ReaderError::MalformedName);
        } else if marker == 0 {
            out.put_u8(0).map_err(|_| ReaderError::NameTooLong)?;
            return Ok(pos + 1);
        } else {
            let label_len = marker as usize;
            if label_len > LABEL_MAX {
                return Err(ReaderError::LabelTooLong);
            }
            let label_start = pos + 1;
            let label_end = label_start + label_len;
            if label_end > limit {
                return Err(ReaderError::Empty);
            }
            out.put_u8(b'.').map_err(|_| ReaderError::NameTooLong)?;
            out.put(&base[label_start..label_end])
                .map_err(|_| ReaderError::NameTooLong)?;
            pos = label_end;
        }
    }
}
