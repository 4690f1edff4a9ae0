//! Binary encoding of a catalog snapshot.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! magic     4 bytes  "LBAR"
//! version   u16
//! count     u32      number of records
//! record*   tag u8 | len u32 | JSON payload
//! checksum  u32      CRC32 of every preceding byte
//! ```
//!
//! The tag selects the variant (1 = book, 2 = magazine) and the payload holds
//! that variant's fields.

use crate::domain::model::{Book, CatalogItem, Magazine};
use crate::utils::error::{LibraryError, Result};
use crc32fast::Hasher;
use serde::de::DeserializeOwned;

pub const MAGIC: [u8; 4] = *b"LBAR";
pub const FORMAT_VERSION: u16 = 1;

const TAG_BOOK: u8 = 1;
const TAG_MAGAZINE: u8 = 2;

const HEADER_LEN: usize = 4 + 2 + 4;
const CHECKSUM_LEN: usize = 4;

pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

pub fn encode(items: &[CatalogItem]) -> Result<Vec<u8>> {
    let count = u32::try_from(items.len())
        .map_err(|_| LibraryError::malformed("too many items for one archive"))?;

    let mut buf = Vec::with_capacity(HEADER_LEN + CHECKSUM_LEN + items.len() * 128);
    buf.extend_from_slice(&MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());

    for item in items {
        let (tag, payload) = match item {
            CatalogItem::Book(book) => (TAG_BOOK, serde_json::to_vec(book)?),
            CatalogItem::Magazine(magazine) => (TAG_MAGAZINE, serde_json::to_vec(magazine)?),
        };
        let len = u32::try_from(payload.len()).map_err(|_| {
            LibraryError::malformed(format!("record for ISBN {} is too large", item.isbn()))
        })?;

        buf.push(tag);
        buf.extend_from_slice(&len.to_le_bytes());
        buf.extend_from_slice(&payload);
    }

    let checksum = compute_checksum(&buf);
    buf.extend_from_slice(&checksum.to_le_bytes());
    Ok(buf)
}

pub fn decode(data: &[u8]) -> Result<Vec<CatalogItem>> {
    if data.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(LibraryError::malformed(format!(
            "archive is too short ({} bytes)",
            data.len()
        )));
    }

    let (body, footer) = data.split_at(data.len() - CHECKSUM_LEN);
    let mut footer = Reader::new(footer);
    let expected = footer.read_u32()?;
    let actual = compute_checksum(body);
    if expected != actual {
        return Err(LibraryError::malformed(format!(
            "checksum mismatch (expected {:08x}, found {:08x})",
            expected, actual
        )));
    }

    let mut reader = Reader::new(body);
    if reader.take(MAGIC.len())? != MAGIC {
        return Err(LibraryError::malformed("not a catalog archive"));
    }

    let version = reader.read_u16()?;
    if version != FORMAT_VERSION {
        return Err(LibraryError::malformed(format!(
            "unsupported format version {}",
            version
        )));
    }

    let count = reader.read_u32()?;
    let mut items = Vec::new();
    for index in 0..count {
        let tag = reader.read_u8()?;
        let len = reader.read_u32()? as usize;
        let payload = reader.take(len)?;

        let item = match tag {
            TAG_BOOK => CatalogItem::Book(parse_payload::<Book>(payload, index)?),
            TAG_MAGAZINE => CatalogItem::Magazine(parse_payload::<Magazine>(payload, index)?),
            other => {
                return Err(LibraryError::malformed(format!(
                    "record {} has unknown type tag {}",
                    index, other
                )))
            }
        };
        items.push(item);
    }

    if !reader.is_empty() {
        return Err(LibraryError::malformed(format!(
            "{} unexpected trailing bytes after {} records",
            reader.remaining(),
            count
        )));
    }

    Ok(items)
}

fn parse_payload<T: DeserializeOwned>(payload: &[u8], index: u32) -> Result<T> {
    serde_json::from_slice(payload)
        .map_err(|e| LibraryError::malformed(format!("record {} is invalid: {}", index, e)))
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| {
                LibraryError::malformed(format!(
                    "unexpected end of archive at byte {} (wanted {} more)",
                    self.pos, len
                ))
            })?;
        let data = self.data;
        let slice = &data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16> {
        let mut bytes = [0u8; 2];
        bytes.copy_from_slice(self.take(2)?);
        Ok(u16::from_le_bytes(bytes))
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(bytes))
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
