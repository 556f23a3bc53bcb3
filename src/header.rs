use crate::error::{Error, Result};
use crate::huffman::{FrequencyTable, Symbol};
use std::io::{Read, Write};

/// Artifact magic bytes
pub const MAGIC: [u8; 4] = *b"HUF1";

/// Maximum number of header entries: 256 byte values plus end-of-data
const MAX_ENTRIES: u16 = Symbol::COUNT as u16;

// Header layout, all fields little-endian and byte-aligned, written before
// the bit payload:
//
//   magic        4 bytes   "HUF1"
//   entry count  u16
//   per entry:
//     symbol     u16       0-255 = byte value, 256 = end-of-data
//     count      u64
//
// Entries appear in ascending symbol order. The header alone is enough to
// rebuild the exact encoding tree used for the payload.

/// Serialize `table` to `writer`
pub fn write_header<W: Write>(writer: &mut W, table: &FrequencyTable) -> Result<()> {
    writer.write_all(&MAGIC)?;

    let entry_count = table.len() as u16;
    writer.write_all(&entry_count.to_le_bytes())?;

    for (symbol, count) in table.entries() {
        writer.write_all(&(symbol.index() as u16).to_le_bytes())?;
        writer.write_all(&count.to_le_bytes())?;
    }
    Ok(())
}

/// Parse a header back into a frequency table.
///
/// Fails fast on anything that would not rebuild a valid table: wrong
/// magic, zero or oversized entry count, out-of-range or duplicate
/// symbols, zero counts, or a missing end-of-data entry.
pub fn read_header<R: Read>(reader: &mut R) -> Result<FrequencyTable> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(|_| Error::UnexpectedEof)?;
    if magic != MAGIC {
        return Err(Error::InvalidMagic(magic));
    }

    let entry_count = read_u16_le(reader)?;
    if entry_count == 0 {
        return Err(Error::EmptyHeader);
    }
    if entry_count > MAX_ENTRIES {
        return Err(Error::OversizedHeader(entry_count));
    }

    let mut table = FrequencyTable::empty();
    for _ in 0..entry_count {
        let raw_symbol = read_u16_le(reader)?;
        let count = read_u64_le(reader)?;

        let symbol = Symbol::from_index(raw_symbol as usize)
            .ok_or(Error::InvalidHeaderSymbol(raw_symbol))?;
        if count == 0 {
            return Err(Error::ZeroFrequency(raw_symbol));
        }
        if table.count(symbol) != 0 {
            return Err(Error::DuplicateHeaderSymbol(raw_symbol));
        }
        table.set(symbol, count);
    }

    if table.count(Symbol::EndOfData) == 0 {
        return Err(Error::MissingEndOfData);
    }
    Ok(table)
}

fn read_u16_le<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf).map_err(|_| Error::UnexpectedEof)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u64_le<R: Read>(reader: &mut R) -> Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf).map_err(|_| Error::UnexpectedEof)?;
    Ok(u64::from_le_bytes(buf))
}
