use crate::bits::BitWriter;
use crate::error::{Error, Result};
use crate::huffman::{EncodingMap, Symbol};
use std::io::Read;

/// Totals from one encoding pass.
#[derive(Clone, Debug, Default)]
pub struct EncodeSummary {
    /// Bits emitted, terminator included
    pub bits_written: u64,
    /// The emitted bit sequence as '0'/'1' characters, for verification
    pub bit_string: String,
}

/// Translates input bytes into their bit codes and terminates the stream
/// with the end-of-data code.
pub struct Encoder<'a> {
    map: &'a EncodingMap,
}

impl<'a> Encoder<'a> {
    pub fn new(map: &'a EncodingMap) -> Self {
        Self { map }
    }

    /// Encode `input` into `writer`.
    ///
    /// A byte with no code in the map means the map was built from a
    /// different source than the one being encoded; that is fatal rather
    /// than skipped, since skipping would produce an undecodable stream.
    pub fn encode<R: Read>(&self, mut input: R, writer: &mut BitWriter) -> Result<EncodeSummary> {
        let mut bit_string = String::new();
        let mut buf = [0u8; 8192];

        loop {
            match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        let code = self
                            .map
                            .code(Symbol::Byte(byte))
                            .ok_or(Error::SymbolNotInTable(byte))?;
                        writer.write_code(code);
                        bit_string.push_str(code);
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                    // Retry on interrupt
                }
                Err(e) => return Err(e.into()),
            }
        }

        let terminator = self.map.code(Symbol::EndOfData).ok_or(Error::MissingEndOfData)?;
        writer.write_code(terminator);
        bit_string.push_str(terminator);

        Ok(EncodeSummary { bits_written: bit_string.len() as u64, bit_string })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::{EncodingTree, FrequencyTable};

    fn map_for(input: &[u8]) -> EncodingMap {
        let table = FrequencyTable::from_bytes(input);
        let tree = EncodingTree::from_frequencies(&table);
        EncodingMap::from_tree(&tree)
    }

    #[test]
    fn test_bit_string_is_concatenated_codes() {
        let data = b"aabb";
        let map = map_for(data);
        let mut writer = BitWriter::new();

        let summary = Encoder::new(&map).encode(data.as_slice(), &mut writer).unwrap();

        let mut expected = String::new();
        for &byte in data.iter() {
            expected.push_str(map.code(Symbol::Byte(byte)).unwrap());
        }
        expected.push_str(map.code(Symbol::EndOfData).unwrap());

        assert_eq!(summary.bit_string, expected);
        assert_eq!(summary.bits_written, expected.len() as u64);
        assert_eq!(summary.bits_written, writer.bits_written());
    }

    #[test]
    fn test_empty_input_emits_only_terminator() {
        let map = map_for(b"");
        let mut writer = BitWriter::new();

        let summary = Encoder::new(&map).encode(b"".as_slice(), &mut writer).unwrap();

        assert_eq!(summary.bit_string, "0");
        assert_eq!(summary.bits_written, 1);
    }

    #[test]
    fn test_unmapped_byte_is_fatal() {
        // Map built from "aaa" has no code for 'b'
        let map = map_for(b"aaa");
        let mut writer = BitWriter::new();

        let result = Encoder::new(&map).encode(b"ab".as_slice(), &mut writer);

        assert!(matches!(result, Err(Error::SymbolNotInTable(b'b'))));
    }

    #[test]
    fn test_terminator_is_emitted_once_at_end() {
        let data = b"xyz";
        let map = map_for(data);
        let mut writer = BitWriter::new();

        let summary = Encoder::new(&map).encode(data.as_slice(), &mut writer).unwrap();
        let terminator = map.code(Symbol::EndOfData).unwrap();

        assert!(summary.bit_string.ends_with(terminator));
    }
}
