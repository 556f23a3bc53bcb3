use crate::bits::BitReader;
use crate::error::{Error, Result};
use crate::huffman::{EncodingTree, Symbol, TreeNode};
use std::io::{Read, Write};

/// Walks the encoding tree bit by bit, emitting a byte at each leaf, until
/// the end-of-data code terminates the stream.
pub struct Decoder<'a> {
    tree: &'a EncodingTree,
}

impl<'a> Decoder<'a> {
    pub fn new(tree: &'a EncodingTree) -> Self {
        Self { tree }
    }

    /// Decode until the end-of-data code and return the number of bytes
    /// written.
    ///
    /// Bit-source exhaustion before the terminator is a truncated stream
    /// and fails; it is never reported as success.
    pub fn decode<R: Read, W: Write>(
        &self,
        bits: &mut BitReader<R>,
        output: &mut W,
    ) -> Result<u64> {
        let mut bytes_decoded = 0u64;
        let mut node = self.tree.root();

        loop {
            // A bit is always consumed before the leaf test, so on a
            // single-leaf tree the "0" code decodes one symbol instead of
            // terminating before reading anything.
            let bit = match bits.read_bit() {
                Ok(bit) => bit,
                Err(Error::UnexpectedEof) => {
                    return Err(Error::TruncatedStream { bytes_decoded })
                }
                Err(e) => return Err(e),
            };

            node = match node {
                TreeNode::Internal { left, right, .. } => {
                    if bit {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    }
                }
                // Single-leaf tree: every descent lands back on the root
                leaf => leaf,
            };

            if let TreeNode::Leaf { symbol, .. } = node {
                match symbol {
                    Symbol::EndOfData => return Ok(bytes_decoded),
                    Symbol::Byte(byte) => {
                        output.write_all(&[*byte])?;
                        bytes_decoded += 1;
                        node = self.tree.root();
                    }
                }
            }
        }
    }
}
