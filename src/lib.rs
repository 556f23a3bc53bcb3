pub mod bits;
pub mod error;
pub mod header;
pub mod huffman;
pub mod pipeline;

pub use error::{Error, Result};
pub use huffman::{
    Decoder, EncodeSummary, Encoder, EncodingMap, EncodingTree, FrequencyTable, Symbol, TreeNode,
};
pub use pipeline::{
    compress, compress_bytes, compressed_path, decompress, decompress_bytes, reconstructed_path,
    COMPRESSED_SUFFIX, RECONSTRUCTED_TAG,
};

use std::path::PathBuf;

/// Totals from one compression run
#[derive(Clone, Debug)]
pub struct CompressReport {
    /// Path of the written artifact
    pub output: PathBuf,
    /// Bytes read from the source
    pub input_bytes: u64,
    /// Bytes written, header included
    pub output_bytes: u64,
    /// Bits in the encoded payload, terminator included
    pub payload_bits: u64,
    /// The payload as '0'/'1' characters, for verification
    pub bit_string: String,
}

/// Totals from one decompression run
#[derive(Clone, Debug)]
pub struct DecompressReport {
    /// Path of the recovered file
    pub output: PathBuf,
    /// Bytes recovered
    pub output_bytes: u64,
}
