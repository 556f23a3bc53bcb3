use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Header errors
    #[error("Invalid magic bytes: expected \"HUF1\", got {0:02x?}")]
    InvalidMagic([u8; 4]),

    #[error("Header contains no frequency entries")]
    EmptyHeader,

    #[error("Header declares {0} entries, more than the 257-symbol alphabet")]
    OversizedHeader(u16),

    #[error("Invalid symbol index in header: {0} (max 256)")]
    InvalidHeaderSymbol(u16),

    #[error("Symbol {0} listed twice in header")]
    DuplicateHeaderSymbol(u16),

    #[error("Symbol {0} has zero frequency in header")]
    ZeroFrequency(u16),

    #[error("No end-of-data entry present")]
    MissingEndOfData,

    // Bitstream errors
    #[error("Bitstream ended before the end-of-data code ({bytes_decoded} bytes decoded)")]
    TruncatedStream { bytes_decoded: u64 },

    #[error("Unexpected end of input")]
    UnexpectedEof,

    // Encoding errors
    #[error("Byte 0x{0:02x} has no code in the encoding map")]
    SymbolNotInTable(u8),

    // Naming contract errors
    #[error("Not a compressed artifact: {} lacks the .huf suffix", .0.display())]
    MissingSuffix(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
