use std::fs::{self, File};
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::header;
use crate::huffman::{
    Decoder, EncodeSummary, Encoder, EncodingMap, EncodingTree, FrequencyTable,
};
use crate::{CompressReport, DecompressReport};

/// Suffix appended to compressed artifacts
pub const COMPRESSED_SUFFIX: &str = "huf";

/// Tag inserted into recovered file names so outputs never collide with
/// their originals
pub const RECONSTRUCTED_TAG: &str = "_reconstructed";

/// Compress the file at `input` into `<input>.huf`.
///
/// Two passes over the source: one to count frequencies, one to encode.
/// The artifact is assembled fully in memory and written only after the
/// encode succeeds, so a failure never leaves a partial file behind.
pub fn compress(input: &Path) -> Result<CompressReport> {
    let mut source = BufReader::new(File::open(input)?);
    let table = FrequencyTable::from_reader(&mut source)?;

    source.seek(SeekFrom::Start(0))?;
    let (artifact, summary) = encode_to_artifact(&mut source, &table)?;

    let output = compressed_path(input);
    fs::write(&output, &artifact)?;

    Ok(CompressReport {
        output,
        input_bytes: table.total_bytes(),
        output_bytes: artifact.len() as u64,
        payload_bits: summary.bits_written,
        bit_string: summary.bit_string,
    })
}

/// Decompress the artifact at `input`, writing the recovered bytes to the
/// reconstructed path derived from its name.
///
/// The recovered bytes are held in memory until the decode completes, so a
/// malformed or truncated artifact never leaves a partial output file.
pub fn decompress(input: &Path) -> Result<DecompressReport> {
    let output = reconstructed_path(input)?;

    let mut reader = BufReader::new(File::open(input)?);
    let recovered = decode_stream(&mut reader)?;
    fs::write(&output, &recovered)?;

    Ok(DecompressReport { output, output_bytes: recovered.len() as u64 })
}

/// In-memory compression: same header and bitstream bytes as [`compress`]
pub fn compress_bytes(input: &[u8]) -> Result<(Vec<u8>, EncodeSummary)> {
    let table = FrequencyTable::from_bytes(input);
    encode_to_artifact(&mut &input[..], &table)
}

/// In-memory decompression of a complete artifact
pub fn decompress_bytes(artifact: &[u8]) -> Result<Vec<u8>> {
    decode_stream(&mut &artifact[..])
}

fn encode_to_artifact<R: Read>(
    source: &mut R,
    table: &FrequencyTable,
) -> Result<(Vec<u8>, EncodeSummary)> {
    let tree = EncodingTree::from_frequencies(table);
    let map = EncodingMap::from_tree(&tree);

    let mut artifact = Vec::new();
    header::write_header(&mut artifact, table)?;

    let mut bits = BitWriter::new();
    let summary = Encoder::new(&map).encode(source, &mut bits)?;
    artifact.extend_from_slice(&bits.finish());

    Ok((artifact, summary))
}

fn decode_stream<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let table = header::read_header(reader)?;
    let tree = EncodingTree::from_frequencies(&table);

    let mut bits = BitReader::new(reader);
    let mut recovered = Vec::new();
    Decoder::new(&tree).decode(&mut bits, &mut recovered)?;

    Ok(recovered)
}

/// `report.txt` -> `report.txt.huf`
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(COMPRESSED_SUFFIX);
    PathBuf::from(name)
}

/// `report.txt.huf` -> `report_reconstructed.txt`
///
/// Rejects paths that do not carry the compressed suffix.
pub fn reconstructed_path(artifact: &Path) -> Result<PathBuf> {
    if artifact.extension().and_then(|e| e.to_str()) != Some(COMPRESSED_SUFFIX) {
        return Err(Error::MissingSuffix(artifact.to_path_buf()));
    }

    let original = artifact.with_extension("");
    let stem = original.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let file_name = match original.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{RECONSTRUCTED_TAG}.{ext}"),
        None => format!("{stem}{RECONSTRUCTED_TAG}"),
    };
    Ok(original.with_file_name(file_name))
}
