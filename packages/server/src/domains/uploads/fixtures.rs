//! Archive fixtures for unit tests.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip method id for bzip2, which this build cannot decompress.
pub(crate) const BZIP2_METHOD: u16 = 12;

const LOCAL_HEADER_SIG: &[u8] = b"PK\x03\x04";
const CENTRAL_HEADER_SIG: &[u8] = b"PK\x01\x02";

/// In-memory zip with the given `(name, contents)` members, in order.
pub(crate) fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, body) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Rewrite the compression method recorded for the `entry`-th member.
///
/// Only the headers change; the stored data is left as is. Member contents
/// must not contain the header signatures.
pub(crate) fn set_compression_method(bytes: &mut [u8], entry: usize, method: u16) {
    let local = nth_offset(bytes, LOCAL_HEADER_SIG, entry) + 8;
    let central = nth_offset(bytes, CENTRAL_HEADER_SIG, entry) + 10;
    for offset in [local, central] {
        bytes[offset..offset + 2].copy_from_slice(&method.to_le_bytes());
    }
}

fn nth_offset(bytes: &[u8], signature: &[u8], n: usize) -> usize {
    bytes
        .windows(signature.len())
        .enumerate()
        .filter(|(_, window)| *window == signature)
        .nth(n)
        .map(|(offset, _)| offset)
        .expect("zip header not found")
}
