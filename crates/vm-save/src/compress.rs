//! Gzip helpers for map files

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::SaveError;

/// Compress a buffer using gzip
pub fn compress(data: &[u8]) -> Result<Vec<u8>, SaveError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress a gzip buffer
///
/// Corrupt or truncated input is a decode failure, not an I/O failure.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>, SaveError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| SaveError::Decode(format!("gzip: {e}")))?;
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_shrinks_repetitive_data() {
        let data = "#".repeat(10_000);
        let packed = compress(data.as_bytes()).unwrap();
        assert!(packed.len() < 200);
        assert_eq!(decompress(&packed).unwrap(), data.as_bytes());
    }

    #[test]
    fn test_not_gzip() {
        let result = decompress(b"{\"plain\": \"json\"}");
        assert!(matches!(result, Err(SaveError::Decode(_))));
    }

    #[test]
    fn test_truncated() {
        let data = "floor wall ".repeat(500);
        let packed = compress(data.as_bytes()).unwrap();
        // Either the decoder notices the missing trailer or the output is short
        match decompress(&packed[..packed.len() / 2]) {
            Err(SaveError::Decode(_)) => {}
            Ok(partial) => assert_ne!(partial, data.as_bytes()),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
