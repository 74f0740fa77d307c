// src/io/sequence.rs
use crate::error::{Error, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Open a sequence file for reading, gzipped files are decoded transparently
pub fn open_sequence<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read a query sequence.
///
/// Plain text is returned as-is apart from trailing line terminators, so a
/// line break still separates repeats. FASTA (first non-blank line starts
/// with `>`) has its wrapped lines joined, and only the first record is
/// returned.
pub fn read_sequence<R: BufRead>(mut reader: R) -> std::io::Result<String> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    if !contents.trim_start().starts_with('>') {
        let end = contents.trim_end_matches(['\r', '\n']).len();
        contents.truncate(end);
        return Ok(contents);
    }

    let mut sequence = String::new();
    let mut records = 0;
    for line in contents.lines() {
        let line = line.trim();
        if line.starts_with('>') {
            records += 1;
            if records > 1 {
                break;
            }
            continue;
        }
        sequence.push_str(line);
    }

    Ok(sequence)
}

pub fn load_sequence<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let reader = open_sequence(path)?;
    let sequence = read_sequence(reader).map_err(|e| Error::io(path, e))?;
    tracing::debug!("Read {} bases from {}", sequence.len(), path.display());
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};

    #[test]
    fn test_plain_sequence_trailing_newline() {
        let seq = read_sequence(Cursor::new("AATGAATG\n")).unwrap();
        assert_eq!(seq, "AATGAATG");
    }

    #[test]
    fn test_plain_lines_are_not_joined() {
        let seq = read_sequence(Cursor::new("AATG\nAATG\n")).unwrap();
        assert_eq!(seq, "AATG\nAATG");
        assert_eq!(crate::repeat::longest_run(&seq, "AATG").unwrap(), 1);
    }

    #[test]
    fn test_plain_crlf_terminator_stripped() {
        assert_eq!(read_sequence(Cursor::new("TATCTATC\r\n")).unwrap(), "TATCTATC");
    }

    #[test]
    fn test_wrapped_fasta_first_record_only() {
        let input = ">read1 sample\nAGAT\nAGAT\n>read2\nTTTT\n";
        let seq = read_sequence(Cursor::new(input)).unwrap();
        assert_eq!(seq, "AGATAGAT");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(read_sequence(Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn test_load_gzipped_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.txt.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b">query\nTATCTATC\nTATC\n").unwrap();
        encoder.finish().unwrap();

        assert_eq!(load_sequence(&path).unwrap(), "TATCTATCTATC");
    }

    #[test]
    fn test_missing_file() {
        let err = load_sequence("/nonexistent/query.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
