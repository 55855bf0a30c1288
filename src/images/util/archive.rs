use std::io::{Cursor, Read};

use zip::{result::ZipError, ZipArchive};

/// Reads the first entry of a zip archive. The entry name is not checked.
pub fn read_first_entry(data: &[u8]) -> Result<Vec<u8>, ZipError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    if archive.is_empty() {
        return Err(ZipError::FileNotFound);
    }

    let mut file = archive.by_index(0)?;
    tracing::debug!(name = file.name(), size = file.size(), "unpacking archive entry");

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::{write::FileOptions, CompressionMethod, ZipWriter};

    use super::*;

    fn archive_of(entries: &[(&str, &[u8])], method: CompressionMethod) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(method);

        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }

        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn reads_stored_entry() {
        let data = archive_of(
            &[("image_0.png", &b"\x89PNG fake"[..])],
            CompressionMethod::Stored,
        );
        assert_eq!(read_first_entry(&data).unwrap(), b"\x89PNG fake");
    }

    #[test]
    fn reads_deflated_entry() {
        let image = vec![7_u8; 4096];
        let data = archive_of(
            &[("image_0.png", image.as_slice())],
            CompressionMethod::Deflated,
        );
        assert_eq!(read_first_entry(&data).unwrap(), image);
    }

    #[test]
    fn takes_first_entry_in_listing_order() {
        let data = archive_of(
            &[("b.png", &b"first"[..]), ("a.png", &b"second"[..])],
            CompressionMethod::Stored,
        );
        assert_eq!(read_first_entry(&data).unwrap(), b"first");
    }

    #[test]
    fn empty_archive_is_an_error() {
        let data = archive_of(&[], CompressionMethod::Stored);
        assert!(matches!(read_first_entry(&data), Err(ZipError::FileNotFound)));
    }

    #[test]
    fn corrupt_archive_is_an_error() {
        assert!(read_first_entry(b"definitely not a zip").is_err());
        assert!(read_first_entry(b"").is_err());
    }
}
