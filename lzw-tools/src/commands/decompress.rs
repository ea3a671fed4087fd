// Komenda decompress

use std::fs;
use std::path::Path;

use lzw_codec::decoder::Decoder;

use crate::error::Result;

/// Czyta strumień kodów z pliku, dekoduje go i zapisuje odtworzone bajty.
pub fn run(input: &Path, output: &Path) -> Result<()> {
    let data = fs::read(input)?;
    let decoded = Decoder::new().decode(&data)?;
    fs::write(output, &decoded)?;

    println!(
        "Zdekompresowano {} ({} B) -> {} ({} B)",
        input.display(),
        data.len(),
        output.display(),
        decoded.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::compress;
    use crate::error::ToolError;
    use lzw_codec::error::CodecError;

    #[test]
    fn test_compress_then_decompress_round_trips_file() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("oryginal.txt");
        let packed = dir.path().join("oryginal.lzw");
        let restored = dir.path().join("odtworzony.txt");
        fs::write(&original, b"itty bitty bit bin").unwrap();

        compress::run(&original, &packed).unwrap();
        run(&packed, &restored).unwrap();

        assert_eq!(fs::read(&restored).unwrap(), b"itty bitty bit bin");
    }

    #[test]
    fn test_decompress_rejects_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = dir.path().join("smieci.lzw");
        fs::write(&garbage, b"to nie jest strumien kodow").unwrap();

        let result = run(&garbage, &dir.path().join("wyjscie.txt"));
        assert!(matches!(
            result,
            Err(ToolError::Codec(CodecError::MissingStart))
        ));
    }
}
