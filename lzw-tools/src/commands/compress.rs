// Komenda compress

use std::fs;
use std::path::Path;

use lzw_codec::encoder::Encoder;

use crate::error::Result;

/// Czyta plik wejściowy w całości, koduje go i zapisuje strumień kodów.
pub fn run(input: &Path, output: &Path) -> Result<()> {
    let data = fs::read(input)?;
    let encoded = Encoder::new().encode(&data)?;
    fs::write(output, &encoded)?;

    println!(
        "Skompresowano {} ({} B) -> {} ({} B)",
        input.display(),
        data.len(),
        output.display(),
        encoded.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    #[test]
    fn test_compress_writes_framed_stream() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("wejscie.txt");
        let output = dir.path().join("wyjscie.lzw");
        fs::write(&input, b"itty bitty bit bin").unwrap();

        run(&input, &output).unwrap();

        let encoded = fs::read(&output).unwrap();
        assert_eq!(&encoded[..2], &[0x00, 0x01]);
        assert_eq!(&encoded[encoded.len() - 2..], &[0x01, 0x01]);
    }

    #[test]
    fn test_compress_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &dir.path().join("nie-ma-takiego-pliku"),
            &dir.path().join("wyjscie.lzw"),
        );
        assert!(matches!(result, Err(ToolError::Io(_))));
    }
}
