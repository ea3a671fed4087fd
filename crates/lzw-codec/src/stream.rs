// Zapis i odczyt 2-bajtowych slotów strumienia kodów

use std::io::{self, Read, Write};

use lzw_dict::codes::Code;

use crate::error::{CodecError, Result};

/// Zapisuje kody jako 2-bajtowe sloty little-endian.
///
/// Format strumienia: `START, c1, ..., cn, STOP` — bez prefiksu długości,
/// bez sumy kontrolnej i bez serializacji słownika; strumień jest
/// samoopisujący wyłącznie w połączeniu ze stałą regułą zasiewania słownika.
#[derive(Debug)]
pub struct CodeWriter<W: Write> {
    sink: W,
}

impl<W: Write> CodeWriter<W> {
    pub fn new(sink: W) -> Self {
        CodeWriter { sink }
    }

    /// Zapisuje jeden kod do strumienia.
    pub fn write_code(&mut self, code: Code) -> Result<()> {
        self.sink.write_all(&code.to_le_bytes())?;
        Ok(())
    }
}

/// Czyta kody z 2-bajtowych slotów little-endian.
#[derive(Debug)]
pub struct CodeReader<R: Read> {
    source: R,
}

impl<R: Read> CodeReader<R> {
    pub fn new(source: R) -> Self {
        CodeReader { source }
    }

    /// Czyta jeden kod ze strumienia.
    ///
    /// # Błędy
    ///
    /// Koniec danych — zarówno przed slotem, jak i w jego połowie —
    /// to `TruncatedStream`; pozostałe problemy I/O przechodzą jako `Io`.
    pub fn read_code(&mut self) -> Result<Code> {
        let mut slot = [0u8; 2];
        self.source.read_exact(&mut slot).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                CodecError::TruncatedStream
            } else {
                CodecError::Io(e)
            }
        })?;
        Ok(Code::from_le_bytes(slot))
    }
}
