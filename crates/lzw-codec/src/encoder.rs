// Plik dla kodera LZW

use std::io::Write;

use lzw_dict::codes::{Code, START_CODE, STOP_CODE};
use lzw_dict::dictionary::Dictionary;

use crate::error::Result;
use crate::stream::CodeWriter;

/// Koder LZW: zamienia sekwencję bajtów na strumień kodów.
///
/// Koder jest wyłącznym właścicielem świeżego, zasianego słownika.
/// Słownik żyje dokładnie jeden przebieg i nie jest nigdzie przesyłany —
/// dekoder odtwarza identyczny słownik wyłącznie ze strumienia kodów,
/// stosując tę samą deterministyczną regułę wzrostu. Metody kodujące
/// konsumują koder, więc jednej instancji nie da się użyć do dwóch
/// przebiegów.
#[derive(Debug, Default)]
pub struct Encoder {
    dict: Dictionary,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            dict: Dictionary::new(),
        }
    }

    /// Koduje `input` i zapisuje strumień kodów (`START, ..., STOP`)
    /// do `sink`. Kody wychodzą dokładnie w kolejności wytworzenia;
    /// jedynym buforowaniem jest bieżący prefiks dopasowania.
    pub fn encode_to_writer<W: Write>(self, input: &[u8], sink: W) -> Result<()> {
        let mut writer = CodeWriter::new(sink);
        writer.write_code(START_CODE)?;

        // Najdłuższa znana sekwencja rozszerzana zachłannie o kolejne
        // bajty, wraz z jej kodem. Przed pierwszym bajtem prefiks jest
        // pusty i nie ma kodu do wyemitowania.
        let mut prefix: Vec<u8> = Vec::new();
        let mut prefix_code: Option<Code> = None;

        for &byte in input {
            prefix.push(byte);
            match self.dict.lookup_sequence(&prefix) {
                Some(code) => {
                    // Rozszerzony prefiks wciąż znany — dopasowujemy dalej.
                    prefix_code = Some(code);
                }
                None => {
                    if let Some(code) = prefix_code {
                        writer.write_code(code)?;
                    }
                    self.dict.insert_new(&prefix)?;

                    // Nowym prefiksem zostaje bajt, który spowodował
                    // chybienie; wpisy jednobajtowe mają kod równy
                    // wartości bajtu, więc nie trzeba go szukać.
                    prefix.clear();
                    prefix.push(byte);
                    prefix_code = Some(Code::from(byte));
                }
            }
        }

        if let Some(code) = prefix_code {
            writer.write_code(code)?;
        }
        writer.write_code(STOP_CODE)?;
        Ok(())
    }

    /// Wygodny wariant kodujący do pamięci.
    pub fn encode(self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode_to_writer(input, &mut out)?;
        Ok(out)
    }
}
