// Plik dla dekodera LZW

use std::io::Read;

use lzw_dict::codes::{START_CODE, STOP_CODE};
use lzw_dict::dictionary::Dictionary;

use crate::error::{CodecError, Result};
use crate::stream::CodeReader;

/// Dekoder LZW: odtwarza oryginalną sekwencję bajtów wyłącznie ze
/// strumienia kodów.
///
/// Dekoder buduje własny słownik od zera, tą samą regułą co koder,
/// z przesunięciem o jeden krok: wpis dla sekwencji zaobserwowanej
/// w kroku N powstaje u dekodera w kroku N+1. Jedyny kod, który może
/// nie być jeszcze znany, to kod przydzielony przez koder w bieżącym
/// kroku — wtedy sekwencję rekonstruuje się jako poprzednia sekwencja
/// plus jej pierwszy bajt.
///
/// Uszkodzony strumień (brak START, brak STOP, urwany slot, kod bez
/// znaczenia) kończy się błędem bez częściowego wyniku.
#[derive(Debug, Default)]
pub struct Decoder {
    dict: Dictionary,
}

impl Decoder {
    pub fn new() -> Self {
        Decoder {
            dict: Dictionary::new(),
        }
    }

    /// Dekoduje strumień kodów czytany z `source`.
    pub fn decode_from_reader<R: Read>(self, source: R) -> Result<Vec<u8>> {
        let mut reader = CodeReader::new(source);

        // Pusty strumień odrzucamy tak samo jak strumień zaczynający się
        // nie-START-em: nie ma ramki, nie ma danych.
        let first = match reader.read_code() {
            Ok(code) => code,
            Err(CodecError::TruncatedStream) => return Err(CodecError::MissingStart),
            Err(e) => return Err(e),
        };
        if first != START_CODE {
            return Err(CodecError::MissingStart);
        }

        let mut output: Vec<u8> = Vec::new();
        let mut previous: Vec<u8> = Vec::new();

        loop {
            let code = reader.read_code()?;
            if code == STOP_CODE {
                return Ok(output);
            }

            let current = match self.dict.lookup_code(code) {
                Some(seq) => seq,
                None => {
                    // Przypadek brzegowy "emisja przed wpisem": legalny
                    // jest wyłącznie kod, który koder przydzielił w tym
                    // kroku, czyli następny świeży kod naszego słownika.
                    // START w środku strumienia też trafia tutaj, bo nie
                    // ma powiązanej sekwencji.
                    if previous.is_empty() || Some(code) != self.dict.peek_next_code() {
                        return Err(CodecError::UnresolvableCode(code));
                    }
                    let mut rebuilt = previous.clone();
                    rebuilt.push(previous[0]);
                    rebuilt
                }
            };

            output.extend_from_slice(&current);

            // Lustrzane odbicie wpisu kodera z poprzedniego kroku:
            // poprzednia sekwencja plus pierwszy bajt bieżącej.
            if !previous.is_empty() {
                previous.push(current[0]);
                self.dict.insert_new(&previous)?;
            }
            previous = current;
        }
    }

    /// Wygodny wariant dekodujący z pamięci.
    pub fn decode(self, data: &[u8]) -> Result<Vec<u8>> {
        self.decode_from_reader(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use lzw_dict::codes::Code;
    use lzw_dict::error::DictError;

    /// Składa strumień bajtów z listy kodów (little-endian).
    fn stream_of(codes: &[Code]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(codes.len() * 2);
        for code in codes {
            bytes.extend_from_slice(&code.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_empty_frame_gives_empty_output() {
        let decoded = Decoder::new()
            .decode(&stream_of(&[START_CODE, STOP_CODE]))
            .unwrap();
        assert_eq!(decoded, b"");
    }

    #[test]
    fn test_decode_golden_aaaa() {
        let decoded = Decoder::new()
            .decode(&stream_of(&[START_CODE, 65, 258, 65, STOP_CODE]))
            .unwrap();
        assert_eq!(decoded, b"AAAA");
    }

    #[test]
    fn test_decode_emit_before_insert_edge_case() {
        // Kod 258 przychodzi zanim dekoder zdążył go wpisać — to dokładnie
        // strumień, który koder produkuje dla "AAA".
        let decoded = Decoder::new()
            .decode(&stream_of(&[START_CODE, 65, 258, STOP_CODE]))
            .unwrap();
        assert_eq!(decoded, b"AAA");
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        let result = Decoder::new().decode(b"");
        assert_matches!(result, Err(CodecError::MissingStart));
    }

    #[test]
    fn test_decode_rejects_stream_without_start() {
        let result = Decoder::new().decode(&stream_of(&[65, STOP_CODE]));
        assert_matches!(result, Err(CodecError::MissingStart));
    }

    #[test]
    fn test_decode_rejects_missing_stop() {
        let result = Decoder::new().decode(&stream_of(&[START_CODE, 65, 258, 65]));
        assert_matches!(result, Err(CodecError::TruncatedStream));
    }

    #[test]
    fn test_decode_rejects_half_slot() {
        let mut bytes = stream_of(&[START_CODE, 65]);
        bytes.push(0x42); // urwany slot
        let result = Decoder::new().decode(&bytes);
        assert_matches!(result, Err(CodecError::TruncatedStream));
    }

    #[test]
    fn test_decode_rejects_code_gap_in_dynamic_range() {
        // 300 nie istnieje i nie jest następnym świeżym kodem (258).
        let result = Decoder::new().decode(&stream_of(&[START_CODE, 65, 300, STOP_CODE]));
        assert_matches!(result, Err(CodecError::UnresolvableCode(300)));
    }

    #[test]
    fn test_decode_rejects_unknown_code_as_first_data_code() {
        // Bez poprzedniej sekwencji rekonstrukcja nie jest możliwa.
        let result = Decoder::new().decode(&stream_of(&[START_CODE, 258, STOP_CODE]));
        assert_matches!(result, Err(CodecError::UnresolvableCode(258)));
    }

    #[test]
    fn test_decode_rejects_start_in_the_middle() {
        let result = Decoder::new().decode(&stream_of(&[
            START_CODE, 65, START_CODE, 65, STOP_CODE,
        ]));
        assert_matches!(result, Err(CodecError::UnresolvableCode(START_CODE)));
    }

    #[test]
    fn test_decode_surfaces_dictionary_errors() {
        // Spreparowany strumień zmusza dekoder do ponownego wpisania
        // sekwencji "AA": 65, 258(="AA"), 65, 258 — drugi wpis "AA"
        // narusza bijekcję i musi wyjść jako błąd słownika, nie zostać
        // po cichu nadpisany.
        let result = Decoder::new().decode(&stream_of(&[
            START_CODE, 65, 258, 65, 65, STOP_CODE,
        ]));
        assert_matches!(
            result,
            Err(CodecError::Dict(DictError::InvariantViolation { .. }))
        );
    }
}
