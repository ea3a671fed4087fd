// Plik dla błędów specyficznych dla crate lzw-codec

use thiserror::Error;

use lzw_dict::codes::Code;
use lzw_dict::error::DictError;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Enum reprezentujący błędy kodowania i dekodowania strumienia LZW.
///
/// Uszkodzony strumień zawsze kończy się błędem — dekoder nie podmienia
/// ani nie gubi symboli i nie zwraca częściowego wyniku.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Błąd wejścia/wyjścia podczas zapisu lub odczytu strumienia kodów.
    #[error("Błąd I/O: {0}")]
    Io(#[from] std::io::Error),

    /// Strumień jest pusty albo nie zaczyna się od kodu START.
    #[error("Brak kodu START na początku strumienia.")]
    MissingStart,

    /// Strumień urwał się przed kodem STOP albo w połowie 2-bajtowego slotu.
    #[error("Strumień kodów urwany przed kodem STOP.")]
    TruncatedStream,

    /// Kod, którego nie da się rozwiązać: nie ma go w słowniku i nie jest
    /// przypadkiem brzegowym "emisja przed wpisem".
    #[error("Nierozwiązywalny kod w strumieniu: {0}.")]
    UnresolvableCode(Code),

    /// Błąd pochodzący ze słownika kodów.
    #[error("Błąd słownika: {0}")]
    Dict(#[from] DictError),
}
