// Plik dla błędów narzędzi CLI

use thiserror::Error;

use lzw_codec::error::CodecError;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Enum reprezentujący błędy komend CLI.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Błąd wejścia/wyjścia, zwykle przy czytaniu lub zapisie plików.
    #[error("Błąd I/O: {0}")]
    Io(#[from] std::io::Error),

    /// Błąd pochodzący z kodeka LZW.
    #[error("Błąd kodeka: {0}")]
    Codec(#[from] CodecError),
}
