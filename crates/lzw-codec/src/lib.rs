// Główny plik biblioteki lzw-codec
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod stream;
