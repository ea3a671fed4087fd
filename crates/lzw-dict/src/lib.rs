// Główny plik biblioteki lzw-dict
pub mod codes;
pub mod dictionary;
pub mod error;
