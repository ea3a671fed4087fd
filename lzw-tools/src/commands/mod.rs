// Moduły dla poszczególnych komend
pub mod compress;
pub mod decompress;
pub mod dump;
