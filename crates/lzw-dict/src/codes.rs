// Plik dla typów i stałych przestrzeni kodów

/// Kod w strumieniu LZW — 16-bitowa liczba bez znaku, zapisywana
/// w strumieniu jako 2 bajty little-endian.
pub type Code = u16;

/// Kod sterujący otwierający strumień. Nigdy nie reprezentuje danych.
pub const START_CODE: Code = 256;

/// Kod sterujący zamykający strumień. Nigdy nie reprezentuje danych.
pub const STOP_CODE: Code = 257;

/// Pierwszy kod z zakresu dynamicznego. Kolejne nowe wpisy słownika
/// dostają kody rosnące o 1; kody 0-255 są zarezerwowane dla wpisów
/// jednobajtowych (kod = wartość bajtu), więc oba zakresy nigdy się
/// nie przecinają.
pub const FIRST_DYNAMIC_CODE: Code = 258;

/// Największy możliwy kod. Po jego przydzieleniu przestrzeń kodów jest
/// wyczerpana — format nie przewiduje resetu słownika w trakcie przebiegu.
pub const MAX_CODE: Code = u16::MAX;

/// Czy kod jest jednym z kodów sterujących (START/STOP)?
pub fn is_control_code(code: Code) -> bool {
    code == START_CODE || code == STOP_CODE
}

/// Czy kod leży w zakresie wpisów jednobajtowych (0-255)?
pub fn is_literal_code(code: Code) -> bool {
    code < START_CODE
}
