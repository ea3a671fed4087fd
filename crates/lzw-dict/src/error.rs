// Plik dla błędów specyficznych dla crate lzw-dict

use thiserror::Error;

use crate::codes::Code;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, DictError>;

/// Enum reprezentujący błędy, które mogą wystąpić podczas operacji na słowniku kodów.
#[derive(Debug, Error)]
pub enum DictError {
    /// Licznik kodów dynamicznych przekroczyłby zakres 16 bitów.
    /// Błąd kończy bieżący przebieg — słownik nie obsługuje resetu.
    #[error("Wyczerpano przestrzeń kodów słownika (ostatni dostępny kod: {limit}).")]
    CodeSpaceExhausted { limit: Code },

    /// Próba powiązania sekwencji, która jest już powiązana z innym kodem.
    /// Przy poprawnym sekwencjonowaniu operacji koder/dekoder nigdy tego
    /// nie robi; wystąpienie oznacza defekt w dyscyplinie przydziału kodów.
    #[error("Naruszenie bijekcji słownika: sekwencja jest już powiązana z kodem {existing_code}.")]
    InvariantViolation { existing_code: Code },
}
