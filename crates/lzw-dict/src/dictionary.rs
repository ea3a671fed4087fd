// Plik dla struktury Dictionary

use std::collections::HashMap;
use std::sync::RwLock;

use crate::codes::{Code, FIRST_DYNAMIC_CODE, MAX_CODE};
use crate::error::{DictError, Result};

/// Wewnętrzny, dwukierunkowy stan słownika.
///
/// Niezmiennik: `code_to_seq` i `seq_to_code` są w każdej chwili
/// dokładnymi odwrotnościami — żaden kod nie wskazuje dwóch sekwencji
/// i żadna sekwencja nie wskazuje dwóch kodów.
#[derive(Debug)]
struct DictInner {
    code_to_seq: HashMap<Code, Vec<u8>>,
    seq_to_code: HashMap<Vec<u8>, Code>,
    /// Następny wolny kod z zakresu dynamicznego. Szerszy niż `Code`,
    /// żeby kontrola wyczerpania zakresu nie przepełniła samego licznika.
    next_code: u32,
}

/// Adaptacyjny słownik kodów LZW: bijekcja kod <-> sekwencja bajtów.
///
/// Słownik jest zasiewany już w konstruktorze wszystkimi 256 wpisami
/// jednobajtowymi (kod = wartość bajtu). Kody sterujące START/STOP są
/// zarezerwowanymi punktami przestrzeni kodów: licznik dynamiczny
/// startuje za nimi, a `lookup_code` ich nie zna — ramkowaniem strumienia
/// zajmuje się warstwa kodeka, nie słownik. Wiązanie ich z napisami
/// znacznikowymi zanieczyściłoby mapę odwrotną (dane wejściowe mogłyby
/// zawierać te same bajty).
///
/// Słownik rośnie monotonicznie o jeden wpis na każdą nową zaobserwowaną
/// sekwencję, nigdy się nie kurczy i żyje dokładnie przez jeden przebieg
/// kodowania albo dekodowania. Koder i dekoder budują własne instancje
/// niezależnie, według tej samej deterministycznej reguły.
///
/// Odczyty mogą przebiegać współbieżnie (blokada czytelników); przydział
/// świeżego kodu wraz z wpisem jest jedną operacją pod blokadą zapisu,
/// więc dwa przydziały nie mogą wydać tego samego kodu.
#[derive(Debug)]
pub struct Dictionary {
    inner: RwLock<DictInner>,
}

impl Dictionary {
    /// Tworzy i zasiewa słownik: wpisy 0-255, licznik na pierwszym
    /// kodzie dynamicznym. Niezasiany słownik jest niereprezentowalny.
    pub fn new() -> Self {
        let mut code_to_seq = HashMap::with_capacity(256);
        let mut seq_to_code = HashMap::with_capacity(256);
        for byte in 0..=255u8 {
            code_to_seq.insert(Code::from(byte), vec![byte]);
            seq_to_code.insert(vec![byte], Code::from(byte));
        }
        Dictionary {
            inner: RwLock::new(DictInner {
                code_to_seq,
                seq_to_code,
                next_code: u32::from(FIRST_DYNAMIC_CODE),
            }),
        }
    }

    /// Zwraca sekwencję powiązaną z kodem, jeśli istnieje.
    /// Kody sterujące nie mają powiązanej sekwencji.
    pub fn lookup_code(&self, code: Code) -> Option<Vec<u8>> {
        let inner = self.inner.read().expect("zatruta blokada słownika");
        inner.code_to_seq.get(&code).cloned()
    }

    /// Zwraca kod powiązany z sekwencją, jeśli istnieje.
    pub fn lookup_sequence(&self, seq: &[u8]) -> Option<Code> {
        let inner = self.inner.read().expect("zatruta blokada słownika");
        inner.seq_to_code.get(seq).copied()
    }

    /// Czy sekwencja jest już znana słownikowi?
    pub fn contains_sequence(&self, seq: &[u8]) -> bool {
        self.lookup_sequence(seq).is_some()
    }

    /// Przydziela świeży kod z zakresu dynamicznego i od razu wiąże go
    /// z `seq` — jedna operacja pod jedną blokadą zapisu. Kolejne
    /// wywołania zwracają kody ściśle rosnące od 258.
    ///
    /// # Błędy
    ///
    /// `CodeSpaceExhausted`, gdy licznik przekroczyłby `MAX_CODE`;
    /// `InvariantViolation`, gdy `seq` jest już powiązana z innym kodem.
    pub fn insert_new(&self, seq: &[u8]) -> Result<Code> {
        let mut inner = self.inner.write().expect("zatruta blokada słownika");

        if let Some(&existing_code) = inner.seq_to_code.get(seq) {
            return Err(DictError::InvariantViolation { existing_code });
        }
        if inner.next_code > u32::from(MAX_CODE) {
            return Err(DictError::CodeSpaceExhausted { limit: MAX_CODE });
        }

        let code = inner.next_code as Code;
        inner.next_code += 1;
        inner.code_to_seq.insert(code, seq.to_vec());
        inner.seq_to_code.insert(seq.to_vec(), code);
        Ok(code)
    }

    /// Kod, który zwróci następne `insert_new`, albo `None` po wyczerpaniu
    /// zakresu. Dekoder porównuje z tym kody nieobecne w słowniku
    /// (przypadek brzegowy "emisja przed wpisem").
    pub fn peek_next_code(&self) -> Option<Code> {
        let inner = self.inner.read().expect("zatruta blokada słownika");
        if inner.next_code > u32::from(MAX_CODE) {
            None
        } else {
            Some(inner.next_code as Code)
        }
    }

    /// Liczba żywych wpisów (256 zaraz po zasianiu).
    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("zatruta blokada słownika");
        inner.code_to_seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Migawka wszystkich wpisów posortowana po kodzie — do diagnostyki
    /// i porównywania słowników w testach.
    pub fn snapshot(&self) -> Vec<(Code, Vec<u8>)> {
        let inner = self.inner.read().expect("zatruta blokada słownika");
        let mut entries: Vec<(Code, Vec<u8>)> = inner
            .code_to_seq
            .iter()
            .map(|(&code, seq)| (code, seq.clone()))
            .collect();
        entries.sort_by_key(|&(code, _)| code);
        entries
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new()
    }
}
