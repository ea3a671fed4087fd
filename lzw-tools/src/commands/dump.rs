// Komenda dump

use std::fs;
use std::path::Path;

use lzw_dict::codes::{self, Code, FIRST_DYNAMIC_CODE, START_CODE, STOP_CODE};

use crate::error::Result;

/// Wypisuje kolejne sloty strumienia wraz ze znaczeniem każdego kodu.
///
/// Dump czyta sloty wprost, bez dekodowania — ma pokazywać także
/// strumienie uszkodzone (urwany slot, kod spoza zakresu), których
/// dekoder słusznie nie przyjmie.
pub fn run(input: &Path) -> Result<()> {
    let data = fs::read(input)?;

    for (index, slot) in data.chunks(2).enumerate() {
        if slot.len() < 2 {
            println!("{index:5}: niepełny slot ({} B)", slot.len());
            break;
        }
        let code = Code::from_le_bytes([slot[0], slot[1]]);
        println!("{index:5}: {code:5}  {}", describe(code));
    }
    Ok(())
}

fn describe(code: Code) -> String {
    if code == START_CODE {
        "START".to_string()
    } else if code == STOP_CODE {
        "STOP".to_string()
    } else if codes::is_literal_code(code) {
        let byte = code as u8;
        if byte.is_ascii_graphic() || byte == b' ' {
            format!("bajt '{}'", byte as char)
        } else {
            format!("bajt 0x{byte:02X}")
        }
    } else {
        format!("wpis dynamiczny #{}", code - FIRST_DYNAMIC_CODE)
    }
}
