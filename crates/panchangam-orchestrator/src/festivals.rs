//! Rule-based festival tagging from the computed tithi and nakshatra.
//!
//! Deliberately limited to tithi/nakshatra-only rules: festivals anchored to
//! a specific lunar month (Diwali, Janmashtami) need month tracking this
//! crate doesn't carry, so only the recurring, month-independent observances
//! are tagged here.

use panchangam_core::{Nakshatra, Paksha, Tithi};

pub fn tag(tithi: &Tithi, nakshatra: &Nakshatra) -> Vec<String> {
    let mut tags = Vec::new();

    match tithi.index {
        10 => tags.push(format!("Ekadashi ({:?} Paksha)", tithi.paksha)),
        14 if tithi.paksha == Paksha::Shukla => tags.push("Purnima".to_string()),
        29 => tags.push("Amavasya".to_string()),
        3 if tithi.paksha == Paksha::Krishna => tags.push("Sankashti Chaturthi".to_string()),
        _ => {}
    }

    if nakshatra.name == "Shravana" {
        tags.push("Shravana Nakshatra Vrata".to_string());
    }
    if nakshatra.name == "Rohini" {
        tags.push("Rohini Nakshatra Vrata".to_string());
    }

    tags
}
