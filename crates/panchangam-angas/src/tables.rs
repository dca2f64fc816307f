//! Static name/lord/deity tables for the five angas.

pub const TITHI_NAMES_SHUKLA: [&str; 15] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami", "Shashthi", "Saptami",
    "Ashtami", "Navami", "Dashami", "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Purnima",
];

pub const TITHI_NAMES_KRISHNA: [&str; 15] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami", "Shashthi", "Saptami",
    "Ashtami", "Navami", "Dashami", "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Amavasya",
];

pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini", "Bharani", "Krittika", "Rohini", "Mrigashira", "Ardra", "Punarvasu", "Pushya",
    "Ashlesha", "Magha", "Purva Phalguni", "Uttara Phalguni", "Hasta", "Chitra", "Swati",
    "Vishakha", "Anuradha", "Jyeshtha", "Mula", "Purva Ashadha", "Uttara Ashadha", "Shravana",
    "Dhanishta", "Shatabhisha", "Purva Bhadrapada", "Uttara Bhadrapada", "Revati",
];

pub const NAKSHATRA_DEITIES: [&str; 27] = [
    "Ashwini Kumaras", "Yama", "Agni", "Brahma", "Soma", "Rudra", "Aditi", "Brihaspati",
    "Nagas", "Pitrs", "Bhaga", "Aryaman", "Savitar", "Tvashtar", "Vayu", "Indra-Agni",
    "Mitra", "Indra", "Nirriti", "Apas", "Vishvedevas", "Vishnu", "Vasus", "Varuna",
    "Aja Ekapada", "Ahir Budhnya", "Pushan",
];

pub const NAKSHATRA_SYMBOLS: [&str; 27] = [
    "Horse's head", "Yoni", "Razor/Axe", "Cart/Chariot", "Deer's head", "Teardrop",
    "Bow and quiver", "Cow's udder", "Serpent", "Royal throne", "Front legs of a bed",
    "Back legs of a bed", "Hand/fist", "Bright jewel", "Coral", "Triumphal gateway",
    "Lotus", "Earring", "Lion's tail", "Elephant tusk/fan", "Elephant tusk/fan",
    "Three footsteps", "Drum", "Empty circle", "Two-faced man/funeral cot",
    "Twin/back of a funeral cot", "Fish",
];

/// Vimshottari-dasha planetary lord sequence, 9 lords cycling 3 times over
/// the 27 nakshatras.
pub const NAKSHATRA_LORDS: [&str; 9] =
    ["Ketu", "Shukra", "Surya", "Chandra", "Mangala", "Rahu", "Guru", "Shani", "Budha"];

pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha", "Priti", "Ayushman", "Saubhagya", "Shobhana", "Atiganda", "Sukarma",
    "Dhriti", "Shula", "Ganda", "Vriddhi", "Dhruva", "Vyaghata", "Harshana", "Vajra",
    "Siddhi", "Vyatipata", "Variyan", "Parigha", "Shiva", "Siddha", "Sadhya", "Shubha",
    "Shukla", "Brahma", "Indra", "Vaidhriti",
];

pub const KARANA_MOVABLE_NAMES: [&str; 7] =
    ["Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti"];

pub const VARA_NAMES: [&str; 7] = [
    "Ravivara", "Somavara", "Mangalavara", "Budhavara", "Guruvara", "Shukravara", "Shanivara",
];

pub const VARA_LORDS: [&str; 7] =
    ["Surya", "Chandra", "Mangala", "Budha", "Guru", "Shukra", "Shani"];

/// Full 60-entry Karana cycle across a synodic month: `Kimstughna` opens the
/// month (the sliver before the first movable karana begins), the seven
/// movable karanas repeat eight times across the body of the month, and the
/// three remaining fixed karanas close it.
pub fn karana_name(index: u8) -> &'static str {
    match index {
        0 => "Kimstughna",
        1..=56 => KARANA_MOVABLE_NAMES[((index - 1) % 7) as usize],
        57 => "Shakuni",
        58 => "Chatushpada",
        59 => "Naga",
        _ => "Kimstughna",
    }
}
