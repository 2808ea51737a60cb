//! German addresses: `<street> <number>`, no state, 5-digit postcodes.

use super::{Address, AddressFormatter, Country};
use crate::fake::FakeData;
use rand::RngCore;

const CITIES: &[&str] = &[
    "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart", "Düsseldorf",
    "Leipzig", "Dortmund", "Bremen", "Dresden", "Hannover", "Nürnberg",
];

const STREETS: &[&str] = &[
    "Hauptstraße",
    "Bahnhofstraße",
    "Schulstraße",
    "Gartenstraße",
    "Dorfstraße",
    "Bergstraße",
    "Lindenstraße",
    "Kirchweg",
    "Am Markt",
    "Goethestraße",
    "Schillerstraße",
    "Waldweg",
];

const AREA_CODES: &[&str] = &["30", "40", "69", "89", "211", "221", "341", "711"];

/// Formatter for German addresses
#[derive(Debug, Clone, Copy)]
pub struct GermanyFormatter;

impl AddressFormatter for GermanyFormatter {
    fn country(&self) -> Country {
        Country::Germany
    }

    fn format(&self, rng: &mut dyn RngCore) -> Address {
        let mut fake = FakeData::new(rng);
        let address = format!("{} {}", fake.pick(STREETS), fake.int_range(1, 200));
        let city = fake.pick(CITIES).to_string();
        let postcode = format!("{:05}", fake.int_range(1067, 99998));
        let phone = format!("+49 {} {}", fake.pick(AREA_CODES), fake.digits(7));

        Address {
            country: Country::Germany,
            address,
            city,
            state: None,
            postcode,
            phone,
        }
    }
}
