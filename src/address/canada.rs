//! Canadian addresses: province code and `A1A 1A1` postcodes.

use super::{Address, AddressFormatter, Country};
use crate::fake::FakeData;
use rand::RngCore;

const CITIES: &[&str] = &[
    "Toronto", "Montreal", "Vancouver", "Calgary", "Edmonton", "Ottawa", "Winnipeg", "Quebec City",
    "Hamilton", "Halifax", "Victoria", "Saskatoon", "Regina", "St. John's",
];

const PROVINCES: &[&str] = &[
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
];

const AREA_CODES: &[u16] = &[204, 306, 403, 416, 514, 604, 613, 709, 780, 902];

/// Formatter for Canadian addresses
#[derive(Debug, Clone, Copy)]
pub struct CanadaFormatter;

/// Letter-digit-letter, space, digit-letter-digit
fn postcode<R: RngCore>(fake: &mut FakeData<R>) -> String {
    format!(
        "{}{}{} {}{}{}",
        fake.letters(1),
        fake.digits(1),
        fake.letters(1),
        fake.digits(1),
        fake.letters(1),
        fake.digits(1)
    )
}

impl AddressFormatter for CanadaFormatter {
    fn country(&self) -> Country {
        Country::Canada
    }

    fn format(&self, rng: &mut dyn RngCore) -> Address {
        let mut fake = FakeData::new(rng);
        let address = format!("{} {}", fake.building_number(), fake.street_name());
        let city = fake.pick(CITIES).to_string();
        let state = fake.pick(PROVINCES).to_string();
        let postcode = postcode(&mut fake);
        let phone = format!(
            "+1-{}-{}-{}",
            fake.pick(AREA_CODES),
            fake.int_range(200, 999),
            fake.digits(4)
        );

        Address {
            country: Country::Canada,
            address,
            city,
            state: Some(state),
            postcode,
            phone,
        }
    }
}
