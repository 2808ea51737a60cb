//! Australian addresses: state/territory code and 4-digit postcodes.

use super::{Address, AddressFormatter, Country};
use crate::fake::FakeData;
use rand::RngCore;

const CITIES: &[&str] = &[
    "Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide", "Hobart", "Canberra", "Darwin",
    "Gold Coast", "Newcastle", "Geelong", "Cairns",
];

const STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

/// Formatter for Australian addresses
#[derive(Debug, Clone, Copy)]
pub struct AustraliaFormatter;

impl AddressFormatter for AustraliaFormatter {
    fn country(&self) -> Country {
        Country::Australia
    }

    fn format(&self, rng: &mut dyn RngCore) -> Address {
        let mut fake = FakeData::new(rng);
        let address = format!("{} {}", fake.int_range(1, 400), fake.street_name());
        let city = fake.pick(CITIES).to_string();
        let state = fake.pick(STATES).to_string();
        let postcode = format!("{:04}", fake.int_range(800, 7999));
        let phone = format!(
            "+61 4{} {} {}",
            fake.digits(2),
            fake.digits(3),
            fake.digits(3)
        );

        Address {
            country: Country::Australia,
            address,
            city,
            state: Some(state),
            postcode,
            phone,
        }
    }
}
