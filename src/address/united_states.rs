//! United States addresses: state code and 5-digit ZIP.

use super::{Address, AddressFormatter, Country};
use crate::fake::FakeData;
use rand::RngCore;

/// Formatter for United States addresses
#[derive(Debug, Clone, Copy)]
pub struct UnitedStatesFormatter;

impl AddressFormatter for UnitedStatesFormatter {
    fn country(&self) -> Country {
        Country::UnitedStates
    }

    fn format(&self, rng: &mut dyn RngCore) -> Address {
        let mut fake = FakeData::new(rng);
        let address = format!("{} {}", fake.building_number(), fake.street_name());
        let city = fake.city_name();
        let state = fake.state_abbr();
        let postcode = format!("{:05}", fake.int_range(501, 99950));
        let phone = fake.phone_number();

        Address {
            country: Country::UnitedStates,
            address,
            city,
            state: Some(state),
            postcode,
            phone,
        }
    }
}
