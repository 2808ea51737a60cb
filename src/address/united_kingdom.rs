//! United Kingdom addresses: no state, `SW1A 2AA`-shaped postcodes.

use super::{Address, AddressFormatter, Country};
use crate::fake::FakeData;
use rand::RngCore;

const CITIES: &[&str] = &[
    "London", "Manchester", "Birmingham", "Leeds", "Glasgow", "Edinburgh", "Bristol", "Liverpool",
    "Cardiff", "Newcastle", "Oxford", "Cambridge", "Sheffield", "Nottingham", "Brighton",
];

const STREETS: &[&str] = &[
    "High Street",
    "Station Road",
    "Church Lane",
    "Victoria Road",
    "Green Lane",
    "Manor Road",
    "Park Avenue",
    "Queens Road",
    "Mill Lane",
    "The Crescent",
    "Kings Road",
    "London Road",
];

/// Postcode area prefixes
const AREAS: &[&str] = &[
    "SW", "SE", "EC", "WC", "N", "E", "W", "M", "B", "LS", "G", "EH", "BS", "L", "CF", "NE", "OX",
    "CB",
];

/// Letters allowed in the inward code
const INWARD_LETTERS: &[u8] = b"ABDEFGHJLNPQRSTUWXYZ";

/// Formatter for United Kingdom addresses
#[derive(Debug, Clone, Copy)]
pub struct UnitedKingdomFormatter;

impl AddressFormatter for UnitedKingdomFormatter {
    fn country(&self) -> Country {
        Country::UnitedKingdom
    }

    fn format(&self, rng: &mut dyn RngCore) -> Address {
        let mut fake = FakeData::new(rng);
        let address = format!("{} {}", fake.int_range(1, 250), fake.pick(STREETS));
        let city = fake.pick(CITIES).to_string();

        let outward = format!("{}{}", fake.pick(AREAS), fake.int_range(1, 20));
        let inward = format!(
            "{}{}{}",
            fake.int_range(0, 9),
            char::from(*fake.pick(INWARD_LETTERS)),
            char::from(*fake.pick(INWARD_LETTERS))
        );
        let postcode = format!("{} {}", outward, inward);
        let phone = format!("+44 7{} {}", fake.digits(3), fake.digits(6));

        Address {
            country: Country::UnitedKingdom,
            address,
            city,
            state: None,
            postcode,
            phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_postcode_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let addr = UnitedKingdomFormatter.format(&mut rng);
            let (outward, inward) = addr.postcode.split_once(' ').unwrap();
            assert!(outward.chars().next().unwrap().is_ascii_uppercase());
            assert!(outward.chars().last().unwrap().is_ascii_digit());
            let inward: Vec<char> = inward.chars().collect();
            assert_eq!(inward.len(), 3);
            assert!(inward[0].is_ascii_digit());
            assert!(inward[1].is_ascii_uppercase() && inward[2].is_ascii_uppercase());
            assert!(addr.state.is_none());
            assert!(addr.phone.starts_with("+44 7"));
        }
    }
}
