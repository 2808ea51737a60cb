//! Country-specific address synthesis.
//!
//! Each supported country has its own formatter:
//! - `united_states`: state code, 5-digit ZIP
//! - `united_kingdom`: no state, outward/inward postcode
//! - `canada`: province code, `A1A 1A1` postcode
//! - `australia`: state/territory code, 4-digit postcode
//! - `vietnam`: no state, ward/district street address, 5-digit postcode
//! - `germany`: no state, 5-digit postcode

mod australia;
mod canada;
mod germany;
mod united_kingdom;
mod united_states;
mod vietnam;

pub use australia::AustraliaFormatter;
pub use canada::CanadaFormatter;
pub use germany::GermanyFormatter;
pub use united_kingdom::UnitedKingdomFormatter;
pub use united_states::UnitedStatesFormatter;
pub use vietnam::VietnamFormatter;

use rand::{Rng, RngCore};
use serde::Serialize;
use std::fmt;

/// Countries users and billing addresses are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Country {
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
    Vietnam,
    Germany,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Canada,
        Country::Australia,
        Country::Vietnam,
        Country::Germany,
    ];

    /// Country name as written into the CSV
    pub fn name(&self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Vietnam => "Vietnam",
            Country::Germany => "Germany",
        }
    }

    /// Whether addresses in this country carry a state/province
    pub fn has_state(&self) -> bool {
        matches!(
            self,
            Country::UnitedStates | Country::Canada | Country::Australia
        )
    }

    /// The formatter for this country
    pub fn formatter(&self) -> Box<dyn AddressFormatter> {
        match self {
            Country::UnitedStates => Box::new(UnitedStatesFormatter),
            Country::UnitedKingdom => Box::new(UnitedKingdomFormatter),
            Country::Canada => Box::new(CanadaFormatter),
            Country::Australia => Box::new(AustraliaFormatter),
            Country::Vietnam => Box::new(VietnamFormatter),
            Country::Germany => Box::new(GermanyFormatter),
        }
    }

    /// Pick a country uniformly at random
    pub fn random(rng: &mut dyn RngCore) -> Country {
        Country::ALL[rng.gen_range(0..Country::ALL.len())]
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A synthesized postal address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub country: Country,
    pub address: String,
    pub city: String,
    /// `None` for countries without states; rendered as `NULL`
    pub state: Option<String>,
    pub postcode: String,
    pub phone: String,
}

/// Trait for country address formatters
pub trait AddressFormatter: Send + Sync {
    /// The country this formatter produces addresses for
    fn country(&self) -> Country;

    /// Synthesize one address
    fn format(&self, rng: &mut dyn RngCore) -> Address;
}

/// Pick a random country and synthesize an address for it
pub fn random_address(rng: &mut dyn RngCore) -> Address {
    Country::random(rng).formatter().format(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_formatter_country_matches() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for country in Country::ALL {
            let formatter = country.formatter();
            assert_eq!(formatter.country(), country);
            assert_eq!(formatter.format(&mut rng).country, country);
        }
    }

    #[test]
    fn test_state_presence_follows_country() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let addr = random_address(&mut rng);
            if addr.country.has_state() {
                let state = addr.state.as_deref().unwrap();
                assert!(!state.is_empty());
            } else {
                assert!(addr.state.is_none());
            }
            assert!(!addr.address.is_empty());
            assert!(!addr.city.is_empty());
            assert!(!addr.phone.is_empty());
        }
    }

    #[test]
    fn test_random_country_covers_all() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Country::random(&mut rng));
        }
        assert_eq!(seen.len(), Country::ALL.len());
    }
}
