//! Fake data generation helpers.
//!
//! Wraps a random source and hands out names, words, prices and picks. Locale
//! neutral pieces come from the `fake` crate; shop-specific vocabularies are
//! static lists below.

use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::DomainSuffix;
use fake::faker::lorem::en::{Paragraph, Word};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::{Rng, RngCore};

/// Product name adjectives
const PRODUCT_ADJECTIVES: &[&str] = &[
    "Heavy-Duty", "Cordless", "Compact", "Precision", "Professional", "Ergonomic", "Magnetic",
    "Adjustable", "Industrial", "Lightweight", "Rugged", "Insulated", "Folding", "Universal",
    "Premium", "Classic",
];

/// Product name nouns
const PRODUCT_NOUNS: &[&str] = &[
    "Hammer",
    "Saw",
    "Wrench",
    "Screwdriver",
    "Pliers",
    "Drill",
    "Sander",
    "Grinder",
    "Chisel",
    "Clamp",
    "Level",
    "Toolbox",
    "Tape Measure",
    "Utility Knife",
    "Socket Set",
    "Mallet",
];

/// Fake data generator over any random source
pub struct FakeData<R: RngCore> {
    rng: R,
}

impl<R: RngCore> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Borrow the underlying random source as a trait object
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }

    /// Generate a random first name
    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    /// Generate a random last name
    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    /// Generate a full name
    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// Generate a domain name such as `hartmann.com`
    pub fn domain_name(&mut self) -> String {
        let base: String = LastName().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        format!("{}.{}", email_part(&base), suffix)
    }

    /// Generate an email address from a name and domain
    pub fn email(&mut self, first: &str, last: &str, domain: &str) -> String {
        format!("{}.{}@{}", email_part(first), email_part(last), domain)
    }

    /// Generate an English-style street name such as `Maple Avenue`
    pub fn street_name(&mut self) -> String {
        StreetName().fake_with_rng(&mut self.rng)
    }

    /// Generate a building number
    pub fn building_number(&mut self) -> String {
        BuildingNumber().fake_with_rng(&mut self.rng)
    }

    /// Generate a US city name
    pub fn city_name(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    /// Generate a US state abbreviation
    pub fn state_abbr(&mut self) -> String {
        StateAbbr().fake_with_rng(&mut self.rng)
    }

    /// Generate a US phone number
    pub fn phone_number(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }

    /// Generate a company name
    pub fn company_name(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    /// Generate a single capitalized word
    pub fn word(&mut self) -> String {
        let word: String = Word().fake_with_rng(&mut self.rng);
        capitalize(&word)
    }

    /// Generate a paragraph with the given number of sentences
    pub fn paragraph(&mut self, sentences: usize) -> String {
        Paragraph(sentences..sentences + 1).fake_with_rng(&mut self.rng)
    }

    /// Generate a product name
    pub fn product_name(&mut self) -> String {
        let adj = *self.pick(PRODUCT_ADJECTIVES);
        let noun = *self.pick(PRODUCT_NOUNS);
        let word = self.word();
        format!("{} {} {}", adj, noun, word)
    }

    /// Generate a price rounded to cents
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.gen_range(min..=max);
        (value * 100.0).round() / 100.0
    }

    /// Generate a random integer in range
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Generate a boolean with given probability of true
    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Generate a run of random digits
    pub fn digits(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    /// Generate a run of random uppercase ASCII letters
    pub fn letters(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| char::from(self.rng.gen_range(b'A'..=b'Z')))
            .collect()
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    /// Pick a random id from a non-empty identifier sequence
    pub fn pick_id(&mut self, ids: &[i64]) -> i64 {
        *self.pick(ids)
    }

    /// Pick a random index into a collection of `len` elements
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Lowercase a name for use in an email address or domain.
///
/// Keeps ASCII alphanumerics only, so `O'Keefe` becomes `okeefe`.
pub fn email_part(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Build a slug from a name: lowercase, spaces to hyphens
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
