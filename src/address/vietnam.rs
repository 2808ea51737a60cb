//! Vietnamese addresses: `<number> <street>, <ward>, <district>`, no state.

use super::{Address, AddressFormatter, Country};
use crate::fake::FakeData;
use rand::RngCore;

const WARDS: &[&str] = &[
    "Ben Thanh Ward",
    "Pham Ngu Lao Ward",
    "Tan Dinh Ward",
    "Ward 1",
    "Ward 2",
    "Ward 3",
    "Ward 4",
    "Ward 5",
    "Ward 6",
    "Ward 7",
    "Ward 8",
    "Ward 9",
    "Ward 10",
    "Ward 11",
    "Ward 12",
    "Ward 13",
    "Ward 14",
    "Ward 15",
    "Phu My Hung Ward",
    "Thao Dien Ward",
    "An Phu Ward",
];

const DISTRICTS: &[&str] = &[
    "District 1",
    "District 3",
    "District 4",
    "District 5",
    "District 7",
    "District 10",
    "District 12",
    "Go Vap District",
    "Binh Thanh District",
    "Tan Binh District",
    "Phu Nhuan District",
    "Thu Duc City",
    "Binh Tan District",
    "Nha Be District",
    "Cu Chi District",
];

const STREETS: &[&str] = &[
    "Le Loi",
    "Nguyen Hue",
    "Hai Ba Trung",
    "Tran Hung Dao",
    "Le Duan",
    "Dien Bien Phu",
    "Nguyen Trai",
    "Cach Mang Thang Tam",
    "Vo Van Tan",
    "Pasteur",
    "Ly Tu Trong",
    "Nam Ky Khoi Nghia",
];

const CITIES: &[&str] = &[
    "Ho Chi Minh City",
    "Hanoi",
    "Da Nang",
    "Hai Phong",
    "Can Tho",
    "Nha Trang",
    "Hue",
    "Vung Tau",
    "Bien Hoa",
    "Da Lat",
];

/// Formatter for Vietnamese addresses
#[derive(Debug, Clone, Copy)]
pub struct VietnamFormatter;

impl AddressFormatter for VietnamFormatter {
    fn country(&self) -> Country {
        Country::Vietnam
    }

    fn format(&self, rng: &mut dyn RngCore) -> Address {
        let mut fake = FakeData::new(rng);
        let address = format!(
            "{} {}, {}, {}",
            fake.int_range(1, 300),
            fake.pick(STREETS),
            fake.pick(WARDS),
            fake.pick(DISTRICTS)
        );
        let city = fake.pick(CITIES).to_string();
        let postcode = fake.int_range(10000, 99999).to_string();
        let phone = format!("84{}", fake.int_range(100_000_000, 999_999_999));

        Address {
            country: Country::Vietnam,
            address,
            city,
            state: None,
            postcode,
            phone,
        }
    }
}
