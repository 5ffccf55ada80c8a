//! # Sample Datasets
//!
//! Canned data backing the demo binaries and the integration tests. Keeping
//! the numbers here, rather than inline in each demo, makes the demo output
//! deterministic and lets several recipes share one dataset (the BTC table
//! alone feeds the filtering, transforming and creating demos).
//!
//! Nothing in this module is async. These are plain tables and small
//! builder functions.

use std::collections::HashMap;

// ===== Crypto markets =====

/// Yearly top price of Bitcoin in KRW, 2010 through 2021.
///
/// The shape matters more than the numbers: the table crosses the
/// 20,000,000 mark for the first time in 2017, dips back under it in 2019
/// and finishes with two years far above it. The filtering demos lean on
/// those crossings.
pub const BTC_TOP_PRICES_PER_YEAR: [(u16, i64); 12] = [
    (2010, 565_000),
    (2011, 12_800_000),
    (2012, 16_800_000),
    (2013, 14_600_000),
    (2014, 9_800_000),
    (2015, 5_700_000),
    (2016, 12_300_000),
    (2017, 25_700_000),
    (2018, 29_000_000),
    (2019, 17_800_000),
    (2020, 32_800_000),
    (2021, 81_700_000),
];

/// The same table keyed by year, for index-style lookups.
pub fn btc_top_prices_by_year() -> HashMap<u16, i64> {
    BTC_TOP_PRICES_PER_YEAR.iter().copied().collect()
}

/// A handful of coins with a spot price in KRW.
pub const COINS: [(&str, i64); 5] = [
    ("BTC", 52_000_000),
    ("ETH", 1_720_000),
    ("XRP", 533),
    ("ICX", 2_080),
    ("EOS", 4_020),
];

/// Just the tickers from [`COINS`].
pub const COIN_NAMES: [&str; 5] = ["BTC", "ETH", "XRP", "ICX", "EOS"];

// ===== Vaccines =====

/// Vaccine brands used by the async-filter and concatenation recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaccine {
    AstraZeneca,
    Janssen,
    Pfizer,
    Moderna,
    Novavax,
}

impl std::fmt::Display for Vaccine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Vaccine::AstraZeneca => "AstraZeneca",
            Vaccine::Janssen => "Janssen",
            Vaccine::Pfizer => "Pfizer",
            Vaccine::Moderna => "Moderna",
            Vaccine::Novavax => "Novavax",
        };
        f.write_str(name)
    }
}

/// Viral vector shipments as (brand, doses) pairs.
pub fn viral_vector_shipments() -> Vec<(Vaccine, u64)> {
    vec![(Vaccine::AstraZeneca, 3_000_000), (Vaccine::Janssen, 2_000_000)]
}

/// mRNA shipments as (brand, doses) pairs.
pub fn mrna_shipments() -> Vec<(Vaccine, u64)> {
    vec![(Vaccine::Pfizer, 4_000_000), (Vaccine::Moderna, 2_000_000)]
}

/// Protein subunit shipments as (brand, doses) pairs.
pub fn subunit_shipments() -> Vec<(Vaccine, u64)> {
    vec![(Vaccine::Novavax, 3_000_000)]
}

/// All shipments folded into a doses-per-brand map.
pub fn doses_by_vaccine() -> HashMap<Vaccine, u64> {
    viral_vector_shipments()
        .into_iter()
        .chain(mrna_shipments())
        .chain(subunit_shipments())
        .collect()
}

// ===== Book inventory =====

/// An inventory row used by the grouping and error-recovery recipes.
///
/// `pen_name` is deliberately optional; exactly one row in
/// [`royalty_books`] leaves it out, which is what the fallback-value
/// recipe recovers from.
#[derive(Debug, Clone)]
pub struct InventoryBook {
    pub title: String,
    pub author: String,
    pub pen_name: Option<String>,
    pub price: i64,
    pub stock: i64,
}

impl InventoryBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pen_name: Option<&str>,
        price: i64,
        stock: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pen_name: pen_name.map(str::to_owned),
            price,
            stock,
        }
    }
}

/// Seven inventory rows across four authors.
pub fn royalty_books() -> Vec<InventoryBook> {
    vec![
        InventoryBook::new("Advanced Streams", "Andy", Some("Andy-son"), 25_000, 100),
        InventoryBook::new("Getting Started with Tokio", "Andy", Some("Andy-son"), 32_000, 150),
        InventoryBook::new("Channel Patterns", "Grace", None, 29_000, 80),
        InventoryBook::new("Async in Action", "Grace", Some("Grace-mi"), 35_000, 120),
        InventoryBook::new("The Stream Cookbook", "Tom", Some("Tom-boy"), 28_000, 130),
        InventoryBook::new("Backpressure by Example", "Tom", Some("Tom-boy"), 26_000, 60),
        InventoryBook::new("Zero-Copy Parsing", "Nina", Some("Nina-sama"), 40_000, 50),
    ]
}

// ===== Morse =====

/// International morse code for `a` through `z`, in alphabet order.
pub const MORSE_CODES: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

/// Decodes one morse code into its letter, if it is in the table.
pub fn decode_morse(code: &str) -> Option<char> {
    MORSE_CODES
        .iter()
        .position(|&c| c == code)
        .map(|idx| (b'a' + idx as u8) as char)
}

// ===== Sales and infections =====

/// Units sold per month in 2021, January first.
pub const MONTHLY_BOOK_SALES_2021: [i64; 12] = [
    2_100, 3_300, 1_800, 2_400, 5_100, 4_200, 1_500, 2_700, 3_600, 4_800, 2_250, 1_650,
];

/// Hourly infection tallies for one city, hours 10 through 21.
///
/// The three-way zip recipe sums the same hour across all three cities, so
/// every city reports the same twelve hours.
pub fn hourly_infections(city: &str) -> Vec<(u8, u32)> {
    let counts: [u32; 12] = match city {
        "seoul" => [500, 620, 310, 280, 460, 510, 305, 280, 320, 350, 480, 460],
        "incheon" => [120, 200, 150, 160, 110, 183, 257, 290, 310, 190, 143, 151],
        "suwon" => [73, 129, 107, 205, 157, 90, 121, 141, 203, 212, 190, 130],
        _ => [0; 12],
    };
    (10u8..=21).zip(counts).collect()
}

// ===== Outage recovery feed =====

/// Grid segments reporting back after an outage, as
/// (site, recovery delay in ms, message). The merge recipe turns each row
/// into a delayed future and logs them in recovery order, not list order.
pub fn recovery_sites() -> Vec<(&'static str, u64, &'static str)> {
    vec![
        ("north-grid", 700, "north-grid back online"),
        ("west-grid", 300, "west-grid back online"),
        ("east-grid", 500, "east-grid back online"),
        ("south-grid", 100, "south-grid back online"),
    ]
}

// ===== Produce =====

/// Display names for the fruit lookup in the debugging recipe. `melon` is
/// intentionally absent; looking it up is the demo's failure case.
pub fn fruit_catalog() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("banana", "Musa acuminata"),
        ("apple", "Malus domestica"),
        ("pear", "Pyrus communis"),
        ("grape", "Vitis vinifera"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn btc_table_crosses_twenty_million_in_2017() {
        let first = BTC_TOP_PRICES_PER_YEAR
            .iter()
            .find(|(_, price)| *price > 20_000_000);
        assert_eq!(first.map(|(year, _)| *year), Some(2017));
    }

    #[test]
    fn morse_decodes_sos() {
        let word: String = ["...", "---", "..."]
            .iter()
            .filter_map(|code| decode_morse(code))
            .collect();
        assert_eq!(word, "sos");
    }

    #[test]
    fn all_cities_report_the_same_hours() {
        let hours = |city: &str| -> Vec<u8> {
            hourly_infections(city).into_iter().map(|(h, _)| h).collect()
        };
        assert_eq!(hours("seoul"), hours("incheon"));
        assert_eq!(hours("incheon"), hours("suwon"));
    }
}
