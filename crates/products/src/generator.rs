//! Randomized product generation.
//!
//! Vocabulary-driven: names, descriptions, and tags are assembled from fixed
//! word pools so generated products are valid by construction.

use shopkit_core::ProductId;

use crate::{Price, Product};

const ADJECTIVES: &[&str] = &[
    "Rustic",
    "Sleek",
    "Sturdy",
    "Gorgeous",
    "Practical",
    "Refined",
    "Handcrafted",
    "Incredible",
];

const NOUNS: &[&str] = &[
    "Chair", "Keyboard", "Lamp", "Backpack", "Bottle", "Notebook", "Kettle", "Blanket",
];

const MATERIALS: &[&str] = &["steel", "oak", "cotton", "granite", "bamboo", "leather"];

const TAG_POOL: &[&str] = &[
    "new",
    "sale",
    "popular",
    "limited",
    "eco",
    "handmade",
    "imported",
    "refurbished",
];

const MIN_PRICE_CENTS: u64 = 100;
const MAX_PRICE_CENTS: u64 = 50_000;

/// How many tags a generated product carries. The lower bound is part of the
/// contract: randomized products always have at least two.
const TAG_COUNT: core::ops::RangeInclusive<usize> = 2..=3;

/// Generate a fully-populated product from `rng`.
///
/// Output satisfies every draft constraint: the name is two vocabulary words
/// (always longer than the minimum), the description is non-empty, the price
/// is a currency-formatted string, and the tag set holds at least two
/// distinct entries.
pub(crate) fn random_product(rng: &mut fastrand::Rng) -> Product {
    let adjective = ADJECTIVES[rng.usize(..ADJECTIVES.len())];
    let noun = NOUNS[rng.usize(..NOUNS.len())];
    let material = MATERIALS[rng.usize(..MATERIALS.len())];

    let name = format!("{adjective} {noun}");
    let description = format!(
        "A {} {} finished in {material}.",
        adjective.to_lowercase(),
        noun.to_lowercase(),
    );

    let cents = rng.u64(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);
    let price = Price::Formatted(format!("${}.{:02}", cents / 100, cents % 100));

    let tags = pick_tags(rng);

    Product::new(ProductId::random(rng), name, description, price, tags)
}

fn pick_tags(rng: &mut fastrand::Rng) -> Vec<String> {
    let want = rng.usize(TAG_COUNT);

    let mut tags: Vec<String> = Vec::with_capacity(want);
    while tags.len() < want {
        let candidate = TAG_POOL[rng.usize(..TAG_POOL.len())];
        if !tags.iter().any(|t| t == candidate) {
            tags.push(candidate.to_string());
        }
    }
    tags
}
