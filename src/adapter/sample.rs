//! Reproducible random parcel batches for trying the tool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ParcelRecord;

const GOODS: [&str; 8] = [
    "Rice", "Coffee", "Textiles", "Electronics", "Ceramics", "Furniture", "Tea", "Spare parts",
];

/// Generates `count` parcels bound for the given cities.
///
/// The same seed always yields the same batch. Weights fall in 1..200 kg and
/// volumes in 0.1..50 m³, both with one decimal. Returns an empty batch when
/// `cities` is empty.
///
/// # Examples
///
/// ```
/// use u_dispatch::adapter::sample_records;
///
/// let cities = vec!["HCMC".to_string(), "Dalat".to_string()];
/// let a = sample_records(5, 42, &cities);
/// assert_eq!(a.len(), 5);
/// assert_eq!(a, sample_records(5, 42, &cities));
/// ```
pub fn sample_records(count: usize, seed: u64, cities: &[String]) -> Vec<ParcelRecord> {
    if cities.is_empty() {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|i| {
            let name = GOODS[rng.random_range(0..GOODS.len())];
            let city = &cities[rng.random_range(0..cities.len())];
            let weight = tenths(rng.random_range(1.0..200.0f64));
            let volume = tenths(rng.random_range(0.1..50.0f64));
            ParcelRecord::new(format!("P{i:03}"), name, weight, volume, city.clone())
        })
        .collect()
}

fn tenths(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
