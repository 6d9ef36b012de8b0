//! Dense city-keyed distance table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};

/// Nested `from → (to → km)` map, the serialized shape of a table.
pub type NestedDistances = BTreeMap<String, BTreeMap<String, f64>>;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A complete, symmetric distance table over a closed set of cities.
///
/// Distances are stored in a dense row-major matrix. Cities are indexed in
/// lexicographic order of their identifiers, and that order is the
/// tie-break order used by [`DistanceTable::nearest_neighbor`].
///
/// Both directions of every pair are stored. A table is only constructed
/// through [`DistanceTableBuilder::build`], which rejects missing directions,
/// mismatched directions, and negative or non-finite distances. A city's
/// distance to itself is always 0.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceTable;
///
/// let table = DistanceTable::builder()
///     .symmetric("Hanoi", "HCMC", 1700.0)
///     .symmetric("Hanoi", "Da Nang", 800.0)
///     .symmetric("Da Nang", "HCMC", 850.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.get("Hanoi", "Da Nang"), Some(800.0));
/// assert_eq!(table.get("Hanoi", "Hanoi"), Some(0.0));
/// assert_eq!(table.get("Hanoi", "Hue"), None);
/// assert_eq!(table.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NestedDistances", into = "NestedDistances")]
pub struct DistanceTable {
    cities: Vec<String>,
    data: Vec<f64>,
}

impl DistanceTable {
    /// Starts building a table.
    pub fn builder() -> DistanceTableBuilder {
        DistanceTableBuilder::default()
    }

    /// Builds a table from a nested `from → (to → km)` map.
    ///
    /// Every direction must be listed explicitly; self-distances may be
    /// omitted.
    pub fn from_nested(nested: &NestedDistances) -> Result<Self> {
        let mut builder = Self::builder();
        for (from, row) in nested {
            builder = builder.city(from.clone());
            for (to, &km) in row {
                builder = builder.distance(from.clone(), to.clone(), km);
            }
        }
        builder.build()
    }

    /// Converts the table back to its nested map form.
    pub fn to_nested(&self) -> NestedDistances {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, from)| {
                let row = self
                    .cities
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, to)| (to.clone(), self.get_index(i, j)))
                    .collect();
                (from.clone(), row)
            })
            .collect()
    }

    /// City identifiers in lexicographic order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of cities in this table.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the city is part of this table.
    pub fn contains(&self, city: &str) -> bool {
        self.index_of(city).is_some()
    }

    /// Index of a city, or `None` if the table does not know it.
    pub fn index_of(&self, city: &str) -> Option<usize> {
        self.cities.binary_search_by(|c| c.as_str().cmp(city)).ok()
    }

    /// City identifier at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn city(&self, index: usize) -> &str {
        &self.cities[index]
    }

    /// Distance between two cities, or `None` if either is unknown.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Some(self.get_index(i, j))
    }

    /// Distance between two cities, failing with a lookup error naming the
    /// first unknown city.
    pub fn distance(&self, from: &str, to: &str) -> Result<f64> {
        let i = self
            .index_of(from)
            .ok_or_else(|| DispatchError::lookup(from))?;
        let j = self.index_of(to).ok_or_else(|| DispatchError::lookup(to))?;
        Ok(self.get_index(i, j))
    }

    /// Distance between two city indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get_index(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.cities.len() + to]
    }

    /// Returns `true` if the table is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.size();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.get_index(i, j) - self.get_index(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest city to `from` among the given candidate indices.
    ///
    /// On equal distances the first candidate in iteration order wins, so
    /// callers passing candidates in ascending index order get the
    /// lexicographically smallest city. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_neighbor(
        &self,
        from: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        candidates.into_iter().min_by(|&a, &b| {
            self.get_index(from, a)
                .total_cmp(&self.get_index(from, b))
        })
    }
}

impl TryFrom<NestedDistances> for DistanceTable {
    type Error = DispatchError;

    fn try_from(nested: NestedDistances) -> Result<Self> {
        Self::from_nested(&nested)
    }
}

impl From<DistanceTable> for NestedDistances {
    fn from(table: DistanceTable) -> Self {
        table.to_nested()
    }
}

/// Collects directed entries and validates them into a [`DistanceTable`].
#[derive(Debug, Clone, Default)]
pub struct DistanceTableBuilder {
    cities: Vec<String>,
    entries: BTreeMap<(String, String), f64>,
    // First directed pair given two different distances.
    conflict: Option<(String, String, f64, f64)>,
}

impl DistanceTableBuilder {
    /// Registers a city without adding any distance.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.cities.push(city.into());
        self
    }

    /// Adds the single directed entry `from → to`.
    ///
    /// Repeating an entry with the same distance is accepted; repeating it
    /// with a different distance makes [`build`](Self::build) fail.
    pub fn distance(mut self, from: impl Into<String>, to: impl Into<String>, km: f64) -> Self {
        let from = from.into();
        let to = to.into();
        self.cities.push(from.clone());
        self.cities.push(to.clone());
        if let Some(previous) = self.entries.insert((from.clone(), to.clone()), km) {
            if (previous - km).abs() > SYMMETRY_TOLERANCE && self.conflict.is_none() {
                self.conflict = Some((from, to, previous, km));
            }
        }
        self
    }

    /// Adds both directions of a pair with the same distance.
    pub fn symmetric(self, a: impl Into<String>, b: impl Into<String>, km: f64) -> Self {
        let a = a.into();
        let b = b.into();
        self.distance(a.clone(), b.clone(), km).distance(b, a, km)
    }

    /// Validates the collected entries and builds the table.
    pub fn build(self) -> Result<DistanceTable> {
        if let Some((from, to, first, second)) = self.conflict {
            return Err(DispatchError::config(
                format!("distances.{from}.{to}"),
                format!("conflicting entries: {from}→{to} given as {first} and {second}"),
            ));
        }

        let mut cities = self.cities;
        cities.sort();
        cities.dedup();

        for ((from, to), &km) in &self.entries {
            if !(km.is_finite() && km >= 0.0) {
                return Err(DispatchError::config(
                    format!("distances.{from}.{to}"),
                    format!("distance must be a non-negative number, got {km}"),
                ));
            }
            if from == to && km != 0.0 {
                return Err(DispatchError::config(
                    format!("distances.{from}.{to}"),
                    format!("self-distance must be 0, got {km}"),
                ));
            }
        }

        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&cities[i], &cities[j]);
                let forward = self.entries.get(&(a.clone(), b.clone())).copied();
                let backward = self.entries.get(&(b.clone(), a.clone())).copied();
                let km = match (forward, backward) {
                    (Some(f), Some(r)) if (f - r).abs() <= SYMMETRY_TOLERANCE => f,
                    (Some(f), Some(r)) => {
                        return Err(DispatchError::config(
                            format!("distances.{a}.{b}"),
                            format!("asymmetric entry: {a}→{b} is {f} but {b}→{a} is {r}"),
                        ));
                    }
                    (None, _) => {
                        return Err(DispatchError::config(
                            format!("distances.{a}.{b}"),
                            format!("missing distance from {a} to {b}"),
                        ));
                    }
                    (_, None) => {
                        return Err(DispatchError::config(
                            format!("distances.{b}.{a}"),
                            format!("missing distance from {b} to {a}"),
                        ));
                    }
                };
                data[i * n + j] = km;
                data[j * n + i] = km;
            }
        }

        Ok(DistanceTable { cities, data })
    }
}
