// src/data.rs
//
// Nomination records and their accumulation across years.
//
// - Aggregator: mutable, dedups on (year, category, film) while the run walks
//               the year range. A repeated record ORs its winner flag into
//               the first one and keeps the first source URL.
// - CategoryTable: frozen result of `Aggregator::finalize`, handed to the
//                  writer. Categories iterate in key order, rows in the
//                  order they were first seen.

use std::collections::{BTreeMap, HashMap};

/// One (year, category, film) row of output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NominationRecord {
    pub ceremony_year: u16,
    pub category: String,
    pub film: String,
    pub is_winner: bool,
    pub source_url: String,
}

impl NominationRecord {
    /// Cells in header order; `is_winner` is spelled `True`/`False`.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.ceremony_year.to_string(),
            self.category.clone(),
            self.film.clone(),
            if self.is_winner { "True" } else { "False" }.to_string(),
            self.source_url.clone(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Added {
    Inserted,
    /// Duplicate of an existing row; only the winner flag may have changed.
    Merged,
}

#[derive(Debug, Default)]
struct CategoryRows {
    rows: Vec<NominationRecord>,
    index: HashMap<(u16, String), usize>,
}

#[derive(Debug, Default)]
pub struct Aggregator {
    categories: BTreeMap<String, CategoryRows>,
}

impl Aggregator {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, record: NominationRecord) -> Added {
        let cat = self.categories.entry(record.category.clone()).or_default();
        let dedup_key = (record.ceremony_year, record.film.clone());

        if let Some(&i) = cat.index.get(&dedup_key) {
            cat.rows[i].is_winner |= record.is_winner;
            return Added::Merged;
        }
        cat.index.insert(dedup_key, cat.rows.len());
        cat.rows.push(record);
        Added::Inserted
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(|c| c.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn finalize(self) -> CategoryTable {
        let by_category = self
            .categories
            .into_iter()
            .map(|(key, c)| (key, c.rows))
            .collect();
        CategoryTable { by_category }
    }
}

/// Read-only records grouped by canonical category key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTable {
    by_category: BTreeMap<String, Vec<NominationRecord>>,
}

impl CategoryTable {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NominationRecord])> {
        self.by_category.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn get(&self, key: &str) -> Option<&[NominationRecord]> {
        self.by_category.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize { self.by_category.len() }

    pub fn is_empty(&self) -> bool { self.by_category.is_empty() }

    pub fn total_records(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: u16, cat: &str, film: &str, win: bool, url: &str) -> NominationRecord {
        NominationRecord {
            ceremony_year: year,
            category: cat.into(),
            film: film.into(),
            is_winner: win,
            source_url: url.into(),
        }
    }

    #[test]
    fn duplicates_merge_and_winner_wins() {
        let mut agg = Aggregator::new();
        assert_eq!(agg.add(rec(1929, "Best_Picture", "Wings", false, "a")), Added::Inserted);
        assert_eq!(agg.add(rec(1929, "Best_Picture", "Wings", true, "b")), Added::Merged);
        assert_eq!(agg.add(rec(1929, "Best_Picture", "Wings", false, "c")), Added::Merged);

        let table = agg.finalize();
        let rows = table.get("Best_Picture").expect("category");
        assert_eq!(rows, &[rec(1929, "Best_Picture", "Wings", true, "a")]);
    }

    #[test]
    fn same_film_in_other_year_or_category_is_distinct() {
        let mut agg = Aggregator::new();
        agg.add(rec(1929, "Best_Picture", "Wings", true, "u"));
        agg.add(rec(1930, "Best_Picture", "Wings", false, "u"));
        agg.add(rec(1929, "Best_Cinematography", "Wings", false, "u"));
        assert_eq!(agg.len(), 3);
        assert_eq!(agg.finalize().len(), 2);
    }

    #[test]
    fn aggregating_twice_equals_once() {
        let input = vec![
            rec(1929, "Best_Picture", "Wings", true, "u"),
            rec(1929, "Best_Picture", "The Racket", false, "u"),
            rec(1929, "Best_Actor_in_a_Leading_Role", "The Last Command", true, "u"),
        ];
        let mut once = Aggregator::new();
        let mut twice = Aggregator::new();
        for r in &input {
            once.add(r.clone());
            twice.add(r.clone());
        }
        for r in &input {
            assert_eq!(twice.add(r.clone()), Added::Merged);
        }
        assert_eq!(once.finalize(), twice.finalize());
    }

    #[test]
    fn table_order_is_key_then_insertion() {
        let mut agg = Aggregator::new();
        agg.add(rec(1930, "Best_Picture", "B", false, "u"));
        agg.add(rec(1929, "Best_Director", "X", false, "u"));
        agg.add(rec(1929, "Best_Picture", "A", false, "u"));
        let table = agg.finalize();

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Best_Director", "Best_Picture"]);
        let films: Vec<_> = table.get("Best_Picture").unwrap_or_default().iter().map(|r| r.film.as_str()).collect();
        assert_eq!(films, vec!["B", "A"]);
        assert_eq!(table.total_records(), 3);
    }

    #[test]
    fn row_cells_follow_header() {
        let r = rec(1929, "Best_Picture", "Wings", true, "https://x/1929");
        assert_eq!(r.to_row(), ["1929", "Best_Picture", "Wings", "True", "https://x/1929"].map(String::from));
    }
}
