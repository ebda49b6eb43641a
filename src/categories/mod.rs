// src/categories/mod.rs
//! # Category normalization
//!
//! Maps whatever label a ceremony page printed ("Outstanding Production",
//! "Actor", "Best Motion Picture", …) to one stable, file-name-safe key
//! (`Best_Picture`, `Best_Actor_in_a_Leading_Role`, …).
//!
//! Lookup order:
//! 1. exact label, aliases scoped to the ceremony's era first, then aliases
//!    valid for any year, then the canonical keys themselves;
//! 2. the same lookup on the *folded* label (lowercase, punctuation-free,
//!    synonyms rewritten, `best` prefix ensured);
//! 3. a key derived from the label itself, reported as [`Origin::Derived`].
//!
//! The function is total, and feeding a key back in returns the same key.

pub mod history;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::core::sanitize::{normalize_ws, slugify};
use history::{era_span, rename, ERAS, RENAMES, SYNONYMS};

pub use history::categories_for_year;

/// Key used when a label has no usable characters at all.
pub const UNKNOWN_CATEGORY: &str = "Unknown_Category";

/// Inclusive range of ceremony years an alias applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearSpan {
    pub from: u16,
    pub to: u16,
}

impl YearSpan {
    pub fn contains(&self, year: u16) -> bool {
        (self.from..=self.to).contains(&year)
    }
}

/// One row of the alias table. `span == None` means "any year".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryAlias {
    pub span: Option<YearSpan>,
    pub label: String,
    pub key: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Exact label match.
    Alias,
    /// Matched after folding case, punctuation and synonyms.
    Folded,
    /// Unknown label; the key was derived from the label text.
    Derived,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub key: String,
    pub origin: Origin,
}

struct AliasTable {
    exact: Vec<CategoryAlias>,
    folded: Vec<CategoryAlias>,
    canonical: BTreeSet<String>,
}

static TABLE: LazyLock<AliasTable> = LazyLock::new(AliasTable::build);

impl AliasTable {
    fn build() -> Self {
        let mut exact = Vec::new();

        // Era-scoped labels, plus their "Best"-less short forms ("Actor").
        for (idx, era) in ERAS.iter().enumerate() {
            let (from, to) = era_span(idx);
            let span = Some(YearSpan { from, to });
            for label in era.categories {
                let key = canonical_key(rename(label).unwrap_or(*label));
                for l in [Some(*label), short_form(label)].into_iter().flatten() {
                    exact.push(CategoryAlias { span, label: l.to_string(), key: key.clone() });
                }
            }
        }

        // Any-year renames.
        for (from, to) in RENAMES {
            let key = canonical_key(to);
            for l in [Some(*from), short_form(from)].into_iter().flatten() {
                exact.push(CategoryAlias { span: None, label: l.to_string(), key: key.clone() });
            }
        }

        let folded = exact
            .iter()
            .map(|a| CategoryAlias { span: a.span, label: fold(&a.label), key: a.key.clone() })
            .collect();

        let canonical = RENAMES.iter().map(|(_, to)| canonical_key(to)).collect();

        Self { exact, folded, canonical }
    }

    /// Era-scoped entries win over any-year entries.
    fn find<'a>(list: &'a [CategoryAlias], label: &str, year: u16) -> Option<&'a str> {
        let scoped = list
            .iter()
            .find(|a| a.label == label && a.span.is_some_and(|s| s.contains(year)));
        scoped
            .or_else(|| list.iter().find(|a| a.label == label && a.span.is_none()))
            .map(|a| a.key.as_str())
    }

    fn lookup_exact(&self, label: &str, year: u16) -> Option<String> {
        Self::find(&self.exact, label, year)
            .map(str::to_string)
            .or_else(|| self.canonical.get(label).cloned())
    }

    fn lookup_folded(&self, folded: &str, year: u16) -> Option<String> {
        if let Some(key) = Self::find(&self.folded, folded, year) {
            return Some(key.to_string());
        }
        self.canonical.iter().find(|k| fold(k) == folded).cloned()
    }
}

fn short_form(label: &str) -> Option<&str> {
    label
        .strip_prefix("Best ")
        .or_else(|| label.strip_prefix("Outstanding "))
}

/// File-name-safe key for a canonical display name.
pub fn canonical_key(display: &str) -> String {
    slugify(display)
}

/// Lowercase, punctuation-free, single-spaced form with synonyms rewritten and
/// a leading `best`.
pub fn fold(label: &str) -> String {
    let mut s = String::with_capacity(label.len() + 8);
    for ch in label.chars() {
        match ch {
            '&' => s.push_str(" and "),
            c if c.is_alphanumeric() => s.extend(c.to_lowercase()),
            _ => s.push(' '),
        }
    }
    let mut s = format!(" {} ", normalize_ws(&s));
    for (from, to) in SYNONYMS {
        s = s.replace(from, to);
    }
    let s = normalize_ws(&s);
    if s == "best" || s.starts_with("best ") {
        s
    } else {
        normalize_ws(&format!("best {s}"))
    }
}

/// Map a raw label seen on a `year` page to its canonical key.
pub fn normalize(raw_label: &str, year: u16) -> Normalized {
    let table = &*TABLE;
    let label = normalize_ws(raw_label);

    if let Some(key) = table.lookup_exact(&label, year) {
        return Normalized { key, origin: Origin::Alias };
    }
    if let Some(key) = table.lookup_folded(&fold(&label), year) {
        return Normalized { key, origin: Origin::Folded };
    }

    let key = slugify(&label);
    let key = if key.is_empty() { UNKNOWN_CATEGORY.to_string() } else { key };
    Normalized { key, origin: Origin::Derived }
}

/// Key-only shorthand for [`normalize`].
pub fn normalize_key(raw_label: &str, year: u16) -> String {
    normalize(raw_label, year).key
}

/// True when the label resolves through the alias table (not derived).
pub fn is_known_label(raw_label: &str, year: u16) -> bool {
    normalize(raw_label, year).origin != Origin::Derived
}

/// Every canonical key, sorted.
pub fn canonical_keys() -> impl Iterator<Item = &'static str> {
    TABLE.canonical.iter().map(String::as_str)
}

pub fn is_canonical(key: &str) -> bool {
    TABLE.canonical.contains(key)
}

/// All alias rows, era-scoped ones first.
pub fn aliases() -> &'static [CategoryAlias] {
    &TABLE.exact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_across_decades() {
        assert_eq!(normalize_key("Best Motion Picture", 1931), "Best_Picture");
        assert_eq!(normalize_key("Best Picture", 2020), "Best_Picture");
        assert_eq!(normalize_key("Outstanding Production", 1936), "Best_Picture");
        assert_eq!(normalize_key("Outstanding Picture", 1929), "Best_Picture");
    }

    #[test]
    fn short_forms_resolve_in_their_era() {
        assert_eq!(normalize("Actor", 1929), Normalized {
            key: "Best_Actor_in_a_Leading_Role".into(),
            origin: Origin::Alias,
        });
        assert_eq!(normalize_key("Writing", 1930), "Best_Writing_Original_Screenplay");
        assert_eq!(normalize_key("Sound Editing", 2005), "Best_Sound");
    }

    #[test]
    fn modern_site_labels_fold_onto_keys() {
        assert_eq!(normalize_key("Actor in a Leading Role", 2024), "Best_Actor_in_a_Leading_Role");
        assert_eq!(normalize_key("ACTRESS IN A SUPPORTING ROLE", 2024), "Best_Actress_in_a_Supporting_Role");
        assert_eq!(normalize_key("Directing", 1990), "Best_Director");
        assert_eq!(normalize_key("Writing (Adapted Screenplay)", 2024), "Best_Writing_Adapted_Screenplay");
        assert_eq!(normalize_key("Music (Original Song)", 2024), "Best_Music_Original_Song");
        assert_eq!(normalize_key("Makeup & Hairstyling", 2024), "Best_Makeup_and_Hairstyling");
        assert_eq!(normalize_key("Documentary Feature Film", 2024), "Best_Documentary_Feature");
        assert_eq!(normalize_key("Animated Feature Film", 2024), "Best_Animated_Feature_Film");
        assert_eq!(normalize_key("Short Film (Live-Action)", 2024), "Best_Short_Film_Live_Action");
        assert_eq!(
            normalize("Best Performance by an Actor in a Leading Role", 1995).origin,
            Origin::Folded
        );
    }

    #[test]
    fn unknown_labels_derive_stable_keys() {
        let n = normalize("Best Writing (Title Writing)", 1929);
        assert_eq!(n.origin, Origin::Derived);
        assert_eq!(n.key, "Best_Writing_Title_Writing");
        assert_eq!(normalize_key("Best Writing (Title Writing)", 1929), n.key);
        assert_eq!(normalize_key("  ", 1929), UNKNOWN_CATEGORY);
    }

    #[test]
    fn canonical_keys_are_fixed_points() {
        for key in canonical_keys() {
            for year in [1929, 1934, 1955, 2024] {
                let n = normalize(key, year);
                assert_eq!(n.key, key, "{key} @ {year}");
                assert_eq!(n.origin, Origin::Alias);
            }
        }
    }

    #[test]
    fn normalize_is_idempotent_on_derived_keys() {
        for raw in ["Direct.ing Award", "Juvenile Award", "Honorary & Special", "Pic.ture"] {
            let once = normalize_key(raw, 1950);
            assert_eq!(normalize_key(&once, 1950), once, "{raw}");
        }
    }

    #[test]
    fn fold_shapes() {
        assert_eq!(fold("Best Motion Picture"), "best picture");
        assert_eq!(fold("Outstanding Picture"), "best picture");
        assert_eq!(fold("Best_Picture"), "best picture");
        assert_eq!(fold("Achievement in Directing"), "best director");
        assert_eq!(fold(""), "best");
    }

    #[test]
    fn every_alias_key_is_canonical() {
        assert!(aliases().iter().all(|a| is_canonical(&a.key)));
        assert_eq!(canonical_keys().count(), 24);
    }

    #[test]
    fn known_label_check() {
        assert!(is_known_label("Best Actress", 1929));
        assert!(is_known_label("Cinematography", 1960));
        assert!(!is_known_label("Wings", 1929));
    }
}
