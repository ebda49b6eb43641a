// src/title.rs
//! Film-title extraction from one nominee entry.
//!
//! An entry is up to two text lines joined with `" — "`, e.g.
//! `"Cillian Murphy — Oppenheimer"` or `"Oppenheimer — Christopher Nolan"`.
//! Which side holds the film depends on the category's [`Shape`] and on the
//! ceremony [`Era`]; the pairing lives in [`STRATEGIES`].
//!
//! Extraction never fails: if no rule applies cleanly the whole cleaned entry is
//! the title.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::EARLY_ERA_LAST_YEAR;
use crate::core::sanitize::{normalize_ws, trim_punct};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Era {
    /// Film-only listings of the first ceremonies.
    Early,
    Modern,
}

impl Era {
    pub fn of(year: u16) -> Self {
        if year <= EARLY_ERA_LAST_YEAR { Era::Early } else { Era::Modern }
    }
}

/// Token order used by a category's entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `Film — credits` (picture, directing, writing, crafts, …).
    FilmFirst,
    /// `Person — Film` (acting).
    PersonFirst,
    /// `Song — Film — credits` (original song).
    SongFirst,
}

impl Shape {
    /// Classify a canonical key. Most specific class wins: song, then acting.
    pub fn of(category_key: &str) -> Self {
        let k = category_key.to_ascii_lowercase();
        if k.contains("song") && !k.contains("song_score") {
            Shape::SongFirst
        } else if k.contains("actor") || k.contains("actress") {
            Shape::PersonFirst
        } else {
            Shape::FilmFirst
        }
    }
}

/// Which separator-delimited part is the film.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    First,
    Second,
    Last,
}

pub const STRATEGIES: &[(Era, Shape, Pick)] = &[
    (Era::Early, Shape::FilmFirst, Pick::First),
    (Era::Early, Shape::PersonFirst, Pick::Last),
    (Era::Early, Shape::SongFirst, Pick::First),
    (Era::Modern, Shape::FilmFirst, Pick::First),
    (Era::Modern, Shape::PersonFirst, Pick::Last),
    (Era::Modern, Shape::SongFirst, Pick::Second),
];

pub fn strategy(era: Era, shape: Shape) -> Pick {
    STRATEGIES
        .iter()
        .find(|(e, s, _)| *e == era && *s == shape)
        .map(|(_, _, p)| *p)
        .unwrap_or(Pick::First)
}

static DASH_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[\u{2014}\u{2013}]\s+").expect("static regex"));
static HYPHEN_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s+").expect("static regex"));
static LEADING_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^from\s+").expect("static regex"));
// "(as Norma Desmond)", "(Paramount Famous Lasky)", "(Walt Disney Pictures)" …
static TRAILING_CREDIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*\((?:as\s[^()]*|[^()]*\b(?:pictures?|productions?|studios?|films?|corp\.?|inc\.?|ltd\.?|company|paramount|metro-goldwyn-mayer|mgm|warner bros\.?|20th century[- ]fox|fox|universal|columbia|rko(?: radio)?|united artists|samuel goldwyn|selznick|disney)\b[^()]*)\)\s*$",
    )
    .expect("static regex")
});

/// Split on em/en dashes when present; otherwise on spaced hyphens.
fn split_parts(s: &str) -> Vec<&str> {
    let sep = if DASH_SEP.is_match(s) { &*DASH_SEP } else { &*HYPHEN_SEP };
    sep.split(s).map(str::trim).filter(|p| !p.is_empty()).collect()
}

fn pick<'a>(parts: &[&'a str], rule: Pick) -> Option<&'a str> {
    match rule {
        Pick::First => parts.first().copied(),
        Pick::Last => parts.last().copied(),
        Pick::Second => parts.get(1).or(parts.last()).copied(),
    }
}

/// Drop credits and decoration around a candidate title.
pub fn clean_title(candidate: &str) -> String {
    let mut t = trim_punct(candidate).to_string();
    t = LEADING_FROM.replace(&t, "").into_owned();
    if let Some(i) = t.find(';') {
        t.truncate(i);
    }
    loop {
        let stripped = TRAILING_CREDIT.replace(&t, "").into_owned();
        if stripped == t || stripped.trim().is_empty() {
            break;
        }
        t = stripped;
    }
    trim_punct(&t).to_string()
}

/// Best-effort film title for one entry. Never empty for non-empty input.
pub fn extract_title(raw_entry: &str, year: u16, shape: Shape) -> String {
    let text = normalize_ws(raw_entry);
    let parts = split_parts(&text);
    let rule = strategy(Era::of(year), shape);

    if let Some(candidate) = pick(&parts, rule) {
        let title = clean_title(candidate);
        if !title.is_empty() {
            return title;
        }
    }

    // No usable part: keep the whole entry rather than lose it.
    let whole = clean_title(&text);
    if !whole.is_empty() {
        return whole;
    }
    if !text.is_empty() {
        return text;
    }
    raw_entry.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn early_single_title_is_kept_whole() {
        assert_eq!(extract_title("Wings", 1929, Shape::FilmFirst), "Wings");
        assert_eq!(extract_title("  \u{201C}Sunrise\u{201D} ", 1929, Shape::FilmFirst), "Sunrise");
    }

    #[test]
    fn early_acting_entry_takes_film_side() {
        assert_eq!(
            extract_title("Emil Jannings \u{2014} The Last Command", 1929, Shape::PersonFirst),
            "The Last Command"
        );
        // Film-only listing in an acting category still yields the film.
        assert_eq!(extract_title("Chang", 1929, Shape::PersonFirst), "Chang");
    }

    #[test]
    fn modern_shapes() {
        assert_eq!(
            extract_title("Cillian Murphy \u{2014} Oppenheimer", 2024, Shape::PersonFirst),
            "Oppenheimer"
        );
        assert_eq!(
            extract_title("Oppenheimer \u{2014} Christopher Nolan", 2024, Shape::FilmFirst),
            "Oppenheimer"
        );
        assert_eq!(
            extract_title(
                "What Was I Made For? \u{2014} from Barbie; Music and Lyric by Billie Eilish and Finneas O'Connell",
                2024,
                Shape::SongFirst
            ),
            "Barbie"
        );
    }

    #[test]
    fn song_with_single_part_falls_back_to_last() {
        assert_eq!(extract_title("Barbie", 2024, Shape::SongFirst), "Barbie");
    }

    #[test]
    fn dashes_beat_spaced_hyphens() {
        assert_eq!(
            extract_title("Mission: Impossible - Dead Reckoning \u{2014} Jane Doe", 2024, Shape::FilmFirst),
            "Mission: Impossible - Dead Reckoning"
        );
        assert_eq!(extract_title("Jane Doe - Some Film", 2024, Shape::PersonFirst), "Some Film");
        assert_eq!(extract_title("Spider-Man: Into the Spider-Verse", 2019, Shape::FilmFirst),
            "Spider-Man: Into the Spider-Verse");
    }

    #[test]
    fn credit_suffixes_are_stripped() {
        assert_eq!(clean_title("Wings (Paramount Famous Lasky)"), "Wings");
        assert_eq!(clean_title("Sunset Boulevard (as Norma Desmond)"), "Sunset Boulevard");
        assert_eq!(clean_title("The Broadway Melody (Metro-Goldwyn-Mayer)"), "The Broadway Melody");
        assert_eq!(
            clean_title("Borat Subsequent Moviefilm (Delivery of Prodigious Bribe)"),
            "Borat Subsequent Moviefilm (Delivery of Prodigious Bribe)"
        );
    }

    #[test]
    fn separator_only_entry_still_returns_something() {
        assert_eq!(extract_title("\u{2014}", 2000, Shape::FilmFirst), "\u{2014}");
        assert_eq!(extract_title(" ", 2000, Shape::FilmFirst), " ");
    }

    #[test]
    fn shape_classification() {
        assert_eq!(Shape::of("Best_Music_Original_Song"), Shape::SongFirst);
        assert_eq!(Shape::of("Best_Actress_in_a_Supporting_Role"), Shape::PersonFirst);
        assert_eq!(Shape::of("Best_Picture"), Shape::FilmFirst);
        assert_eq!(Shape::of("Best_Music_Original_Song_Score"), Shape::FilmFirst);
    }

    #[test]
    fn era_threshold() {
        assert_eq!(Era::of(1934), Era::Early);
        assert_eq!(Era::of(1935), Era::Modern);
    }

    #[test]
    fn every_pair_has_a_strategy() {
        for era in [Era::Early, Era::Modern] {
            for shape in [Shape::FilmFirst, Shape::PersonFirst, Shape::SongFirst] {
                assert!(STRATEGIES.iter().any(|(e, s, _)| *e == era && *s == shape));
            }
        }
    }

    proptest! {
        #[test]
        fn never_empty_on_non_empty_input(
            text in "\\PC{1,60}",
            year in 1900u16..2100,
            shape in prop_oneof![
                Just(Shape::FilmFirst),
                Just(Shape::PersonFirst),
                Just(Shape::SongFirst)
            ],
        ) {
            prop_assert!(!extract_title(&text, year, shape).is_empty());
        }
    }
}
