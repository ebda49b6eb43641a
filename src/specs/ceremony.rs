// src/specs/ceremony.rs
//! Ceremony page: `https://www.oscars.org/oscars/ceremonies/{year}`.
//!
//! The page has no stable markup for the nominee list, so we read it as a
//! stream of visible text lines:
//!
//! ```text
//! … Winners & Nominees
//! Actor in a Leading Role        <- heading, opens a block
//! Winner                         <- marker
//! Cillian Murphy                 <- entry line 1
//! Oppenheimer                    <- entry line 2
//! Nominee
//! Bradley Cooper
//! Maestro
//! …
//! 0-9 ALL                        <- alphabetical index, section ends
//! ```
//!
//! Each marker introduces one entry of at most two lines, joined with `" — "`.

use std::sync::LazyLock;

use regex::Regex;

use crate::categories;
use crate::config::consts::EARLY_ERA_LAST_YEAR;
use crate::core::html::text_lines;
use crate::error::ParseError;

pub const SECTION_START: &str = "WINNERS & NOMINEES";
pub const ENTRY_SEPARATOR: &str = " \u{2014} ";
const MAX_ENTRY_LINES: usize = 2;

/// Substrings that never appear in a heading.
const NAV_FRAGMENTS: &[&str] = &[
    "view by category",
    "view by film",
    "select a category",
    "highlights",
    "memorable moments",
    "share",
    "winner",
    "nominee",
];

/// Early nominees whose names look enough like labels to fool the shape check.
const KNOWN_FILMS: &[&str] = &[
    "sunrise",
    "wings",
    "the jazz singer",
    "the circus",
    "7th heaven",
    "the crowd",
    "the racket",
    "chang",
    "the broadway melody",
    "the bridge of san luis rey",
    "the patriot",
    "white shadows in the south seas",
    "all quiet on the western front",
    "cimarron",
    "grand hotel",
];

const KNOWN_PEOPLE: &[&str] = &[
    "mary pickford", "warner baxter", "george arliss", "norma shearer",
    "fredric march", "helen hayes", "wallace beery", "charles laughton",
    "katharine hepburn", "leslie howard", "paul muni", "marie dressler",
    "lionel barrymore", "adolphe menjou", "ann harding", "irene dunne",
    "jackie cooper", "marlene dietrich", "richard dix", "george bancroft",
    "bessie love", "betty compson", "chester morris", "corinne griffith",
    "jeanne eagels", "lewis stone", "ruth chatterton",
];

/// Words a category label is built from. A line made only of these (plus
/// connectives) reads as a heading; "Sound of Metal" does not.
const LABEL_VOCABULARY: &[&str] = &[
    "academy", "action", "actor", "actress", "adaptation", "adapted", "animated", "art",
    "assistant", "based", "best", "black", "cartoon", "cartoons", "cinematography", "color",
    "comedy", "costume", "dance", "decoration", "design", "direction", "director", "directing",
    "documentary", "dramatic", "editing", "effects", "engineering", "feature", "film", "foreign",
    "hairstyling", "international", "language", "leading", "live", "makeup", "material",
    "mixing", "motion", "music", "musical", "novelty", "original", "outstanding", "picture",
    "production", "recording", "reel", "reels", "role", "score", "scoring", "screenplay", "set",
    "short", "song", "sound", "special", "story", "subject", "subjects", "supporting", "title",
    "treatment", "two", "one", "visual", "white", "writing",
];
const CONNECTIVES: &[&str] = &["a", "an", "and", "by", "for", "in", "of", "or", "on", "to"];

static PREFIXED_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Best|Outstanding)\s+[A-Z]").expect("static regex"));
static LABEL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z\s(),&'/-]+$").expect("static regex"));

/// One nominee line group under a heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub text: String,
    pub is_winner: bool,
}

/// A heading and the entries listed under it, in page order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBlock {
    pub raw_label: String,
    pub entries: Vec<RawEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Winner,
    Nominee,
}

fn marker(line: &str) -> Option<Marker> {
    match line.to_lowercase().as_str() {
        "winner" => Some(Marker::Winner),
        "nominee" | "nominees" => Some(Marker::Nominee),
        _ => None,
    }
}

fn is_section_start(line: &str) -> bool {
    line.to_uppercase().starts_with(SECTION_START)
}

fn is_section_end(line: &str, year: u16) -> bool {
    if line == "0-9" || (line.contains("0-9") && line.contains("ALL")) {
        return true;
    }
    if year <= EARLY_ERA_LAST_YEAR {
        let up = line.to_uppercase();
        return up.starts_with("ALPHABETICAL") || up.starts_with("INDEX");
    }
    false
}

fn is_nav(line: &str) -> bool {
    let up = line.to_uppercase();
    up.starts_with("VIEW BY FILM") || up.starts_with("VIEW BY CATEGORY")
}

fn label_words(lc: &str) -> impl Iterator<Item = &str> {
    lc.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
}

fn built_from_vocabulary(lc: &str) -> bool {
    let mut content = 0;
    for w in label_words(lc) {
        if LABEL_VOCABULARY.contains(&w) {
            content += 1;
        } else if !CONNECTIVES.contains(&w) {
            return false;
        }
    }
    content > 0
}

/// Heuristic: does this line open a category block on a `year` page?
pub fn looks_like_heading(line: &str, year: u16) -> bool {
    let len = line.chars().count();
    if !(4..=70).contains(&len) {
        return false;
    }
    let lc = line.to_lowercase();
    if NAV_FRAGMENTS.iter().any(|f| lc.contains(f)) {
        return false;
    }
    if KNOWN_FILMS.contains(&lc.as_str()) || KNOWN_PEOPLE.contains(&lc.as_str()) {
        return false;
    }
    if categories::is_known_label(line, year) || PREFIXED_LABEL.is_match(line) {
        return true;
    }
    LABEL_SHAPE.is_match(line) && built_from_vocabulary(&lc)
}

/// Visible lines between the section marker and the alphabetical index.
/// `None` when the page has no such section.
pub fn section_lines(html: &str, year: u16) -> Option<Vec<String>> {
    let mut lines = text_lines(html).into_iter();
    lines.by_ref().find(|l| is_section_start(l))?;

    Some(
        lines
            .take_while(|l| !is_section_end(l, year))
            .filter(|l| !is_nav(l))
            .collect(),
    )
}

/// Split a ceremony page into category blocks.
///
/// A page without a "Winners & Nominees" section is [`ParseError::SectionAbsent`].
/// Otherwise the blocks come out lazily; entries found before any heading come
/// out as one [`ParseError::MalformedBlock`] and the walk goes on.
pub fn parse(html: &str, year: u16) -> Result<Blocks, ParseError> {
    let lines = section_lines(html, year).ok_or(ParseError::SectionAbsent)?;
    Ok(Blocks { lines, pos: 0, year })
}

/// Single-pass iterator over the blocks of one page.
#[derive(Debug)]
pub struct Blocks {
    lines: Vec<String>,
    pos: usize,
    year: u16,
}

impl Blocks {
    /// Read the entry introduced by the marker at `self.pos`; leaves `pos`
    /// on the first line not consumed. The first line after a marker always
    /// belongs to the entry, even if it reads like a heading ("Best Boy").
    fn take_entry(&mut self, kind: Marker) -> Option<RawEntry> {
        self.pos += 1;
        let mut parts: Vec<&str> = Vec::with_capacity(MAX_ENTRY_LINES);

        while let Some(line) = self.lines.get(self.pos) {
            if parts.len() == MAX_ENTRY_LINES
                || marker(line).is_some()
                || (!parts.is_empty() && looks_like_heading(line, self.year))
            {
                break;
            }
            parts.push(line);
            self.pos += 1;
        }

        let text = parts.join(ENTRY_SEPARATOR);
        let text = text.trim_matches(|c: char| c == ' ' || c == '\u{2014}');
        (!text.is_empty()).then(|| RawEntry {
            text: text.to_string(),
            is_winner: kind == Marker::Winner,
        })
    }

    /// Entries up to the next heading (or the end of the section).
    fn take_entries(&mut self) -> Vec<RawEntry> {
        let mut entries = Vec::new();
        while let Some(line) = self.lines.get(self.pos) {
            if looks_like_heading(line, self.year) {
                break;
            }
            match marker(line) {
                Some(kind) => entries.extend(self.take_entry(kind)),
                // Stray text (credits, captions) between entries.
                None => self.pos += 1,
            }
        }
        entries
    }
}

impl Iterator for Blocks {
    type Item = Result<CategoryBlock, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.lines.get(self.pos) {
            if looks_like_heading(line, self.year) {
                let raw_label = line.clone();
                self.pos += 1;
                let entries = self.take_entries();
                return Some(Ok(CategoryBlock { raw_label, entries }));
            }
            if marker(line).is_some() {
                let orphans = self.take_entries();
                if orphans.is_empty() {
                    continue;
                }
                return Some(Err(ParseError::MalformedBlock {
                    label: None,
                    reason: format!("{} entries before any category heading", orphans.len()),
                }));
            }
            self.pos += 1;
        }
        None
    }
}
