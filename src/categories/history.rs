// src/categories/history.rs
//! Static category data: what the Academy called each award, era by era, and
//! which present-day category every historical name rolls up into.

/// Category names as printed during an era. An era runs from `from` until the
/// next era starts.
pub struct Era {
    pub from: u16,
    pub categories: &'static [&'static str],
}

pub const ERAS: &[Era] = &[
    Era {
        from: 1929,
        categories: &[
            "Outstanding Picture",
            "Best Actor",
            "Best Actress",
            "Best Director",
            "Best Writing",
            "Best Cinematography",
            "Best Art Direction",
            "Best Engineering Effects",
        ],
    },
    Era {
        from: 1930,
        categories: &[
            "Outstanding Picture",
            "Best Actor",
            "Best Actress",
            "Best Director",
            "Best Writing",
            "Best Cinematography",
            "Best Art Direction",
            "Best Sound Recording",
        ],
    },
    Era {
        from: 1934,
        categories: &[
            "Outstanding Production",
            "Best Actor",
            "Best Actress",
            "Best Director",
            "Best Writing (Adaptation)",
            "Best Writing (Original Story)",
            "Best Cinematography",
            "Best Art Direction",
            "Best Sound Recording",
            "Best Assistant Director",
            "Best Film Editing",
            "Best Music (Scoring)",
            "Best Music (Song)",
        ],
    },
    Era {
        from: 1940,
        categories: &[
            "Outstanding Production",
            "Best Actor",
            "Best Actress",
            "Best Supporting Actor",
            "Best Supporting Actress",
            "Best Director",
            "Best Writing (Original Screenplay)",
            "Best Writing (Screenplay)",
            "Best Cinematography (Black and White)",
            "Best Cinematography (Color)",
            "Best Art Direction (Black and White)",
            "Best Art Direction (Color)",
            "Best Sound Recording",
            "Best Film Editing",
            "Best Music (Original Score)",
            "Best Music (Original Song)",
            "Best Special Effects",
            "Best Documentary (Short Subject)",
            "Best Documentary (Feature)",
        ],
    },
    Era {
        from: 1950,
        categories: &[
            "Best Picture",
            "Best Actor",
            "Best Actress",
            "Best Supporting Actor",
            "Best Supporting Actress",
            "Best Director",
            "Best Writing (Story and Screenplay)",
            "Best Writing (Screenplay)",
            "Best Cinematography (Black and White)",
            "Best Cinematography (Color)",
            "Best Art Direction (Black and White)",
            "Best Art Direction (Color)",
            "Best Costume Design (Black and White)",
            "Best Costume Design (Color)",
            "Best Sound Recording",
            "Best Film Editing",
            "Best Music (Scoring of a Dramatic or Comedy Picture)",
            "Best Music (Scoring of a Musical Picture)",
            "Best Music (Original Song)",
            "Best Special Effects",
            "Best Documentary (Short Subject)",
            "Best Documentary (Feature)",
            "Best Foreign Language Film",
        ],
    },
    Era {
        from: 1970,
        categories: &[
            "Best Picture",
            "Best Actor in a Leading Role",
            "Best Actress in a Leading Role",
            "Best Actor in a Supporting Role",
            "Best Actress in a Supporting Role",
            "Best Director",
            "Best Writing (Original Screenplay)",
            "Best Writing (Screenplay Based on Material from Another Medium)",
            "Best Cinematography",
            "Best Art Direction",
            "Best Costume Design",
            "Best Sound",
            "Best Film Editing",
            "Best Music (Original Dramatic Score)",
            "Best Music (Original Song Score)",
            "Best Music (Original Song)",
            "Best Visual Effects",
            "Best Documentary (Short Subject)",
            "Best Documentary (Feature)",
            "Best Foreign Language Film",
            "Best Short Film (Live Action)",
            "Best Short Film (Animated)",
        ],
    },
    Era {
        from: 1990,
        categories: &[
            "Best Picture",
            "Best Actor in a Leading Role",
            "Best Actress in a Leading Role",
            "Best Actor in a Supporting Role",
            "Best Actress in a Supporting Role",
            "Best Director",
            "Best Writing (Original Screenplay)",
            "Best Writing (Screenplay Based on Material Previously Produced or Published)",
            "Best Cinematography",
            "Best Art Direction",
            "Best Costume Design",
            "Best Sound",
            "Best Sound Effects Editing",
            "Best Film Editing",
            "Best Music (Original Score)",
            "Best Music (Original Song)",
            "Best Makeup",
            "Best Visual Effects",
            "Best Documentary (Short Subject)",
            "Best Documentary (Feature)",
            "Best Foreign Language Film",
            "Best Short Film (Live Action)",
            "Best Short Film (Animated)",
        ],
    },
    Era {
        from: 2000,
        categories: &[
            "Best Picture",
            "Best Actor in a Leading Role",
            "Best Actress in a Leading Role",
            "Best Actor in a Supporting Role",
            "Best Actress in a Supporting Role",
            "Best Director",
            "Best Writing (Original Screenplay)",
            "Best Writing (Adapted Screenplay)",
            "Best Cinematography",
            "Best Art Direction",
            "Best Costume Design",
            "Best Sound Mixing",
            "Best Sound Editing",
            "Best Film Editing",
            "Best Music (Original Score)",
            "Best Music (Original Song)",
            "Best Makeup",
            "Best Visual Effects",
            "Best Documentary (Short Subject)",
            "Best Documentary (Feature)",
            "Best Foreign Language Film",
            "Best Short Film (Live Action)",
            "Best Short Film (Animated)",
            "Best Animated Feature Film",
        ],
    },
    Era {
        from: 2010,
        categories: &[
            "Best Picture",
            "Best Actor in a Leading Role",
            "Best Actress in a Leading Role",
            "Best Actor in a Supporting Role",
            "Best Actress in a Supporting Role",
            "Best Director",
            "Best Writing (Original Screenplay)",
            "Best Writing (Adapted Screenplay)",
            "Best Cinematography",
            "Best Production Design",
            "Best Costume Design",
            "Best Sound Mixing",
            "Best Sound Editing",
            "Best Film Editing",
            "Best Music (Original Score)",
            "Best Music (Original Song)",
            "Best Makeup and Hairstyling",
            "Best Visual Effects",
            "Best Documentary (Short Subject)",
            "Best Documentary (Feature)",
            "Best International Feature Film",
            "Best Short Film (Live Action)",
            "Best Short Film (Animated)",
            "Best Animated Feature Film",
        ],
    },
    Era {
        from: 2020,
        categories: &[
            "Best Picture",
            "Best Actor in a Leading Role",
            "Best Actress in a Leading Role",
            "Best Actor in a Supporting Role",
            "Best Actress in a Supporting Role",
            "Best Director",
            "Best Writing (Original Screenplay)",
            "Best Writing (Adapted Screenplay)",
            "Best Cinematography",
            "Best Production Design",
            "Best Costume Design",
            "Best Sound",
            "Best Film Editing",
            "Best Music (Original Score)",
            "Best Music (Original Song)",
            "Best Makeup and Hairstyling",
            "Best Visual Effects",
            "Best Documentary (Short Subject)",
            "Best Documentary (Feature)",
            "Best International Feature Film",
            "Best Short Film (Live Action)",
            "Best Short Film (Animated)",
            "Best Animated Feature Film",
        ],
    },
];

/// Historical name → present-day name. Every right-hand side is canonical.
pub const RENAMES: &[(&str, &str)] = &[
    // Picture
    ("Outstanding Picture", "Best Picture"),
    ("Outstanding Production", "Best Picture"),
    ("Best Picture", "Best Picture"),
    // Acting
    ("Best Actor", "Best Actor in a Leading Role"),
    ("Best Actor in a Leading Role", "Best Actor in a Leading Role"),
    ("Best Actress", "Best Actress in a Leading Role"),
    ("Best Actress in a Leading Role", "Best Actress in a Leading Role"),
    ("Best Supporting Actor", "Best Actor in a Supporting Role"),
    ("Best Actor in a Supporting Role", "Best Actor in a Supporting Role"),
    ("Best Supporting Actress", "Best Actress in a Supporting Role"),
    ("Best Actress in a Supporting Role", "Best Actress in a Supporting Role"),
    // Directing
    ("Best Director", "Best Director"),
    ("Directing", "Best Director"),
    // Writing
    ("Best Writing", "Best Writing (Original Screenplay)"),
    ("Best Writing (Original Story)", "Best Writing (Original Screenplay)"),
    ("Best Writing (Adaptation)", "Best Writing (Adapted Screenplay)"),
    ("Best Writing (Story and Screenplay)", "Best Writing (Original Screenplay)"),
    ("Best Writing (Screenplay)", "Best Writing (Adapted Screenplay)"),
    ("Best Writing (Screenplay Based on Material from Another Medium)", "Best Writing (Adapted Screenplay)"),
    ("Best Writing (Screenplay Based on Material Previously Produced or Published)", "Best Writing (Adapted Screenplay)"),
    ("Best Writing (Original Screenplay)", "Best Writing (Original Screenplay)"),
    ("Best Writing (Adapted Screenplay)", "Best Writing (Adapted Screenplay)"),
    // Technical
    ("Best Cinematography", "Best Cinematography"),
    ("Best Cinematography (Black and White)", "Best Cinematography"),
    ("Best Cinematography (Color)", "Best Cinematography"),
    ("Best Art Direction", "Best Production Design"),
    ("Best Art Direction (Black and White)", "Best Production Design"),
    ("Best Art Direction (Color)", "Best Production Design"),
    ("Best Production Design", "Best Production Design"),
    ("Best Costume Design", "Best Costume Design"),
    ("Best Costume Design (Black and White)", "Best Costume Design"),
    ("Best Costume Design (Color)", "Best Costume Design"),
    ("Best Sound Recording", "Best Sound"),
    ("Best Sound", "Best Sound"),
    ("Best Sound Mixing", "Best Sound"),
    ("Best Sound Editing", "Best Sound"),
    ("Best Sound Effects Editing", "Best Sound"),
    ("Best Film Editing", "Best Film Editing"),
    // Music
    ("Best Music (Scoring)", "Best Music (Original Score)"),
    ("Best Music (Original Score)", "Best Music (Original Score)"),
    ("Best Music (Scoring of a Dramatic or Comedy Picture)", "Best Music (Original Score)"),
    ("Best Music (Original Dramatic Score)", "Best Music (Original Score)"),
    ("Best Music (Original Song Score)", "Best Music (Original Score)"),
    ("Best Music (Scoring of a Musical Picture)", "Best Music (Original Score)"),
    ("Best Music (Original Song)", "Best Music (Original Song)"),
    ("Best Music (Song)", "Best Music (Original Song)"),
    // Effects, makeup
    ("Best Engineering Effects", "Best Visual Effects"),
    ("Best Special Effects", "Best Visual Effects"),
    ("Best Visual Effects", "Best Visual Effects"),
    ("Best Makeup", "Best Makeup and Hairstyling"),
    ("Best Makeup and Hairstyling", "Best Makeup and Hairstyling"),
    // Documentary, shorts
    ("Best Documentary (Short Subject)", "Best Documentary (Short Subject)"),
    ("Best Documentary (Feature)", "Best Documentary (Feature)"),
    ("Best Short Film (Live Action)", "Best Short Film (Live Action)"),
    ("Best Short Film (Animated)", "Best Short Film (Animated)"),
    // International, animated
    ("Best Foreign Language Film", "Best International Feature Film"),
    ("Best International Feature Film", "Best International Feature Film"),
    ("Best Animated Feature Film", "Best Animated Feature Film"),
    // Discontinued
    ("Best Assistant Director", "Best Assistant Director"),
];

/// Substring rewrites applied to folded labels (lowercase, punctuation-free,
/// single-spaced), in order.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("outstanding ", "best "),
    ("achievement in ", ""),
    ("performance by an ", ""),
    ("performance by a ", ""),
    ("motion picture", "picture"),
    ("directing", "director"),
    ("documentary feature film", "documentary feature"),
    ("documentary short film", "documentary short subject"),
    ("live action short film", "short film live action"),
    ("animated short film", "short film animated"),
    ("animated feature", "animated feature film"),
    ("film film", "film"),
    ("make up", "makeup"),
];

/// The category list in force for `year` (the era that started most recently;
/// years before the first ceremony get the first era).
pub fn categories_for_year(year: u16) -> &'static [&'static str] {
    ERAS.iter()
        .rev()
        .find(|e| e.from <= year)
        .or(ERAS.first())
        .map(|e| e.categories)
        .unwrap_or(&[])
}

/// Inclusive year span covered by the era at `idx`.
pub fn era_span(idx: usize) -> (u16, u16) {
    let from = ERAS[idx].from;
    let to = ERAS.get(idx + 1).map(|n| n.from - 1).unwrap_or(u16::MAX);
    (from, to)
}

/// Present-day name for a historical name, if the label is one we know.
pub fn rename(label: &str) -> Option<&'static str> {
    RENAMES.iter().find(|(from, _)| *from == label).map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eras_are_sorted() {
        assert!(ERAS.windows(2).all(|w| w[0].from < w[1].from));
    }

    #[test]
    fn every_era_label_has_a_rename() {
        for era in ERAS {
            for label in era.categories {
                assert!(rename(label).is_some(), "{label} ({}) has no rename", era.from);
            }
        }
    }

    #[test]
    fn renames_point_at_fixed_points() {
        for (_, to) in RENAMES {
            assert_eq!(rename(to), Some(*to), "{to} is not canonical");
        }
    }

    #[test]
    fn categories_for_year_picks_latest_started_era() {
        assert_eq!(categories_for_year(1929)[0], "Outstanding Picture");
        assert!(categories_for_year(1934).contains(&"Best Assistant Director"));
        assert!(categories_for_year(1939).contains(&"Best Music (Song)"));
        assert!(categories_for_year(2024).contains(&"Best Sound"));
        assert_eq!(categories_for_year(1900), categories_for_year(1929));
    }

    #[test]
    fn era_spans_tile_the_timeline() {
        assert_eq!(era_span(0), (1929, 1929));
        assert_eq!(era_span(1), (1930, 1933));
        assert_eq!(era_span(ERAS.len() - 1).1, u16::MAX);
    }
}
