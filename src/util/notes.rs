//! Free-text game-note parsing. Note fields are prose like
//! `"Bichette 2 (5); Kirk."` — semicolon-delimited names, each with an
//! optional trailing count and optional parenthetical season totals. Entries
//! that don't parse are dropped rather than aborting the whole field.

/// Note-field labels that count against a batter's score.
pub const PENALTY_LABELS: [&str; 3] = ["E", "CS", "GIDP"];

#[derive(Debug, PartialEq, Eq)]
pub struct NoteEntry {
    pub name: String,
    pub count: i64,
}

/// Splits one note-field value into its entries, skipping anything
/// unparseable.
pub fn parse_note_field(value: &str) -> Vec<NoteEntry> {
    value
        .trim_end()
        .trim_end_matches('.')
        .split(';')
        .filter_map(parse_entry)
        .collect()
}

/// Parses a single entry: parentheticals stripped, then a trailing standalone
/// integer taken as the count (1 if absent). `None` means the entry is
/// skipped, never that the field is in error.
pub fn parse_entry(entry: &str) -> Option<NoteEntry> {
    let cleaned = strip_parentheticals(entry);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.rsplit_once(' ') {
        Some((name, digits)) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            let name = name.trim_end();
            if name.is_empty() {
                return None;
            }
            // an absurd count overflows the parse and skips the entry
            digits.parse().ok().map(|count| NoteEntry {
                name: name.to_owned(),
                count,
            })
        }
        _ => Some(NoteEntry {
            name: cleaned.to_owned(),
            count: 1,
        }),
    }
}

fn strip_parentheticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0_usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            c if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, count: i64) -> NoteEntry {
        NoteEntry {
            name: name.to_owned(),
            count,
        }
    }

    #[test]
    fn lone_name_counts_once() {
        assert_eq!(parse_note_field("Smith."), vec![entry("Smith", 1)]);
    }

    #[test]
    fn trailing_integer_is_an_explicit_count() {
        assert_eq!(
            parse_note_field("Smith 2; Jones; Smith."),
            vec![entry("Smith", 2), entry("Jones", 1), entry("Smith", 1)]
        );
    }

    #[test]
    fn parentheticals_are_stripped() {
        assert_eq!(
            parse_note_field("Bichette 2 (5, 3rd inning); Kirk (2)."),
            vec![entry("Bichette", 2), entry("Kirk", 1)]
        );
    }

    #[test]
    fn suffixed_names_keep_their_suffix() {
        assert_eq!(parse_note_field("Guerrero Jr."), vec![entry("Guerrero Jr", 1)]);
    }

    #[test]
    fn empty_and_overflowing_entries_are_skipped() {
        assert_eq!(parse_note_field(" ; ."), vec![]);
        assert_eq!(
            parse_note_field("Smith 99999999999999999999999; Jones"),
            vec![entry("Jones", 1)]
        );
    }
}
