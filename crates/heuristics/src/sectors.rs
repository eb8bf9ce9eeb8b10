use core_types::SectorImpact;
use regex::Regex;
use std::sync::OnceLock;

/// A run of letters/spaces (the sector name), an optional literal "sector",
/// one of the movement verbs, then the first integer after it with an
/// optional percent sign. Lazy on both the name and the gap before the number.
const SECTOR_PATTERN: &str =
    r"(?i)([A-Za-z\s]+?)\s+(?:sector)?\s*(?:rose|gained|grew|dropped|declined|fell).*?([0-9]+)%?";

/// Words that glue clauses together and end up at the front of a captured
/// name ("... while Energy fell 8%").
const LEADING_CONNECTIVES: [&str; 10] = [
    "and", "but", "while", "whereas", "as", "with", "also", "meanwhile", "then", "the",
];

static SECTOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn sector_regex() -> &'static Regex {
    SECTOR_REGEX.get_or_init(|| Regex::new(SECTOR_PATTERN).expect("sector pattern is valid"))
}

/// Extracts every `(sector, percentage)` pair mentioned in `text`, in order of
/// appearance.
///
/// The percentage is the literal number in the text: "fell 8%" yields `8`,
/// not `-8`. Repeated sectors are kept as separate entries. A match whose
/// number does not fit in an `i64` is skipped.
pub fn extract_sector_impacts(text: &str) -> Vec<SectorImpact> {
    let impacts: Vec<SectorImpact> = sector_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let name = clean_sector_name(caps.get(1)?.as_str());
            let digits = caps.get(2)?.as_str();
            match digits.parse::<i64>() {
                Ok(percentage) => Some(SectorImpact::new(name, percentage)),
                Err(e) => {
                    tracing::debug!(sector = %name, digits, error = %e, "Skipping unparsable sector impact");
                    None
                }
            }
        })
        .collect();

    tracing::debug!(count = impacts.len(), "Extracted sector impacts");
    impacts
}

fn clean_sector_name(raw: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().collect();
    let start = words
        .iter()
        .position(|w| {
            !LEADING_CONNECTIVES
                .iter()
                .any(|c| c.eq_ignore_ascii_case(w))
        })
        .unwrap_or(0);
    words[start..].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, i64)> {
        extract_sector_impacts(text)
            .into_iter()
            .map(|i| (i.sector, i.percentage))
            .collect()
    }

    #[test]
    fn test_two_sectors_in_order() {
        assert_eq!(
            pairs("Technology sector rose 12% while Energy fell 8%"),
            vec![("Technology".to_string(), 12), ("Energy".to_string(), 8)]
        );
    }

    #[test]
    fn test_verb_does_not_change_sign() {
        assert_eq!(pairs("Energy fell 8%"), vec![("Energy".to_string(), 8)]);
        assert_eq!(pairs("Energy declined 8"), vec![("Energy".to_string(), 8)]);
    }

    #[test]
    fn test_case_insensitive_verbs_and_sector_word() {
        assert_eq!(
            pairs("ENERGY SECTOR FELL 8%"),
            vec![("ENERGY".to_string(), 8)]
        );
        assert_eq!(
            pairs("Metals Gained roughly 3 percent"),
            vec![("Metals".to_string(), 3)]
        );
    }

    #[test]
    fn test_duplicates_are_not_merged() {
        assert_eq!(
            pairs("Banking rose 2%. Banking fell 5%"),
            vec![("Banking".to_string(), 2), ("Banking".to_string(), 5)]
        );
    }

    #[test]
    fn test_leading_article_is_dropped() {
        assert_eq!(
            pairs("The banking sector dropped by 4% this week"),
            vec![("banking".to_string(), 4)]
        );
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(extract_sector_impacts("").is_empty());
        assert!(extract_sector_impacts("Markets were quiet and nothing moved.").is_empty());
        assert!(extract_sector_impacts("Technology rose sharply").is_empty());
    }

    #[test]
    fn test_overflowing_number_is_skipped() {
        assert!(extract_sector_impacts("Tech rose 99999999999999999999%").is_empty());
    }

    #[test]
    fn test_name_made_only_of_connectives_is_kept() {
        assert_eq!(clean_sector_name(" and "), "and");
        assert_eq!(clean_sector_name("  Consumer   Goods "), "Consumer Goods");
    }
}
