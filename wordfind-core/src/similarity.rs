//! Token similarity scorers on a 0-100 integer scale

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approximate string similarity function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scorer {
    /// Indel ratio: twice the longest common subsequence over the combined length
    #[default]
    Ratio,
    /// Normalized Levenshtein distance
    Levenshtein,
    /// Jaro-Winkler similarity
    JaroWinkler,
}

impl Scorer {
    /// All available scorers
    pub const ALL: [Scorer; 3] = [Scorer::Ratio, Scorer::Levenshtein, Scorer::JaroWinkler];

    /// Configuration name of the scorer
    pub fn as_str(&self) -> &'static str {
        match self {
            Scorer::Ratio => "ratio",
            Scorer::Levenshtein => "levenshtein",
            Scorer::JaroWinkler => "jaro-winkler",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Scorer::Ratio => "Indel ratio over the longest common subsequence (default)",
            Scorer::Levenshtein => "Normalized Levenshtein edit distance",
            Scorer::JaroWinkler => "Jaro-Winkler similarity, favours shared prefixes",
        }
    }

    /// Score two tokens. Identical non-empty tokens score 100; an empty side scores 0.
    pub fn score(&self, a: &str, b: &str) -> u8 {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        if a == b {
            return 100;
        }

        let similarity = match self {
            Scorer::Ratio => return indel_ratio(a, b),
            Scorer::Levenshtein => strsim::normalized_levenshtein(a, b),
            Scorer::JaroWinkler => strsim::jaro_winkler(a, b),
        };
        to_percent(similarity)
    }
}

impl fmt::Display for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scorer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "ratio" | "indel" => Ok(Scorer::Ratio),
            "levenshtein" => Ok(Scorer::Levenshtein),
            "jaro-winkler" | "jarowinkler" => Ok(Scorer::JaroWinkler),
            other => Err(Error::Configuration(format!("unknown scorer: {other}"))),
        }
    }
}

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// `round(100 * 2 * lcs / (len_a + len_b))`, ties to even, over chars.
fn indel_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    let lcs = lcs_len(&a, &b);

    to_percent((2 * lcs) as f64 / total as f64)
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_tokens_score_100() {
        for scorer in Scorer::ALL {
            assert_eq!(scorer.score("wilting", "wilting"), 100, "{scorer}");
        }
    }

    #[test]
    fn test_empty_tokens_score_zero() {
        for scorer in Scorer::ALL {
            assert_eq!(scorer.score("", "red"), 0);
            assert_eq!(scorer.score("red", ""), 0);
            assert_eq!(scorer.score("", ""), 0);
        }
    }

    #[test]
    fn test_ratio_plural() {
        // lcs 6, combined length 13
        assert_eq!(Scorer::Ratio.score("flower", "flowers"), 92);
    }

    #[test]
    fn test_ratio_unrelated() {
        // lcs "rd" = 2 over 7 chars
        assert_eq!(Scorer::Ratio.score("rods", "red"), 57);
        assert_eq!(Scorer::Ratio.score("abc", "xyz"), 0);
    }

    #[test]
    fn test_ratio_ties_round_to_even() {
        // 2 * 1 / 16 = 12.5 -> 12
        assert_eq!(Scorer::Ratio.score("a", "abcdefghijklmno"), 12);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        assert_eq!(
            Scorer::Ratio.score("sensitivity", "sensitive"),
            Scorer::Ratio.score("sensitive", "sensitivity")
        );
    }

    #[test]
    fn test_ratio_unicode() {
        assert_eq!(Scorer::Ratio.score("café", "cafe"), 75);
    }

    #[test]
    fn test_levenshtein_scale() {
        // one substitution over four chars
        assert_eq!(Scorer::Levenshtein.score("bold", "bolt"), 75);
    }

    #[test]
    fn test_jaro_winkler_prefers_prefix() {
        let prefixed = Scorer::JaroWinkler.score("martha", "marhta");
        assert!(prefixed > 90);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ratio".parse::<Scorer>().unwrap(), Scorer::Ratio);
        assert_eq!("Jaro_Winkler".parse::<Scorer>().unwrap(), Scorer::JaroWinkler);
        assert!("metaphone".parse::<Scorer>().is_err());
    }
}
