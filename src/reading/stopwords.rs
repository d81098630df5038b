//! Nested English stopword tiers
//!
//! Each tier adds words on top of the previous one, so membership never
//! shrinks as the strength grows: very light ⊆ light ⊆ normal ⊆ strong.

use lazy_static::lazy_static;
use std::collections::HashSet;

const VERY_LIGHT_WORDS: &[&str] = &["a", "an", "the", "and", "or", "of", "to", "in"];

const LIGHT_WORDS: &[&str] = &[
    "is", "are", "was", "were", "be", "it", "that", "this", "for", "on", "with", "as", "at",
    "by", "but", "if", "so", "from",
];

const NORMAL_WORDS: &[&str] = &[
    "i", "me", "my", "we", "our", "you", "your", "he", "him", "his", "she", "her", "they",
    "them", "their", "its", "been", "being", "have", "has", "had", "do", "does", "did", "not",
    "no", "can", "will", "would", "should", "could", "these", "those", "there", "then", "than",
    "what", "which", "who", "when", "where", "how", "all", "any", "some", "up", "out", "into",
    "about",
];

const STRONG_WORDS: &[&str] = &[
    "myself", "ours", "ourselves", "yours", "yourself", "yourselves", "himself", "hers",
    "herself", "itself", "theirs", "themselves", "whom", "why", "am", "having", "doing", "may",
    "might", "must", "shall", "because", "until", "while", "against", "between", "through",
    "during", "before", "after", "above", "below", "down", "off", "over", "under", "again",
    "further", "once", "here", "both", "each", "few", "more", "most", "other", "such", "only",
    "own", "same", "too", "very", "just", "nor", "also", "many", "much",
];

lazy_static! {
    static ref VERY_LIGHT: HashSet<&'static str> = tier(&[VERY_LIGHT_WORDS]);
    static ref LIGHT: HashSet<&'static str> = tier(&[VERY_LIGHT_WORDS, LIGHT_WORDS]);
    static ref NORMAL: HashSet<&'static str> =
        tier(&[VERY_LIGHT_WORDS, LIGHT_WORDS, NORMAL_WORDS]);
    static ref STRONG: HashSet<&'static str> =
        tier(&[VERY_LIGHT_WORDS, LIGHT_WORDS, NORMAL_WORDS, STRONG_WORDS]);
}

fn tier(lists: &[&[&'static str]]) -> HashSet<&'static str> {
    lists.iter().flat_map(|list| list.iter().copied()).collect()
}

/// One of the four precomputed stopword sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StopwordTier {
    VeryLight,
    Light,
    Normal,
    Strong,
}

impl StopwordTier {
    /// Picks the tier for a strength in [0, 1]:
    /// up to 1/4 very light, up to 1/2 light, up to 3/4 normal, else strong.
    pub fn from_strength(strength: f64) -> Self {
        if strength <= 0.25 {
            StopwordTier::VeryLight
        } else if strength <= 0.5 {
            StopwordTier::Light
        } else if strength <= 0.75 {
            StopwordTier::Normal
        } else {
            StopwordTier::Strong
        }
    }

    pub fn words(self) -> &'static HashSet<&'static str> {
        match self {
            StopwordTier::VeryLight => &VERY_LIGHT,
            StopwordTier::Light => &LIGHT,
            StopwordTier::Normal => &NORMAL,
            StopwordTier::Strong => &STRONG,
        }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(self, word: &str) -> bool {
        self.words().contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [StopwordTier; 4] = [
        StopwordTier::VeryLight,
        StopwordTier::Light,
        StopwordTier::Normal,
        StopwordTier::Strong,
    ];

    #[test]
    fn test_tier_from_strength() {
        assert_eq!(StopwordTier::from_strength(0.0), StopwordTier::VeryLight);
        assert_eq!(StopwordTier::from_strength(0.25), StopwordTier::VeryLight);
        assert_eq!(StopwordTier::from_strength(0.26), StopwordTier::Light);
        assert_eq!(StopwordTier::from_strength(0.5), StopwordTier::Light);
        assert_eq!(StopwordTier::from_strength(0.75), StopwordTier::Normal);
        assert_eq!(StopwordTier::from_strength(0.76), StopwordTier::Strong);
        assert_eq!(StopwordTier::from_strength(1.0), StopwordTier::Strong);
    }

    #[test]
    fn test_tiers_are_strictly_nested() {
        for pair in TIERS.windows(2) {
            let (smaller, larger) = (pair[0].words(), pair[1].words());
            assert!(smaller.is_subset(larger), "{:?} ⊄ {:?}", pair[0], pair[1]);
            assert!(smaller.len() < larger.len());
        }
    }

    #[test]
    fn test_membership_is_monotonic_in_strength() {
        let strengths = [0.0, 0.1, 0.3, 0.5, 0.6, 0.8, 1.0];
        for word in StopwordTier::Strong.words() {
            let mut seen = false;
            for strength in strengths {
                let member = StopwordTier::from_strength(strength).contains(word);
                assert!(!(seen && !member), "'{word}' dropped out at {strength}");
                seen |= member;
            }
        }
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(StopwordTier::VeryLight.contains("the"));
        assert!(!StopwordTier::VeryLight.contains("The"));
    }

    #[test]
    fn test_lists_have_no_duplicates_across_tiers() {
        let total = VERY_LIGHT_WORDS.len()
            + LIGHT_WORDS.len()
            + NORMAL_WORDS.len()
            + STRONG_WORDS.len();
        assert_eq!(StopwordTier::Strong.words().len(), total);
    }
}
