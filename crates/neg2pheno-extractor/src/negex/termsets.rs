//! Clinical negation trigger termsets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selectable negation termset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Termset {
    /// Standard clinical triggers
    #[default]
    EnClinical,
    /// Clinical triggers plus history, concern and teaching phrases
    EnClinicalSensitive,
}

impl Termset {
    /// Get the termset name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Termset::EnClinical => "en_clinical",
            Termset::EnClinicalSensitive => "en_clinical_sensitive",
        }
    }

    /// Trigger phrases of every kind
    pub fn patterns(&self) -> TermsetPatterns {
        let pseudo = [BASE_PSEUDO, CLINICAL_PSEUDO].concat();
        let mut preceding = [BASE_PRECEDING, CLINICAL_PRECEDING].concat();
        let following = [BASE_FOLLOWING, CLINICAL_FOLLOWING].concat();
        let termination = [BASE_TERMINATION, CLINICAL_TERMINATION].concat();

        if *self == Termset::EnClinicalSensitive {
            preceding.extend_from_slice(SENSITIVE_PRECEDING);
        }

        TermsetPatterns {
            pseudo,
            preceding,
            following,
            termination,
        }
    }
}

impl fmt::Display for Termset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger phrases grouped by how they scope negation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsetPatterns {
    /// Phrases that look like negations but are not (suppress overlapping triggers)
    pub pseudo: Vec<&'static str>,
    /// Negate entities that follow them
    pub preceding: Vec<&'static str>,
    /// Negate entities that precede them
    pub following: Vec<&'static str>,
    /// End the scope of a negation
    pub termination: Vec<&'static str>,
}

const BASE_PSEUDO: &[&str] = &[
    "no further",
    "not able to be",
    "not certain if",
    "not certain whether",
    "not necessarily",
    "without any further",
    "without difficulty",
    "without further",
    "might not",
    "not only",
    "no increase",
    "no significant change",
    "no change",
    "no definite change",
    "not extend",
    "not cause",
];

const CLINICAL_PSEUDO: &[&str] = &[
    "gram negative",
    "not rule out",
    "not ruled out",
    "not been ruled out",
    "not drain",
    "no suspicious change",
    "no interval change",
    "no significant interval change",
];

const BASE_PRECEDING: &[&str] = &[
    "absence of",
    "declined",
    "denied",
    "denies",
    "denying",
    "no sign of",
    "no signs of",
    "not",
    "not demonstrate",
    "symptoms atypical",
    "doubt",
    "negative for",
    "no",
    "versus",
    "without",
    "doesn't",
    "doesnt",
    "don't",
    "dont",
    "didn't",
    "didnt",
    "wasn't",
    "wasnt",
    "weren't",
    "werent",
    "isn't",
    "isnt",
    "aren't",
    "arent",
    "cannot",
    "can't",
    "cant",
    "couldn't",
    "couldnt",
    "never",
];

const CLINICAL_PRECEDING: &[&str] = &[
    "patient was not",
    "without indication of",
    "without sign of",
    "without signs of",
    "without any reactions or signs of",
    "no complaints of",
    "no evidence of",
    "no cause of",
    "evaluate for",
    "fails to reveal",
    "free of",
    "never developed",
    "never had",
    "did not exhibit",
    "rules out",
    "rule out",
    "rule him out",
    "rule her out",
    "rule patient out",
    "rule the patient out",
    "ruled out",
    "ruled him out",
    "ruled her out",
    "ruled patient out",
    "ruled the patient out",
    "r/o",
    "ro",
];

const SENSITIVE_PRECEDING: &[&str] = &[
    "concern for",
    "supposed",
    "which causes",
    "leads to",
    "h/o",
    "history of",
    "instead of",
    "if you experience",
    "if you get",
    "teaching the patient",
    "taught the patient",
    "teach the patient",
    "educated the patient",
    "educate the patient",
    "educating the patient",
    "monitored for",
    "monitor for",
    "test for",
    "tested for",
];

const BASE_FOLLOWING: &[&str] = &[
    "declined",
    "unlikely",
    "was not",
    "were not",
    "wasn't",
    "wasnt",
    "weren't",
    "werent",
];

const CLINICAL_FOLLOWING: &[&str] = &["free", "was ruled out", "were ruled out"];

const BASE_TERMINATION: &[&str] = &[
    "although",
    "apart from",
    "as there are",
    "aside from",
    "but",
    "except",
    "however",
    "involving",
    "nevertheless",
    "still",
    "though",
    "which",
    "yet",
];

const CLINICAL_TERMINATION: &[&str] = &[
    "cause for",
    "cause of",
    "causes for",
    "causes of",
    "etiology for",
    "etiology of",
    "origin for",
    "origin of",
    "origins for",
    "origins of",
    "other possibilities of",
    "reason for",
    "reason of",
    "reasons for",
    "reasons of",
    "secondary to",
    "source for",
    "source of",
    "sources for",
    "sources of",
    "trigger event for",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_name_matches_as_str() {
        for termset in [Termset::EnClinical, Termset::EnClinicalSensitive] {
            let json = serde_json::to_string(&termset).unwrap();
            assert_eq!(json, format!("\"{}\"", termset.as_str()));
            assert_eq!(serde_json::from_str::<Termset>(&json).unwrap(), termset);
        }
        assert!(serde_json::from_str::<Termset>("\"en\"").is_err());
    }

    #[test]
    fn test_sensitive_is_superset() {
        let standard = Termset::EnClinical.patterns();
        let sensitive = Termset::EnClinicalSensitive.patterns();
        assert!(standard.preceding.iter().all(|p| sensitive.preceding.contains(p)));
        assert!(sensitive.preceding.contains(&"history of"));
        assert!(!standard.preceding.contains(&"history of"));
        assert_eq!(standard.following, sensitive.following);
        assert_eq!(standard.termination, sensitive.termination);
        assert_eq!(standard.pseudo, sensitive.pseudo);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Termset::default(), Termset::EnClinical);
    }
}
