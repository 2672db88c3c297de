//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown rule name under `rules:`
    #[error("Unknown rule '{rule}'. {suggestion}")]
    UnknownRule { rule: String, suggestion: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Unknown rule error with a "did you mean" suggestion
    pub fn unknown_rule(rule: impl Into<String>, valid_rules: &[&str]) -> Self {
        let rule = rule.into();
        let suggestion = find_closest_match(&rule, valid_rules);
        Self::UnknownRule { rule, suggestion }
    }
}

/// Closest candidate by edit distance
fn find_closest_match(target: &str, candidates: &[&str]) -> String {
    candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(target, candidate))
        .map(|closest| format!("Did you mean '{}'?", closest))
        .unwrap_or_else(|| "No rules available".to_string())
}

fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s2: Vec<char> = s2.chars().collect();
    let mut previous: Vec<usize> = (0..=s2.len()).collect();

    for (i, c1) in s1.chars().enumerate() {
        let mut current = Vec::with_capacity(s2.len() + 1);
        current.push(i + 1);
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != *c2);
            let best = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
            current.push(best);
        }
        previous = current;
    }

    previous[s2.len()]
}
