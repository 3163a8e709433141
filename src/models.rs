use serde::{Deserialize, Serialize};

use crate::suggest::Suggestions;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:9000";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
}

impl AppConfig {
    /// Listen address, falling back to the default when unset.
    pub fn address(&self) -> &str {
        if self.address.is_empty() {
            DEFAULT_ADDRESS
        } else {
            &self.address
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorpusConfig {
    #[serde(default)]
    pub path: String,
}

/// Output limits. 0 = unlimited.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub max_exact: usize,
    #[serde(default)]
    pub max_completions: usize,
}

/// A ranked exact match in API output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExactMatch {
    pub word: String,
    pub count: u64,
}

/// Suggestions for a query, ready for output. Completions are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestResults {
    pub query: String,
    pub exact: Vec<ExactMatch>,
    pub completions: Vec<String>,
}

impl SuggestResults {
    /// Flatten suggestions for output, applying the configured limits.
    pub fn new(query: &str, s: &Suggestions, limits: &ApiConfig) -> Self {
        let exact = s
            .exact
            .iter()
            .take(limit(limits.max_exact))
            .map(|m| ExactMatch {
                word: m.word.clone(),
                count: m.count,
            })
            .collect();

        let completions = s
            .sorted_completions()
            .into_iter()
            .take(limit(limits.max_completions))
            .map(String::from)
            .collect();

        Self {
            query: query.to_string(),
            exact,
            completions,
        }
    }
}

fn limit(n: usize) -> usize {
    if n == 0 {
        usize::MAX
    } else {
        n
    }
}
