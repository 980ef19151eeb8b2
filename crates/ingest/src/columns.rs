//! Column auto-detection.
//!
//! A resolver is an ordered list of keyword rules plus a positional fallback.
//! Keys are scanned in declaration order and the first key matched by any rule
//! wins; the rule order only decides which reason gets reported.

use serde::Serialize;

/// A named substring rule, matched case-insensitively against a column key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    pub keyword: &'static str,
}

impl ColumnRule {
    pub const fn contains(keyword: &'static str) -> Self {
        Self { keyword }
    }

    pub fn matches(&self, key: &str) -> bool {
        key.to_lowercase().contains(self.keyword)
    }
}

/// Why a column was picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The key contains this keyword.
    Keyword { keyword: &'static str },
    /// No rule matched; the key at this position was used.
    Fallback { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub key: String,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResolver {
    rules: Vec<ColumnRule>,
    fallback_index: usize,
}

impl ColumnResolver {
    pub fn new(rules: Vec<ColumnRule>, fallback_index: usize) -> Self {
        Self {
            rules,
            fallback_index,
        }
    }

    /// `date`/`time` keywords, falling back to the first key.
    pub fn date_column() -> Self {
        Self::new(
            vec![ColumnRule::contains("date"), ColumnRule::contains("time")],
            0,
        )
    }

    /// `sales`/`amount`/`price`/`quantity` keywords, falling back to the second key.
    pub fn value_column() -> Self {
        Self::new(
            vec![
                ColumnRule::contains("sales"),
                ColumnRule::contains("amount"),
                ColumnRule::contains("price"),
                ColumnRule::contains("quantity"),
            ],
            1,
        )
    }

    /// Resolve a column among `keys`. `None` when nothing matches and the
    /// fallback position does not exist.
    pub fn resolve<'a, I>(&self, keys: I) -> Option<ResolvedColumn>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();

        for key in &keys {
            if let Some(rule) = self.rules.iter().find(|r| r.matches(key)) {
                return Some(ResolvedColumn {
                    key: (*key).to_string(),
                    resolution: Resolution::Keyword {
                        keyword: rule.keyword,
                    },
                });
            }
        }

        keys.get(self.fallback_index).map(|key| ResolvedColumn {
            key: (*key).to_string(),
            resolution: Resolution::Fallback {
                index: self.fallback_index,
            },
        })
    }
}
