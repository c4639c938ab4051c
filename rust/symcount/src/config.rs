//! Construction-time policies for [`PatternIndex`](crate::PatternIndex).
//!
//! Both policies can be selected by name, which is convenient when the pattern
//! set and its settings come from a configuration file produced by the host
//! pipeline. Names are kebab-case and case-sensitive.

use serde::{Deserialize, Serialize};
use symcount_common::{Result, error::Error};

/// How to resolve two or more patterns that spell the same symbol sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later pattern overwrites the tag of the earlier one. Earlier
    /// duplicates become unreachable and always count zero.
    #[default]
    LastWins,
    /// The terminal node remembers every pattern ending there, so each
    /// duplicate slot receives the same count.
    AllIndices,
    /// Construction fails on the first duplicate.
    Reject,
}

impl DuplicatePolicy {
    /// Get the name of the policy as a static string.
    pub const fn name(&self) -> &'static str {
        match self {
            DuplicatePolicy::LastWins => "last-wins",
            DuplicatePolicy::AllIndices => "all-indices",
            DuplicatePolicy::Reject => "reject",
        }
    }
}

impl TryFrom<&str> for DuplicatePolicy {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "last-wins" => Ok(DuplicatePolicy::LastWins),
            "all-indices" => Ok(DuplicatePolicy::AllIndices),
            "reject" => Ok(DuplicatePolicy::Reject),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized duplicate policy: {name}"),
            )),
        }
    }
}

/// What a zero-length pattern counts against a query.
///
/// An empty pattern tags the root node. The frontier scan only inspects nodes
/// reached by following an edge, so the root tag is never observed on its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPatternPolicy {
    /// The empty pattern never matches; its slot stays zero.
    #[default]
    Ignore,
    /// The empty pattern matches once for every symbol of the query.
    CountPerSymbol,
}

impl EmptyPatternPolicy {
    /// Get the name of the policy as a static string.
    pub const fn name(&self) -> &'static str {
        match self {
            EmptyPatternPolicy::Ignore => "ignore",
            EmptyPatternPolicy::CountPerSymbol => "count-per-symbol",
        }
    }
}

impl TryFrom<&str> for EmptyPatternPolicy {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "ignore" => Ok(EmptyPatternPolicy::Ignore),
            "count-per-symbol" => Ok(EmptyPatternPolicy::CountPerSymbol),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized empty pattern policy: {name}"),
            )),
        }
    }
}

/// Configuration parameters for building a pattern index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternIndexConfig {
    /// Resolution of identical patterns.
    pub duplicates: DuplicatePolicy,

    /// Treatment of zero-length patterns during search.
    pub empty_pattern: EmptyPatternPolicy,
}

impl PatternIndexConfig {
    /// Creates a config from policy names, as found in a property bag.
    pub fn from_names(duplicates: &str, empty_pattern: &str) -> Result<Self> {
        Ok(PatternIndexConfig {
            duplicates: duplicates.try_into()?,
            empty_pattern: empty_pattern.try_into()?,
        })
    }
}
