//! Tokenization options

/// How soft anomalies affect the result of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DegradePolicy {
    /// Degrade gracefully and report diagnostics next to the stream
    #[default]
    Lenient,
    /// Fail the run on the first diagnostic
    Strict,
}

/// Limits and policies for a tokenization run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizeOptions {
    /// Maximum number of simultaneously open regions, root included
    pub max_region_depth: usize,
    /// Maximum nesting of interpolation zones
    pub max_interpolation_depth: usize,
    /// Lenient or strict handling of soft anomalies
    pub policy: DegradePolicy,
    /// Collapse adjacent childless tokens of the same kind
    pub merge_adjacent: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            max_region_depth: 64,
            max_interpolation_depth: 16,
            policy: DegradePolicy::Lenient,
            merge_adjacent: true,
        }
    }
}

impl TokenizeOptions {
    pub fn max_region_depth(mut self, depth: usize) -> Self {
        self.max_region_depth = depth;
        self
    }

    pub fn max_interpolation_depth(mut self, depth: usize) -> Self {
        self.max_interpolation_depth = depth;
        self
    }

    pub fn policy(mut self, policy: DegradePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `policy(DegradePolicy::Strict)`
    pub fn strict(self) -> Self {
        self.policy(DegradePolicy::Strict)
    }

    pub fn merge_adjacent(mut self, merge: bool) -> Self {
        self.merge_adjacent = merge;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.policy == DegradePolicy::Strict
    }
}
