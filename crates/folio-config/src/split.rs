//! Shared-chunk grouping rules.
//!
//! The policy is static: [`build_split_rules`] always returns the same two
//! cache groups (`vendor` and `styles`) plus the default thresholds that govern
//! automatic splitting of everything those groups do not claim.

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Name of the chunk holding the bundler bootstrap logic.
pub const RUNTIME_CHUNK: &str = "manifest";
/// Name of the shared third-party chunk.
pub const VENDOR_CHUNK: &str = "vendor";
/// Name of the shared stylesheet chunk.
pub const STYLES_CHUNK: &str = "styles";
/// Chunk names the split policy claims; pages may not use them.
pub const RESERVED_CHUNKS: [&str; 3] = [RUNTIME_CHUNK, VENDOR_CHUNK, STYLES_CHUNK];

const VENDOR_TEST: &str = r"node_modules/(.*)\.jsx?";
const STYLES_TEST: &str = r"\.(less|css)$";

/// Which chunks a rule (or the default thresholds) may split from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    Initial,
    Async,
    All,
}

/// Whether a module is reached from an entry chunk or a dynamic import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Initial,
    Async,
}

impl ChunkScope {
    pub fn admits(self, kind: ChunkKind) -> bool {
        matches!(
            (self, kind),
            (ChunkScope::All, _)
                | (ChunkScope::Initial, ChunkKind::Initial)
                | (ChunkScope::Async, ChunkKind::Async)
        )
    }
}

/// One cache group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRule {
    pub group_name: String,
    pub test: Pattern,
    pub scope: ChunkScope,
    /// Higher wins when several rules claim a module
    pub priority: i32,
    pub reuse_existing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chunks: Option<u32>,
    /// Apply regardless of the size heuristics
    #[serde(default)]
    pub enforce: bool,
}

impl SplitRule {
    pub fn claims(&self, module_path: &str, kind: ChunkKind) -> bool {
        self.scope.admits(kind) && self.test.is_match(module_path)
    }
}

/// Thresholds for automatic grouping of unclaimed modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitThresholds {
    pub chunks: ChunkScope,
    /// Minimum combined size in bytes before a chunk is split out
    pub min_size: u64,
    /// Minimum number of chunks that must reference a module
    pub min_chunks: u32,
    pub max_async_requests: u32,
    pub max_initial_requests: u32,
    /// Whether split chunks get generated names
    pub name: bool,
}

impl Default for SplitThresholds {
    fn default() -> Self {
        Self {
            chunks: ChunkScope::Async,
            min_size: 30_000,
            min_chunks: 1,
            max_async_requests: 5,
            max_initial_requests: 3,
            name: false,
        }
    }
}

impl SplitThresholds {
    /// Whether an unclaimed module group of `size` bytes, referenced by
    /// `referencing_chunks` chunks, is large and shared enough to split.
    pub fn qualifies(&self, size: u64, referencing_chunks: u32, kind: ChunkKind) -> bool {
        self.chunks.admits(kind) && size >= self.min_size && referencing_chunks >= self.min_chunks
    }

    pub fn max_requests(&self, kind: ChunkKind) -> u32 {
        match kind {
            ChunkKind::Initial => self.max_initial_requests,
            ChunkKind::Async => self.max_async_requests,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPolicy {
    #[serde(flatten)]
    pub thresholds: SplitThresholds,
    pub rules: Vec<SplitRule>,
}

impl SplitPolicy {
    /// The rule that owns `module_path`, if any.
    ///
    /// Every rule is evaluated independently; the highest priority wins and the
    /// earlier rule wins a tie.
    pub fn classify(&self, module_path: &str, kind: ChunkKind) -> Option<&SplitRule> {
        self.rules
            .iter()
            .filter(|rule| rule.claims(module_path, kind))
            .fold(None, |best: Option<&SplitRule>, rule| match best {
                Some(current) if current.priority >= rule.priority => Some(current),
                _ => Some(rule),
            })
    }

    pub fn rule(&self, group_name: &str) -> Option<&SplitRule> {
        self.rules.iter().find(|rule| rule.group_name == group_name)
    }
}

/// Build the fixed split policy.
pub fn build_split_rules() -> SplitPolicy {
    let vendor = SplitRule {
        group_name: VENDOR_CHUNK.to_string(),
        test: Pattern::fixed(VENDOR_TEST),
        scope: ChunkScope::Initial,
        priority: -10,
        // a fresh vendor bundle every build
        reuse_existing: false,
        min_chunks: None,
        enforce: false,
    };

    let styles = SplitRule {
        group_name: STYLES_CHUNK.to_string(),
        test: Pattern::fixed(STYLES_TEST),
        scope: ChunkScope::All,
        priority: 0,
        reuse_existing: true,
        min_chunks: Some(1),
        enforce: true,
    };

    SplitPolicy {
        thresholds: SplitThresholds::default(),
        rules: vec![vendor, styles],
    }
}
