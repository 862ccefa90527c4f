//! Engine configuration and advisory match parameters

use tracing::warn;

/// Environment variable overriding the search depth.
pub const DEPTH_ENV: &str = "GOMOKU_SEARCH_DEPTH";

/// Default search horizon in plies, root move included.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Tunables for the move decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched by the fallback search, root move included
    pub search_depth: u32,
}

impl EngineConfig {
    /// Read overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(DEPTH_ENV) {
            match parse_depth(&raw) {
                Some(depth) => config.search_depth = depth,
                None => warn!(value = %raw, "ignoring invalid {}", DEPTH_ENV),
            }
        }
        config
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

fn parse_depth(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&d| d > 0)
}

/// Parameters announced through `INFO`.
///
/// Stored for reference; the search runs to a fixed depth and does not
/// consult them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchInfo {
    /// Milliseconds allowed per turn
    pub timeout_turn: i64,
    /// Milliseconds allowed for the whole match
    pub timeout_match: i64,
    /// Memory limit in bytes
    pub max_memory: i64,
    /// Milliseconds remaining in the match
    pub time_left: i64,
}

impl MatchInfo {
    /// Record one `INFO` key. Returns `false` for keys this engine does not track.
    pub fn set(&mut self, key: &str, value: i64) -> bool {
        match key {
            "timeout_turn" => self.timeout_turn = value,
            "timeout_match" => self.timeout_match = value,
            "max_memory" => self.max_memory = value,
            "time_left" => self.time_left = value,
            _ => return false,
        }
        true
    }

    /// Whether `key` is one of the tracked parameters.
    pub fn tracks(key: &str) -> bool {
        matches!(key, "timeout_turn" | "timeout_match" | "max_memory" | "time_left")
    }
}
