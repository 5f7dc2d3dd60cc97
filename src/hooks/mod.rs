// src/hooks/mod.rs
// Claude Code hook handlers

pub mod user_prompt;

use crate::error::{HookError, Result};
use serde::Serialize;
use std::io::Read;
use std::time::Instant;

/// Performance threshold in milliseconds - warn if hook exceeds this.
const HOOK_PERF_THRESHOLD_MS: u128 = 100;

/// Maximum bytes accepted on stdin (Claude Code hook payloads are small)
const MAX_HOOK_INPUT_BYTES: u64 = 1_048_576;

/// Read hook input from stdin (Claude Code passes JSON)
pub fn read_hook_input() -> Result<serde_json::Value> {
    let mut input = String::new();
    std::io::stdin()
        .take(MAX_HOOK_INPUT_BYTES)
        .read_to_string(&mut input)?;
    serde_json::from_str(&input).map_err(HookError::InvalidJson)
}

/// Write hook output to stdout as a single JSON line.
/// Nothing reaches stdout when serialization fails.
pub fn write_hook_output<T: Serialize>(output: &T) -> Result<()> {
    use std::io::Write;
    let line = serde_json::to_string(output).map_err(HookError::Serialize)?;
    writeln!(std::io::stdout(), "{}", line)?;
    Ok(())
}

/// Timer guard for hook performance monitoring
/// Logs execution time to stderr on drop
pub struct HookTimer {
    hook_name: &'static str,
    start: Instant,
}

impl HookTimer {
    /// Start timing a hook
    pub fn start(hook_name: &'static str) -> Self {
        Self {
            hook_name,
            start: Instant::now(),
        }
    }
}

impl Drop for HookTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_millis();
        if elapsed > HOOK_PERF_THRESHOLD_MS {
            tracing::warn!(
                "[tongyeok] PERF: {} hook took {}ms (threshold: {}ms)",
                self.hook_name,
                elapsed,
                HOOK_PERF_THRESHOLD_MS
            );
        } else {
            tracing::debug!(
                "[tongyeok] {} hook completed in {}ms",
                self.hook_name,
                elapsed
            );
        }
    }
}
