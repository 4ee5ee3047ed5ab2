//! Candidate scoring
//!
//! Every candidate starts at 100. Known false positives (uninstallers, helper
//! binaries, redistributable installers, shared libraries) lose points or are
//! zeroed outright; shell scripts gain some back. Patterns are matched
//! case-insensitively against the file name.

use regex::Regex;
use std::sync::LazyLock;

use super::path::file_name;
use crate::launch::types::Candidate;

const BASE_SCORE: i32 = 100;
const MAX_SCORE: i32 = 100;

static UNINSTALLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^unins.*\.exe$").expect("valid regex"));
static KICK_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^kick\.bin").expect("valid regex"));
static NWJS_HELPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^nwjc\.exe$").expect("valid regex"));
static REDISTRIBUTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(dxwebsetup|vcredist).*\.exe$").expect("valid regex"));
static SHARED_LIBRARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(so|dylib)$").expect("valid regex"));
static SHELL_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.sh$").expect("valid regex"));

/// Heuristic score in `[0, 100]`; 0 means "never launch this"
pub fn score_path(path: &str) -> i32 {
    let name = file_name(path);

    // Installers and libraries are never entry points, whatever else matches
    if REDISTRIBUTABLE.is_match(name) || SHARED_LIBRARY.is_match(name) {
        return 0;
    }

    let mut score = BASE_SCORE;
    if UNINSTALLER.is_match(name) {
        score -= 50;
    }
    if KICK_WRAPPER.is_match(name) {
        score -= 50;
    }
    if NWJS_HELPER.is_match(name) {
        score -= 20;
    }
    if SHELL_SCRIPT.is_match(name) {
        score += 20;
    }

    score.clamp(0, MAX_SCORE)
}

/// Score every candidate and drop the ones that end up at 0
pub fn score_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter_map(|c| {
            let score = score_path(&c.path);
            if score <= 0 {
                tracing::debug!("Dropping {} (score {})", c.path, score);
                return None;
            }
            Some(c.with_score(score))
        })
        .collect()
}
