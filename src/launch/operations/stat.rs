//! Executable stat probes
//!
//! Checks which declared candidates exist and records their size. Probes run
//! on a small dedicated pool so large installs don't flood the filesystem.

use rayon::prelude::*;
use std::path::Path;

use crate::error::LaunchError;
use crate::launch::pure::normalize_separators;
use crate::launch::types::{Candidate, STAT_CONCURRENCY};

/// Keep the candidates that exist, annotated with their byte size.
///
/// Missing files, broken symlinks and permission errors silently drop the
/// candidate. Output keeps the input order.
pub fn probe_candidates(
    install_root: &Path,
    candidates: Vec<Candidate>,
) -> Result<Vec<Candidate>, LaunchError> {
    stat_each(candidates, |c| probe(install_root, c))
}

fn stat_pool() -> Result<rayon::ThreadPool, LaunchError> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(STAT_CONCURRENCY)
        .thread_name(|i| format!("stat-probe-{}", i))
        .build()?)
}

/// Run `stat` over every candidate on the capped pool, keeping input order
fn stat_each<F>(candidates: Vec<Candidate>, stat: F) -> Result<Vec<Candidate>, LaunchError>
where
    F: Fn(Candidate) -> Option<Candidate> + Send + Sync,
{
    let pool = stat_pool()?;
    Ok(pool.install(|| {
        candidates
            .into_par_iter()
            .filter_map(&stat)
            .collect::<Vec<_>>()
    }))
}

fn probe(install_root: &Path, candidate: Candidate) -> Option<Candidate> {
    let full_path = install_root.join(normalize_separators(&candidate.path));
    match std::fs::metadata(&full_path) {
        Ok(meta) => Some(candidate.with_weight(meta.len())),
        Err(e) => {
            tracing::debug!("Skipping {}: {}", full_path.display(), e);
            None
        }
    }
}
