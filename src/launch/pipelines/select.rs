//! Executable selection pipeline
//!
//! declared paths → stat probe → score → depth → rank → head

use crate::error::LaunchError;
use crate::install::InstallRecord;
use crate::launch::operations::{discover_executables, probe_candidates};
use crate::launch::pure::{path_depth, pick_best, rank_candidates, score_candidates};
use crate::launch::types::Candidate;

/// Every surviving candidate, best first
pub fn rank_executables(record: &InstallRecord) -> Result<Vec<Candidate>, LaunchError> {
    let declared = if record.executables.is_empty() {
        discover_executables(&record.install_root)?
    } else {
        record.executables.clone()
    };

    let candidates: Vec<Candidate> = declared.into_iter().map(Candidate::new).collect();
    let declared_count = candidates.len();

    let probed = probe_candidates(&record.install_root, candidates)?;
    let scored = score_candidates(probed);
    let measured: Vec<Candidate> = scored
        .into_iter()
        .map(|c| {
            let depth = path_depth(&c.path);
            c.with_depth(depth)
        })
        .collect();
    let ranked = rank_candidates(measured);

    tracing::info!(
        "{} of {} declared executable(s) survived filtering",
        ranked.len(),
        declared_count
    );
    for c in &ranked {
        tracing::debug!(
            "  {} (weight {}, score {}, depth {})",
            c.path,
            c.weight.unwrap_or(0),
            c.score,
            c.depth
        );
    }

    Ok(ranked)
}

/// The single entry point to launch.
///
/// Alternates are not offered; callers wanting a chooser use [`rank_executables`].
pub fn select_executable(record: &InstallRecord) -> Result<Candidate, LaunchError> {
    let best = pick_best(rank_executables(record)?)?;
    tracing::info!("Picked {}", best.path);
    Ok(best)
}
