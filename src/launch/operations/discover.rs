//! Candidate discovery
//!
//! Used when an install record declares no executables: walks the install
//! root and lists everything that looks launchable.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::LaunchError;
use crate::launch::pure::is_app_bundle;
use crate::paths::METADATA_DIR;

const LAUNCHABLE_EXTENSIONS: [&str; 3] = ["sh", "jar", "exe"];

/// Relative paths (with `/` separators) of launchable files, sorted.
///
/// App bundles are listed as directories and not descended into.
pub fn discover_executables(install_root: &Path) -> Result<Vec<String>, LaunchError> {
    let mut found = Vec::new();
    let mut walker = WalkDir::new(install_root)
        .min_depth(1)
        .follow_links(false)
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        let Ok(rel_path) = entry.path().strip_prefix(install_root) else {
            continue;
        };
        let rel = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            if entry.file_name() == METADATA_DIR {
                walker.skip_current_dir();
            } else if is_app_bundle(&rel) {
                found.push(rel);
                walker.skip_current_dir();
            }
            continue;
        }

        if entry.file_type().is_file() && looks_launchable(entry.path()) {
            found.push(rel);
        }
    }

    found.sort();
    tracing::info!(
        "Discovered {} candidate(s) under {}",
        found.len(),
        install_root.display()
    );
    Ok(found)
}

fn looks_launchable(path: &Path) -> bool {
    let by_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            LAUNCHABLE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });
    by_extension || has_executable_magic(path)
}

/// ELF, Mach-O (thin or fat) or PE header
fn has_executable_magic(path: &Path) -> bool {
    let mut magic = [0u8; 4];
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    if file.read_exact(&mut magic).is_err() {
        return false;
    }
    matches!(
        magic,
        [0x7F, b'E', b'L', b'F']
            | [0xFE, 0xED, 0xFA, 0xCE]
            | [0xFE, 0xED, 0xFA, 0xCF]
            | [0xCE, 0xFA, 0xED, 0xFE]
            | [0xCF, 0xFA, 0xED, 0xFE]
            | [0xCA, 0xFE, 0xBA, 0xBE]
            | [b'M', b'Z', _, _]
    )
}
