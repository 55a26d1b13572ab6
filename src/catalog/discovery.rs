use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::builder::RECORD_FILE_NAME;
use crate::taxonomy::{Category, Identifier, Taxonomy};

/// Lists `question.json` files under `base_dir` that no taxonomy identifier resolves to.
///
/// Only `<base>/<category>/<id>/question.json` is inspected. A record is untracked when its
/// category directory is unknown, its id directory is not `<token>_<3 digits>`, or its
/// number falls outside the declared range. Results are sorted by path.
pub fn find_untracked_records(base_dir: &Path, taxonomy: &Taxonomy) -> Vec<PathBuf> {
    let mut untracked = Vec::new();

    for entry in WalkDir::new(base_dir).min_depth(3).max_depth(3).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable path under {}: {}", base_dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != RECORD_FILE_NAME {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(base_dir) else {
            continue;
        };
        if !is_tracked(relative, taxonomy) {
            untracked.push(entry.into_path());
        }
    }

    untracked
}

fn is_tracked(relative: &Path, taxonomy: &Taxonomy) -> bool {
    let mut components = relative.iter().map(|c| c.to_str());
    let (Some(Some(category_dir)), Some(Some(id_dir))) = (components.next(), components.next())
    else {
        return false;
    };

    Category::from_name(category_dir)
        .and_then(|category| Identifier::parse(category, id_dir))
        .is_some_and(|identifier| taxonomy.contains(&identifier))
}
