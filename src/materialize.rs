use crate::{
    errors::IoError,
    parser::{self, EntryKind},
    stack::AncestorStack,
    vfs::{DiskFS, Filesystem, VirtualFS},
};
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error while creating the tree")]
    #[diagnostic(code(arbo::materialize::io))]
    Io(#[from] IoError),
}

/// Creates the tree described by `tree_text` under `base_path` on disk.
///
/// Empty or whitespace-only descriptions succeed without touching anything.
/// Entries created before a failure are left in place.
///
/// # Errors
///
/// Returns a [`MaterializeError`] if a directory or file cannot be created.
pub fn materialize<P: AsRef<Path>>(base_path: P, tree_text: &str) -> Result<(), MaterializeError> {
    materialize_with(&mut DiskFS::new(), base_path.as_ref(), tree_text)?;

    Ok(())
}

/// Runs the description against a [`VirtualFS`] and returns what would be
/// created, without touching the disk.
pub fn plan<P: AsRef<Path>>(base_path: P, tree_text: &str) -> Result<VirtualFS, MaterializeError> {
    let mut vfs = VirtualFS::new();

    materialize_with(&mut vfs, base_path.as_ref(), tree_text)?;

    Ok(vfs)
}

/// Drives `fs` through the description in a single pass.
///
/// Returns the root directory path, or `None` when the description is empty.
pub fn materialize_with<F: Filesystem + ?Sized>(
    fs: &mut F,
    base_path: &Path,
    tree_text: &str,
) -> Result<Option<PathBuf>, MaterializeError> {
    let Some((first_line, lines)) = parser::split_description(tree_text) else {
        log::debug!("empty description, nothing to create");
        return Ok(None);
    };

    let root_label = parser::root_label(first_line);
    let root_path = base_path.join(parser::strip_marker(&root_label));

    fs.create_dir(&root_path)?;

    let mut stack = AncestorStack::new(root_path.clone());

    for raw in lines {
        let Some(line) = parser::parse_line(raw) else {
            continue;
        };

        if line.label.is_empty() {
            log::warn!("skipping branch without a name: {:?}", raw);
            continue;
        }

        let parent = stack.resolve_parent(line.depth).to_path_buf();
        let path = parent.join(line.label);

        if parser::escapes_parent(line.label) || !path.starts_with(&root_path) {
            log::warn!(
                "'{}' resolves to {}, outside of {}",
                line.label,
                path.display(),
                root_path.display()
            );
        }

        log::debug!(
            "{:?} '{}' at depth {} under {}",
            line.kind,
            line.label,
            line.depth,
            parent.display()
        );

        match line.kind {
            EntryKind::Directory => {
                fs.create_dir(&path)?;
                stack.push(path, line.depth);
            }
            EntryKind::File => {
                // labels such as `a/b.txt` nest below the resolved parent
                fs.create_dir(path.parent().unwrap_or(parent.as_path()))?;
                fs.create_file(&path)?;
            }
        }
    }

    Ok(Some(root_path))
}
