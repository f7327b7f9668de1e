use std::path::{Path, PathBuf};

/// An open directory and the depth it was declared at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub path: PathBuf,
    pub depth: usize,
}

/// Directories currently open from the root down to the most recent one.
///
/// Depths are strictly increasing from bottom to top, so the top is always
/// the nearest ancestor of the line being processed once
/// [`AncestorStack::resolve_parent`] has run for that line's depth.
#[derive(Debug)]
pub struct AncestorStack {
    root: PathBuf,
    entries: Vec<Ancestor>,
}
impl AncestorStack {
    pub fn new(root: PathBuf) -> Self {
        Self {
            entries: vec![Ancestor {
                path: root.clone(),
                depth: 0,
            }],
            root,
        }
    }
    /// An entry at `top_depth` cannot parent a line at `depth` unless it is
    /// strictly shallower. Equal depth means sibling, so it goes too.
    pub fn should_pop(top_depth: usize, depth: usize) -> bool {
        top_depth >= depth
    }
    /// Pops every entry that cannot parent a line at `depth` and returns the
    /// parent directory, falling back to the root if the stack runs dry.
    pub fn resolve_parent(&mut self, depth: usize) -> &Path {
        while let Some(top) = self.entries.last() {
            if !Self::should_pop(top.depth, depth) {
                break;
            }
            log::trace!("closing {} (depth {})", top.path.display(), top.depth);
            self.entries.pop();
        }

        self.entries
            .last()
            .map(|ancestor| ancestor.path.as_path())
            .unwrap_or(&self.root)
    }
    pub fn push(&mut self, path: PathBuf, depth: usize) {
        debug_assert!(self
            .entries
            .last()
            .map_or(true, |top| top.depth < depth));

        self.entries.push(Ancestor { path, depth });
    }
    pub fn top(&self) -> Option<&Ancestor> {
        self.entries.last()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_on_equal_depth() {
        assert!(AncestorStack::should_pop(2, 2));
        assert!(AncestorStack::should_pop(3, 2));
        assert!(!AncestorStack::should_pop(1, 2));
    }

    #[test]
    fn root_is_never_popped_by_entry_lines() {
        let mut stack = AncestorStack::new(PathBuf::from("proj"));

        assert_eq!(stack.resolve_parent(1), Path::new("proj"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn sibling_directory_replaces_previous_one() {
        let mut stack = AncestorStack::new(PathBuf::from("proj"));
        stack.push(PathBuf::from("proj/src"), 1);

        assert_eq!(stack.resolve_parent(1), Path::new("proj"));
        assert_eq!(stack.top().map(|top| top.depth), Some(0));
    }

    #[test]
    fn shallower_line_reparents_to_ancestor() {
        let mut stack = AncestorStack::new(PathBuf::from("proj"));
        stack.push(PathBuf::from("proj/a"), 1);
        stack.push(PathBuf::from("proj/a/b"), 2);
        stack.push(PathBuf::from("proj/a/b/c"), 3);

        assert_eq!(stack.resolve_parent(2), Path::new("proj/a"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn skipped_levels_resolve_to_nearest_open_directory() {
        let mut stack = AncestorStack::new(PathBuf::from("proj"));
        stack.push(PathBuf::from("proj/a"), 1);

        assert_eq!(stack.resolve_parent(5), Path::new("proj/a"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn falls_back_to_root_when_drained() {
        let mut stack = AncestorStack::new(PathBuf::from("proj"));

        assert_eq!(stack.resolve_parent(0), Path::new("proj"));
        assert!(stack.is_empty());
    }
}
