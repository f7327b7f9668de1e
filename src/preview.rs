use crate::vfs::VirtualFS;
use colored::Colorize;
use std::path::Path;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
    /// Inserts the entry at `components` below this node, creating any
    /// intermediate directory that was never recorded on its own.
    fn insert(&mut self, components: &[String], is_file: bool) {
        let Some((first, rest)) = components.split_first() else {
            return;
        };

        let index = match self.children.iter().position(|child| &child.name == first) {
            Some(index) => index,
            None => {
                let leaf_file = rest.is_empty() && is_file;
                self.children.push(TreeNode::new(first.clone(), leaf_file));
                self.children.len() - 1
            }
        };

        self.children[index].insert(rest, is_file);
    }
}

/// Build the directory tree from the VFS entries, returning the root node.
fn build_tree(vfs: &VirtualFS, destination: &Path) -> TreeNode {
    // the root node represents the 'destination' directory
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut root = TreeNode::new(root_name, false);

    for entry in vfs.entries() {
        let Ok(relative) = entry.destination.strip_prefix(destination) else {
            log::debug!(
                "{} is outside of {}, not previewed",
                entry.destination.display(),
                destination.display()
            );
            continue;
        };

        let components: Vec<String> = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().to_string())
            .collect();

        root.insert(&components, entry.is_file);
    }

    root
}

fn render_node(node: &TreeNode, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    lines.push(format!("{}{}{}", prefix.yellow(), connector, name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, &child_prefix, i == len - 1, lines);
    }
}

/// Renders the planned entries as a tree rooted at `destination`, one line
/// per entry.
pub fn render_tree(vfs: &VirtualFS, destination: &Path) -> Vec<String> {
    let tree_root = build_tree(vfs, destination);
    let mut lines = Vec::new();

    render_node(&tree_root, "", true, &mut lines);

    lines
}

pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    for line in render_tree(vfs, destination) {
        println!("{}", line);
    }

    println!();
}
