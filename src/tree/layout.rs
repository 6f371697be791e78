use super::walk::RawEntry;
use super::TreeLine;
use crate::grammar::{encode_line, encode_prefix};

/// Compute is_last flags for all entries.
pub(super) fn compute_tree_lines(raw: &[RawEntry]) -> Vec<TreeLine> {
    raw.iter()
        .enumerate()
        .map(|(i, entry)| TreeLine {
            depth: entry.depth,
            is_last: is_last_sibling(raw, i),
            name: entry.name.clone(),
            is_dir: entry.is_dir,
        })
        .collect()
}

/// Determine if entry at index `i` is the last sibling in its parent group.
fn is_last_sibling(raw: &[RawEntry], i: usize) -> bool {
    let depth = raw[i].depth;
    for next in &raw[i + 1..] {
        if next.depth == depth {
            return false;
        }
        if next.depth < depth {
            return true; // parent's scope ended
        }
        // deeper entries are our own children
    }
    true
}

/// Produce the tree text: root line, then one line per entry.
pub(super) fn render_text(root_label: &str, lines: &[TreeLine]) -> String {
    let mut out = format!("{root_label}/\n");

    // ancestors_last[d] = whether the open ancestor at depth d was a last sibling
    let mut ancestors_last: Vec<bool> = Vec::new();
    for line in lines {
        ancestors_last.resize(line.depth, false);
        let prefix = encode_prefix(&ancestors_last);
        out.push_str(&encode_line(&prefix, line.is_last, &line.name, line.is_dir));
        out.push('\n');
        ancestors_last.push(line.is_last);
    }
    out
}
