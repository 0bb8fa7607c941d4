//! Outline tree construction
//!
//! Converts the flat, leveled heading list into a nested forest in a single
//! left-to-right pass. Open ancestors live on a stack of arena indices;
//! nodes only ever refer forward to their children, so no back-references
//! are needed.

use super::models::{HeadingRecord, OutlineNode};

struct ArenaNode {
    level: u32,
    children: Vec<usize>,
}

/// Build the outline forest from headings in document order.
///
/// A heading is nested under the nearest preceding open heading with a
/// strictly smaller level. Equal levels are siblings, never parent and child.
pub fn build_tree(outline_flat: &[HeadingRecord]) -> Vec<OutlineNode> {
    let mut arena: Vec<ArenaNode> = Vec::with_capacity(outline_flat.len());
    let mut roots: Vec<usize> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    for record in outline_flat {
        let index = arena.len();
        arena.push(ArenaNode {
            level: record.level,
            children: Vec::new(),
        });

        while let Some(&top) = stack.last() {
            if arena[top].level >= record.level {
                stack.pop();
            } else {
                break;
            }
        }

        match stack.last() {
            Some(&parent) => arena[parent].children.push(index),
            None => roots.push(index),
        }

        stack.push(index);
    }

    // Children always have larger indices than their parent, so building
    // from the back assembles every subtree before its parent needs it.
    let mut built: Vec<Option<OutlineNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (index, arena_node) in arena.iter().enumerate().rev() {
        let mut node = OutlineNode::leaf(&outline_flat[index]);
        node.children = arena_node
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[index] = Some(node);
    }

    roots
        .iter()
        .filter_map(|&root| built[root].take())
        .collect()
}

/// Flatten a forest back into heading records by pre-order traversal.
pub fn flatten(forest: &[OutlineNode]) -> Vec<HeadingRecord> {
    let mut records = Vec::new();
    let mut pending: Vec<&OutlineNode> = forest.iter().rev().collect();

    while let Some(node) = pending.pop() {
        records.push(node.to_record());
        pending.extend(node.children.iter().rev());
    }

    records
}

/// Total number of nodes in a forest.
pub fn node_count(forest: &[OutlineNode]) -> usize {
    let mut count = 0;
    let mut pending: Vec<&OutlineNode> = forest.iter().collect();

    while let Some(node) = pending.pop() {
        count += 1;
        pending.extend(node.children.iter());
    }

    count
}

/// Nesting depth of a forest; an empty forest has depth 0.
pub fn depth(forest: &[OutlineNode]) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&OutlineNode, usize)> = forest.iter().map(|node| (node, 1)).collect();

    while let Some((node, node_depth)) = pending.pop() {
        deepest = deepest.max(node_depth);
        pending.extend(node.children.iter().map(|child| (child, node_depth + 1)));
    }

    deepest
}
