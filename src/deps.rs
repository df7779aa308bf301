//! Dependency-chain ordering for content entries.
//!
//! Entries declare at most one prerequisite via `depends_on`, forming a
//! forest of chains: each entry points at the entry that should be read
//! before it. This module linearizes that forest so prerequisites always
//! come first.
//!
//! ```text
//! tools    (depends_on = "context")
//! context  (depends_on = "large-language-models")
//! large-language-models              # root — no depends_on
//!
//! → large-language-models, context, tools
//! ```
//!
//! The ordering is fully deterministic: any permutation of the same input
//! produces the same output. Roots are visited in lexicographic id order,
//! and entries sharing a prerequisite are emitted in lexicographic order
//! after it.
//!
//! Malformed data degrades instead of failing: a `depends_on` that names
//! nothing in the input makes the entry a root of its own chain, and
//! entries trapped in a dependency cycle (unreachable from any root) are
//! appended at the end in their original input order. The sort never
//! errors and always returns a permutation of its input.

use std::collections::HashMap;

/// An item that can participate in dependency ordering.
///
/// Implemented by anything with a unique string id and an optional
/// reference to the id of its prerequisite. Ids are expected to be unique
/// within one call; if duplicates occur, the first occurrence claims the
/// id and later duplicates fall through to the residual sweep.
pub trait DependencyItem {
    fn id(&self) -> &str;
    fn depends_on(&self) -> Option<&str>;
}

/// Sort items so every entry appears after its prerequisite.
///
/// See [`sort_by_dependency_with`] for the full contract; this is the
/// trait-based entry point.
pub fn sort_by_dependency<T: DependencyItem>(items: Vec<T>) -> Vec<T> {
    sort_by_dependency_with(items, |i| i.id(), |i| i.depends_on())
}

/// Sort arbitrary records by dependency, projecting keys with closures.
///
/// The adapter for types that don't implement [`DependencyItem`] directly:
/// `id` extracts the unique identifier, `depends_on` its optional
/// prerequisite id. Records are reordered by move — never cloned, never
/// mutated — so every field passes through untouched.
///
/// Algorithm:
/// 1. Map each id to its entry (first occurrence wins on duplicates).
/// 2. Build the reverse adjacency: for each entry, which entries name it
///    as their prerequisite. Only in-set targets register an edge.
/// 3. Partition out the roots — entries whose prerequisite is absent,
///    missing from the input, or a self-reference.
/// 4. Walk each root's chain depth-first in pre-order, roots and sibling
///    dependents both in lexicographic id order, skipping anything
///    already visited (this is what makes cycles safe).
/// 5. Append whatever the walk never reached, in original input order.
///    Only fully cyclic components land here; their order is a fallback,
///    not a contract.
pub fn sort_by_dependency_with<T>(
    entries: Vec<T>,
    id: impl Fn(&T) -> &str,
    depends_on: impl Fn(&T) -> Option<&str>,
) -> Vec<T> {
    // Zero or one entry: nothing to order.
    if entries.len() < 2 {
        return entries;
    }

    // id → index, first occurrence wins
    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        by_id.entry(id(entry)).or_insert(idx);
    }

    // Reverse adjacency (prerequisite → dependents) and root partition.
    // A self-reference counts as a root, not an edge, so a one-entry
    // cycle resolves in the main walk instead of the residual sweep.
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        match depends_on(entry).and_then(|target| by_id.get(target)) {
            Some(&parent) if parent != idx => dependents[parent].push(idx),
            _ => roots.push(idx),
        }
    }

    // Fix the traversal start order regardless of input order.
    roots.sort_by_key(|&idx| (id(&entries[idx]), idx));

    // Pre-order walk of each root's chain. The explicit stack keeps deep
    // chains off the call stack; children are pushed in reverse so the
    // lexicographically first dependent pops first.
    let mut order: Vec<usize> = Vec::with_capacity(entries.len());
    let mut visited = vec![false; entries.len()];
    let mut stack: Vec<usize> = Vec::new();
    for &root in &roots {
        stack.push(root);
        while let Some(idx) = stack.pop() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            order.push(idx);

            let mut children = dependents[idx].clone();
            children.sort_by_key(|&c| (id(&entries[c]), c));
            for &child in children.iter().rev() {
                stack.push(child);
            }
        }
    }

    // Residual sweep: entries unreachable from any root (pure cycles),
    // in original input order.
    for idx in 0..entries.len() {
        if !visited[idx] {
            order.push(idx);
        }
    }

    // Reorder by move.
    let mut slots: Vec<Option<T>> = entries.into_iter().map(Some).collect();
    order.into_iter().map(|idx| slots[idx].take().unwrap()).collect()
}
