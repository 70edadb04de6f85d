//! Human readable renderings of a heap, meant for debugging and tests.
//!
//! Neither format is stable.

use core::fmt;

use crate::Entry;

const EMPTY: &str = "(EMPTY)";
const INDENT: usize = 3;

/// Renders a heap as a tree lying on its side.
///
/// The right subtree is printed above its parent and the left subtree below,
/// one `payload(priority)` per line, indented by three spaces per level.
///
/// ```
/// use prio_heap::PriorityHeap;
///
/// let mut heap = PriorityHeap::new();
/// heap.push("A", 5);
/// heap.push("B", 9);
/// heap.push("C", 1);
///
/// assert_eq!(heap.dump_tree().to_string(), "   C(1)\nB(9)\n   A(5)\n");
/// ```
pub struct TreeDump<'a, T, P> {
    entries: &'a [Entry<T, P>],
}

impl<'a, T, P> TreeDump<'a, T, P> {
    pub(crate) fn new(entries: &'a [Entry<T, P>]) -> Self {
        TreeDump { entries }
    }
}

impl<T: fmt::Display, P: fmt::Display> fmt::Display for TreeDump<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.entries.len();
        if len == 0 {
            return writeln!(f, "{}", EMPTY);
        }

        // Reverse in-order walk: right subtree, node, left subtree.
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut node = 0;
        let mut depth = 0;
        loop {
            while node < len {
                stack.push((node, depth));
                node = 2 * node + 2;
                depth += 1;
            }

            let (index, level) = match stack.pop() {
                Some(top) => top,
                None => return Ok(()),
            };
            writeln!(
                f,
                "{:indent$}{}",
                "",
                self.entries[index],
                indent = level * INDENT
            )?;

            node = 2 * index + 1;
            depth = level + 1;
        }
    }
}

/// Renders the payloads in storage order, separated by single spaces.
///
/// ```
/// use prio_heap::PriorityHeap;
///
/// let heap = PriorityHeap::from([("A", 5), ("B", 9), ("C", 1)]);
/// assert_eq!(heap.dump_array().to_string(), "B A C");
///
/// let empty = PriorityHeap::<&str>::new();
/// assert_eq!(empty.dump_array().to_string(), "(EMPTY)");
/// ```
pub struct ArrayDump<'a, T, P> {
    entries: &'a [Entry<T, P>],
}

impl<'a, T, P> ArrayDump<'a, T, P> {
    pub(crate) fn new(entries: &'a [Entry<T, P>]) -> Self {
        ArrayDump { entries }
    }
}

impl<T: fmt::Display, P> fmt::Display for ArrayDump<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.entries.iter();
        match entries.next() {
            Some(first) => write!(f, "{}", first.payload)?,
            None => return f.write_str(EMPTY),
        }
        for entry in entries {
            write!(f, " {}", entry.payload)?;
        }
        Ok(())
    }
}
