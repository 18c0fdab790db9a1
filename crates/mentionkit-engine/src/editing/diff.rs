use similar::{Algorithm, DiffOp, capture_diff_slices};

/// One step of a character-level edit script from old text to new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// `count` characters of the old text were deleted.
    Removed { count: usize },
    /// `value` was inserted.
    Added { value: String },
    /// `count` characters are shared by both texts.
    Unchanged { count: usize },
}

/// Computes a minimal edit script between `old` and `new`, in order.
///
/// A replacement is reported as a removal followed by an addition.
pub fn diff_chars(old: &str, new: &str) -> Vec<Change> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();

    let ops = capture_diff_slices(Algorithm::Myers, &old, &new);
    let mut changes = Vec::with_capacity(ops.len());

    for op in ops {
        match op {
            DiffOp::Equal { len, .. } => changes.push(Change::Unchanged { count: len }),
            DiffOp::Delete { old_len, .. } => changes.push(Change::Removed { count: old_len }),
            DiffOp::Insert {
                new_index, new_len, ..
            } => changes.push(Change::Added {
                value: new[new_index..new_index + new_len].iter().collect(),
            }),
            DiffOp::Replace {
                old_len,
                new_index,
                new_len,
                ..
            } => {
                changes.push(Change::Removed { count: old_len });
                changes.push(Change::Added {
                    value: new[new_index..new_index + new_len].iter().collect(),
                });
            }
        }
    }

    changes
}
