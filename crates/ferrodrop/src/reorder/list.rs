//! Flat list reordering.

use crate::error::{DragError, DragResult};

fn check_index(index: usize, len: usize) -> DragResult<()> {
    if index >= len {
        return Err(DragError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Move the element at `from` so that it ends up at `to`.
///
/// The element is removed first and then inserted at `to` in the shorter
/// sequence, so `to` is the element's final index. Both indices must be in
/// `[0, len)`. Nothing changes on error.
pub fn move_in_place<T>(items: &mut Vec<T>, from: usize, to: usize) -> DragResult<()> {
    let len = items.len();
    check_index(from, len)?;
    check_index(to, len)?;
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

/// Return a reordered copy of `items`; see [`move_in_place`].
///
/// ```
/// use ferrodrop::reorder::list::move_item;
///
/// let moved = move_item(&["a", "b", "c", "d"], 0, 2).unwrap();
/// assert_eq!(moved, vec!["b", "c", "a", "d"]);
/// ```
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> DragResult<Vec<T>> {
    let mut out = items.to_vec();
    move_in_place(&mut out, from, to)?;
    Ok(out)
}

/// Move the element at `from` in `source` into `target` at insertion point `at`.
///
/// `at` may equal `target.len()` to append.
pub fn transfer_item<T: Clone>(
    source: &[T],
    from: usize,
    target: &[T],
    at: usize,
) -> DragResult<(Vec<T>, Vec<T>)> {
    check_index(from, source.len())?;
    if at > target.len() {
        return Err(DragError::IndexOutOfRange {
            index: at,
            len: target.len(),
        });
    }

    let mut source = source.to_vec();
    let mut target = target.to_vec();
    let item = source.remove(from);
    target.insert(at, item);
    Ok((source, target))
}
