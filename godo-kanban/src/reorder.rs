//! The one place ordered sequences are rearranged.
//!
//! Sequence order is display order. Every path that changes it (task drops,
//! column drops, inserting a duplicate after its original) goes through
//! [`take`] and [`place`] so the remove-then-insert rule lives in one spot.

/// An item addressable by a unique key within its sequence
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;
}

/// Where an item lands relative to its new siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor<'a, K> {
    /// Immediately before the sibling with this key
    Before(&'a K),
    /// Immediately after the sibling with this key
    After(&'a K),
    /// At the end of the sequence
    End,
}

/// Index of the item with `key`
pub fn position_of<T: Keyed>(seq: &[T], key: &T::Key) -> Option<usize> {
    seq.iter().position(|item| item.key() == key)
}

/// Remove the item with `key`, returning it with the index it occupied
pub fn take<T: Keyed>(seq: &mut Vec<T>, key: &T::Key) -> Option<(usize, T)> {
    let index = position_of(seq, key)?;
    Some((index, seq.remove(index)))
}

/// Insert `item` at `anchor` and return the index it ended up at.
///
/// An anchor naming a key that is not in the sequence falls back to the end.
pub fn place<T: Keyed>(seq: &mut Vec<T>, item: T, anchor: Anchor<'_, T::Key>) -> usize {
    let index = match anchor {
        Anchor::Before(key) => position_of(seq, key).unwrap_or(seq.len()),
        Anchor::After(key) => position_of(seq, key).map_or(seq.len(), |i| i + 1),
        Anchor::End => seq.len(),
    };
    seq.insert(index, item);
    index
}

/// Relocate the item with `key` inside `seq`.
///
/// Returns the new index, or `None` if the item is not present. Anchoring an
/// item to itself leaves it where it was.
pub fn move_within<T: Keyed>(
    seq: &mut Vec<T>,
    key: &T::Key,
    anchor: Anchor<'_, T::Key>,
) -> Option<usize> {
    let (from, item) = take(seq, key)?;
    if anchors_to_self(&anchor, key) {
        seq.insert(from, item);
        return Some(from);
    }
    Some(place(seq, item, anchor))
}

/// True when `anchor` points at the item being moved
pub fn anchors_to_self<K: PartialEq>(anchor: &Anchor<'_, K>, key: &K) -> bool {
    match anchor {
        Anchor::Before(k) | Anchor::After(k) => *k == key,
        Anchor::End => false,
    }
}
