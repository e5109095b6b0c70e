use crate::error::{Error, Result};

/// Single-pass, forward-only traversal over a sequence of `i64`, without
/// boxing each element.
///
/// A cursor has three logical states: Fresh (no `next()` yet, or the last
/// call was a successful `remove()`), Advanced (a `next()` just returned,
/// `remove()` is legal) and Exhausted (terminal; `has_more()` is false and
/// `next()` always fails with `NoSuchElement`).
pub trait LongCursor {
    /// True if at least one more element is available from the current
    /// position. Idempotent, never advances the cursor and never fails;
    /// a stale cursor reports the problem from the next `next()` call
    /// instead.
    fn has_more(&self) -> bool;

    /// Yields the next value in traversal order and advances by one.
    fn next(&mut self) -> Result<i64>;

    /// Removes the most recently yielded element from the backing
    /// structure. Legal only once, directly after a successful `next()`.
    /// Read-only cursors keep this default.
    fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }

    /// Whether `remove()` can ever succeed on this cursor, so callers can
    /// check up front instead of probing with a call.
    fn supports_remove(&self) -> bool {
        false
    }

    /// Drains the cursor through a standard `Iterator`.
    fn values(self) -> CursorValues<Self>
    where
        Self: Sized,
    {
        CursorValues { cursor: self }
    }
}

/// Bridges a cursor into `std::iter::Iterator`, stopping at exhaustion.
/// Consumes the cursor; removal is not reachable through this view.
pub struct CursorValues<C: LongCursor> {
    cursor: C,
}

impl<C: LongCursor> Iterator for CursorValues<C> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_more() {
            return None;
        }
        self.cursor.next().ok()
    }
}
