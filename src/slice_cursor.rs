use crate::cursor::LongCursor;
use crate::error::{Error, Result};

/// Read-only cursor over a borrowed slice of `i64`. The borrow pins the
/// slice for the cursor's lifetime, so concurrent modification cannot
/// occur and `remove()` keeps the unsupported default.
pub struct SliceCursor<'a> {
    data: &'a [i64],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(data: &'a [i64]) -> SliceCursor<'a> {
        SliceCursor { data, pos: 0 }
    }
}

impl<'a> LongCursor for SliceCursor<'a> {
    fn has_more(&self) -> bool {
        self.pos < self.data.len()
    }

    fn next(&mut self) -> Result<i64> {
        if self.pos == self.data.len() {
            return Err(Error::NoSuchElement);
        }
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::SliceCursor;
    use crate::cursor::LongCursor;
    use crate::error::Error;

    #[test]
    fn yields_all_elements_in_order() {
        let data = [3, 1, 4, 1, 5];
        let mut cursor = SliceCursor::new(&data);

        let mut seen = Vec::new();
        while cursor.has_more() {
            seen.push(cursor.next().unwrap());
        }
        assert_eq!(seen, data);
        assert_eq!(cursor.next(), Err(Error::NoSuchElement));
    }

    #[test]
    fn exactly_n_next_calls_succeed() {
        let data = [7, 8, 9];
        let mut cursor = SliceCursor::new(&data);
        for _ in 0..data.len() {
            cursor.next().unwrap();
        }
        assert!(!cursor.has_more());
        assert_eq!(cursor.next(), Err(Error::NoSuchElement));
        // Exhausted is terminal.
        assert_eq!(cursor.next(), Err(Error::NoSuchElement));
    }

    #[test]
    fn empty_slice_is_exhausted_immediately() {
        let mut cursor = SliceCursor::new(&[]);
        assert!(!cursor.has_more());
        assert_eq!(cursor.next(), Err(Error::NoSuchElement));
    }

    #[test]
    fn has_more_is_idempotent() {
        let data = [42];
        let mut cursor = SliceCursor::new(&data);
        for _ in 0..10 {
            assert!(cursor.has_more());
        }
        assert_eq!(cursor.next().unwrap(), 42);
    }

    #[test]
    fn remove_is_unsupported() {
        let data = [1, 2];
        let mut cursor = SliceCursor::new(&data);
        assert!(!cursor.supports_remove());
        cursor.next().unwrap();
        assert_eq!(cursor.remove(), Err(Error::UnsupportedOperation));
    }
}
