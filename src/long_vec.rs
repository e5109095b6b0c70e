use std::cell::RefCell;
use std::rc::Rc;

use crate::cursor::LongCursor;
use crate::error::{Error, Result};

struct Inner {
    data: Vec<i64>,
    // Bumped on every structural mutation; stale cursors compare against it.
    version: u64,
}

/// Growable sequence of `i64` with shared interior state, so several
/// cursors (and the structure itself) can coexist over the same elements.
/// Every structural mutation bumps a version counter; a cursor holding an
/// older version fails its next state-touching call with
/// `ConcurrentModification`.
pub struct LongVec {
    inner: Rc<RefCell<Inner>>,
}

impl LongVec {
    pub fn new() -> LongVec {
        LongVec::from_slice(&[])
    }

    pub fn from_slice(values: &[i64]) -> LongVec {
        LongVec {
            inner: Rc::new(RefCell::new(Inner {
                data: values.to_vec(),
                version: 0,
            })),
        }
    }

    pub fn push(&self, value: i64) {
        let mut inner = self.inner.borrow_mut();
        inner.data.push(value);
        inner.version += 1;
    }

    /// Removes and returns the element at `index`. Panics if `index` is out
    /// of bounds, like `Vec::remove`.
    pub fn remove(&self, index: usize) -> i64 {
        let mut inner = self.inner.borrow_mut();
        let value = inner.data.remove(index);
        inner.version += 1;
        value
    }

    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.data.clear();
        inner.version += 1;
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().data.is_empty()
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.inner.borrow().data.clone()
    }

    /// Traversal entry point. The cursor starts Fresh at the first element
    /// and records the structure's current version.
    pub fn cursor(&self) -> VecCursor {
        VecCursor {
            inner: Rc::clone(&self.inner),
            pos: 0,
            last_returned: None,
            version: self.inner.borrow().version,
        }
    }
}

impl Default for LongVec {
    fn default() -> LongVec {
        LongVec::new()
    }
}

/// Mutating cursor over a `LongVec`. Supports `remove()`; its own removal
/// re-synchronizes the recorded version, so only *other* parties invalidate
/// it.
pub struct VecCursor {
    inner: Rc<RefCell<Inner>>,
    pos: usize,
    last_returned: Option<usize>,
    version: u64,
}

impl VecCursor {
    fn check_version(&self) -> Result<()> {
        let actual = self.inner.borrow().version;
        if self.version != actual {
            return Err(Error::ConcurrentModification(self.version, actual));
        }
        Ok(())
    }
}

impl LongCursor for VecCursor {
    fn has_more(&self) -> bool {
        self.pos < self.inner.borrow().data.len()
    }

    fn next(&mut self) -> Result<i64> {
        self.check_version()?;
        let inner = self.inner.borrow();
        if self.pos == inner.data.len() {
            return Err(Error::NoSuchElement);
        }
        let value = inner.data[self.pos];
        self.last_returned = Some(self.pos);
        self.pos += 1;
        Ok(value)
    }

    fn remove(&mut self) -> Result<()> {
        self.check_version()?;
        let index = self
            .last_returned
            .take()
            .ok_or(Error::IllegalState("remove() must directly follow a successful next()"))?;

        let mut inner = self.inner.borrow_mut();
        inner.data.remove(index);
        inner.version += 1;
        self.version = inner.version;
        // The element after the removed one slid into its slot; resume there.
        self.pos = index;
        Ok(())
    }

    fn supports_remove(&self) -> bool {
        true
    }
}
