pub mod cursor;
pub mod error;
pub mod long_vec;
pub mod slice_cursor;

pub use cursor::{CursorValues, LongCursor};
pub use error::{Error, Result};
pub use long_vec::{LongVec, VecCursor};
pub use slice_cursor::SliceCursor;
