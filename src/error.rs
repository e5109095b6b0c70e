use std::result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("No more elements in the sequence")]
    NoSuchElement,

    #[error("Illegal cursor state: `{0}`")]
    IllegalState(&'static str),

    #[error("This cursor does not support removal")]
    UnsupportedOperation,

    #[error("Backing structure changed during traversal: cursor saw version `{0}` but structure is at version `{1}`")]
    ConcurrentModification(u64, u64),
}

pub type Result<T> = result::Result<T, Error>;
