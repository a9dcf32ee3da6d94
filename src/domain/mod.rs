mod index;
pub(crate) mod storage;

pub use index::{GameGroup, Index, ServerEntry};
