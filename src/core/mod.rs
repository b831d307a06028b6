pub mod gitignore;
pub mod layout;
pub mod scaffold;

pub use crate::domain::model::{FsOp, LayoutEntry, ScaffoldReport};
pub use crate::domain::ports::Filesystem;
pub use crate::utils::error::Result;
