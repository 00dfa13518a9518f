pub mod go;
pub mod import;

pub use go::GoParser;
pub use import::{Declaration, assumed_name, normalize_comment};
