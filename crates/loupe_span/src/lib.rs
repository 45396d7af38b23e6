pub mod files;
pub mod position;

pub use files::{SourceFile, SourceMap, Sources};
pub use position::{FileId, Position};
