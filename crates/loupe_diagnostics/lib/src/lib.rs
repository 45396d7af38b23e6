pub mod diagnostic;
pub mod pretty;
pub mod report;
pub mod term;

pub use diagnostic::Diagnostic;
pub use pretty::{Doc, Document};
pub use report::{Marker, MarkerKind, Report, Severity};
