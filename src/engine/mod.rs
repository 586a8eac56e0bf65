pub mod pipeline;

pub use pipeline::{HighlightReport, SourceAligner};
