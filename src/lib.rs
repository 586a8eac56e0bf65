//! Outline-to-source alignment for mindmap summaries of web pages.
//!
//! Given an outline node (text + level), locate the passages of the source
//! page it summarizes and highlight them in the source panel.
//!
//! - [`align`]     — pure three-tier search over immutable snapshots
//! - [`highlight`] — decoration state and the [`highlight::SourcePanel`] seam
//! - [`engine`]    — [`engine::SourceAligner`], the two UI entry points

pub mod align;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod net;
pub mod outline;
pub mod similarity;
pub mod text;

pub use config::AlignConfig;
pub use engine::{HighlightReport, SourceAligner};
pub use error::{AlignError, InvalidInput};
