// Core diff library for Collate
// This crate computes character-level edit paths and renders them as
// merged, tagged output runs

mod aligner;
mod edit_op;
mod error;
mod matrix;
mod render;
mod text_pair;

pub use aligner::Aligner;
pub use edit_op::{Alignment, EditOp};
pub use error::DiffError;
pub use render::{DiffEvent, EventSink, NewlineAuthority, RenderOptions, Renderer};
pub use text_pair::{Side, SymbolSource, TextPair};

use anyhow::Result;

/// Wrapper around character diff operations
pub struct CharDiff;

impl CharDiff {
    /// Compute the edit distance between two texts
    pub fn distance(old_text: &str, new_text: &str) -> Result<usize> {
        let pair = TextPair::new(old_text, new_text);
        let mut aligner = Aligner::new();
        Ok(aligner.distance(&pair)?)
    }

    /// Compute the edit distance and the full edit path between two texts
    pub fn align(old_text: &str, new_text: &str) -> Result<Alignment> {
        let pair = TextPair::new(old_text, new_text);
        let mut aligner = Aligner::new();
        Ok(aligner.alignment(&pair)?)
    }

    /// Diff two texts and stream the tagged output to a sink
    pub fn render(
        old_text: &str,
        new_text: &str,
        options: RenderOptions,
        sink: &mut dyn EventSink,
    ) -> Result<Alignment> {
        let pair = TextPair::new(old_text, new_text);
        let mut aligner = Aligner::new();
        let alignment = aligner.alignment(&pair)?;
        let mut renderer = Renderer::new(options);
        renderer.render(alignment.ops(), &pair, sink)?;
        Ok(alignment)
    }
}
