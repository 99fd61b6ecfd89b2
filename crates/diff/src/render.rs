use anyhow::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit_op::EditOp;
use crate::text_pair::{Side, SymbolSource};

/// One tagged output event of a rendered diff
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffEvent {
    /// Text present only in the old version
    Deleted(String),

    /// Text present only in the new version
    Inserted(String),

    /// Text shared by both versions, one symbol per event
    Unchanged(String),

    /// A line-break marker, placed according to the newline authority
    LineBreak,
}

/// Receives the ordered stream of output events for one rendered diff
///
/// Implementations decide the final markup: HTML tags, plain-text
/// markers, structured records. Errors returned from [`EventSink::emit`]
/// abort the render and propagate to the caller.
pub trait EventSink {
    fn emit(&mut self, event: DiffEvent) -> Result<()>;
}

/// Collecting sink, mostly useful in tests and for post-processing
impl EventSink for Vec<DiffEvent> {
    fn emit(&mut self, event: DiffEvent) -> Result<()> {
        self.push(event);
        Ok(())
    }
}

/// Selects which side's characters count as line breaks in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NewlineAuthority {
    /// Only the old text's line breaks are emitted
    Old,

    /// Only the new text's line breaks are emitted
    #[default]
    New,

    /// Either side's line breaks are emitted
    Both,
}

impl NewlineAuthority {
    fn covers_old(self) -> bool {
        matches!(self, Self::Old | Self::Both)
    }

    fn covers_new(self) -> bool {
        matches!(self, Self::New | Self::Both)
    }
}

/// Options controlling how an edit path is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Merge adjacent deleted/inserted symbols into one run per class
    /// instead of emitting one event per symbol
    pub merge_runs: bool,

    /// Which side's characters count as line breaks
    pub newline_authority: NewlineAuthority,
}

/// Walks an edit path and emits merged, tagged output events
///
/// In merge mode, deleted and inserted symbols accumulate in two pending
/// buffers until an unchanged symbol, a line break or the end of the path
/// flushes them: deleted run first, inserted run second. The tie-break of
/// the alignment engine can produce alternating Delete/Insert steps for a
/// single logical substitution run; the buffers coalesce those into one
/// removed-chunk/added-chunk pair. The buffers are cleared on flush but
/// keep their allocation for the next run.
#[derive(Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
    pending_deleted: String,
    pending_inserted: String,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Render one edit path over its symbol source into a sink
    pub fn render(
        &mut self,
        ops: &[EditOp],
        src: &impl SymbolSource,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        self.pending_deleted.clear();
        self.pending_inserted.clear();

        let mut x = 0; // cursor into the old sequence
        let mut y = 0; // cursor into the new sequence
        for &op in ops {
            // The character that decides line-break emission for this
            // step, filtered by the configured newline authority
            let mut authoritative = None;
            match op {
                EditOp::Delete => {
                    let ch = src.symbol(Side::Old, x);
                    if self.options.newline_authority.covers_old() {
                        authoritative = Some(ch);
                    }
                    self.delete(ch, sink)?;
                    x += 1;
                }
                EditOp::Insert => {
                    let ch = src.symbol(Side::New, y);
                    if self.options.newline_authority.covers_new() {
                        authoritative = Some(ch);
                    }
                    self.insert(ch, sink)?;
                    y += 1;
                }
                EditOp::Replace => {
                    let old_ch = src.symbol(Side::Old, x);
                    let new_ch = src.symbol(Side::New, y);
                    if self.options.newline_authority.covers_new() {
                        authoritative = Some(new_ch);
                    }
                    // The old side only overrides when the new side did
                    // not already contribute a line break
                    if self.options.newline_authority.covers_old()
                        && authoritative != Some('\n')
                    {
                        authoritative = Some(old_ch);
                    }
                    self.delete(old_ch, sink)?;
                    self.insert(new_ch, sink)?;
                    x += 1;
                    y += 1;
                }
                EditOp::Ignore => {
                    // Both sides hold the same symbol here, so the
                    // authority mode cannot change the outcome
                    let ch = src.symbol(Side::Old, x);
                    authoritative = Some(ch);
                    self.flush(sink)?;
                    sink.emit(DiffEvent::Unchanged(ch.to_string()))?;
                    x += 1;
                    y += 1;
                }
            }
            if authoritative == Some('\n') {
                self.flush(sink)?;
                sink.emit(DiffEvent::LineBreak)?;
            }
        }

        // Anything still pending belongs to the tail of the diff
        self.flush(sink)
    }

    fn delete(&mut self, ch: char, sink: &mut dyn EventSink) -> Result<()> {
        if self.options.merge_runs {
            self.pending_deleted.push(ch);
            Ok(())
        } else {
            sink.emit(DiffEvent::Deleted(ch.to_string()))
        }
    }

    fn insert(&mut self, ch: char, sink: &mut dyn EventSink) -> Result<()> {
        if self.options.merge_runs {
            self.pending_inserted.push(ch);
            Ok(())
        } else {
            sink.emit(DiffEvent::Inserted(ch.to_string()))
        }
    }

    /// Emit the pending deleted run, then the pending inserted run, and
    /// clear both buffers
    fn flush(&mut self, sink: &mut dyn EventSink) -> Result<()> {
        if !self.pending_deleted.is_empty() {
            sink.emit(DiffEvent::Deleted(self.pending_deleted.clone()))?;
            self.pending_deleted.clear();
        }
        if !self.pending_inserted.is_empty() {
            sink.emit(DiffEvent::Inserted(self.pending_inserted.clone()))?;
            self.pending_inserted.clear();
        }
        Ok(())
    }
}
