//! Semi-structured analysis reply parser and renderers
//!
//! Converts the restricted markdown a language model returns for a patent
//! overlap analysis (pipe tables, `\n` escapes, `**` emphasis and support
//! level labels) into a typed [`Document`], then realizes it twice: as
//! display nodes for on-screen rendering and as a standalone HTML export.

pub mod cell;
pub mod classify;
pub mod export;
pub mod interactive;
pub mod ir;
pub mod options;
pub mod segment;
pub mod table;
pub mod walker;

pub use export::{ExportError, ExportRenderer};
pub use interactive::{Element, InteractiveRenderer, RenderNode, ResultView, Tag};
pub use ir::{
    Block, Cell, ClassifiedCell, Document, SupportLevel, Table, TableCell, TextSegment,
    TitledDocument,
};
pub use options::{Dialect, RenderOptions};
pub use walker::{parse, parse_titled, split_title};
