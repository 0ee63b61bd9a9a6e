//! Internal helpers for text normalization and grid layout.

pub(crate) mod grid;
pub mod text;
