//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("History error: {0}")]
    History(#[from] crate::history::HistoryError),

    #[error("Page error: {0}")]
    Page(#[from] crate::pages::PageError),

    #[error("Codegen error: {0}")]
    Codegen(#[from] crate::codegen::CodegenError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Nothing is selected")]
    EmptySelection,

    #[error("Selection too small: {actual} selected, {required} required")]
    SelectionTooSmall { required: usize, actual: usize },

    #[error("Clipboard is empty")]
    EmptyClipboard,
}
