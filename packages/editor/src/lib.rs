//! # Weave Editor
//!
//! Headless editing engine for the canvas builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Editor: one request → one commit            │
//! │  - gestures, clipboard, selection, theme    │
//! └─────────────────────────────────────────────┘
//!          ↓                          ↓
//! ┌──────────────────────┐  ┌──────────────────────┐
//! │ mutations: pure      │  │ pages: membership +  │
//! │ collection → new one │  │ selection            │
//! └──────────────────────┘  └──────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────────┐
//! │ history: immutable snapshots + cursor       │
//! └─────────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────────┐
//! │ codegen: html / css / react / vue / svelte  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Collections are values**: every change builds a new one, so a
//!    snapshot never observes later edits
//! 2. **Strict tree**: an element lives in exactly one container
//! 3. **Sparse styles**: resolution happens on read, in `weave-style`
//! 4. **Rejected means untouched**: a failed request changes nothing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use weave_editor::{Editor, ElementPatch, Target};
//! use weave_model::{ElementKind, StyleKey};
//!
//! let mut editor = Editor::new("landing-page");
//! let id = editor.create_element(ElementKind::Button, 100.0, 80.0)?;
//!
//! editor.update_element(&id, &ElementPatch::new().style(StyleKey::Rotate, 45))?;
//! editor.undo()?;
//!
//! let html = editor.generate_code(Target::Html)?;
//! editor.save("landing.weave.json")?;
//! ```

mod alignment;
mod codegen;
mod config;
mod editor;
mod errors;
mod history;
mod mutations;
mod pages;
mod patch;
mod persistence;

pub use alignment::{plan as plan_alignment, AlignOp, Batch, MIN_SELECTION};
pub use codegen::{generate, CodegenError, Target};
pub use config::EditorConfig;
pub use editor::{Editor, EditorResult};
pub use errors::EditorError;
pub use history::{History, HistoryError};
pub use mutations::{
    apply, apply_many, duplicate, import, insert, paste, remove, validate, MutationError,
    MutationResult, COPY_SUFFIX,
};
pub use pages::{PageDeletePolicy, PageIndex, Selection};
pub use patch::ElementPatch;
pub use persistence::{ProjectDocument, FORMAT_VERSION};
