//! # Weave Model
//!
//! Plain data definitions for the canvas builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Element, Styles, Page, Theme         │
//! │  - ids, per-kind templates, style vocabulary │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ style: sparse styles → resolved declarations│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations, history, pages, codegen  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate mutates a collection. An [`ElementCollection`] is an
//! immutable, cheaply cloneable value; the editor builds a new one for every
//! change.

mod behavior;
mod collection;
mod element;
mod id_generator;
mod kind;
mod page;
mod style;
mod template;
mod theme;

pub use behavior::{Animation, AnimationTrigger, Interaction, InteractionAction, InteractionTrigger};
pub use collection::ElementCollection;
pub use element::{Element, ElementId, Props};
pub use id_generator::{get_project_seed, IdGenerator};
pub use kind::{ElementKind, ParseKindError};
pub use page::{Page, PageId};
pub use style::{StyleKey, StylePatch, StyleUnit, StyleValue, Styles};
pub use template::{template_for, Template};
pub use theme::{Theme, ThemeColors, ThemeFonts};
