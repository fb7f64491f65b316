//! # Weave Style Resolver
//!
//! Turns an element's sparse style map, its geometry and the active theme
//! into a [`ResolvedStyle`]: an ordered list of declarations that every code
//! generator renders from.
//!
//! ## Ordering
//!
//! ```text
//! position, left, top, width, height      (resolve_element only)
//! styles in vocabulary order              (theme fallbacks slot in by key)
//!   └─ transform at the `transform` slot  (explicit text, then composed parts)
//! ```
//!
//! Each declaration carries both renderings of its value: stylesheet text
//! (`16px`) and the inline-style script form (`16`), so the stylesheet and
//! component emitters can never disagree on what a value means.

mod declaration;
mod resolver;

pub use declaration::{Declaration, ResolvedStyle, ResolvedValue, ScriptValue};
pub use resolver::{
    class_list, class_name, format_number, resolve, resolve_element, resolve_element_at,
    CLASS_PROPS,
};
