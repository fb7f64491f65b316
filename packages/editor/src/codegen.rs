//! Code generation dispatch
//!
//! Every target reads the same collection through the same style resolver;
//! this module only picks the emitter and wraps its error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument};
use weave_model::{ElementCollection, Theme};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodegenError {
    #[error("Unsupported target: {0}")]
    UnsupportedTarget(String),

    #[error("HTML: {0}")]
    Html(#[from] weave_compiler_html::CompileError),

    #[error("React: {0}")]
    React(#[from] weave_compiler_react::CompileError),

    #[error("Vue: {0}")]
    Vue(#[from] weave_compiler_vue::CompileError),

    #[error("Svelte: {0}")]
    Svelte(#[from] weave_compiler_svelte::CompileError),
}

/// Output flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Html,
    Css,
    React,
    /// React component shaped as a Next.js app-router page
    Next,
    Vue,
    Svelte,
}

impl Target {
    pub const ALL: &'static [Target] = &[
        Target::Html,
        Target::Css,
        Target::React,
        Target::Next,
        Target::Vue,
        Target::Svelte,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Html => "html",
            Target::Css => "css",
            Target::React => "react",
            Target::Next => "next",
            Target::Vue => "vue",
            Target::Svelte => "svelte",
        }
    }

    /// File extension for the generated source
    pub fn extension(&self) -> &'static str {
        match self {
            Target::Html => "html",
            Target::Css => "css",
            Target::React | Target::Next => "jsx",
            Target::Vue => "vue",
            Target::Svelte => "svelte",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Target::Html),
            "css" => Ok(Target::Css),
            "react" | "jsx" => Ok(Target::React),
            "next" | "nextjs" => Ok(Target::Next),
            "vue" => Ok(Target::Vue),
            "svelte" => Ok(Target::Svelte),
            _ => Err(CodegenError::UnsupportedTarget(s.to_string())),
        }
    }
}

/// Generate source for `target` from the latest collection
#[instrument(skip(collection, theme), fields(elements = collection.len()))]
pub fn generate(
    collection: &ElementCollection,
    target: Target,
    theme: Option<&Theme>,
) -> Result<String, CodegenError> {
    let theme = theme.cloned();

    let output = match target {
        Target::Html => weave_compiler_html::compile_to_html(
            collection,
            &weave_compiler_html::CompileOptions {
                theme,
                ..Default::default()
            },
        )?,
        Target::Css => weave_compiler_css::compile_to_css(
            collection,
            &weave_compiler_css::CompileOptions {
                theme,
                ..Default::default()
            },
        ),
        Target::React | Target::Next => weave_compiler_react::compile_to_react(
            collection,
            weave_compiler_react::CompileOptions {
                next_page: target == Target::Next,
                theme,
                ..Default::default()
            },
        )?,
        Target::Vue => weave_compiler_vue::compile_to_vue(
            collection,
            &weave_compiler_vue::CompileOptions { theme },
        )?,
        Target::Svelte => weave_compiler_svelte::compile_to_svelte(
            collection,
            &weave_compiler_svelte::CompileOptions { theme },
        )?,
    };

    debug!(%target, bytes = output.len(), "Generated code");
    Ok(output)
}
