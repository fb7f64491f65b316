mod compiler;

pub use compiler::{compile_markup, compile_to_html, escape_html, CompileError, CompileOptions};

#[cfg(test)]
mod tests;
