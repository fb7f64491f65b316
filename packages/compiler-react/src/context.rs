use std::cell::RefCell;
use std::rc::Rc;
use weave_model::Theme;

/// Options for React compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Whether to use TypeScript types
    pub use_typescript: bool,
    /// Emit a Next.js client page (`export default function Page`) instead of
    /// an `App` component
    pub next_page: bool,
    /// Name of the generated component
    pub component_name: String,
    /// Theme supplying fallback colors, fonts and radius
    pub theme: Option<Theme>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            use_typescript: false,
            next_page: false,
            component_name: "App".to_string(),
            theme: None,
        }
    }
}

/// Compilation context for managing state during code generation
pub struct CompilerContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = "  ".repeat(*self.indent_level.borrow());
        self.buffer.borrow_mut().push_str(&indent);
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}
