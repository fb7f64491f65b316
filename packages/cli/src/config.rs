use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use weave_editor::{EditorConfig, Target};

pub const DEFAULT_CONFIG_NAME: &str = "weave.config.json";

/// Suffix of project documents found under `srcDir`
pub const PROJECT_EXTENSION: &str = ".weave.json";

/// Weave configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing project documents
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Editor settings used when opening projects
    #[serde(default)]
    pub editor: EditorConfig,

    /// Compiler output options
    #[serde(default = "default_compiler_options")]
    pub compiler_options: Vec<CompilerOption>,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_compiler_options() -> Vec<CompilerOption> {
    vec![CompilerOption {
        emit: vec![Target::Html, Target::Css],
        out_dir: None,
    }]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerOption {
    /// Output targets to emit
    pub emit: Vec<Target>,

    /// Optional output directory
    #[serde(rename = "outDir", skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    /// Every target named by the compiler options, first mention wins
    pub fn emit_targets(&self) -> Vec<(Target, Option<&str>)> {
        let mut targets: Vec<(Target, Option<&str>)> = Vec::new();
        for option in &self.compiler_options {
            for target in &option.emit {
                if !targets.iter().any(|(t, _)| t == target) {
                    targets.push((*target, option.out_dir.as_deref()));
                }
            }
        }
        targets
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            editor: EditorConfig::default(),
            compiler_options: default_compiler_options(),
        }
    }
}

/// `landing.weave.json` -> `landing`
pub fn project_stem(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(PROJECT_EXTENSION))
}
