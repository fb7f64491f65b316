use serde::{Deserialize, Serialize};

/// Editor behavior knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Round creation positions to the grid
    #[serde(default = "default_snap_to_grid")]
    pub snap_to_grid: bool,

    #[serde(default = "default_grid_size")]
    pub grid_size: f64,

    /// x/y shift applied to duplicated and pasted elements
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset: f64,

    /// Maximum number of undo levels (0 = unlimited)
    #[serde(default)]
    pub max_history: usize,
}

fn default_snap_to_grid() -> bool {
    true
}

fn default_grid_size() -> f64 {
    20.0
}

fn default_duplicate_offset() -> f64 {
    20.0
}

impl EditorConfig {
    /// Snap a coordinate to the grid when snapping is on
    pub fn snap(&self, value: f64) -> f64 {
        if self.snap_to_grid && self.grid_size > 0.0 {
            (value / self.grid_size).round() * self.grid_size
        } else {
            value
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_to_grid: default_snap_to_grid(),
            grid_size: default_grid_size(),
            duplicate_offset: default_duplicate_offset(),
            max_history: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config: EditorConfig = serde_json::from_str(r#"{ "gridSize": 10 }"#).unwrap();
        assert!(config.snap_to_grid);
        assert_eq!(config.grid_size, 10.0);
        assert_eq!(config.duplicate_offset, 20.0);
        assert_eq!(config.max_history, 0);
    }

    #[test]
    fn test_snap() {
        let config = EditorConfig::default();
        assert_eq!(config.snap(33.0), 40.0);
        assert_eq!(config.snap(29.0), 20.0);

        let free = EditorConfig {
            snap_to_grid: false,
            ..EditorConfig::default()
        };
        assert_eq!(free.snap(33.0), 33.0);
    }
}
