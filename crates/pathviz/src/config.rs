use crate::Speed;

/// Settings a [`Visualizer`](crate::Visualizer) starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualizerConfig {
    pub columns: i32,
    pub rows: i32,
    pub speed: Speed,
    /// Search the four diagonal neighbors too.
    pub allow_diagonal: bool,
    /// Seed for maze generation. A random seed is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            columns: 30,
            rows: 20,
            speed: Speed::Normal,
            allow_diagonal: false,
            seed: None,
        }
    }
}
