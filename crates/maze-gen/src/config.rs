/// Parameters of one maze generation.
///
/// The same configuration always yields the same board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Number of columns. Must be at least 1.
    pub width: i32,
    /// Number of rows. Must be at least 1.
    pub height: i32,
    /// Seed of the generator's random source.
    pub seed: u64,
    /// Whether to add extra passages so that some cells are joined by
    /// more than one route.
    pub multi_path: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            seed: 42,
            multi_path: false,
        }
    }
}

impl MazeConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_multi_path(mut self, multi_path: bool) -> Self {
        self.multi_path = multi_path;
        self
    }

    /// Number of cells, or 0 for invalid dimensions.
    pub fn cells(&self) -> usize {
        if self.width < 1 || self.height < 1 {
            return 0;
        }
        self.width as usize * self.height as usize
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: MazeConfig = serde_json::from_str(r#"{"width": 8, "multi_path": true}"#).unwrap();
        assert_eq!(c.width, 8);
        assert_eq!(c.height, 20);
        assert_eq!(c.seed, 42);
        assert!(c.multi_path);
    }
}
