use std::path::PathBuf;

/// Combined declaration file read when no input is given
pub const DEFAULT_INPUT_PATH: &str = "examples/components.toml";

/// Directory that receives one file per component
pub const DEFAULT_OUTPUT_DIR: &str = "examples/split";

/// Where to read the combined file and where to put the split files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Combined component file
    pub input_path: PathBuf,
    /// Output directory, created (with parents) if missing
    pub output_dir: PathBuf,
}

impl SplitConfig {
    /// Create a config with explicit paths
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Override the input file
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Override the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Path a component named `name` is written to
    pub fn output_path_for(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.toml", name))
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = SplitConfig::default();
        assert_eq!(config.input_path, PathBuf::from("examples/components.toml"));
        assert_eq!(config.output_dir, PathBuf::from("examples/split"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = SplitConfig::default()
            .input_path("all.toml")
            .output_dir("out");

        assert_eq!(config.input_path, PathBuf::from("all.toml"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_output_path_for() {
        let config = SplitConfig::new("in.toml", "out/split");
        assert_eq!(
            config.output_path_for("alpha"),
            PathBuf::from("out/split").join("alpha.toml")
        );
    }
}
