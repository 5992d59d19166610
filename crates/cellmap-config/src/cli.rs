//! Command-line argument parsing.

use clap::Parser;

use crate::Config;

/// cellmap command-line arguments.
///
/// Every flag is optional; unset flags keep the value from [`Config::default`].
#[derive(Parser, Debug, Default)]
#[command(name = "cellmap", about = "Generate a cave-like map with cellular automata")]
pub struct CliArgs {
    /// Map width in cells.
    #[arg(long)]
    pub width: Option<usize>,

    /// Map height in cells.
    #[arg(long)]
    pub height: Option<usize>,

    /// Initial probability of a cell being filled (0.0 - 1.0).
    #[arg(long)]
    pub fill_probability: Option<f64>,

    /// Number of smoothing iterations.
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Ignore the fill probability and start from a 50% random map.
    #[arg(long)]
    pub randomize_initial_map: Option<bool>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Glyph for filled cells.
    #[arg(long)]
    pub filled_glyph: Option<char>,

    /// Glyph for empty cells.
    #[arg(long)]
    pub empty_glyph: Option<char>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    /// Apply CLI overrides to the config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.map.width = w;
        }
        if let Some(h) = args.height {
            self.map.height = h;
        }
        if let Some(p) = args.fill_probability {
            self.map.fill_probability = p;
        }
        if let Some(n) = args.iterations {
            self.map.iterations = n;
        }
        if let Some(r) = args.randomize_initial_map {
            self.map.randomize_initial_map = r;
        }
        if let Some(seed) = args.seed {
            self.map.seed = Some(seed);
        }
        if let Some(c) = args.filled_glyph {
            self.render.filled_glyph = c;
        }
        if let Some(c) = args.empty_glyph {
            self.render.empty_glyph = c;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(80),
            iterations: Some(0),
            seed: Some(7),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.map.width, 80);
        assert_eq!(config.map.iterations, 0);
        assert_eq!(config.map.seed, Some(7));
        // Non-overridden fields retain defaults
        assert_eq!(config.map.height, 25);
        assert_eq!(config.map.fill_probability, 0.45);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "cellmap",
            "--width",
            "10",
            "--fill-probability",
            "0.3",
            "--randomize-initial-map",
            "false",
            "--filled-glyph",
            "@",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.width, Some(10));
        assert_eq!(args.fill_probability, Some(0.3));
        assert_eq!(args.randomize_initial_map, Some(false));
        assert_eq!(args.filled_glyph, Some('@'));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.height, None);
    }

    #[test]
    fn test_negative_iterations_rejected_at_parse() {
        let result = CliArgs::try_parse_from(["cellmap", "--iterations", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_width_rejected() {
        assert!(CliArgs::try_parse_from(["cellmap", "--width", "wide"]).is_err());
    }
}
