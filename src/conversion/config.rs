//! Configuration options for a conversion run

/// Lossy WebP quality used for every conversion (0-100 scale)
pub const WEBP_QUALITY: f32 = 80.0;

/// What to do when two sources in one run map to the same `.webp` target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Keep the first target written and skip later sources
    #[default]
    Skip,
    /// Fail the file that would have been skipped
    Error,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Skip => "skip",
            CollisionPolicy::Error => "error",
        }
    }
}

/// Converter configuration options
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Keep going after a file fails instead of aborting the run
    pub continue_on_error: bool,
    /// Handling of same-stem sources
    pub collision: CollisionPolicy,
    /// Report what would be converted without decoding or writing
    pub dry_run: bool,
    /// Suppress per-file progress lines
    pub quiet: bool,
    /// Log skipped files and collisions
    pub verbose: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            continue_on_error: false,
            collision: CollisionPolicy::Skip,
            dry_run: false,
            quiet: false,
            verbose: false,
        }
    }
}

impl ConverterConfig {
    /// Default configuration with progress output turned off
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose {
            return Err("--quiet and --verbose cannot be used together".to_string());
        }
        Ok(())
    }
}
