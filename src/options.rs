//! Configuration options for conversation extraction.
//!
//! The `Options` struct controls extraction and processing behavior. All
//! thresholds default to the values the pipeline was tuned with.

/// Configuration options for conversation extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use convoscrape::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_assistant: true,
///     include_images: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Include assistant turns in processed output.
    ///
    /// When `false` (the default) the Content Processor filters the
    /// conversation down to the user's own messages, applying a second
    /// heuristic pass over raw fallback text when no structured turns
    /// exist. This is a user-facing guarantee: assistant text must not
    /// leak through.
    ///
    /// Default: `false`
    pub include_assistant: bool,

    /// Collect image references from the page.
    ///
    /// Default: `false`
    pub include_images: bool,

    /// Minimum joined text length (characters) below which the
    /// orchestrator escalates through its fallback chain: whole-page
    /// visible text first, then a diagnostic placeholder turn.
    ///
    /// Default: `10`
    pub min_text_len: usize,

    /// Maximum number of images collected per extraction.
    ///
    /// Default: `10`
    pub max_images: usize,

    /// Minimum declared width/height (pixels) for a collected image.
    /// Images without declared dimensions are accepted, since a static
    /// document cannot report rendered size.
    ///
    /// Default: `50`
    pub min_image_dim: u32,

    /// Extra class/id substrings to skip during visible-text collection,
    /// on top of the built-in consent/banner denylist.
    ///
    /// Default: empty
    pub ignore_substrings: Vec<String>,

    /// Length (characters) above which a raw-text block must contain a
    /// user-command indicator word to survive the Processor's fallback
    /// filter.
    ///
    /// Default: `400`
    pub long_block_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_assistant: false,
            include_images: false,
            min_text_len: 10,
            max_images: 10,
            min_image_dim: 50,
            ignore_substrings: Vec::new(),
            long_block_len: 400,
        }
    }
}
