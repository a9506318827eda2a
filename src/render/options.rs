//! Rendering options and configuration.

/// Options for converting a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Rewrite inline emphasis markers (`**`, `*`, `~~`)
    pub inline_formatting: bool,

    /// Normalize input lines to Unicode NFC before classification
    pub normalize_unicode: bool,

    /// Terminator written after every output line
    pub line_ending: LineEnding,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable inline emphasis rewriting.
    pub fn with_inline(mut self, enabled: bool) -> Self {
        self.inline_formatting = enabled;
        self
    }

    /// Enable or disable Unicode normalization of input lines.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Set the output line terminator.
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            inline_formatting: true,
            normalize_unicode: false,
            line_ending: LineEnding::Lf,
        }
    }
}

/// Output line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}
