//! Rendering configuration.

// ---------------------------------------------------------------------------
// OutputFormat / ReportDetail
// ---------------------------------------------------------------------------

/// Which renderer produces the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text glyphs.
    #[default]
    Text,
    /// LaTeX tableau markup.
    Markup,
}

impl OutputFormat {
    /// Separator placed between partitions when none is configured.
    pub fn default_separator(self) -> &'static str {
        match self {
            OutputFormat::Text => ", ",
            OutputFormat::Markup => ",\\, ",
        }
    }
}

/// How much of a failure's cause is included in its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportDetail {
    /// One-line message naming the failing input.
    #[default]
    Terse,
    /// The terse message followed by the underlying error.
    Verbose,
}

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Default markup command (`\tableau`, from the youngtab package).
pub const DEFAULT_MARKUP_COMMAND: &str = "tableau";

/// Configuration for rendering one input unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Renderer choice.
    pub format: OutputFormat,
    /// Separator between partitions. `None` uses the format's default.
    pub separator: Option<String>,
    /// Full-height parentheses in text output.
    pub tall: bool,
    /// Markup command name, without a leading backslash.
    pub markup_command: String,
    /// Emit markup as an environment instead of a command.
    pub markup_environment: bool,
    /// Wrapping width for text output. `None` disables wrapping.
    pub max_width: Option<usize>,
    /// Detail level of failure reports.
    pub detail: ReportDetail,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            separator: None,
            tall: false,
            markup_command: DEFAULT_MARKUP_COMMAND.to_string(),
            markup_environment: false,
            max_width: None,
            detail: ReportDetail::Terse,
        }
    }
}

impl RenderConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format (builder).
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the partition separator (builder).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set full-height parentheses (builder).
    pub fn with_tall(mut self, tall: bool) -> Self {
        self.tall = tall;
        self
    }

    /// Set the markup command (builder). A leading `\` is stripped.
    pub fn with_markup_command(mut self, command: impl AsRef<str>) -> Self {
        let command = command.as_ref();
        self.markup_command = command.strip_prefix('\\').unwrap_or(command).to_string();
        self
    }

    /// Set the markup environment form (builder).
    pub fn with_markup_environment(mut self, environment: bool) -> Self {
        self.markup_environment = environment;
        self
    }

    /// Set the wrapping width (builder).
    pub fn with_max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the report detail (builder).
    pub fn with_detail(mut self, detail: ReportDetail) -> Self {
        self.detail = detail;
        self
    }

    /// The configured separator, or the format's default.
    pub fn separator(&self) -> &str {
        self.separator
            .as_deref()
            .unwrap_or_else(|| self.format.default_separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RenderConfig::new();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.separator(), ", ");
        assert!(!config.tall);
        assert_eq!(config.markup_command, "tableau");
        assert!(!config.markup_environment);
        assert_eq!(config.max_width, None);
        assert_eq!(config.detail, ReportDetail::Terse);
    }

    #[test]
    fn markup_default_separator() {
        let config = RenderConfig::new().with_format(OutputFormat::Markup);
        assert_eq!(config.separator(), ",\\, ");
    }

    #[test]
    fn explicit_separator_wins() {
        let config = RenderConfig::new()
            .with_format(OutputFormat::Markup)
            .with_separator(" ; ");
        assert_eq!(config.separator(), " ; ");
    }

    #[test]
    fn markup_command_strips_backslash() {
        let config = RenderConfig::new().with_markup_command("\\ytableau");
        assert_eq!(config.markup_command, "ytableau");
        let config = RenderConfig::new().with_markup_command("young");
        assert_eq!(config.markup_command, "young");
    }

    #[test]
    fn builder_chain() {
        let config = RenderConfig::new()
            .with_tall(true)
            .with_max_width(Some(80))
            .with_markup_environment(true)
            .with_detail(ReportDetail::Verbose);
        assert!(config.tall);
        assert_eq!(config.max_width, Some(80));
        assert!(config.markup_environment);
        assert_eq!(config.detail, ReportDetail::Verbose);
    }
}
