//! One input unit in, one rendered string (or report) out.
//!
//! [`display`] runs the whole pipeline: parse, reject empty groups, then
//! render with the configured format. Failures come back as a
//! [`DisplayError`], which [`DisplayError::report`] turns into the message
//! shown to the user.

use tracing::debug;

use crate::config::{OutputFormat, RenderConfig, ReportDetail};
use crate::encoding::parser::{parse, DecodeError};
use crate::encoding::validate::{check_groups, EmptyGroupError, USAGE_EXAMPLE};
use crate::render::{render_markup, render_text, RenderError};

/// Any per-unit failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    EmptyGroups(#[from] EmptyGroupError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

impl DisplayError {
    /// The user-facing report for this failure on `input`.
    ///
    /// Empty-group reports always list the offending indices and an example;
    /// decode and render reports only carry their cause when `detail` is
    /// [`ReportDetail::Verbose`].
    pub fn report(&self, input: &str, detail: ReportDetail) -> String {
        let input = input.trim();
        let (headline, cause) = match self {
            DisplayError::EmptyGroups(err) => {
                return format!("Invalid Input: {err}\n(ex: \"{USAGE_EXAMPLE}\")");
            }
            DisplayError::Decode(err) => (
                format!("Invalid Input: could not decode \"{input}\""),
                err.to_string(),
            ),
            DisplayError::Render(err) => (
                format!("Render Error: could not render \"{input}\""),
                err.to_string(),
            ),
        };
        match detail {
            ReportDetail::Terse => headline,
            ReportDetail::Verbose => format!("{headline}: {cause}"),
        }
    }
}

/// Parse, validate and render one unit of input.
pub fn display(input: &str, config: &RenderConfig) -> Result<String, DisplayError> {
    let encoding = parse(input)?;
    check_groups(&encoding)?;

    let separator = config.separator();
    let output = match config.format {
        OutputFormat::Text => render_text(&encoding, separator, config.max_width, config.tall)?,
        OutputFormat::Markup => render_markup(
            &encoding,
            separator,
            &config.markup_command,
            config.markup_environment,
        )?,
    };

    debug!(format = ?config.format, bytes = output.len(), "displayed unit");
    Ok(output)
}

/// [`display`], with failures turned into their report.
pub fn display_or_report(input: &str, config: &RenderConfig) -> Result<String, String> {
    display(input, config).map_err(|err| err.report(input, config.detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_pipeline() {
        let out = display("S1[2, 1] - S1[0]", &RenderConfig::new()).unwrap();
        assert_eq!(out, "(xx) - (1)\n x        ");
    }

    #[test]
    fn markup_pipeline() {
        let config = RenderConfig::new().with_format(OutputFormat::Markup);
        let out = display("S1[1]", &config).unwrap();
        assert_eq!(out, "\\left(\\tableau{~}\\right)");
    }

    #[test]
    fn empty_groups_checked_before_render() {
        // Group 0 would also fail to render; the empty group wins.
        let err = display("S1[] - 2", &RenderConfig::new()).unwrap_err();
        assert_eq!(err, DisplayError::EmptyGroups(EmptyGroupError { indices: vec![1] }));
    }

    #[test]
    fn report_single_empty_group() {
        let err = display("S1[3] -", &RenderConfig::new()).unwrap_err();
        assert_eq!(
            err.report("S1[3] -", ReportDetail::Terse),
            "Invalid Input: zero length group at index 1\n\
             (ex: \"S1[3] S2[1, 1] S3[2, 2] S4[1] - S1[3] S2[0] S3[1, 1] S4[1]\")"
        );
    }

    #[test]
    fn report_several_empty_groups() {
        let err = display("- S1[3] + +", &RenderConfig::new()).unwrap_err();
        let report = err.report("", ReportDetail::Verbose);
        assert!(report.starts_with("Invalid Input: zero length groups at indices [1, 2]\n"));
    }

    #[test]
    fn report_decode_terse_and_verbose() {
        let input = " S1[3, a] ";
        let err = display(input, &RenderConfig::new()).unwrap_err();
        assert_eq!(
            err.report(input, ReportDetail::Terse),
            "Invalid Input: could not decode \"S1[3, a]\""
        );
        assert_eq!(
            err.report(input, ReportDetail::Verbose),
            "Invalid Input: could not decode \"S1[3, a]\": \
             non-integer partition entry 'a' at position 7"
        );
    }

    #[test]
    fn report_render_error() {
        let err = display("S1[]", &RenderConfig::new()).unwrap_err();
        assert_eq!(
            err.report("S1[]", ReportDetail::Terse),
            "Render Error: could not render \"S1[]\""
        );
        assert_eq!(
            err.report("S1[]", ReportDetail::Verbose),
            "Render Error: could not render \"S1[]\": partition 0 of group 0 has no values"
        );
    }

    #[test]
    fn display_or_report_uses_config_detail() {
        let config = RenderConfig::new().with_detail(ReportDetail::Verbose);
        let report = display_or_report("S1[", &config).unwrap_err();
        assert!(report.contains("unbalanced bracket"));
    }
}
