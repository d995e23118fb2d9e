use camino::Utf8PathBuf;
use std::time::Duration;

/// One icon as produced by the definition provider.
///
/// Immutable downstream of discovery; the enumeration order of the
/// collection these arrive in is authoritative for every generated export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    /// Configured prefix, e.g. "md".
    pub prefix: String,

    /// Source file name without the `.svg` ending, e.g. "arrow-left".
    pub filename_without_ending: String,

    /// Sanitized identifier for the embedded constant, e.g. "mdArrowLeft".
    pub variable_name: String,

    /// Type annotation applied to the constant, e.g. "MyIconType".
    pub type_name: String,

    /// Minified SVG markup.
    pub data: String,
}

impl IconDefinition {
    /// Key the icon is addressed by in the generated union type,
    /// `"{prefix}-{filename}"`.
    pub fn icon_key(&self) -> String {
        format!("{}-{}", self.prefix, self.filename_without_ending)
    }

    /// Base name of the generated module, `"{prefix}-{filename}.icon"`.
    pub fn generated_file_name(&self) -> String {
        format!("{}.icon", self.icon_key())
    }
}

/// Result of a completed conversion run.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub icons_written: usize,
    pub complete_icon_set_written: bool,
    pub model_written: bool,
    pub sources_pruned: bool,
    pub output_directory: Utf8PathBuf,
    pub duration: Duration,
}

impl ConversionSummary {
    /// Get a summary string of what was generated
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} icon modules", self.icons_written)];

        if self.complete_icon_set_written {
            parts.push("complete icon set".to_string());
        }
        if self.model_written {
            parts.push("model file".to_string());
        }
        if self.sources_pruned {
            parts.push("compiled and pruned sources".to_string());
        }

        format!(
            "{} under {} in {:.2}s",
            parts.join(", "),
            self.output_directory,
            self.duration.as_secs_f32()
        )
    }
}
