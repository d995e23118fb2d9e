use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Top-level configuration from iconforge.yaml
///
/// Holds one entry per conversion to run; the binary drives the pipeline
/// once per entry, in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    #[serde(default = "default_conversions")]
    pub conversions: Vec<ConversionOptions>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            conversions: default_conversions(),
        }
    }
}

fn default_conversions() -> Vec<ConversionOptions> {
    vec![ConversionOptions::default()]
}

/// Options for a single conversion run.
///
/// Immutable once the pipeline starts; field names mirror the YAML keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Glob patterns selecting the source SVG files.
    #[serde(default = "default_source_files")]
    pub source_files: Vec<String>,

    /// Root directory for all generated output.
    #[serde(default = "default_output_directory")]
    pub output_directory: Utf8PathBuf,

    /// Folder under the output directory holding the per-icon modules.
    #[serde(default = "default_icons_folder_name")]
    pub icons_folder_name: String,

    /// Base name (no extension) of the barrel file re-exporting everything.
    #[serde(default = "default_barrel_file_name")]
    pub barrel_file_name: String,

    /// Name of the generated consumer-facing interface.
    #[serde(default = "default_interface_name")]
    pub interface_name: String,

    /// Name of the generated union type of icon keys.
    #[serde(default = "default_type_name")]
    pub type_name: String,

    /// Prefix prepended to generated file and variable names.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Base name of the model file; generation is skipped when unset.
    #[serde(default)]
    pub model_file_name: Option<String>,

    /// Extra directory receiving a copy of the model file.
    ///
    /// Only meaningful when `model_file_name` is set.
    #[serde(default)]
    pub additional_model_output_path: Option<Utf8PathBuf>,

    /// Emit one aggregate module bundling every icon constant.
    #[serde(default)]
    pub export_complete_icon_set: bool,

    /// Compile the generated sources and delete them afterwards.
    #[serde(default)]
    pub compile_sources: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            source_files: default_source_files(),
            output_directory: default_output_directory(),
            icons_folder_name: default_icons_folder_name(),
            barrel_file_name: default_barrel_file_name(),
            interface_name: default_interface_name(),
            type_name: default_type_name(),
            prefix: default_prefix(),
            model_file_name: None,
            additional_model_output_path: None,
            export_complete_icon_set: false,
            compile_sources: false,
        }
    }
}

impl ConversionOptions {
    /// Full path of the folder holding the per-icon modules.
    pub fn icons_folder_path(&self) -> Utf8PathBuf {
        self.output_directory.join(&self.icons_folder_name)
    }
}

fn default_source_files() -> Vec<String> {
    vec!["./*.svg".to_string()]
}

fn default_output_directory() -> Utf8PathBuf {
    Utf8PathBuf::from("./dist")
}

fn default_icons_folder_name() -> String {
    "build".to_string()
}

fn default_barrel_file_name() -> String {
    "index".to_string()
}

fn default_interface_name() -> String {
    "IconInterface".to_string()
}

fn default_type_name() -> String {
    "MyIconType".to_string()
}

fn default_prefix() -> String {
    "my-icon".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = ConversionOptions::default();
        assert_eq!(options.output_directory, Utf8PathBuf::from("./dist"));
        assert_eq!(options.icons_folder_name, "build");
        assert_eq!(options.barrel_file_name, "index");
        assert!(options.model_file_name.is_none());
        assert!(!options.export_complete_icon_set);
        assert!(!options.compile_sources);
    }

    #[test]
    fn test_config_default_has_one_conversion() {
        let config = ConversionConfig::default();
        assert_eq!(config.conversions.len(), 1);
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let yaml = r#"
conversions:
  - outputDirectory: ./out
    iconsFolderName: icons
    barrelFileName: main
    modelFileName: model
    exportCompleteIconSet: true
"#;
        let config: ConversionConfig = serde_yaml_ng::from_str(yaml).unwrap();
        let options = &config.conversions[0];
        assert_eq!(options.output_directory, Utf8PathBuf::from("./out"));
        assert_eq!(options.icons_folder_name, "icons");
        assert_eq!(options.barrel_file_name, "main");
        assert_eq!(options.model_file_name.as_deref(), Some("model"));
        assert!(options.export_complete_icon_set);
        // Unset keys fall back to defaults
        assert_eq!(options.prefix, "my-icon");
        assert!(!options.compile_sources);
    }

    #[test]
    fn test_icons_folder_path() {
        let options = ConversionOptions {
            output_directory: Utf8PathBuf::from("dist"),
            icons_folder_name: "icons".to_string(),
            ..Default::default()
        };
        assert_eq!(options.icons_folder_path(), Utf8PathBuf::from("dist/icons"));
    }
}
