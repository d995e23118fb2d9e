use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use regex::Regex;
use std::fs;
use thiserror::Error;

use crate::models::{ConversionOptions, IconDefinition};

/// Errors that can occur during icon discovery
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid source pattern '{0}': {1}")]
    InvalidPattern(String, glob::PatternError),

    #[error("Source path is not valid UTF-8: {0:?}")]
    NonUtf8Path(std::path::PathBuf),
}

/// Produces the ordered icon definition collection for one conversion run.
///
/// The order of the returned collection is authoritative: every generated
/// export downstream follows it.
pub trait IconDefinitionProvider {
    fn provide_definitions(&self, options: &ConversionOptions) -> Result<Vec<IconDefinition>>;
}

/// Provider that reads SVG files matched by the configured source patterns.
///
/// Markup is minified before embedding: XML comments are stripped and
/// whitespace between tags is collapsed. Identifiers are derived from the
/// prefix and the kebab-case file name.
pub struct SvgFileProvider {
    /// Regex for XML comments, including multi-line ones
    comment_pattern: Regex,

    /// Regex for whitespace runs between adjacent tags
    between_tags_pattern: Regex,
}

impl SvgFileProvider {
    /// Create a new SvgFileProvider with compiled regex patterns
    pub fn new() -> Self {
        Self {
            comment_pattern: Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"),
            between_tags_pattern: Regex::new(r">\s+<").expect("Invalid between-tags regex"),
        }
    }

    /// Resolve the configured source patterns to a sorted list of SVG paths.
    ///
    /// Sorting keeps discovery order independent of filesystem enumeration
    /// order, so repeated runs produce identical output.
    fn resolve_sources(&self, patterns: &[String]) -> Result<Vec<Utf8PathBuf>> {
        let mut paths = Vec::new();

        for pattern in patterns {
            let matches = glob::glob(pattern)
                .map_err(|e| ProviderError::InvalidPattern(pattern.clone(), e))?;

            for entry in matches {
                let path = entry.with_context(|| format!("Failed to read glob entry for '{pattern}'"))?;
                let path = Utf8PathBuf::from_path_buf(path)
                    .map_err(ProviderError::NonUtf8Path)?;
                if path.extension() == Some("svg") && path.is_file() {
                    paths.push(path);
                }
            }
        }

        paths.sort();
        paths.dedup();
        Ok(paths)
    }

    /// Strip comments and collapse inter-tag whitespace in SVG markup.
    fn minify(&self, markup: &str) -> String {
        let without_comments = self.comment_pattern.replace_all(markup, "");
        self.between_tags_pattern
            .replace_all(&without_comments, "><")
            .trim()
            .to_string()
    }
}

impl Default for SvgFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IconDefinitionProvider for SvgFileProvider {
    fn provide_definitions(&self, options: &ConversionOptions) -> Result<Vec<IconDefinition>> {
        let paths = self.resolve_sources(&options.source_files)?;
        let mut definitions = Vec::with_capacity(paths.len());

        for path in paths {
            let markup = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read SVG source: {path}"))?;

            let filename_without_ending = path
                .file_stem()
                .unwrap_or_default()
                .to_string();

            let variable_name = format!(
                "{}{}",
                to_camel_case(&options.prefix),
                to_pascal_case(&filename_without_ending)
            );

            tracing::debug!("discovered icon: {path}");

            definitions.push(IconDefinition {
                prefix: options.prefix.clone(),
                filename_without_ending,
                variable_name,
                type_name: options.type_name.clone(),
                data: self.minify(&markup),
            });
        }

        Ok(definitions)
    }
}

/// Convert a kebab-case (or otherwise delimited) name to camelCase.
///
/// Any non-alphanumeric character acts as a word separator and is dropped.
pub fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
        } else if result.is_empty() {
            result.extend(c.to_lowercase());
            capitalize_next = false;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a delimited name to PascalCase.
pub fn to_pascal_case(name: &str) -> String {
    let camel = to_camel_case(name);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => camel,
    }
}
