//! Key-value resource format shared by pattern descriptions and presets
//!
//! A resource is a line-oriented text with `[section]` headers and `key=value`
//! pairs, the same framing the original pattern catalogs use. Reading is
//! tolerant: unrecognized lines, comments (`;` or `#`) and unknown keys are
//! ignored so that catalogs written by other tools keep loading.

use std::collections::BTreeMap;

use crate::io::error::{Result, invalid_parameter};

/// Parsed key-value resource grouped by section
#[derive(Debug, Clone, Default)]
pub struct Resource {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Resource {
    /// Create an empty resource
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse resource text
    ///
    /// Never fails; malformed lines are skipped. Keys appearing before any
    /// section header land in the unnamed section `""`.
    pub fn parse(text: &str) -> Self {
        let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        let mut current = String::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            // Section headers are whole lines; bracketed values stay on the
            // right-hand side of '=' and never reach this branch
            if trimmed.starts_with('[') && trimmed.ends_with(']') && !trimmed.contains('=') {
                let inner = trimmed
                    .get(1..trimmed.len() - 1)
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                current = inner;
                sections.entry(current.clone()).or_default();
                continue;
            }

            if let Some((key, value)) = trimmed.split_once('=') {
                sections
                    .entry(current.clone())
                    .or_default()
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { sections }
    }

    /// Look up a value by section and key
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    /// Look up an unsigned integer value
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is present but not a
    /// non-negative decimal integer
    pub fn get_integer(&self, section: &str, key: &'static str) -> Result<Option<usize>> {
        self.get(section, key)
            .map(|value| {
                value
                    .parse::<usize>()
                    .map_err(|err| invalid_parameter(key, &value, &err))
            })
            .transpose()
    }

    /// Look up a signed integer value
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is present but not a decimal
    /// integer
    pub fn get_signed(&self, section: &str, key: &'static str) -> Result<Option<i64>> {
        self.get(section, key)
            .map(|value| {
                value
                    .parse::<i64>()
                    .map_err(|err| invalid_parameter(key, &value, &err))
            })
            .transpose()
    }

    /// Look up a boolean value (`true`/`false`/`1`/`0`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is present but not a
    /// recognized boolean spelling
    pub fn get_flag(&self, section: &str, key: &'static str) -> Result<Option<bool>> {
        self.get(section, key)
            .map(|value| match value {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(invalid_parameter(key, &other, &"expected true/false/1/0")),
            })
            .transpose()
    }

    /// Set a value, creating the section as needed
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Render the resource back to text
    ///
    /// Sections and keys are emitted in sorted order so that saved files are
    /// stable across runs.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (section, keys) in &self.sections {
            if !section.is_empty() {
                out.push('[');
                out.push_str(section);
                out.push_str("]\n");
            }
            for (key, value) in keys {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}
