//! JSON configuration file.
//!
//! ```json
//! {
//!   "language": "c++",
//!   "topLevelNamespace": "web",
//!   "topLevelNamespaceStyle": "legacy",
//!   "prepend": ["#pragma once"],
//!   "include": ["<cstdint>"],
//!   "dataType": "uint8_t",
//!   "filter": "\\.(js|css|html)$"
//! }
//! ```

use crate::options::{Filter, NamespaceStyle, PartialOptions, PatternFilter};
use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub language: Option<String>,
    pub top_level_namespace: Option<String>,
    pub top_level_namespace_style: Option<NamespaceStyle>,
    pub constexpr: Option<bool>,
    pub prepend: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub data_type: Option<String>,
    pub length_type: Option<String>,
    pub header_extension: Option<String>,
    /// Regex a file name must match.
    pub filter: Option<String>,
    /// Regex a file name must not match.
    pub exclude: Option<String>,
}

pub fn load_from_json(json: &str) -> Result<ConfigFile> {
    serde_json::from_str(json).context("Invalid configuration JSON")
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config file");
    load_from_json(&json).with_context(|| format!("Parsing {}", path.display()))
}

/// Compile the optional include/exclude patterns into a filter.
pub fn pattern_filter(
    include: Option<&str>,
    exclude: Option<&str>,
) -> Result<Option<PatternFilter>> {
    if include.is_none() && exclude.is_none() {
        return Ok(None);
    }
    let compile = |pattern: &str| {
        Regex::new(pattern).with_context(|| format!("Invalid pattern `{pattern}`"))
    };
    Ok(Some(PatternFilter {
        include: include.map(compile).transpose()?,
        exclude: exclude.map(compile).transpose()?,
    }))
}

pub fn check_header_extension(ext: &str) -> Result<()> {
    if !ext.starts_with('.') {
        bail!("header extension `{ext}` must start with `.`");
    }
    Ok(())
}

impl ConfigFile {
    pub fn into_partial(self) -> Result<PartialOptions> {
        if let Some(ext) = &self.header_extension {
            check_header_extension(ext)?;
        }
        let filter = pattern_filter(self.filter.as_deref(), self.exclude.as_deref())?;

        Ok(PartialOptions {
            language: self.language,
            top_level_namespace: self.top_level_namespace,
            namespace_style: self.top_level_namespace_style,
            constexpr: self.constexpr,
            namespace: None,
            prepend: self.prepend,
            include: self.include,
            data_type: self.data_type,
            length_type: self.length_type,
            header_extension: self.header_extension,
            filter: filter.map(|f| Box::new(f) as Box<dyn Filter>),
        })
    }
}
