//! Generator options and the resolver that fills in defaults.
pub mod strategy;

pub use strategy::{AcceptAll, Filter, Namer, PatternFilter, Sanitize};

use serde::Deserialize;
use std::fmt;

pub const DEFAULT_DATA_TYPE: &str = "unsigned char";
pub const DEFAULT_LENGTH_TYPE: &str = "unsigned int";
pub const DEFAULT_HEADER_EXTENSION: &str = ".h";

/// How the top level namespace and the per-file namespace are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum NamespaceStyle {
    /// `namespace top { namespace file { … } }`
    #[serde(rename = "legacy")]
    #[value(name = "legacy")]
    Legacy,
    /// `namespace top::file { … }`
    #[default]
    #[serde(rename = "c++17")]
    #[value(name = "c++17")]
    Cpp17,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CppOptions {
    pub namespace_style: NamespaceStyle,
    pub constexpr: bool,
}

impl Default for CppOptions {
    fn default() -> Self {
        Self {
            namespace_style: NamespaceStyle::Cpp17,
            constexpr: true,
        }
    }
}

/// Target dialect. C++ carries its own knobs, C has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp(CppOptions),
}

impl Language {
    pub fn tag(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp(_) => "c++",
        }
    }
}

/// Fully resolved options. Read-only for the whole run.
pub struct Options {
    pub language: Language,
    pub top_level_namespace: Option<String>,
    pub namespace: Box<dyn Namer>,
    pub prepend: Vec<String>,
    pub include: Vec<String>,
    pub data_type: String,
    pub length_type: String,
    pub header_extension: String,
    pub filter: Box<dyn Filter>,
}

impl Options {
    /// Top level namespace, with an empty string counting as unset.
    pub fn top_level_namespace(&self) -> Option<&str> {
        self.top_level_namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("language", &self.language)
            .field("top_level_namespace", &self.top_level_namespace)
            .field("prepend", &self.prepend)
            .field("include", &self.include)
            .field("data_type", &self.data_type)
            .field("length_type", &self.length_type)
            .field("header_extension", &self.header_extension)
            .finish_non_exhaustive()
    }
}

/// User supplied options. Every field may be left out.
///
/// `language` is kept as the raw tag so the resolver can apply its fallback;
/// `namespace_style` and `constexpr` are ignored unless the tag is `c++`.
#[derive(Default)]
pub struct PartialOptions {
    pub language: Option<String>,
    pub top_level_namespace: Option<String>,
    pub namespace_style: Option<NamespaceStyle>,
    pub constexpr: Option<bool>,
    pub namespace: Option<Box<dyn Namer>>,
    pub prepend: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub data_type: Option<String>,
    pub length_type: Option<String>,
    pub header_extension: Option<String>,
    pub filter: Option<Box<dyn Filter>>,
}

impl fmt::Debug for PartialOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialOptions")
            .field("language", &self.language)
            .field("top_level_namespace", &self.top_level_namespace)
            .field("namespace_style", &self.namespace_style)
            .field("constexpr", &self.constexpr)
            .field("prepend", &self.prepend)
            .field("include", &self.include)
            .field("data_type", &self.data_type)
            .field("length_type", &self.length_type)
            .field("header_extension", &self.header_extension)
            .finish_non_exhaustive()
    }
}

impl PartialOptions {
    pub fn c() -> Self {
        Self {
            language: Some("c".into()),
            ..Self::default()
        }
    }

    pub fn cpp() -> Self {
        Self {
            language: Some("c++".into()),
            ..Self::default()
        }
    }

    /// Field-wise merge; values set in `other` win.
    pub fn merge(self, other: PartialOptions) -> PartialOptions {
        PartialOptions {
            language: other.language.or(self.language),
            top_level_namespace: other.top_level_namespace.or(self.top_level_namespace),
            namespace_style: other.namespace_style.or(self.namespace_style),
            constexpr: other.constexpr.or(self.constexpr),
            namespace: other.namespace.or(self.namespace),
            prepend: other.prepend.or(self.prepend),
            include: other.include.or(self.include),
            data_type: other.data_type.or(self.data_type),
            length_type: other.length_type.or(self.length_type),
            header_extension: other.header_extension.or(self.header_extension),
            filter: other.filter.or(self.filter),
        }
    }
}

/// Fill every missing field with its default.
///
/// Never fails: a missing or unknown language tag falls back to C.
pub fn resolve(partial: PartialOptions) -> Options {
    let language = match partial.language.as_deref() {
        Some("c") => Language::C,
        Some("c++") => {
            let defaults = CppOptions::default();
            Language::Cpp(CppOptions {
                namespace_style: partial.namespace_style.unwrap_or(defaults.namespace_style),
                constexpr: partial.constexpr.unwrap_or(defaults.constexpr),
            })
        }
        Some(other) => {
            tracing::warn!(language = other, "unknown language, falling back to c");
            Language::C
        }
        None => Language::C,
    };

    Options {
        language,
        top_level_namespace: partial.top_level_namespace,
        namespace: partial.namespace.unwrap_or_else(|| Box::new(Sanitize)),
        prepend: partial.prepend.unwrap_or_default(),
        include: partial.include.unwrap_or_default(),
        data_type: partial
            .data_type
            .unwrap_or_else(|| DEFAULT_DATA_TYPE.to_owned()),
        length_type: partial
            .length_type
            .unwrap_or_else(|| DEFAULT_LENGTH_TYPE.to_owned()),
        header_extension: partial
            .header_extension
            .unwrap_or_else(|| DEFAULT_HEADER_EXTENSION.to_owned()),
        filter: partial.filter.unwrap_or_else(|| Box::new(AcceptAll)),
    }
}
