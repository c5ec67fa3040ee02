use crate::config;
use crate::options::{Filter, NamespaceStyle, PartialOptions};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Embed files into C/C++ headers as byte arrays")]
pub struct Cli {
    /// Input file or directory of build artifacts
    pub input: PathBuf,
    /// Output directory (defaults to writing next to the inputs)
    pub output: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target language: `c` or `c++`
    #[arg(short, long)]
    pub language: Option<String>,

    /// Namespace shared by all generated headers
    #[arg(long)]
    pub top_level_namespace: Option<String>,

    /// How the top level namespace is nested (C++ only)
    #[arg(long, value_enum)]
    pub namespace_style: Option<NamespaceStyle>,

    /// Declare `data`/`length` as `const` instead of `constexpr const` (C++ only)
    #[arg(long)]
    pub no_constexpr: bool,

    /// Line to put at the top of every header (repeatable)
    #[arg(long)]
    pub prepend: Vec<String>,

    /// Header to `#include`, with its `<>` or quotes (repeatable)
    #[arg(long)]
    pub include: Vec<String>,

    /// Element type of the data array
    #[arg(long)]
    pub data_type: Option<String>,

    /// Type of the length constant
    #[arg(long)]
    pub length_type: Option<String>,

    /// Suffix appended to each artifact name
    #[arg(long)]
    pub header_extension: Option<String>,

    /// Only embed files whose name matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Skip files whose name matches this regex
    #[arg(long)]
    pub exclude: Option<String>,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options given as flags; unset flags stay `None`.
    pub fn partial_options(&self) -> Result<PartialOptions> {
        if let Some(ext) = &self.header_extension {
            config::check_header_extension(ext)?;
        }
        let filter = config::pattern_filter(self.filter.as_deref(), self.exclude.as_deref())?;
        let non_empty = |v: &Vec<String>| (!v.is_empty()).then(|| v.clone());

        Ok(PartialOptions {
            language: self.language.clone(),
            top_level_namespace: self.top_level_namespace.clone(),
            namespace_style: self.namespace_style,
            constexpr: self.no_constexpr.then_some(false),
            namespace: None,
            prepend: non_empty(&self.prepend),
            include: non_empty(&self.include),
            data_type: self.data_type.clone(),
            length_type: self.length_type.clone(),
            header_extension: self.header_extension.clone(),
            filter: filter.map(|f| Box::new(f) as Box<dyn Filter>),
        })
    }
}
