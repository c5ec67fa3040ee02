//! The functional core: filter → encode → render, one artifact at a time.
pub mod encoder;

use crate::bundle::{ArtifactSource, Sink};
use crate::model::{Artifact, RenderedHeader};
use crate::options::Options;
use crate::writer;
use anyhow::{Context, Result};

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub seen: usize,
    pub emitted: usize,
    pub skipped: usize,
}

/// Header for a single artifact, or `None` when the filter rejects it.
pub fn render_artifact(options: &Options, artifact: &Artifact) -> Option<RenderedHeader> {
    if !options.filter.accept(&artifact.name) {
        tracing::debug!(artifact = %artifact.name, "filtered out");
        return None;
    }

    let data = encoder::encode(&artifact.content);
    Some(RenderedHeader {
        derived_name: format!("{}{}", artifact.name, options.header_extension),
        text: writer::render_file(options, &artifact.name, data),
    })
}

/// Headers for every accepted artifact, in input order.
pub fn generate(options: &Options, artifacts: &[Artifact]) -> Vec<RenderedHeader> {
    artifacts
        .iter()
        .filter_map(|artifact| render_artifact(options, artifact))
        .collect()
}

/// Pull artifacts from `source` and push one header per accepted artifact to `sink`.
pub fn run(options: &Options, source: &dyn ArtifactSource, sink: &mut dyn Sink) -> Result<Summary> {
    let artifacts = source.list_artifacts().context("Listing artifacts")?;
    tracing::info!(count = artifacts.len(), language = options.language.tag(), "generating headers");

    let mut summary = Summary {
        seen: artifacts.len(),
        ..Summary::default()
    };

    for artifact in &artifacts {
        let Some(header) = render_artifact(options, artifact) else {
            summary.skipped += 1;
            continue;
        };
        sink.emit(&header.derived_name, &header.text)
            .with_context(|| format!("Emitting {}", header.derived_name))?;
        summary.emitted += 1;
    }

    tracing::info!(emitted = summary.emitted, skipped = summary.skipped, "done");
    Ok(summary)
}
