use std::io::Write;

use anyhow::Context;

use docsearch_core::artifact::load_artifact;
use docsearch_core::config::{resolve_with_base, Settings};
use docsearch_text::SearchEngine;

/// Locate, read and index the artifact named by `settings.index.path`.
pub fn load_engine(settings: &Settings) -> anyhow::Result<SearchEngine> {
    let cwd = std::env::current_dir()?;
    let path = resolve_with_base(&cwd, &settings.index.path);
    let (file, artifact) = load_artifact(&path)
        .with_context(|| format!("loading search index from {}", path.display()))?;
    tracing::info!(artifact = %file.display(), documents = artifact.docs.len(), "read search index");
    let engine = SearchEngine::from_artifact(artifact, &settings.search)
        .with_context(|| format!("indexing {}", file.display()))?;
    Ok(engine)
}

pub fn query(engine: &SearchEngine, text: &str, limit: usize, out: &mut impl Write) -> anyhow::Result<()> {
    let hits = engine.search_hits(text, limit);
    writeln!(out, "Found {} results for: \"{}\"", hits.len(), text)?;
    for (i, hit) in hits.iter().enumerate() {
        writeln!(out, "{:>2}. score={} {} ({})", i + 1, hit.score, hit.title, hit.location)?;
        if !hit.snippet.is_empty() {
            writeln!(out, "    {}", hit.snippet)?;
        }
    }
    Ok(())
}

pub fn inspect(engine: &SearchEngine, top: usize, out: &mut impl Write) -> anyhow::Result<()> {
    let index = engine.index();
    let config = index.config();
    writeln!(out, "lang      : {}", config.lang.join(", "))?;
    writeln!(out, "separator : {}", config.separator)?;
    writeln!(out, "pipeline  : {}", config.pipeline.join(" -> "))?;
    writeln!(out, "documents : {}", index.len())?;
    writeln!(out, "terms     : {}", index.term_count())?;

    writeln!(out, "\nDocuments:")?;
    let mut last_page: Option<&str> = None;
    for doc in index.documents() {
        match doc.section() {
            Some(section) if last_page == Some(doc.page()) => writeln!(out, "    #{}  {}", section, doc.title)?,
            _ => writeln!(out, "  {}  {}", doc.location, doc.title)?,
        }
        last_page = Some(doc.page());
    }

    writeln!(out, "\nTop terms:")?;
    for (term, count) in index.top_terms(top) {
        writeln!(out, "  {:<20} {}", term, count)?;
    }
    Ok(())
}
