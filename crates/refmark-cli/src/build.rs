//! `refmark build` - rewrite a rendered documentation tree in place

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use refmark_core::page::base_path;
use refmark_core::{PageRewriter, SiteConfig};
use tracing::{debug, info, warn};

/// What happened to one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Changed,
    Unchanged,
    Skipped,
}

pub fn run(config: &SiteConfig, dir: &Path, check: bool, base: Option<&str>) -> Result<()> {
    let rewriter = PageRewriter::new(config)?;
    let pages = collect_pages(dir)?;
    if pages.is_empty() {
        warn!("no HTML pages under {}", dir.display());
        return Ok(());
    }

    let mut changed = 0usize;
    let mut skipped = 0usize;
    for page in &pages {
        match rewrite_page(&rewriter, page, check, base)? {
            Outcome::Changed => changed += 1,
            Outcome::Unchanged => {}
            Outcome::Skipped => skipped += 1,
        }
    }

    let verb = if check { "would change" } else { "rewritten" };
    println!(
        "{changed} of {} page(s) {verb}, {skipped} skipped",
        pages.len()
    );
    if check && changed > 0 {
        bail!("{changed} page(s) need rewriting");
    }
    Ok(())
}

/// All HTML pages under the tree, in a stable order.
fn collect_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for ext in ["html", "htm"] {
        let pattern = dir.join(format!("**/*.{ext}"));
        let pattern = pattern.to_string_lossy();
        let entries =
            glob::glob(&pattern).with_context(|| format!("invalid glob pattern {pattern}"))?;
        for entry in entries {
            pages.push(entry.context("cannot walk documentation tree")?);
        }
    }
    pages.sort();
    Ok(pages)
}

fn rewrite_page(
    rewriter: &PageRewriter,
    path: &Path,
    check: bool,
    base: Option<&str>,
) -> Result<Outcome> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;

    let base = match base {
        Some(base) => base.to_string(),
        None => {
            let location = path.to_string_lossy().replace('\\', "/");
            match base_path(&location, rewriter.anchor()) {
                Some(base) => base,
                None => {
                    warn!(
                        "{}: no `{}` segment in path, page skipped",
                        path.display(),
                        rewriter.anchor()
                    );
                    return Ok(Outcome::Skipped);
                }
            }
        }
    };

    let rewritten = rewriter.rewrite(&text, &base);
    if rewritten == text {
        debug!("{}: up to date", path.display());
        return Ok(Outcome::Unchanged);
    }

    if check {
        info!("{}: needs rewriting", path.display());
    } else {
        fs::write(path, rewritten).with_context(|| format!("cannot write {}", path.display()))?;
        info!("{}: rewritten", path.display());
    }
    Ok(Outcome::Changed)
}
