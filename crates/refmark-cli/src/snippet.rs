//! `refmark snippet` - rewrite one markup fragment from stdin to stdout

use std::io::Read;

use anyhow::{Context, Result};
use refmark_core::{Highlighter, Linker, SiteConfig};

pub fn run(config: &SiteConfig, no_links: bool, no_highlight: bool, base: &str) -> Result<()> {
    let mut fragment = String::new();
    std::io::stdin()
        .read_to_string(&mut fragment)
        .context("cannot read fragment from stdin")?;

    print!("{}", rewrite(config, &fragment, no_links, no_highlight, base)?);
    Ok(())
}

fn rewrite(
    config: &SiteConfig,
    fragment: &str,
    no_links: bool,
    no_highlight: bool,
    base: &str,
) -> Result<String> {
    let mut fragment = fragment.to_string();
    if !no_highlight {
        fragment = Highlighter::new(&config.highlight)?.highlight(&fragment);
    }
    if !no_links {
        fragment = Linker::new(&config.link)?.link(&fragment, base);
    }
    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_runs_both_pipelines() {
        let out = rewrite(
            &SiteConfig::default(),
            "int x = iml::abs(-1);",
            false,
            false,
            "../",
        )
        .unwrap();
        assert!(out.contains("<span><font color=\"#2E64FE\">int</font></span>"));
        assert!(out.contains("<span><a href=\"../math/math/abs.html\">iml::abs</a></span>"));
    }

    #[test]
    fn test_no_links_keeps_symbols_bare() {
        let out = rewrite(&SiteConfig::default(), "iml::abs", true, false, "").unwrap();
        assert_eq!(out, "iml::abs");
    }

    #[test]
    fn test_no_highlight_keeps_keywords_bare() {
        let out = rewrite(&SiteConfig::default(), "return iml::abs;", false, true, "").unwrap();
        assert_eq!(
            out,
            "return <span><a href=\"math/math/abs.html\">iml::abs</a></span>;"
        );
    }
}
