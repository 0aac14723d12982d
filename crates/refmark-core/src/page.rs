//! Page-level rewriting
//!
//! The pipelines operate on element content, not whole documents. This
//! module supplies the glue: locating the designated elements in a rendered
//! page, threading their inner markup through the pipelines, and splicing
//! the results back. Elements are found textually, first open tag to first
//! matching close tag; the surrounding document structure is never parsed.

use regex::Regex;

use crate::config::SiteConfig;
use crate::error::Error;
use crate::highlight::Highlighter;
use crate::link::Linker;

/// Opening tag of an element carrying the `cpp_code` class (highlighter
/// input). The tag name is captured so the matching close tag can be found.
const SNIPPET_OPEN: &str =
    r#"<(?P<tag>[A-Za-z][A-Za-z0-9]*)\b[^>]*\bclass\s*=\s*"[^"]*\bcpp_code\b[^"]*"[^>]*>"#;
/// Opening tag of an inline-code element (linker input).
const CODE_OPEN: &str = r"<(?P<tag>code)\b[^>]*>";
/// Opening tag of a navigation-header element (home-link input).
const HEADER_OPEN: &str = r"<(?P<tag>header)\b[^>]*>";

/// Derive the base path for a page: the `/`-separated segments of its
/// location up to and including the last occurrence of the anchor segment,
/// `/`-terminated. Returns `None` when the anchor does not appear.
#[must_use]
pub fn base_path(page: &str, anchor: &str) -> Option<String> {
    let segments: Vec<&str> = page.split('/').collect();
    let idx = segments.iter().rposition(|s| *s == anchor)?;
    let mut base = segments[..=idx].join("/");
    base.push('/');
    Some(base)
}

/// Rewrite the inner markup of every element matched by `open`, leaving the
/// rest of the page untouched. An opening tag with no matching close tag is
/// copied through as ordinary text.
fn rewrite_elements(page: &str, open: &Regex, mut rewrite: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(page.len());
    let mut rest = page;

    while let Some(caps) = open.captures(rest) {
        let m = caps.get(0).unwrap();
        let close = format!("</{}>", &caps["tag"]);
        let body_start = m.end();
        match rest[body_start..].find(&close) {
            Some(body_len) => {
                out.push_str(&rest[..body_start]);
                out.push_str(&rewrite(&rest[body_start..body_start + body_len]));
                out.push_str(&close);
                rest = &rest[body_start + body_len + close.len()..];
            }
            None => {
                out.push_str(&rest[..body_start]);
                rest = &rest[body_start..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Rewrites whole pages: highlights `cpp_code` snippets, links `<code>`
/// content, and rewrites the home label in `<header>` elements.
pub struct PageRewriter {
    highlighter: Highlighter,
    linker: Linker,
    snippet_open: Regex,
    code_open: Regex,
    header_open: Regex,
    anchor: String,
}

impl PageRewriter {
    /// Compile both pipelines from a site configuration.
    pub fn new(config: &SiteConfig) -> Result<Self, Error> {
        let selector = |pattern: &str| {
            Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        };
        Ok(Self {
            highlighter: Highlighter::new(&config.highlight)?,
            linker: Linker::new(&config.link)?,
            snippet_open: selector(SNIPPET_OPEN)?,
            code_open: selector(CODE_OPEN)?,
            header_open: selector(HEADER_OPEN)?,
            anchor: config.anchor.clone(),
        })
    }

    /// The anchor segment used for base-path derivation.
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Rewrite one page. `base` is prefixed to every generated link target.
    #[must_use]
    pub fn rewrite(&self, page: &str, base: &str) -> String {
        let page = rewrite_elements(page, &self.snippet_open, |fragment| {
            self.highlighter.highlight(fragment)
        });
        let page = rewrite_elements(&page, &self.code_open, |fragment| {
            self.linker.link(fragment, base)
        });
        rewrite_elements(&page, &self.header_open, |fragment| {
            self.linker.link_home(fragment, base)
        })
    }

    /// Direct access to the highlighter, for fragment-level use.
    #[must_use]
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Direct access to the linker, for fragment-level use.
    #[must_use]
    pub fn linker(&self) -> &Linker {
        &self.linker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> PageRewriter {
        PageRewriter::new(&SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_base_path_from_url() {
        let base = base_path("https://imath.example/docs/contents/math/sqrt.html", "contents");
        assert_eq!(base.as_deref(), Some("https://imath.example/docs/contents/"));
    }

    #[test]
    fn test_base_path_uses_last_anchor_occurrence() {
        let base = base_path("a/contents/b/contents/c.html", "contents");
        assert_eq!(base.as_deref(), Some("a/contents/b/contents/"));
    }

    #[test]
    fn test_base_path_missing_anchor() {
        assert_eq!(base_path("a/b/c.html", "contents"), None);
    }

    #[test]
    fn test_snippet_element_is_highlighted() {
        let page = "<pre class=\"cpp_code\">int x;</pre>";
        let out = rewriter().rewrite(page, "");
        assert_eq!(
            out,
            "<pre class=\"cpp_code\"><span><font color=\"#2E64FE\">int</font></span> x;</pre>"
        );
    }

    #[test]
    fn test_code_element_is_linked() {
        let page = "<p>see <code>iml::abs</code></p>";
        let out = rewriter().rewrite(page, "../");
        assert_eq!(
            out,
            "<p>see <code><span><a href=\"../math/math/abs.html\">iml::abs</a></span></code></p>"
        );
    }

    #[test]
    fn test_header_home_link() {
        let page = "<header>[ホーム] | reference</header>";
        let out = rewriter().rewrite(page, "base/");
        assert_eq!(
            out,
            "<header><a href=\"base/top.html\">[ホーム]</a> | reference</header>"
        );
    }

    #[test]
    fn test_text_outside_elements_untouched() {
        let page = "<p>int iml::abs</p>";
        assert_eq!(rewriter().rewrite(page, ""), page);
    }

    #[test]
    fn test_unclosed_element_copied_through() {
        let page = "<code>iml::abs";
        assert_eq!(rewriter().rewrite(page, ""), page);
    }

    #[test]
    fn test_highlighted_snippet_survives_linking() {
        // A <code class="cpp_code"> element goes through both pipelines;
        // the linker must not disturb highlighter spans.
        let page = "<code class=\"cpp_code\">int x; iml::abs(x);</code>";
        let out = rewriter().rewrite(page, "");
        assert!(out.contains("<span><font color=\"#2E64FE\">int</font></span>"));
        assert!(out.contains("<span><a href=\"math/math/abs.html\">iml::abs</a></span>"));
    }
}
