//! Cross-linking for code fragments
//!
//! Replaces known header-include names and fully-qualified symbol names
//! inside `<code>` markup with hyperlink-bearing marker spans, driven by
//! static lookup tables. Runs through the protected rewrite primitive, so
//! spans established by the highlighter or by earlier link rules are never
//! disturbed, and re-running the linker on its own output is a no-op.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rewrite::{mark, ShieldedRule};
use crate::tables;

/// One lookup-table entry: a matchable name and the page it links to.
///
/// `name` is the raw matchable text (header names in their entity-encoded
/// form); `dest` is relative to the site's anchor directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub name: String,
    pub dest: String,
}

impl LinkEntry {
    pub fn new(name: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dest: dest.into(),
        }
    }
}

/// Home-link rewrite inside navigation headers: a fixed literal label
/// replaced by a link to the site's home page. Plain substitution, not
/// protected, since no highlighting precedes it there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeLink {
    pub label: String,
    pub target: String,
}

impl Default for HomeLink {
    fn default() -> Self {
        Self {
            label: tables::HOME_LABEL.to_string(),
            target: tables::HOME_TARGET.to_string(),
        }
    }
}

/// The linker's lookup tables. Header rules run before symbol rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTables {
    pub headers: Vec<LinkEntry>,
    pub symbols: Vec<LinkEntry>,
    pub home: HomeLink,
}

impl Default for LinkTables {
    fn default() -> Self {
        let entries = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|&(name, dest)| LinkEntry::new(name, dest))
                .collect()
        };
        Self {
            headers: entries(tables::HEADERS),
            symbols: entries(tables::SYMBOLS),
            home: HomeLink::default(),
        }
    }
}

struct LinkRule {
    rule: ShieldedRule,
    dest: String,
}

/// The linker pipeline: compiled header and symbol rules plus the home
/// rewrite. The base path is supplied per call, derived once per page.
pub struct Linker {
    rules: Vec<LinkRule>,
    home_rule: Regex,
    home: HomeLink,
}

impl Linker {
    /// Compile the pipeline from lookup tables.
    pub fn new(tables: &LinkTables) -> Result<Self, Error> {
        let mut rules = Vec::new();
        for entry in tables.headers.iter().chain(tables.symbols.iter()) {
            rules.push(LinkRule {
                rule: ShieldedRule::for_entry(&entry.name)?,
                dest: entry.dest.clone(),
            });
        }
        let home_pattern = regex::escape(&tables.home.label);
        let home_rule = Regex::new(&home_pattern).map_err(|source| Error::InvalidPattern {
            pattern: home_pattern,
            source,
        })?;
        Ok(Self {
            rules,
            home_rule,
            home: tables.home.clone(),
        })
    }

    /// Link every recognized header and symbol name in a code fragment.
    ///
    /// `base` is prefixed to every generated target.
    #[must_use]
    pub fn link(&self, fragment: &str, base: &str) -> String {
        self.rules.iter().fold(fragment.to_string(), |fragment, rule| {
            rule.rule.apply(&fragment, |m| {
                mark(&format!("<a href=\"{base}{}\">{m}</a>", rule.dest))
            })
        })
    }

    /// Rewrite the home label inside a navigation-header fragment.
    #[must_use]
    pub fn link_home(&self, fragment: &str, base: &str) -> String {
        let link = format!(
            "<a href=\"{base}{}\">{}</a>",
            self.home.target, self.home.label
        );
        self.home_rule
            .replace_all(fragment, regex::NoExpand(&link))
            .into_owned()
    }
}
