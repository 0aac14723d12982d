//! Syntax highlighting for C++ code fragments
//!
//! Classifies substrings of an HTML-escaped code fragment into lexical
//! categories and wraps each one in a colored marker span. Categories are
//! applied in a fixed priority order; each rule runs through the protected
//! rewrite primitive, so text claimed by an earlier category (a keyword
//! inside a string literal, a number inside a comment) is never reclassified.

mod palette;

pub use palette::Palette;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rewrite::{mark, ShieldedRule};
use crate::tables;

/// Line comments, from `//` to end of line.
const LINE_COMMENT: &str = r"//.*";
/// Block comments, non-greedy so one rule application never spans an
/// already-closed block.
const BLOCK_COMMENT: &str = r"/\*(?s:.)*?\*/";
/// String literals with optional wide prefix; `\"` passes through inside.
const STRING: &str = r#"L?"(\\"|[^"])*""#;
/// Character literals with optional wide prefix: a single plain character
/// or a recognized escape sequence.
const CHAR: &str = r#"L?'(\\[ntvbrfa0\\?'"]|[^\\'])'"#;
/// Decimal integers and simple decimals, no leading zero unless the value
/// is exactly zero. Hex, octal, exponents, and digit separators are out of
/// scope.
const NUMBER: &str = r"\b-?([1-9]\d*|0)(\.\d+)?\b";

/// Lexical categories recognized by the highlighter, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    LineComment,
    BlockComment,
    String,
    Char,
    Number,
    Directive,
    Type,
    Keyword,
}

impl Category {
    /// The color this category renders with.
    #[must_use]
    pub fn color<'a>(&self, palette: &'a Palette) -> &'a str {
        match self {
            Self::LineComment | Self::BlockComment => &palette.comment,
            Self::String | Self::Char => &palette.literal,
            Self::Number => &palette.number,
            Self::Directive => &palette.directive,
            Self::Type => &palette.type_name,
            Self::Keyword => &palette.keyword,
        }
    }

    /// Whether this category renders bold.
    #[must_use]
    pub fn bold(&self) -> bool {
        matches!(self, Self::Keyword)
    }
}

/// Keyword tables driving the table-driven categories, plus the palette.
///
/// Lists are matched one rule per entry, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightTables {
    pub directives: Vec<String>,
    pub types: Vec<String>,
    pub keywords: Vec<String>,
    pub colors: Palette,
}

impl Default for HighlightTables {
    fn default() -> Self {
        Self {
            directives: tables::DIRECTIVES.iter().map(ToString::to_string).collect(),
            types: tables::BASIC_TYPES.iter().map(ToString::to_string).collect(),
            keywords: tables::KEYWORDS.iter().map(ToString::to_string).collect(),
            colors: Palette::default(),
        }
    }
}

struct HighlightRule {
    rule: ShieldedRule,
    color: String,
    bold: bool,
}

impl HighlightRule {
    fn apply(&self, fragment: &str) -> String {
        self.rule.apply(fragment, |m| {
            let colored = format!("<font color=\"{}\">{m}</font>", self.color);
            if self.bold {
                mark(&format!("<b>{colored}</b>"))
            } else {
                mark(&colored)
            }
        })
    }
}

/// The highlighter pipeline: an ordered list of compiled category rules.
pub struct Highlighter {
    rules: Vec<HighlightRule>,
}

impl Highlighter {
    /// Compile the pipeline from keyword tables.
    pub fn new(tables: &HighlightTables) -> Result<Self, Error> {
        let palette = &tables.colors;
        let mut rules = Vec::new();

        for (pattern, category) in [
            (LINE_COMMENT, Category::LineComment),
            (BLOCK_COMMENT, Category::BlockComment),
            (STRING, Category::String),
            (CHAR, Category::Char),
            (NUMBER, Category::Number),
        ] {
            rules.push(HighlightRule {
                rule: ShieldedRule::new(pattern)?,
                color: category.color(palette).to_string(),
                bold: category.bold(),
            });
        }

        for (entries, category) in [
            (&tables.directives, Category::Directive),
            (&tables.types, Category::Type),
            (&tables.keywords, Category::Keyword),
        ] {
            for entry in entries.iter() {
                rules.push(HighlightRule {
                    rule: ShieldedRule::for_entry(entry)?,
                    color: category.color(palette).to_string(),
                    bold: category.bold(),
                });
            }
        }

        Ok(Self { rules })
    }

    /// Highlight a code fragment, threading it through every rule in order.
    #[must_use]
    pub fn highlight(&self, fragment: &str) -> String {
        self.rules
            .iter()
            .fold(fragment.to_string(), |fragment, rule| rule.apply(&fragment))
    }
}
