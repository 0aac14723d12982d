//! Protected rewrite engine
//!
//! Every rewrite the highlighter and linker perform goes through one
//! primitive: apply a target pattern to a markup fragment while leaving
//! text that an earlier rule already wrapped in a marker span untouched.
//!
//! A marker span is a bare `<span>` … `</span>` pair. The rule compiles a
//! single alternation `(marker-span | target)` and walks the fragment left
//! to right with an explicit cursor: a marker-span match is copied through
//! verbatim (its interior is never shown to the target pattern), a target
//! match is replaced by the wrap callback, and everything in between is
//! copied as-is. Two separate passes would let the second pass re-enter
//! text the first one wrapped; the combined alternation cannot.

use regex::Regex;

use crate::error::Error;

/// Opening delimiter of a marker span.
pub const SPAN_OPEN: &str = "<span>";
/// Closing delimiter of a marker span.
pub const SPAN_CLOSE: &str = "</span>";

/// Matches one complete marker span, shortest first, so the scan stops at
/// the first closing delimiter. An unterminated `<span>` fails this branch
/// and is treated as ordinary text.
const SHIELD: &str = r"<span>(?s:.)*?</span>";

/// A single protected rewrite rule: a target pattern combined with the
/// marker-span shield into one alternation.
#[derive(Debug, Clone)]
pub struct ShieldedRule {
    pattern: Regex,
}

impl ShieldedRule {
    /// Compile a rule from a raw target pattern.
    ///
    /// The pattern must not define capture groups named `shield` or `tok`.
    pub fn new(target: &str) -> Result<Self, Error> {
        let pattern = Regex::new(&format!("(?P<shield>{SHIELD})|(?P<tok>{target})")).map_err(
            |source| Error::InvalidPattern {
                pattern: target.to_string(),
                source,
            },
        )?;
        Ok(Self { pattern })
    }

    /// Compile a rule that matches a literal table entry as a whole word.
    ///
    /// The entry is escaped before compilation, so names containing regex
    /// metacharacters (`delete[]`, `IMathLib_config.hpp`) match literally.
    pub fn for_entry(entry: &str) -> Result<Self, Error> {
        Self::new(&word_pattern(entry))
    }

    /// Apply the rule to a fragment, wrapping every unprotected match.
    ///
    /// Matching restarts on the remainder after each consumed match, so two
    /// adjacent tokens are wrapped as two adjacent spans even when a word
    /// boundary could not sit between them in the original text.
    pub fn apply(&self, fragment: &str, wrap: impl Fn(&str) -> String) -> String {
        let mut out = String::with_capacity(fragment.len());
        let mut rest = fragment;

        while let Some(caps) = self.pattern.captures(rest) {
            let m = caps.get(0).unwrap();
            out.push_str(&rest[..m.start()]);
            if caps.name("shield").is_some() {
                out.push_str(m.as_str());
            } else {
                out.push_str(&wrap(m.as_str()));
            }
            rest = &rest[m.end()..];
            if m.start() == m.end() {
                // Zero-width match: emit one character and move on.
                match rest.chars().next() {
                    Some(c) => {
                        out.push(c);
                        rest = &rest[c.len_utf8()..];
                    }
                    None => break,
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Build a whole-word pattern for a literal table entry.
///
/// `\b` next to a non-word character can never match, so a boundary is
/// attached only on an edge of the entry that is itself a word character.
/// `#include` gets a trailing boundary only, `delete[]` a leading one,
/// `&lt;…&gt;` header literals none at all.
pub fn word_pattern(entry: &str) -> String {
    let escaped = regex::escape(entry);
    let lead = entry.chars().next().is_some_and(is_word);
    let trail = entry.chars().last().is_some_and(is_word);
    match (lead, trail) {
        (true, true) => format!(r"\b{escaped}\b"),
        (true, false) => format!(r"\b{escaped}"),
        (false, true) => format!(r"{escaped}\b"),
        (false, false) => escaped,
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Wrap a piece of text in a marker span.
pub fn mark(text: &str) -> String {
    format!("{SPAN_OPEN}{text}{SPAN_CLOSE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(m: &str) -> String {
        mark(&format!("[{m}]"))
    }

    #[test]
    fn test_no_match_is_identity() {
        let rule = ShieldedRule::new("foo").unwrap();
        assert_eq!(rule.apply("bar baz", wrap), "bar baz");
    }

    #[test]
    fn test_wraps_unprotected_match() {
        let rule = ShieldedRule::new("foo").unwrap();
        assert_eq!(rule.apply("a foo b", wrap), "a <span>[foo]</span> b");
    }

    #[test]
    fn test_existing_span_is_preserved_verbatim() {
        let rule = ShieldedRule::new("foo").unwrap();
        let input = "<span>foo</span> foo";
        assert_eq!(rule.apply(input, wrap), "<span>foo</span> <span>[foo]</span>");
    }

    #[test]
    fn test_span_interior_is_never_rematched() {
        let rule = ShieldedRule::new("if").unwrap();
        let input = "<span>\"if\"</span>";
        assert_eq!(rule.apply(input, wrap), input);
    }

    #[test]
    fn test_unterminated_span_is_ordinary_text() {
        let rule = ShieldedRule::new("foo").unwrap();
        assert_eq!(rule.apply("<span>foo", wrap), "<span><span>[foo]</span>");
    }

    #[test]
    fn test_span_across_newlines_is_protected() {
        let rule = ShieldedRule::new("foo").unwrap();
        let input = "<span>foo\nfoo</span>";
        assert_eq!(rule.apply(input, wrap), input);
    }

    #[test]
    fn test_leftmost_match_wins() {
        let rule = ShieldedRule::new("aa").unwrap();
        // Leftmost, non-overlapping: "aaa" yields one match at the front.
        assert_eq!(rule.apply("aaa", wrap), "<span>[aa]</span>a");
    }

    #[test]
    fn test_entry_metacharacters_match_literally() {
        let rule = ShieldedRule::for_entry("delete[]").unwrap();
        assert_eq!(
            rule.apply("delete[] p", wrap),
            "<span>[delete[]]</span> p"
        );
        // `[]` must not be an empty character class.
        assert_eq!(rule.apply("deletex p", wrap), "deletex p");
    }

    #[test]
    fn test_entry_whole_word_only() {
        let rule = ShieldedRule::for_entry("int").unwrap();
        assert_eq!(rule.apply("print int", wrap), "print <span>[int]</span>");
    }

    #[test]
    fn test_word_pattern_edges() {
        assert_eq!(word_pattern("int"), r"\bint\b");
        assert_eq!(word_pattern("#include"), r"\#include\b");
        assert_eq!(word_pattern("delete[]"), r"\bdelete\[\]");
        assert_eq!(word_pattern("&lt;a.hpp&gt;"), r"\&lt;a\.hpp\&gt;");
    }
}
