//! Refmark Core - Rewrite engine for C++ library reference pages
//!
//! This crate provides the core functionality:
//! - Rewrite: the protected rewrite primitive (marker-span discipline)
//! - Highlight: regex-based syntax highlighting of code snippets
//! - Link: header and symbol cross-linking from lookup tables
//! - Page: element extraction, base-path derivation, page orchestration
//! - Config: TOML site configuration with built-in default tables

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Protected rewrite primitive - marker-span-aware pattern substitution
pub mod rewrite;

/// Syntax highlighting pipeline
pub mod highlight;

/// Cross-linking pipeline
pub mod link;

/// Page-level rewriting and base-path derivation
pub mod page;

/// Site configuration
pub mod config;

/// Built-in lookup tables
pub mod tables;

/// Error types
pub mod error;

/// Convenience re-export of the highlighter
pub use highlight::Highlighter;

/// Convenience re-export of the linker
pub use link::Linker;

/// Convenience re-export of the page rewriter
pub use page::PageRewriter;

/// Convenience re-export of the site configuration
pub use config::SiteConfig;

/// Convenience re-export of the error type
pub use error::Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
