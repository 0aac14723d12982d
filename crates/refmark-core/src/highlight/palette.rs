//! Color palette for highlighted categories

use serde::{Deserialize, Serialize};

/// Colors applied to each highlight category, as HTML hex values.
///
/// The defaults are the reference site's palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Line and block comments
    pub comment: String,
    /// String and character literals
    pub literal: String,
    /// Numeric literals
    pub number: String,
    /// Preprocessor directives
    pub directive: String,
    /// Built-in type names
    pub type_name: String,
    /// Other keywords (rendered bold)
    pub keyword: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            comment: "#088A4B".to_string(),
            literal: "#084B8A".to_string(),
            number: "#868A08".to_string(),
            directive: "#424242".to_string(),
            type_name: "#2E64FE".to_string(),
            keyword: "#0431B4".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.comment, "#088A4B");
        assert_eq!(palette.keyword, "#0431B4");
    }
}
