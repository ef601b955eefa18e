use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

/// Knobs for a single parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Line that opens and closes the metadata header.
    pub header_delimiter: String,
    /// Maximum depth of the open-item stack and of the heading tree.
    pub max_depth: usize,
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
}

impl ParseOptions {
    pub const DEFAULT_DELIMITER: &'static str = "---";
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// pulldown-cmark options matching these settings.
    ///
    /// Used both for element extraction and for the default HTML renderer so
    /// the two always agree on what a construct is.
    pub fn cmark_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header_delimiter: Self::DEFAULT_DELIMITER.to_string(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
            tables: true,
            strikethrough: true,
            tasklists: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.header_delimiter, "---");
        assert_eq!(options.max_depth, 64);
        assert!(options.cmark_options().contains(Options::ENABLE_TABLES));
        assert!(!options.cmark_options().contains(Options::ENABLE_TASKLISTS));
    }
}
