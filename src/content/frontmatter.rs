//! Front-matter parsing
//!
//! The header block is a list of `key: value` lines. Parsing is tolerant:
//! lines without a colon are skipped and no input ever fails.

use indexmap::IndexMap;

/// Raw key/value fields from a header block, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse header lines into raw fields
    ///
    /// Each line is split at its first `:`; key and value are trimmed. A key
    /// that appears twice keeps the last value.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut fields = IndexMap::new();

        for line in lines {
            let Some((key, value)) = line.as_ref().split_once(':') else {
                continue;
            };
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }

        Self { fields }
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get a field value, empty when absent
    pub fn string(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// Get a field value, `None` when absent or empty
    pub fn optional(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.fields.len()
    }
}
