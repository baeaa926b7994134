//! Recognition and decomposition of plaintext repository list items

use regex::Regex;

/// Matches list item starts like "1." and "12.". The period is required.
static LIST_ITEM_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

/// Decomposes the first line of a repository entry into three captures:
/// the full URL, the "owner/name" portion, and an optional trailing tag.
///
/// Given "2. https://github.com/person/example2 Java" the captures
/// resolve to the url "https://github.com/person/example2", the name
/// "person/example2", and the tag "Java".
static REPOSITORY_ITEM_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^\d+\. (https://github\.com/(.*/.*)) (.*)?$").unwrap()
});

/// The URL line of a repository entry, before its description is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryItem {
    /// Full https URL of the repository
    pub url: String,

    /// "owner/name" portion of the URL
    pub name: String,

    /// Trailing tag, usually a language name
    pub kind: Option<String>,
}

impl RepositoryItem {
    /// Check whether a plaintext body line starts a numbered list item
    #[must_use]
    pub fn is_item_line(line: &str) -> bool {
        LIST_ITEM_REGEX.is_match(line)
    }

    /// Decompose a numbered item line into url, name, and optional tag.
    ///
    /// Returns `None` when the line does not carry a GitHub repository
    /// URL in the expected shape. A present but blank trailing tag maps
    /// to `kind: None`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let captures = REPOSITORY_ITEM_REGEX.captures(line)?;

        let url = captures.get(1)?.as_str().to_string();
        let name = captures.get(2)?.as_str().to_string();
        let kind = captures
            .get(3)
            .map(|m| m.as_str())
            .filter(|tag| !tag.trim().is_empty())
            .map(ToString::to_string);

        Some(Self { url, name, kind })
    }
}
