//! Core types for parsed digest messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single `Name: Value` header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Header name, trimmed (e.g. "Delivered-To")
    pub name: String,

    /// Header value, reassembled if it contained colons itself
    pub value: String,
}

impl Field {
    /// Parse a raw header line into a field.
    ///
    /// Returns `None` for blank lines and for lines without a `": "`
    /// separator. The line is split on every colon; segments after the
    /// first are trimmed and rejoined with `:` so values that contain
    /// colons (dates, quoted structures) survive the split.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() || !raw.contains(": ") {
            return None;
        }

        let mut parts = raw.split(':');
        let name = parts.next()?.trim().to_string();

        let mut value = String::new();
        for (i, part) in parts.enumerate() {
            if i > 0 {
                value.push(':');
            }
            value.push_str(part.trim());
        }

        Some(Self { name, value })
    }
}

/// The headers the parser pays attention to. Anything else is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    RecipientTo,
    From,
    Subject,
    Date,
    ContentType,
}

impl HeaderKind {
    const ALL: [Self; 5] = [
        Self::RecipientTo,
        Self::From,
        Self::Subject,
        Self::Date,
        Self::ContentType,
    ];

    /// Map a header name to its kind, case-insensitively.
    ///
    /// The list is short, so a linear scan is plenty.
    #[must_use]
    pub fn classify(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.header_name().eq_ignore_ascii_case(name))
    }

    /// The canonical header name for this kind
    #[must_use]
    pub const fn header_name(self) -> &'static str {
        match self {
            Self::RecipientTo => "Delivered-To",
            Self::From => "From",
            Self::Subject => "Subject",
            Self::Date => "Date",
            Self::ContentType => "Content-Type",
        }
    }
}

/// Which repository list a plaintext section feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Stars from people the recipient follows
    Social,
    /// Trending repositories
    Popular,
    /// Stars from GitHub staff
    Staff,
}

/// One repository entry from a plaintext list section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    /// "owner/name" as it appears in the entry URL
    pub name: String,

    /// Full https URL of the repository
    pub url: String,

    /// Trailing tag on the item line, usually a language name
    pub kind: Option<String>,

    /// Free-text line following the item line, taken verbatim
    pub description: Option<String>,
}

/// Everything extracted from one digest message.
///
/// A repository list stays `None` when its section never appeared in the
/// message, which is distinct from a section that was present but empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Delivered-To header value
    pub to: Option<String>,

    /// From header value, recorded even when it fails validation
    pub from: Option<String>,

    /// Subject header value
    pub subject: Option<String>,

    /// Date header value, when it parsed cleanly
    pub date: Option<DateTime<Utc>>,

    /// Repositories starred by people the recipient follows
    pub social_repositories: Option<Vec<Repository>>,

    /// Trending repositories
    pub popular_repositories: Option<Vec<Repository>>,

    /// Repositories starred by GitHub staff
    pub staff_repositories: Option<Vec<Repository>>,
}

/// Accumulates message fields while the parser walks the input.
///
/// One builder serves exactly one parse call; [`build`](Self::build)
/// consumes it, so state cannot leak into a later parse.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn recipient(&mut self, to: impl Into<String>) {
        self.message.to = Some(to.into());
    }

    pub fn sender(&mut self, from: impl Into<String>) {
        self.message.from = Some(from.into());
    }

    pub fn subject(&mut self, subject: impl Into<String>) {
        self.message.subject = Some(subject.into());
    }

    pub fn date(&mut self, date: DateTime<Utc>) {
        self.message.date = Some(date);
    }

    /// Append a repository to the list named by `kind`, creating the
    /// list on first insertion.
    pub fn push_repository(&mut self, kind: ListKind, repository: Repository) {
        let list = match kind {
            ListKind::Social => &mut self.message.social_repositories,
            ListKind::Popular => &mut self.message.popular_repositories,
            ListKind::Staff => &mut self.message.staff_repositories,
        };
        list.get_or_insert_default().push(repository);
    }

    /// Finalize the accumulated message
    #[must_use]
    pub fn build(self) -> Message {
        self.message
    }
}
