// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! GitHub Explore digest parser
//!
//! Extracts structured data from the raw RFC-822 text of a GitHub
//! Explore digest notification: the recipient, subject, and date, plus
//! the repositories referenced by the three plaintext list sections
//! (stars from people you follow, trending repositories, and stars from
//! GitHub staff).
//!
//! Only the plaintext body part is read. The parser is deliberately
//! forgiving: a message from an unexpected sender, with an unexpected
//! subject, or whose remaining content is HTML stops extraction quietly,
//! and whatever was collected up to that point is returned.
//!
//! # Example
//!
//! ```rust
//! use explore_digest::parse_digest;
//!
//! let raw = b"Delivered-To: dev@example.com\n\
//!     From: GitHub <noreply@github.com>\n\
//!     Subject: GitHub explore digest\n";
//! let message = parse_digest(&raw[..]);
//!
//! assert_eq!(message.to.as_deref(), Some("dev@example.com"));
//! assert_eq!(message.subject.as_deref(), Some("GitHub explore digest"));
//! ```

mod error;
mod item;
mod parser;
mod types;

pub use error::{ParseError, Result};
pub use item::RepositoryItem;
pub use parser::{parse, parse_digest};
pub use types::*;
