//! Line-by-line digest message parser

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::item::RepositoryItem;
use crate::types::{Field, HeaderKind, ListKind, Message, MessageBuilder, Repository};

/// Only messages claiming to come from this sender are processed.
const REQUIRED_FROM: &str = "GitHub <noreply@github.com>";
/// Subjects must carry this prefix, otherwise processing is pointless.
const REQUIRED_SUBJECT_PREFIX: &str = "GitHub explore";
/// Start of the plaintext section for stars from followed users.
const SOCIAL_SECTION_PREFIX: &str = "Stars from people you follow";
/// Start of the plaintext section for trending repositories.
const POPULAR_SECTION_PREFIX: &str = "Trending Repositories";
/// Start of the plaintext section for stars from GitHub staff.
const STAFF_SECTION_PREFIX: &str = "Stars from GitHub Staff";
/// MIME separator between message parts.
const MIME_BOUNDARY_PREFIX: &str = "----==_mimepart";
/// Content type of the only part we extract repositories from.
const CONTENT_TYPE_PLAIN: &str = "text/plain;";
/// Content type of the part we refuse to parse.
const CONTENT_TYPE_HTML: &str = "text/html;";

/// Region of the message the reader is currently in.
///
/// The header is always first; MIME part boundaries move the reader into
/// one of the body regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Header,
    PlaintextBody,
    HtmlBody,
}

/// Whether the current line lets processing continue
enum Flow {
    Continue,
    Halt,
}

/// How a repository list section ended
enum SectionEnd {
    /// A MIME boundary was reached and its part headers consumed
    Boundary,
    /// Input ran out
    Eof,
    /// The header of another list section was reached
    Section(ListKind),
}

/// Parse a digest message from a file on disk.
///
/// Fails only on path validation: an empty or blank path, a path that
/// does not exist, or a file that cannot be opened. A message that stops
/// matching expectations partway through still returns successfully with
/// whatever was collected.
pub fn parse(path: impl AsRef<Path>) -> Result<Message> {
    let path = path.as_ref();

    // Without a usable path there is no point in continuing.
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(ParseError::InvalidPath);
    }
    if !path.exists() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_digest(BufReader::new(file)))
}

/// Parse a digest message from any buffered line source.
///
/// This is the section router: it walks the input one line at a time,
/// starting in the header region and switching regions at MIME part
/// boundaries. An unexpected sender or subject, or reaching HTML body
/// content, stops the walk; the partial message is still returned.
pub fn parse_digest<R: BufRead>(reader: R) -> Message {
    let mut builder = MessageBuilder::default();
    let mut region = Region::Header;
    let mut lines = reader.lines();

    while let Some(line) = next_line(&mut lines) {
        match region {
            Region::Header => {
                if line.starts_with(MIME_BOUNDARY_PREFIX) {
                    region = read_part_headers(&mut lines, region);
                } else if let Flow::Halt = apply_header_line(&line, &mut builder) {
                    break;
                }
            }
            Region::PlaintextBody => {
                if line.starts_with(MIME_BOUNDARY_PREFIX) {
                    region = read_part_headers(&mut lines, region);
                } else if let Some(kind) = section_start(&line) {
                    // Sections can appear in any order, and one section
                    // header may directly follow another. Loop on the
                    // pending section instead of recursing so hostile
                    // input cannot grow the stack.
                    let mut pending = Some(kind);
                    while let Some(current) = pending.take() {
                        match collect_section(&mut lines, current, &mut builder, &mut region) {
                            SectionEnd::Section(next) => pending = Some(next),
                            SectionEnd::Boundary | SectionEnd::Eof => {}
                        }
                    }
                }
            }
            Region::HtmlBody => {
                if line.starts_with(MIME_BOUNDARY_PREFIX) {
                    // A later part may still be plaintext.
                    region = read_part_headers(&mut lines, region);
                } else {
                    // Only plaintext is extracted; stop at HTML content.
                    debug!("reached html body content, stopping");
                    break;
                }
            }
        }
    }

    builder.build()
}

/// Pull the next line, absorbing read failures.
///
/// A failed read ends the parse the same way end of input does; the
/// failure is logged, never surfaced.
fn next_line<R: BufRead>(lines: &mut io::Lines<R>) -> Option<String> {
    match lines.next()? {
        Ok(line) => Some(line),
        Err(err) => {
            warn!(%err, "read failed, stopping");
            None
        }
    }
}

/// Apply one header-region line to the accumulator.
///
/// Lines that do not parse as a field, and fields whose header is not
/// recognized, are inert. A sender other than [`REQUIRED_FROM`] or a
/// subject without [`REQUIRED_SUBJECT_PREFIX`] halts the whole parse.
fn apply_header_line(line: &str, builder: &mut MessageBuilder) -> Flow {
    let Some(field) = Field::parse(line) else {
        return Flow::Continue;
    };
    let Some(kind) = HeaderKind::classify(&field.name) else {
        return Flow::Continue;
    };

    match kind {
        HeaderKind::RecipientTo => builder.recipient(field.value),
        HeaderKind::From => {
            let accepted = field.value.eq_ignore_ascii_case(REQUIRED_FROM);
            if !accepted {
                debug!(from = %field.value, "unexpected sender, stopping");
            }
            builder.sender(field.value);
            if !accepted {
                return Flow::Halt;
            }
        }
        HeaderKind::Subject => {
            if !field.value.starts_with(REQUIRED_SUBJECT_PREFIX) {
                debug!(subject = %field.value, "unexpected subject, stopping");
                return Flow::Halt;
            }
            builder.subject(field.value);
        }
        HeaderKind::Date => match DateTime::parse_from_rfc2822(&field.value) {
            Ok(date) => builder.date(date.with_timezone(&Utc)),
            Err(err) => warn!(value = %field.value, %err, "ignoring malformed date header"),
        },
        // Content type only matters inside MIME part headers.
        HeaderKind::ContentType => {}
    }

    Flow::Continue
}

/// Read the header block of a freshly opened MIME part and work out
/// which body region follows it.
///
/// Scanning stops at the first blank line, at a line that is not a
/// parseable field, or at a header we do not recognize; none of those
/// are errors, the body (or end of message) simply follows. The region
/// only changes on an exact content-type token match.
fn read_part_headers<R: BufRead>(lines: &mut io::Lines<R>, current: Region) -> Region {
    let mut region = current;

    while let Some(line) = next_line(lines) {
        // Whitespace ends the part headers.
        if line.trim().is_empty() {
            break;
        }
        let Some(field) = Field::parse(&line) else {
            break;
        };
        let Some(kind) = HeaderKind::classify(&field.name) else {
            break;
        };

        if kind == HeaderKind::ContentType {
            if field.value == CONTENT_TYPE_PLAIN {
                region = Region::PlaintextBody;
            } else if field.value == CONTENT_TYPE_HTML {
                region = Region::HtmlBody;
            }
        }
    }

    region
}

/// Map a plaintext body line to the list section it introduces
fn section_start(line: &str) -> Option<ListKind> {
    if line.starts_with(SOCIAL_SECTION_PREFIX) {
        Some(ListKind::Social)
    } else if line.starts_with(STAFF_SECTION_PREFIX) {
        Some(ListKind::Staff)
    } else if line.starts_with(POPULAR_SECTION_PREFIX) {
        Some(ListKind::Popular)
    } else {
        None
    }
}

/// Collect the repository items of one list section.
///
/// Runs until a MIME boundary (whose part headers it consumes), the
/// header of another section (returned for the caller to collect next),
/// or end of input. All three section kinds terminate the loop the same
/// way. Lines that are neither items nor terminators are prose filler.
fn collect_section<R: BufRead>(
    lines: &mut io::Lines<R>,
    kind: ListKind,
    builder: &mut MessageBuilder,
    region: &mut Region,
) -> SectionEnd {
    debug!(?kind, "collecting repository list section");

    while let Some(line) = next_line(lines) {
        if line.starts_with(MIME_BOUNDARY_PREFIX) {
            *region = read_part_headers(lines, *region);
            return SectionEnd::Boundary;
        }
        if let Some(next) = section_start(&line) {
            return SectionEnd::Section(next);
        }
        if RepositoryItem::is_item_line(&line) {
            if let Some(repository) = read_repository(&line, lines) {
                builder.push_repository(kind, repository);
            }
        }
    }

    SectionEnd::Eof
}

/// Build a [`Repository`] from a numbered item line plus the following
/// description line.
///
/// A numbered line that does not decompose into a repository URL is
/// skipped outright: nothing is appended and the following line is left
/// in the stream for the section loop. A matching line always consumes
/// exactly one more line as the verbatim description; at end of input
/// the description stays absent.
fn read_repository<R: BufRead>(line: &str, lines: &mut io::Lines<R>) -> Option<Repository> {
    let Some(item) = RepositoryItem::parse(line) else {
        warn!(%line, "skipping unrecognized list item");
        return None;
    };

    let description = next_line(lines);

    Some(Repository {
        name: item.name,
        url: item.url,
        kind: item.kind,
        description,
    })
}
