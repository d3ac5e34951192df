//! Plain-text micro-format embedded in the `Description` and `Link` columns.
//!
//! The core splits on newlines and classifies each line; it never interprets
//! the targets. In particular a `|jira` line is passed through verbatim for
//! the presentation layer to act on.

use serde::{Deserialize, Serialize};

/// One classified line of a record's description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DescriptionLine {
    /// A `label|url` line
    Link { label: String, url: String },
    /// A line starting with the `·` bullet marker
    Bullet(String),
    /// Any other non-blank line
    Text(String),
}

/// One `label|url` entry from a record's reference links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    /// Link target, or empty when the source line carried no delimiter
    pub url: String,
}

const BULLET_MARKER: char = '·';

/// Split a description into classified lines. Blank lines are dropped.
#[must_use]
pub fn parse_description(description: &str) -> Vec<DescriptionLine> {
    description
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            if let Some((label, url)) = line.split_once('|') {
                return Some(DescriptionLine::Link {
                    label: label.trim().to_string(),
                    url: url.trim().to_string(),
                });
            }
            if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
                return Some(DescriptionLine::Bullet(rest.trim().to_string()));
            }
            Some(DescriptionLine::Text(line.to_string()))
        })
        .collect()
}

/// Split a link column into `label|url` entries. Blank lines are dropped;
/// a line without a delimiter becomes a label with an empty target.
#[must_use]
pub fn parse_links(link: &str) -> Vec<LinkEntry> {
    link.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let entry = match line.split_once('|') {
                Some((label, url)) => LinkEntry {
                    label: label.trim().to_string(),
                    url: url.trim().to_string(),
                },
                None => LinkEntry {
                    label: line.to_string(),
                    url: String::new(),
                },
            };
            Some(entry)
        })
        .collect()
}
