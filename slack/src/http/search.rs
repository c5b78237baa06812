//! Search your team's files and messages.

use super::Method::Get;
use super::{optional, required, EndpointDescriptor, Slot, TOKEN};
use crate::options::Value;

/// Search query. May contain booleans, etc.
pub const QUERY: &str = "query";
/// Return matches sorted by either score or timestamp. See [`SortBy`].
pub const SORT: &str = "sort";
/// Change sort direction. See [`SortDirection`].
pub const SORT_DIR: &str = "sort_dir";
/// Pass a value of true to enable query highlight markers.
pub const HIGHLIGHT: &str = "highlight";
/// Number of items to return per page.
pub const COUNT: &str = "count";
/// Page number of results to return.
pub const PAGE: &str = "page";

const SEARCH: &[Slot] = &[
    TOKEN,
    required(QUERY),
    optional(SORT),
    optional(SORT_DIR),
    optional(HIGHLIGHT),
    optional(COUNT),
    optional(PAGE),
];

pub const DESCRIPTORS: &[EndpointDescriptor] = &[ALL, FILES, MESSAGES];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl From<SortDirection> for Value {
    fn from(direction: SortDirection) -> Value {
        Value::Str(
            match direction {
                SortDirection::Ascending => "asc",
                SortDirection::Descending => "desc",
            }
            .to_string(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    Score,
    Timestamp,
}

impl From<SortBy> for Value {
    fn from(sort: SortBy) -> Value {
        Value::Str(
            match sort {
                SortBy::Score => "score",
                SortBy::Timestamp => "timestamp",
            }
            .to_string(),
        )
    }
}

pub const ALL: EndpointDescriptor = EndpointDescriptor::new("search", "all", Get, SEARCH);

api_call!(
    /// Searches for messages and files matching a query.
    ///
    /// Wraps https://api.slack.com/methods/search.all
    all, ALL, (query: &str)
);

pub const FILES: EndpointDescriptor = EndpointDescriptor::new("search", "files", Get, SEARCH);

api_call!(
    /// Searches for files matching a query.
    ///
    /// Wraps https://api.slack.com/methods/search.files
    files, FILES, (query: &str)
);

pub const MESSAGES: EndpointDescriptor = EndpointDescriptor::new("search", "messages", Get, SEARCH);

api_call!(
    /// Searches for messages matching a query.
    ///
    /// Wraps https://api.slack.com/methods/search.messages
    messages, MESSAGES, (query: &str)
);
