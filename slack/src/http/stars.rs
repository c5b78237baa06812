//! Star and unstar items, and list a user's stars.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};

pub const CHANNEL: &str = "channel";
/// File to star or unstar.
pub const FILE: &str = "file";
/// File comment to star or unstar.
pub const FILE_COMMENT: &str = "file_comment";
/// Timestamp of the message to star or unstar.
pub const TIMESTAMP: &str = "timestamp";
/// Show stars by this user. Defaults to the authed user.
pub const USER: &str = "user";
pub const COUNT: &str = "count";
pub const PAGE: &str = "page";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[ADD, LIST, REMOVE];

pub const ADD: EndpointDescriptor = EndpointDescriptor::new(
    "stars",
    "add",
    Post,
    &[
        TOKEN,
        required(CHANNEL),
        optional(FILE),
        optional(FILE_COMMENT),
        optional(TIMESTAMP),
    ],
);

api_call!(
    /// Adds a star to an item. `channel` is always sent; add `timestamp` to
    /// star a message in it.
    ///
    /// Wraps https://api.slack.com/methods/stars.add
    add, ADD, (channel: &str)
);

pub const LIST: EndpointDescriptor = EndpointDescriptor::new(
    "stars",
    "list",
    Get,
    &[TOKEN, optional(USER), optional(COUNT), optional(PAGE)],
);

api_call!(
    /// Lists stars for a user.
    ///
    /// Wraps https://api.slack.com/methods/stars.list
    list, LIST, ()
);

pub const REMOVE: EndpointDescriptor = EndpointDescriptor::new(
    "stars",
    "remove",
    Post,
    &[
        TOKEN,
        required(CHANNEL),
        optional(FILE),
        optional(FILE_COMMENT),
        optional(TIMESTAMP),
    ],
);

api_call!(
    /// Removes a star from an item.
    ///
    /// Wraps https://api.slack.com/methods/stars.remove
    remove, REMOVE, (channel: &str)
);
