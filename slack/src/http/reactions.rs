//! Add, remove and list emoji reactions on messages and files.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};

/// Reaction (emoji) name.
pub const NAME: &str = "name";
/// File to react to.
pub const FILE: &str = "file";
/// File comment to react to.
pub const FILE_COMMENT: &str = "file_comment";
/// Channel where the message to react to was posted.
pub const CHANNEL: &str = "channel";
/// Timestamp of the message to react to.
pub const TIMESTAMP: &str = "timestamp";
/// If true always return the complete reaction list.
pub const FULL: &str = "full";
/// Show reactions made by this user. Defaults to the authed user.
pub const USER: &str = "user";
pub const COUNT: &str = "count";
pub const PAGE: &str = "page";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[ADD, GET, LIST, REMOVE];

pub const ADD: EndpointDescriptor = EndpointDescriptor::new(
    "reactions",
    "add",
    Post,
    &[
        TOKEN,
        required(NAME),
        optional(FILE),
        optional(FILE_COMMENT),
        optional(CHANNEL),
        optional(TIMESTAMP),
    ],
);

api_call!(
    /// Adds a reaction to an item. Name the item with `file`, `file_comment`,
    /// or `channel` together with `timestamp`.
    ///
    /// Wraps https://api.slack.com/methods/reactions.add
    add, ADD, (name: &str)
);

pub const GET: EndpointDescriptor = EndpointDescriptor::new(
    "reactions",
    "get",
    Get,
    &[
        TOKEN,
        optional(FILE),
        optional(FILE_COMMENT),
        optional(CHANNEL),
        optional(TIMESTAMP),
        optional(FULL),
    ],
);

api_call!(
    /// Gets reactions for an item.
    ///
    /// Wraps https://api.slack.com/methods/reactions.get
    get, GET, ()
);

pub const LIST: EndpointDescriptor = EndpointDescriptor::new(
    "reactions",
    "list",
    Get,
    &[TOKEN, optional(USER), optional(FULL), optional(COUNT), optional(PAGE)],
);

api_call!(
    /// Lists reactions made by a user.
    ///
    /// Wraps https://api.slack.com/methods/reactions.list
    list, LIST, ()
);

pub const REMOVE: EndpointDescriptor = EndpointDescriptor::new(
    "reactions",
    "remove",
    Post,
    &[
        TOKEN,
        required(NAME),
        optional(FILE),
        optional(FILE_COMMENT),
        optional(CHANNEL),
        optional(TIMESTAMP),
    ],
);

api_call!(
    /// Removes a reaction from an item.
    ///
    /// Wraps https://api.slack.com/methods/reactions.remove
    remove, REMOVE, (name: &str)
);
