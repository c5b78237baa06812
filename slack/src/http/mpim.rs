//! Get info on your multiparty direct messages.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};
use crate::timestamp::Timestamp;

pub const CHANNEL: &str = "channel";
pub const TS: &str = "ts";
/// End of time range of messages to include in results.
pub const LATEST: &str = "latest";
/// Start of time range of messages to include in results.
pub const OLDEST: &str = "oldest";
/// Include messages with latest or oldest timestamp in results.
pub const INCLUSIVE: &str = "inclusive";
/// Number of messages to return, between 1 and 1000.
pub const COUNT: &str = "count";
/// Include unread_count_display in the output?
pub const UNREADS: &str = "unreads";
/// Users to include in the conversation, the caller included.
pub const USERS: &str = "users";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[CLOSE, HISTORY, LIST, MARK, OPEN];

pub const CLOSE: EndpointDescriptor =
    EndpointDescriptor::new("mpim", "close", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Closes a multiparty direct message channel.
    ///
    /// Wraps https://api.slack.com/methods/mpim.close
    close, CLOSE, (channel: &str)
);

pub const HISTORY: EndpointDescriptor = EndpointDescriptor::new(
    "mpim",
    "history",
    Get,
    &[
        TOKEN,
        required(CHANNEL),
        optional(LATEST),
        optional(OLDEST),
        optional(INCLUSIVE),
        optional(COUNT),
        optional(UNREADS),
    ],
);

api_call!(
    /// Fetches history of messages and events from a multiparty direct message.
    ///
    /// Wraps https://api.slack.com/methods/mpim.history
    history, HISTORY, (channel: &str)
);

pub const LIST: EndpointDescriptor = EndpointDescriptor::new("mpim", "list", Get, &[TOKEN]);

api_call!(
    /// Lists multiparty direct message channels for the calling user.
    ///
    /// Wraps https://api.slack.com/methods/mpim.list
    list, LIST, ()
);

pub const MARK: EndpointDescriptor =
    EndpointDescriptor::new("mpim", "mark", Post, &[TOKEN, required(CHANNEL), required(TS)]);

api_call!(
    /// Sets the read cursor in a multiparty direct message channel.
    ///
    /// Wraps https://api.slack.com/methods/mpim.mark
    mark, MARK, (channel: &str, ts: Timestamp)
);

pub const OPEN: EndpointDescriptor =
    EndpointDescriptor::new("mpim", "open", Post, &[TOKEN, required(USERS)]);

api_call!(
    /// Opens a multiparty direct message with `users`, sent comma-separated.
    ///
    /// Wraps https://api.slack.com/methods/mpim.open
    open, OPEN, (users: &[&str])
);
