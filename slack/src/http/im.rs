//! Get info on your direct messages.

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
/// User to open a direct message channel with.
pub const USER: &str = "user";
/// Return a full IM channel object in the response.
pub const RETURN_IM: &str = "return_im";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[CLOSE, HISTORY, LIST, MARK, OPEN];

pub const CLOSE: EndpointDescriptor =
    EndpointDescriptor::new("im", "close", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Closes a direct message channel.
    ///
    /// Wraps https://api.slack.com/methods/im.close
    close, CLOSE, (channel: &str)
);

pub const HISTORY: EndpointDescriptor = EndpointDescriptor::new(
    "im",
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
    /// Fetches history of messages and events from a direct message.
    ///
    /// Wraps https://api.slack.com/methods/im.history
    history, HISTORY, (channel: &str)
);

pub const LIST: EndpointDescriptor = EndpointDescriptor::new("im", "list", Get, &[TOKEN]);

api_call!(
    /// Lists direct message channels for the calling user.
    ///
    /// Wraps https://api.slack.com/methods/im.list
    list, LIST, ()
);

pub const MARK: EndpointDescriptor =
    EndpointDescriptor::new("im", "mark", Post, &[TOKEN, required(CHANNEL), required(TS)]);

api_call!(
    /// Sets the read cursor in a direct message channel.
    ///
    /// Wraps https://api.slack.com/methods/im.mark
    mark, MARK, (channel: &str, ts: Timestamp)
);

pub const OPEN: EndpointDescriptor =
    EndpointDescriptor::new("im", "open", Post, &[TOKEN, required(USER)]);

api_call!(
    /// Opens a direct message channel.
    ///
    /// Wraps https://api.slack.com/methods/im.open
    open, OPEN, (user: &str)
);
