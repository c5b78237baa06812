//! Get info on your team's Slack channels, create or archive channels, invite users, set the topic and purpose, and mark a channel as read.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};
use crate::timestamp::Timestamp;

pub const CHANNEL: &str = "channel";
pub const NAME: &str = "name";
pub const USER: &str = "user";
pub const TS: &str = "ts";
pub const PURPOSE: &str = "purpose";
pub const TOPIC: &str = "topic";
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
/// Don't return archived channels.
pub const EXCLUDE_ARCHIVED: &str = "exclude_archived";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[
    ARCHIVE, CREATE, HISTORY, INFO, INVITE, JOIN, KICK, LEAVE, LIST, MARK, RENAME, SET_PURPOSE,
    SET_TOPIC, UNARCHIVE,
];

pub const ARCHIVE: EndpointDescriptor =
    EndpointDescriptor::new("channels", "archive", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Archives a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.archive
    archive, ARCHIVE, (channel: &str)
);

pub const CREATE: EndpointDescriptor =
    EndpointDescriptor::new("channels", "create", Post, &[TOKEN, required(NAME)]);

api_call!(
    /// Creates a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.create
    create, CREATE, (name: &str)
);

pub const HISTORY: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
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
    /// Fetches history of messages and events from a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.history
    history, HISTORY, (channel: &str)
);

pub const INFO: EndpointDescriptor =
    EndpointDescriptor::new("channels", "info", Get, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Gets information about a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.info
    info, INFO, (channel: &str)
);

pub const INVITE: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
    "invite",
    Post,
    &[TOKEN, required(CHANNEL), required(USER)],
);

api_call!(
    /// Invites a user to a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.invite
    invite, INVITE, (channel: &str, user: &str)
);

pub const JOIN: EndpointDescriptor =
    EndpointDescriptor::new("channels", "join", Post, &[TOKEN, required(NAME)]);

api_call!(
    /// Joins a channel, creating it if needed.
    ///
    /// Wraps https://api.slack.com/methods/channels.join
    join, JOIN, (name: &str)
);

pub const KICK: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
    "kick",
    Post,
    &[TOKEN, required(CHANNEL), required(USER)],
);

api_call!(
    /// Removes a user from a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.kick
    kick, KICK, (channel: &str, user: &str)
);

pub const LEAVE: EndpointDescriptor =
    EndpointDescriptor::new("channels", "leave", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Leaves a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.leave
    leave, LEAVE, (channel: &str)
);

pub const LIST: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
    "list",
    Get,
    &[TOKEN, optional(EXCLUDE_ARCHIVED)],
);

api_call!(
    /// Lists all channels in a Slack team.
    ///
    /// Wraps https://api.slack.com/methods/channels.list
    list, LIST, ()
);

pub const MARK: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
    "mark",
    Post,
    &[TOKEN, required(CHANNEL), required(TS)],
);

api_call!(
    /// Sets the read cursor in a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.mark
    mark, MARK, (channel: &str, ts: Timestamp)
);

pub const RENAME: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
    "rename",
    Post,
    &[TOKEN, required(CHANNEL), required(NAME)],
);

api_call!(
    /// Renames a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.rename
    rename, RENAME, (channel: &str, name: &str)
);

pub const SET_PURPOSE: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
    "setPurpose",
    Post,
    &[TOKEN, required(CHANNEL), required(PURPOSE)],
);

api_call!(
    /// Sets the purpose for a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.setPurpose
    set_purpose, SET_PURPOSE, (channel: &str, purpose: &str)
);

pub const SET_TOPIC: EndpointDescriptor = EndpointDescriptor::new(
    "channels",
    "setTopic",
    Post,
    &[TOKEN, required(CHANNEL), required(TOPIC)],
);

api_call!(
    /// Sets the topic for a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.setTopic
    set_topic, SET_TOPIC, (channel: &str, topic: &str)
);

pub const UNARCHIVE: EndpointDescriptor =
    EndpointDescriptor::new("channels", "unarchive", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Unarchives a channel.
    ///
    /// Wraps https://api.slack.com/methods/channels.unarchive
    unarchive, UNARCHIVE, (channel: &str)
);
