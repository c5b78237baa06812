//! Get info on your team's private channels.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};
use crate::timestamp::Timestamp;

pub const CHANNEL: &str = "channel";
pub const NAME: &str = "name";
pub const USER: &str = "user";
pub const TS: &str = "ts";
pub const PURPOSE: &str = "purpose";
pub const TOPIC: &str = "topic";
pub const LATEST: &str = "latest";
pub const OLDEST: &str = "oldest";
pub const INCLUSIVE: &str = "inclusive";
pub const COUNT: &str = "count";
pub const UNREADS: &str = "unreads";
/// Don't return archived private channels.
pub const EXCLUDE_ARCHIVED: &str = "exclude_archived";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[
    ARCHIVE, CLOSE, CREATE, CREATE_CHILD, HISTORY, INFO, INVITE, KICK, LEAVE, LIST, MARK, OPEN,
    RENAME, SET_PURPOSE, SET_TOPIC, UNARCHIVE,
];

pub const ARCHIVE: EndpointDescriptor =
    EndpointDescriptor::new("groups", "archive", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Archives a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.archive
    archive, ARCHIVE, (channel: &str)
);

pub const CLOSE: EndpointDescriptor =
    EndpointDescriptor::new("groups", "close", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Closes a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.close
    close, CLOSE, (channel: &str)
);

pub const CREATE: EndpointDescriptor =
    EndpointDescriptor::new("groups", "create", Post, &[TOKEN, required(NAME)]);

api_call!(
    /// Creates a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.create
    create, CREATE, (name: &str)
);

pub const CREATE_CHILD: EndpointDescriptor =
    EndpointDescriptor::new("groups", "createChild", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Clones and archives a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.createChild
    create_child, CREATE_CHILD, (channel: &str)
);

pub const HISTORY: EndpointDescriptor = EndpointDescriptor::new(
    "groups",
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
    /// Fetches history of messages and events from a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.history
    history, HISTORY, (channel: &str)
);

pub const INFO: EndpointDescriptor =
    EndpointDescriptor::new("groups", "info", Get, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Gets information about a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.info
    info, INFO, (channel: &str)
);

pub const INVITE: EndpointDescriptor =
    EndpointDescriptor::new("groups", "invite", Post, &[TOKEN, required(CHANNEL), required(USER)]);

api_call!(
    /// Invites a user to a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.invite
    invite, INVITE, (channel: &str, user: &str)
);

pub const KICK: EndpointDescriptor =
    EndpointDescriptor::new("groups", "kick", Post, &[TOKEN, required(CHANNEL), required(USER)]);

api_call!(
    /// Removes a user from a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.kick
    kick, KICK, (channel: &str, user: &str)
);

pub const LEAVE: EndpointDescriptor =
    EndpointDescriptor::new("groups", "leave", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Leaves a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.leave
    leave, LEAVE, (channel: &str)
);

pub const LIST: EndpointDescriptor =
    EndpointDescriptor::new("groups", "list", Get, &[TOKEN, optional(EXCLUDE_ARCHIVED)]);

api_call!(
    /// Lists private channels that the calling user has access to.
    ///
    /// Wraps https://api.slack.com/methods/groups.list
    list, LIST, ()
);

pub const MARK: EndpointDescriptor =
    EndpointDescriptor::new("groups", "mark", Post, &[TOKEN, required(CHANNEL), required(TS)]);

api_call!(
    /// Sets the read cursor in a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.mark
    mark, MARK, (channel: &str, ts: Timestamp)
);

pub const OPEN: EndpointDescriptor =
    EndpointDescriptor::new("groups", "open", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Opens a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.open
    open, OPEN, (channel: &str)
);

pub const RENAME: EndpointDescriptor =
    EndpointDescriptor::new("groups", "rename", Post, &[TOKEN, required(CHANNEL), required(NAME)]);

api_call!(
    /// Renames a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.rename
    rename, RENAME, (channel: &str, name: &str)
);

pub const SET_PURPOSE: EndpointDescriptor = EndpointDescriptor::new(
    "groups",
    "setPurpose",
    Post,
    &[
        TOKEN,
        required(CHANNEL),
        required(PURPOSE),
    ],
);

api_call!(
    /// Sets the purpose for a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.setPurpose
    set_purpose, SET_PURPOSE, (channel: &str, purpose: &str)
);

pub const SET_TOPIC: EndpointDescriptor = EndpointDescriptor::new(
    "groups",
    "setTopic",
    Post,
    &[
        TOKEN,
        required(CHANNEL),
        required(TOPIC),
    ],
);

api_call!(
    /// Sets the topic for a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.setTopic
    set_topic, SET_TOPIC, (channel: &str, topic: &str)
);

pub const UNARCHIVE: EndpointDescriptor =
    EndpointDescriptor::new("groups", "unarchive", Post, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Unarchives a private channel.
    ///
    /// Wraps https://api.slack.com/methods/groups.unarchive
    unarchive, UNARCHIVE, (channel: &str)
);
