//! Get info on your team's User Groups.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};

/// The encoded ID of the User Group.
pub const USERGROUP: &str = "usergroup";
/// A name for the User Group. Must be unique among User Groups.
pub const NAME: &str = "name";
/// A mention handle. Must be unique among channels, users and User Groups.
pub const HANDLE: &str = "handle";
/// A short description of the User Group.
pub const DESCRIPTION: &str = "description";
/// A comma separated string of encoded channel IDs for which the User Group uses as a default.
pub const CHANNELS: &str = "channels";
/// Include the number of users in each User Group.
pub const INCLUDE_COUNT: &str = "include_count";
/// Include disabled User Groups.
pub const INCLUDE_DISABLED: &str = "include_disabled";
/// Include the list of users for each User Group.
pub const INCLUDE_USERS: &str = "include_users";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[CREATE, DISABLE, ENABLE, LIST, UPDATE];

pub const CREATE: EndpointDescriptor = EndpointDescriptor::new(
    "usergroups",
    "create",
    Post,
    &[
        TOKEN,
        required(NAME),
        optional(HANDLE),
        optional(DESCRIPTION),
        optional(CHANNELS),
        optional(INCLUDE_COUNT),
    ],
);

api_call!(
    /// Create a User Group
    ///
    /// Wraps https://api.slack.com/methods/usergroups.create
    create, CREATE, (name: &str)
);

pub const DISABLE: EndpointDescriptor = EndpointDescriptor::new(
    "usergroups",
    "disable",
    Post,
    &[TOKEN, required(USERGROUP), optional(INCLUDE_COUNT)],
);

api_call!(
    /// Disable an existing User Group
    ///
    /// Wraps https://api.slack.com/methods/usergroups.disable
    disable, DISABLE, (usergroup: &str)
);

pub const ENABLE: EndpointDescriptor = EndpointDescriptor::new(
    "usergroups",
    "enable",
    Post,
    &[TOKEN, required(USERGROUP), optional(INCLUDE_COUNT)],
);

api_call!(
    /// Enable a User Group
    ///
    /// Wraps https://api.slack.com/methods/usergroups.enable
    enable, ENABLE, (usergroup: &str)
);

pub const LIST: EndpointDescriptor = EndpointDescriptor::new(
    "usergroups",
    "list",
    Get,
    &[
        TOKEN,
        optional(INCLUDE_DISABLED),
        optional(INCLUDE_COUNT),
        optional(INCLUDE_USERS),
    ],
);

api_call!(
    /// List all User Groups for a team
    ///
    /// Wraps https://api.slack.com/methods/usergroups.list
    list, LIST, ()
);

pub const UPDATE: EndpointDescriptor = EndpointDescriptor::new(
    "usergroups",
    "update",
    Post,
    &[
        TOKEN,
        required(USERGROUP),
        optional(NAME),
        optional(HANDLE),
        optional(DESCRIPTION),
        optional(CHANNELS),
        optional(INCLUDE_COUNT),
    ],
);

api_call!(
    /// Update an existing User Group
    ///
    /// Wraps https://api.slack.com/methods/usergroups.update
    update, UPDATE, (usergroup: &str)
);
