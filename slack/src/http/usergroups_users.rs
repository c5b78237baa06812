//! List and replace the members of a User Group.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};

/// The encoded ID of the User Group.
pub const USERGROUP: &str = "usergroup";
/// Allow results that involve disabled User Groups.
pub const INCLUDE_DISABLED: &str = "include_disabled";
/// A comma separated string of encoded user IDs that represent the entire list of users for the User Group.
pub const USERS: &str = "users";
/// Include the number of users in the User Group.
pub const INCLUDE_COUNT: &str = "include_count";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[LIST, UPDATE];

pub const LIST: EndpointDescriptor = EndpointDescriptor::new(
    "usergroups.users",
    "list",
    Get,
    &[TOKEN, required(USERGROUP), optional(INCLUDE_DISABLED)],
);

api_call!(
    /// List all users in a User Group
    ///
    /// Wraps https://api.slack.com/methods/usergroups.users.list
    list, LIST, (usergroup: &str)
);

pub const UPDATE: EndpointDescriptor = EndpointDescriptor::new(
    "usergroups.users",
    "update",
    Post,
    &[
        TOKEN,
        required(USERGROUP),
        optional(USERS),
        optional(INCLUDE_COUNT),
    ],
);

api_call!(
    /// Update the list of users for a User Group
    ///
    /// Wraps https://api.slack.com/methods/usergroups.users.update
    update, UPDATE, (usergroup: &str)
);
