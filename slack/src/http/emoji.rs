//! Lists custom emoji for a team.

use super::Method::Get;
use super::{EndpointDescriptor, TOKEN};

pub const DESCRIPTORS: &[EndpointDescriptor] = &[LIST];

pub const LIST: EndpointDescriptor = EndpointDescriptor::new("emoji", "list", Get, &[TOKEN]);

api_call!(
    /// Lists custom emoji for a team.
    ///
    /// Wraps https://api.slack.com/methods/emoji.list
    list, LIST, ()
);
