//! Starts a Real Time Messaging session.

use super::Method::Get;
use super::{optional, EndpointDescriptor, TOKEN};

/// Return timestamp only for latest message object of each channel (improves performance).
pub const SIMPLE_LATEST: &str = "simple_latest";
/// Skip unread counts for each channel (improves performance).
pub const NO_UNREADS: &str = "no_unreads";
/// Returns MPIMs to the client in the API response.
pub const MPIM_AWARE: &str = "mpim_aware";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[START];

pub const START: EndpointDescriptor = EndpointDescriptor::new(
    "rtm",
    "start",
    Get,
    &[TOKEN, optional(SIMPLE_LATEST), optional(NO_UNREADS), optional(MPIM_AWARE)],
);

api_call!(
    /// Starts a Real Time Messaging session.
    ///
    /// The response carries the websocket URL; this crate does not connect to it.
    ///
    /// Wraps https://api.slack.com/methods/rtm.start
    start, START, ()
);
