//! Checks authentication and tells you who you are.

use super::Method::Get;
use super::{EndpointDescriptor, TOKEN};

pub const DESCRIPTORS: &[EndpointDescriptor] = &[TEST];

pub const TEST: EndpointDescriptor = EndpointDescriptor::new("auth", "test", Get, &[TOKEN]);

api_call!(
    /// Checks authentication & identity.
    ///
    /// Wraps https://api.slack.com/methods/auth.test
    test, TEST, ()
);
