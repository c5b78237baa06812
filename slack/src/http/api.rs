//! Check that calling code can reach Slack.

use super::Method::Get;
use super::{optional, EndpointDescriptor};

/// Error response to return.
pub const ERROR: &str = "error";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[TEST];

pub const TEST: EndpointDescriptor =
    EndpointDescriptor::new("api", "test", Get, &[optional(ERROR)]);

api_call!(
    /// Checks API calling code. Needs no token; every argument is echoed back.
    ///
    /// Wraps https://api.slack.com/methods/api.test
    test, TEST, ()
);
