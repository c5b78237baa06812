//! Pin and unpin messages and files in a channel.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};

pub const CHANNEL: &str = "channel";
/// File to pin or unpin.
pub const FILE: &str = "file";
/// File comment to pin or unpin.
pub const FILE_COMMENT: &str = "file_comment";
/// Timestamp of the message to pin or unpin.
pub const TIMESTAMP: &str = "timestamp";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[ADD, LIST, REMOVE];

pub const ADD: EndpointDescriptor = EndpointDescriptor::new(
    "pins",
    "add",
    Post,
    &[
        TOKEN,
        required(CHANNEL),
        optional(FILE),
        optional(FILE_COMMENT),
        optional(TIMESTAMP),
    ],
);

api_call!(
    /// Pins an item to a channel. Name the item with one of `file`,
    /// `file_comment` or `timestamp`.
    ///
    /// Wraps https://api.slack.com/methods/pins.add
    add, ADD, (channel: &str)
);

pub const LIST: EndpointDescriptor =
    EndpointDescriptor::new("pins", "list", Get, &[TOKEN, required(CHANNEL)]);

api_call!(
    /// Lists items pinned to a channel.
    ///
    /// Wraps https://api.slack.com/methods/pins.list
    list, LIST, (channel: &str)
);

pub const REMOVE: EndpointDescriptor = EndpointDescriptor::new(
    "pins",
    "remove",
    Post,
    &[
        TOKEN,
        required(CHANNEL),
        optional(FILE),
        optional(FILE_COMMENT),
        optional(TIMESTAMP),
    ],
);

api_call!(
    /// Un-pins an item from a channel.
    ///
    /// Wraps https://api.slack.com/methods/pins.remove
    remove, REMOVE, (channel: &str)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::*;
    use crate::http::Method;
    use crate::timestamp::Timestamp;
    use crate::RequestOptions;

    #[test]
    fn test_add_message() {
        let client = client();
        let ts: Timestamp = "1440000000.000100".parse().unwrap();
        add(&client, "C123", RequestOptions::new().with(TIMESTAMP, ts)).unwrap();
        assert_eq!(
            client.sender().last().params(),
            pairs(&[
                ("token", TEST_TOKEN),
                ("channel", "C123"),
                ("timestamp", "1440000000.000100")
            ])
        );
    }

    #[test]
    fn test_list() {
        let client = client();
        list(&client, "C123", RequestOptions::new()).unwrap();
        let sent = client.sender().last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.query.as_deref(), Some("token=xoxb-test&channel=C123"));
    }

    #[test]
    fn test_remove_file() {
        let client = client();
        remove(&client, "C123", RequestOptions::new().with(FILE, "F1")).unwrap();
        let sent = client.sender().last();
        assert_eq!(sent.url, "https://slack.com/api/pins.remove");
        assert_eq!(sent.keys(), ["token", "channel", "file"]);
    }
}
