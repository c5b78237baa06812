//! Post chat messages to Slack.

use super::Method::Post;
use super::{optional, required, EndpointDescriptor, TOKEN};
use crate::options::Value;
use crate::timestamp::Timestamp;

pub const CHANNEL: &str = "channel";
pub const TEXT: &str = "text";
pub const TS: &str = "ts";
/// Set your bot's user name. Must be used in conjunction with as_user set to false, otherwise ignored.
pub const USERNAME: &str = "username";
/// Pass true to post the message as the authed user, instead of as a bot.
pub const AS_USER: &str = "as_user";
/// Change how messages are treated. See [`ParseMode`].
pub const PARSE: &str = "parse";
/// Find and link channel names and usernames.
pub const LINK_NAMES: &str = "link_names";
/// Structured message attachments, as a JSON string.
pub const ATTACHMENTS: &str = "attachments";
/// Pass true to enable unfurling of primarily text-based content.
pub const UNFURL_LINKS: &str = "unfurl_links";
/// Pass false to disable unfurling of media content.
pub const UNFURL_MEDIA: &str = "unfurl_media";
/// URL to an image to use as the icon for this message.
pub const ICON_URL: &str = "icon_url";
/// Emoji to use as the icon for this message. Overrides icon_url.
pub const ICON_EMOJI: &str = "icon_emoji";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[POST_MESSAGE, DELETE, UPDATE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    None,
    Full,
}

impl From<ParseMode> for Value {
    fn from(mode: ParseMode) -> Value {
        Value::Str(
            match mode {
                ParseMode::None => "none",
                ParseMode::Full => "full",
            }
            .to_string(),
        )
    }
}

pub const POST_MESSAGE: EndpointDescriptor = EndpointDescriptor::new(
    "chat",
    "postMessage",
    Post,
    &[
        TOKEN,
        required(CHANNEL),
        required(TEXT),
        optional(USERNAME),
        optional(AS_USER),
        optional(PARSE),
        optional(LINK_NAMES),
        optional(ATTACHMENTS),
        optional(UNFURL_LINKS),
        optional(UNFURL_MEDIA),
        optional(ICON_URL),
        optional(ICON_EMOJI),
    ],
);

api_call!(
    /// Sends a message to a channel.
    ///
    /// `channel` can be a public channel, private group, or IM channel, as an
    /// encoded ID or a name.
    ///
    /// Wraps https://api.slack.com/methods/chat.postMessage
    post_message, POST_MESSAGE, (channel: &str, text: &str)
);

pub const DELETE: EndpointDescriptor = EndpointDescriptor::new(
    "chat",
    "delete",
    Post,
    &[TOKEN, required(TS), required(CHANNEL)],
);

api_call!(
    /// Deletes a message.
    ///
    /// Wraps https://api.slack.com/methods/chat.delete
    delete, DELETE, (channel: &str, ts: Timestamp)
);

pub const UPDATE: EndpointDescriptor = EndpointDescriptor::new(
    "chat",
    "update",
    Post,
    &[
        TOKEN,
        required(TS),
        required(CHANNEL),
        required(TEXT),
        optional(ATTACHMENTS),
        optional(PARSE),
        optional(LINK_NAMES),
    ],
);

api_call!(
    /// Updates a message.
    ///
    /// Wraps https://api.slack.com/methods/chat.update
    update, UPDATE, (channel: &str, ts: Timestamp, text: &str)
);
