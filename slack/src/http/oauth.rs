//! Exchanges a temporary OAuth code for an API token.

use super::Method::Post;
use super::{optional, required, EndpointDescriptor};

/// Issued when you created your application.
pub const CLIENT_ID: &str = "client_id";
/// Issued when you created your application.
pub const CLIENT_SECRET: &str = "client_secret";
/// The code param returned via the OAuth callback.
pub const CODE: &str = "code";
/// This must match the originally submitted URI (if one was sent).
pub const REDIRECT_URI: &str = "redirect_uri";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[ACCESS];

pub const ACCESS: EndpointDescriptor = EndpointDescriptor::new(
    "oauth",
    "access",
    Post,
    &[
        required(CLIENT_ID),
        required(CLIENT_SECRET),
        required(CODE),
        optional(REDIRECT_URI),
    ],
);

api_call!(
    /// Exchanges a temporary OAuth code for an API token. Sends no token of its own.
    ///
    /// Wraps https://api.slack.com/methods/oauth.access
    access, ACCESS, (client_id: &str, client_secret: &str, code: &str)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::*;
    use crate::RequestOptions;

    #[test]
    fn test_access() {
        let client = client();
        access(
            &client,
            "4b39e9-752c4",
            "33fea0113f5b1",
            "ccdaa72ad",
            RequestOptions::new().with(REDIRECT_URI, "https://example.com/cb"),
        )
        .unwrap();
        let sent = client.sender().last();
        assert_eq!(sent.url, "https://slack.com/api/oauth.access");
        assert_eq!(
            sent.params(),
            pairs(&[
                ("client_id", "4b39e9-752c4"),
                ("client_secret", "33fea0113f5b1"),
                ("code", "ccdaa72ad"),
                ("redirect_uri", "https://example.com/cb"),
            ])
        );
    }
}
