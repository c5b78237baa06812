//! Functionality for sending requests to Slack.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use derive_new::new;
use lazy_static::lazy_static;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::SlackConfig;
use crate::options::RequestOptions;

mod descriptor;
pub use self::descriptor::{
    optional, required, EndpointDescriptor, Registry, Slot, SlotDefault, TOKEN,
};

/// Ask Slack to pretty-print its JSON. Accepted by every method.
pub const PRETTY: &str = "pretty";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Whether parameters travel in the query string rather than the body.
    pub fn uses_query(self) -> bool {
        self == Method::Get
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

pub trait SlackSender {
    type Error: ::std::error::Error + Send + Sync + 'static;

    /// Make one HTTP request and hand back the body bytes, whatever they say.
    ///
    /// `params` goes in the query string for GET and in a form encoded body
    /// for POST, PUT and DELETE.
    fn send_structured<T: ::serde::Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        params: &T,
    ) -> Result<Vec<u8>, Self::Error>;
}

/// The default transport, built on a blocking `reqwest` client.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestSender {
    following: ::reqwest::blocking::Client,
    direct: ::reqwest::blocking::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestSender {
    pub fn new(config: &SlackConfig) -> Result<Self, ::reqwest::Error> {
        use reqwest::redirect::Policy;

        let limit = config.redirect_limit;
        // Past the limit the redirect response itself is returned
        let following = Policy::custom(move |attempt| {
            if attempt.previous().len() > limit {
                attempt.stop()
            } else {
                attempt.follow()
            }
        });

        Ok(ReqwestSender {
            following: Self::build(config, following)?,
            direct: Self::build(config, Policy::none())?,
        })
    }

    fn build(
        config: &SlackConfig,
        policy: ::reqwest::redirect::Policy,
    ) -> Result<::reqwest::blocking::Client, ::reqwest::Error> {
        let mut builder = ::reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(policy);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(::std::time::Duration::from_secs(secs));
        }
        builder.build()
    }
}

#[cfg(feature = "reqwest")]
impl SlackSender for ReqwestSender {
    type Error = ::reqwest::Error;

    fn send_structured<T: ::serde::Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        params: &T,
    ) -> Result<Vec<u8>, ::reqwest::Error> {
        let request = match method {
            Method::Get => self.following.get(url).query(params),
            Method::Post => self.direct.post(url).form(params),
            Method::Put => self.direct.put(url).form(params),
            Method::Delete => self.direct.delete(url).form(params),
        };
        Ok(request.send()?.bytes()?.to_vec())
    }
}

#[derive(Debug, Error)]
pub enum Error<E: ::std::error::Error + 'static> {
    /// The request never produced a response body.
    #[error("the transport failed: {0}")]
    Transport(#[source] E),
    #[error("{0} is not a known Slack method")]
    UnknownMethod(String),
}

/// A response body exactly as Slack sent it, byte for byte.
///
/// Nothing here has looked at the `ok` field; use [`ApiResponse::envelope`]
/// to find out whether Slack reported an error.
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct ApiResponse {
    body: Vec<u8>,
}

/// The fields every Slack response carries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    pub error: Option<String>,
    pub warning: Option<String>,
}

impl ApiResponse {
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// The body as text. Invalid UTF-8 is replaced with U+FFFD here only;
    /// [`ApiResponse::as_bytes`] still has what was received.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ::serde_json::Error> {
        ::serde_json::from_slice(&self.body)
    }

    pub fn envelope(&self) -> Result<Envelope, ::serde_json::Error> {
        self.json()
    }
}

impl AsRef<[u8]> for ApiResponse {
    fn as_ref(&self) -> &[u8] {
        &self.body
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text())
    }
}

lazy_static! {
    static ref STANDARD_REGISTRY: Arc<Registry> = Arc::new(Registry::standard());
}

/// The registry of every method in this crate, built on first use.
pub fn standard_registry() -> Arc<Registry> {
    STANDARD_REGISTRY.clone()
}

/// Sends Slack methods for one team.
///
/// Holds no mutable state, so one client can serve any number of threads.
#[derive(Clone, Debug, new)]
pub struct Client<C> {
    sender: C,
    config: SlackConfig,
    #[new(value = "standard_registry()")]
    registry: Arc<Registry>,
}

impl<C: SlackSender> Client<C> {
    pub fn with_registry(sender: C, config: SlackConfig, registry: Arc<Registry>) -> Self {
        Client {
            sender,
            config,
            registry,
        }
    }

    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn sender(&self) -> &C {
        &self.sender
    }

    pub fn endpoint(&self, descriptor: &EndpointDescriptor) -> String {
        format!(
            "{}{}.{}",
            self.config.base_url(),
            descriptor.family,
            descriptor.action
        )
    }

    /// Builds the parameters `descriptor` would send for `options`: the
    /// template, overlaid with `options`, minus anything unset.
    ///
    /// A required slot nobody set is left out like any other unset key.
    pub fn prepare(
        &self,
        descriptor: &EndpointDescriptor,
        options: RequestOptions,
    ) -> RequestOptions {
        let mut template = RequestOptions::new();
        for slot in descriptor.template {
            match slot.default {
                SlotDefault::Token => template.set(slot.name, self.config.token.as_str()),
                SlotDefault::Required | SlotDefault::Optional => template.unset(slot.name),
            }
        }
        template.merge(options).filtered()
    }

    /// Sends `descriptor` with its positional `arguments`, letting `options`
    /// override anything.
    pub fn call(
        &self,
        descriptor: &EndpointDescriptor,
        arguments: RequestOptions,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error<C::Error>> {
        self.send(descriptor.method, descriptor, arguments.merge(options))
    }

    /// Sends a registered method by family and action, with an explicit verb.
    pub fn dispatch(
        &self,
        method: Method,
        family: &str,
        action: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error<C::Error>> {
        let descriptor = *self
            .registry
            .get(family, action)
            .ok_or_else(|| Error::UnknownMethod(format!("{}.{}", family, action)))?;
        self.send(method, &descriptor, options)
    }

    /// Sends a registered method by its full name, e.g. `chat.postMessage`.
    pub fn invoke(
        &self,
        name: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error<C::Error>> {
        let descriptor = *self
            .registry
            .resolve(name)
            .ok_or_else(|| Error::UnknownMethod(name.to_string()))?;
        self.send(descriptor.method, &descriptor, options)
    }

    fn send(
        &self,
        method: Method,
        descriptor: &EndpointDescriptor,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error<C::Error>> {
        let params = self.prepare(descriptor, options);
        let url = self.endpoint(descriptor);
        debug!(
            "{} {} [{}]",
            method,
            descriptor,
            params.keys().collect::<Vec<_>>().join(", ")
        );

        self.sender
            .send_structured(method, &url, &params.to_params())
            .map(ApiResponse::new)
            .map_err(|e| {
                warn!("{} {} failed: {}", method, descriptor, e);
                Error::Transport(e)
            })
    }
}

/// Declares the wrapper function for one Slack method. Each positional
/// argument is sent under its own name.
macro_rules! api_call {
    ($(#[$attr:meta])* $name:ident, $descriptor:expr, ($($arg:ident: $ty:ty),*)) => {
        $(#[$attr])*
        pub fn $name<C: $crate::http::SlackSender>(
            client: &$crate::http::Client<C>,
            $($arg: $ty,)*
            options: $crate::options::RequestOptions,
        ) -> Result<$crate::http::ApiResponse, $crate::http::Error<C::Error>> {
            let arguments = $crate::options::RequestOptions::new()$(.with(stringify!($arg), $arg))*;
            client.call(&$descriptor, arguments, options)
        }
    };
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn endpoint_urls() {
        let client = client();
        assert_eq!(
            client.endpoint(&chat::POST_MESSAGE),
            "https://slack.com/api/chat.postMessage"
        );
        assert_eq!(
            client.endpoint(&usergroups_users::LIST),
            "https://slack.com/api/usergroups.users.list"
        );
    }

    #[test]
    fn dispatch_by_name_fills_the_template() {
        let client = client();
        client
            .dispatch(
                Method::Get,
                "channels",
                "history",
                RequestOptions::new()
                    .with("channel", "C123")
                    .with("latest", "123.456"),
            )
            .unwrap();
        let sent = client.sender().last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "https://slack.com/api/channels.history");
        assert_eq!(
            sent.params(),
            pairs(&[("token", TEST_TOKEN), ("channel", "C123"), ("latest", "123.456")])
        );
    }

    #[test]
    fn dispatch_uses_the_given_verb() {
        let client = client();
        client
            .dispatch(Method::Delete, "files", "delete", RequestOptions::new().with("file", "F1"))
            .unwrap();
        let sent = client.sender().last();
        assert_eq!(sent.method, Method::Delete);
        assert!(sent.query.is_none());
        assert_eq!(sent.body.as_deref(), Some("token=xoxb-test&file=F1"));
    }

    #[test]
    fn only_get_uses_the_query_string() {
        assert!(Method::Get.uses_query());
        assert!(!Method::Post.uses_query());
        assert!(!Method::Put.uses_query());
        assert!(!Method::Delete.uses_query());
    }

    #[test]
    fn unknown_method_sends_nothing() {
        let client = client();
        match client.invoke("channels.explode", RequestOptions::new()) {
            Err(Error::UnknownMethod(name)) => assert_eq!(name, "channels.explode"),
            other => panic!("expected UnknownMethod, got {:?}", other),
        }
        assert_eq!(client.sender().count(), 0);
    }

    #[test]
    fn missing_required_parameter_is_left_out() {
        let client = client();
        client
            .invoke("chat.postMessage", RequestOptions::new().with("channel", "C1"))
            .unwrap();
        assert_eq!(client.sender().count(), 1);
        assert_eq!(
            client.sender().last().params(),
            pairs(&[("token", TEST_TOKEN), ("channel", "C1")])
        );

        client
            .dispatch(Method::Get, "files", "info", RequestOptions::new())
            .unwrap();
        assert_eq!(client.sender().last().query.as_deref(), Some("token=xoxb-test"));
    }

    #[test]
    fn unsetting_a_required_parameter_drops_it() {
        let client = client();
        channels::archive(&client, "C1", RequestOptions::new().without("channel")).unwrap();
        let sent = client.sender().last();
        assert_eq!(sent.url, "https://slack.com/api/channels.archive");
        assert_eq!(sent.body.as_deref(), Some("token=xoxb-test"));
    }

    #[test]
    fn bodies_are_kept_byte_for_byte() {
        struct Latin1;
        impl SlackSender for Latin1 {
            type Error = Refused;
            fn send_structured<T: ::serde::Serialize + ?Sized>(
                &self,
                _: Method,
                _: &str,
                _: &T,
            ) -> Result<Vec<u8>, Refused> {
                Ok(b"{\"ok\":true,\"name\":\"caf\xe9\"}".to_vec())
            }
        }

        let client = Client::new(Latin1, SlackConfig::new(TEST_TOKEN));
        let response = auth::test(&client, RequestOptions::new()).unwrap();
        assert_eq!(response.as_bytes(), b"{\"ok\":true,\"name\":\"caf\xe9\"}");
        assert_eq!(response.text(), "{\"ok\":true,\"name\":\"caf\u{fffd}\"}");
        assert!(response.json::<Envelope>().is_err());
    }

    #[test]
    fn unsetting_the_token_drops_it() {
        let client = client();
        auth::test(&client, RequestOptions::new().without("token")).unwrap();
        assert!(client.sender().last().params().is_empty());
    }

    #[test]
    fn transport_failure_is_tried_once() {
        let client = Client::new(
            Recorder {
                refuse: true,
                ..Recorder::default()
            },
            SlackConfig::new(TEST_TOKEN),
        );
        let result = channels::archive(&client, "C123", RequestOptions::new());
        assert!(matches!(result, Err(Error::Transport(Refused))));
        assert_eq!(client.sender().count(), 1);
    }

    #[test]
    fn slack_errors_are_not_errors() {
        struct NotAuthed;
        impl SlackSender for NotAuthed {
            type Error = Refused;
            fn send_structured<T: ::serde::Serialize + ?Sized>(
                &self,
                _: Method,
                _: &str,
                _: &T,
            ) -> Result<Vec<u8>, Refused> {
                Ok(br#"{"ok":false,"error":"not_authed"}"#.to_vec())
            }
        }

        let client = Client::new(NotAuthed, SlackConfig::new(TEST_TOKEN));
        let response = auth::test(&client, RequestOptions::new()).unwrap();
        assert_eq!(response.text(), r#"{"ok":false,"error":"not_authed"}"#);
        let envelope = response.envelope().unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.error.as_deref(), Some("not_authed"));
    }

    #[test]
    fn get_never_sends_a_body_and_post_never_a_query() {
        let client = client();
        for descriptor in client.registry().iter() {
            let mut options = RequestOptions::new();
            for name in descriptor.required() {
                options.set(name, "X1");
            }
            client.invoke(&descriptor.name(), options).unwrap();
            let sent = client.sender().last();
            match descriptor.method {
                Method::Get => {
                    assert!(sent.body.is_none(), "{}", descriptor);
                    assert!(sent.query.is_some(), "{}", descriptor);
                }
                _ => {
                    assert!(sent.query.is_none(), "{}", descriptor);
                    assert!(sent.body.is_some(), "{}", descriptor);
                }
            }
        }
    }

    #[test]
    fn required_only_calls_send_token_and_required_keys() {
        let client = client();
        for descriptor in client.registry().iter() {
            let mut options = RequestOptions::new();
            let mut expected = Vec::new();
            if descriptor.uses_token() {
                expected.push("token".to_string());
            }
            for name in descriptor.required() {
                options.set(name, "X1");
                expected.push(name.to_string());
            }
            client.invoke(&descriptor.name(), options).unwrap();
            assert_eq!(client.sender().last().keys(), expected, "{}", descriptor);
        }
    }

    #[test]
    fn clients_share_nothing_across_threads() {
        let client = Arc::new(client());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let client = client.clone();
                ::std::thread::spawn(move || {
                    let channel = format!("C{}", i);
                    channels::info(&*client, &channel, RequestOptions::new()).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(client.sender().count(), 4);
    }
}

pub mod api;
pub mod auth;
pub mod channels;
pub mod chat;
pub mod emoji;
pub mod files;
pub mod groups;
pub mod im;
pub mod mpim;
pub mod oauth;
pub mod pins;
pub mod reactions;
pub mod rtm;
pub mod search;
pub mod stars;
pub mod usergroups;
pub mod usergroups_users;
