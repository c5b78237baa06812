use httpmock::Method::{DELETE, GET, POST};
use httpmock::MockServer;

use slack_api::http::{channels, chat, mpim, Client, Error, ReqwestSender};
use slack_api::{RequestOptions, SlackConfig};

const TOKEN: &str = "xoxb-transport";

fn client_for(server: &MockServer) -> Client<ReqwestSender> {
    let config = SlackConfig::new(TOKEN).with_api_base(server.base_url());
    Client::new(ReqwestSender::new(&config).unwrap(), config)
}

#[test]
fn get_sends_a_query_string() {
    let server = MockServer::start();
    let history = server.mock(|when, then| {
        when.method(GET)
            .path("/channels.history")
            .header("user-agent", "APIPuncher-v1.0.0;")
            .query_param("token", TOKEN)
            .query_param("channel", "C123")
            .query_param("latest", "123.456");
        then.status(200).body(r#"{"ok":true,"messages":[]}"#);
    });

    let client = client_for(&server);
    let response = channels::history(
        &client,
        "C123",
        RequestOptions::new().with(channels::LATEST, "123.456"),
    )
    .unwrap();

    history.assert_calls(1);
    assert_eq!(response.text(), r#"{"ok":true,"messages":[]}"#);
}

#[test]
fn post_sends_a_form_body() {
    let server = MockServer::start();
    let post = server.mock(|when, then| {
        when.method(POST)
            .path("/chat.postMessage")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("token=xoxb-transport&channel=C123&text=hi");
        then.status(200).body(r#"{"ok":true,"ts":"1.000001"}"#);
    });

    let client = client_for(&server);
    chat::post_message(&client, "C123", "hi", RequestOptions::new()).unwrap();
    post.assert_calls(1);
}

#[test]
fn lists_travel_comma_joined() {
    let server = MockServer::start();
    let open = server.mock(|when, then| {
        when.method(POST)
            .path("/mpim.open")
            .body("token=xoxb-transport&users=U1%2CU2");
        then.status(200).body(r#"{"ok":true}"#);
    });

    let client = client_for(&server);
    mpim::open(&client, &["U1", "U2"], RequestOptions::new()).unwrap();
    open.assert_calls(1);
}

#[test]
fn delete_sends_a_form_body() {
    let server = MockServer::start();
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/files.delete")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("token=xoxb-transport&file=F1");
        then.status(200).body(r#"{"ok":true}"#);
    });

    let client = client_for(&server);
    client
        .dispatch(
            slack_api::http::Method::Delete,
            "files",
            "delete",
            RequestOptions::new().with("file", "F1"),
        )
        .unwrap();
    delete.assert_calls(1);
}

#[test]
fn bodies_come_back_unaltered() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/emoji.list");
        then.status(200).body(b"{\"ok\":true,\"x\":\"\xff\"}".to_vec());
    });

    let client = client_for(&server);
    let response = slack_api::http::emoji::list(&client, RequestOptions::new()).unwrap();
    assert_eq!(response.as_bytes(), b"{\"ok\":true,\"x\":\"\xff\"}");
}

#[test]
fn slack_errors_come_back_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/auth.test");
        then.status(200).body(r#"{"ok":false,"error":"invalid_auth"}"#);
    });

    let client = client_for(&server);
    let response = slack_api::http::auth::test(&client, RequestOptions::new()).unwrap();
    let envelope = response.envelope().unwrap();
    assert!(!envelope.ok);
    assert_eq!(envelope.error.as_deref(), Some("invalid_auth"));
}

#[test]
fn get_follows_redirects() {
    let server = MockServer::start();
    let moved = server.mock(|when, then| {
        when.method(GET).path("/channels.info");
        then.status(302).header("location", server.url("/landing"));
    });
    let landing = server.mock(|when, then| {
        when.method(GET).path("/landing");
        then.status(200).body(r#"{"ok":true,"channel":{}}"#);
    });

    let client = client_for(&server);
    let response = channels::info(&client, "C123", RequestOptions::new()).unwrap();

    moved.assert_calls(1);
    landing.assert_calls(1);
    assert_eq!(response.text(), r#"{"ok":true,"channel":{}}"#);
}

#[test]
fn get_stops_after_three_redirects() {
    let server = MockServer::start();
    let hops: Vec<_> = (0..4)
        .map(|i| {
            let next = server.url(format!("/hop{}", i + 1));
            let path = if i == 0 {
                "/channels.list".to_string()
            } else {
                format!("/hop{}", i)
            };
            server.mock(move |when, then| {
                when.method(GET).path(path);
                then.status(302)
                    .header("location", next)
                    .body(format!("hop {}", i));
            })
        })
        .collect();
    let end = server.mock(|when, then| {
        when.method(GET).path("/hop4");
        then.status(200).body(r#"{"ok":true}"#);
    });

    let client = client_for(&server);
    let response = channels::list(&client, RequestOptions::new()).unwrap();

    for hop in &hops {
        hop.assert_calls(1);
    }
    end.assert_calls(0);
    assert_eq!(response.text(), "hop 3");
}

#[test]
fn post_does_not_follow_redirects() {
    let server = MockServer::start();
    let moved = server.mock(|when, then| {
        when.method(POST).path("/channels.archive");
        then.status(302)
            .header("location", server.url("/elsewhere"))
            .body("moved");
    });
    let elsewhere = server.mock(|when, then| {
        when.path("/elsewhere");
        then.status(200).body(r#"{"ok":true}"#);
    });

    let client = client_for(&server);
    let response = channels::archive(&client, "C123", RequestOptions::new()).unwrap();

    moved.assert_calls(1);
    elsewhere.assert_calls(0);
    assert_eq!(response.text(), "moved");
}

#[test]
fn unreachable_host_is_a_transport_error() {
    let config = SlackConfig::new(TOKEN).with_api_base("http://127.0.0.1:1/api");
    let client = Client::new(ReqwestSender::new(&config).unwrap(), config);
    let result = channels::archive(&client, "C123", RequestOptions::new());
    assert!(matches!(result, Err(Error::Transport(_))));
}
