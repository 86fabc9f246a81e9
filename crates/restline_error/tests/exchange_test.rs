use std::error::Error;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

use restline_core::{Body, Response, StatusLine};
use restline_error::ExchangeError;

const FIRST_LINE: &str =
    "method [GET], host [localhost:9200], URI [/index/_doc/1], status line [HTTP/1.1 404 Not Found]";

fn not_found() -> Response {
    Response::new(
        "GET",
        "localhost:9200",
        "/index/_doc/1",
        StatusLine::new("HTTP/1.1", 404, "Not Found"),
    )
}

#[test]
fn message_without_body_is_the_single_line() {
    let err = ExchangeError::from_response(not_found()).unwrap();
    assert_eq!(err.message(), FIRST_LINE);
    assert_eq!(err.to_string(), FIRST_LINE);
    assert!(err.cause().is_none());
    assert!(err.source().is_none());
}

#[test]
fn message_reflects_each_exchange_field() {
    let response = Response::new(
        "DELETE",
        "search.example.com:443",
        "/logs-2026.08",
        StatusLine::new("HTTP/1.1", 403, "Forbidden"),
    );
    let err = ExchangeError::from_response(response).unwrap();
    assert_eq!(
        err.message(),
        "method [DELETE], host [search.example.com:443], URI [/logs-2026.08], \
         status line [HTTP/1.1 403 Forbidden]",
    );
}

#[test]
fn message_appends_body_text_on_a_second_line() {
    let response = not_found().with_body(Body::buffered("{\"error\":\"not_found\"}"));
    let err = ExchangeError::from_response(response).unwrap();
    assert_eq!(err.message(), format!("{FIRST_LINE}\n{{\"error\":\"not_found\"}}"));
}

#[test]
fn empty_body_still_adds_the_separator_line() {
    let response = not_found().with_body(Body::buffered(Vec::<u8>::new()));
    let err = ExchangeError::from_response(response).unwrap();
    assert_eq!(err.message(), format!("{FIRST_LINE}\n"));
}

#[test]
fn non_repeatable_body_stays_readable_after_construction() {
    let response = not_found().with_body(Body::streaming(Cursor::new(
        b"{\"error\":\"not_found\"}".to_vec(),
    )));
    let err = ExchangeError::from_response(response).unwrap();
    assert!(err.message().ends_with("\n{\"error\":\"not_found\"}"));

    // The streaming body was replaced by a buffered copy holding the same
    // bytes that went into the message.
    let body = err.response().body().expect("body survives construction");
    assert!(body.is_repeatable());
    assert_eq!(body.text().as_deref(), Some("{\"error\":\"not_found\"}"));
}

#[test]
fn repeatable_body_bytes_match_the_message() {
    let response = not_found().with_body(Body::buffered("oops"));
    let err = ExchangeError::from_response(response).unwrap();
    assert_eq!(err.message(), format!("{FIRST_LINE}\noops"));
    assert_eq!(err.response().body().and_then(Body::bytes), Some(&b"oops"[..]));
}

#[test]
fn held_response_is_the_one_passed_in() {
    let err = ExchangeError::from_response(not_found()).unwrap();
    let response = err.response();
    assert_eq!(response.method(), "GET");
    assert_eq!(response.host(), "localhost:9200");
    assert_eq!(response.request_uri(), "/index/_doc/1");
    assert_eq!(response.status_line().to_string(), "HTTP/1.1 404 Not Found");
}

#[test]
fn body_read_failure_aborts_construction() {
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer hung up"))
        }
    }

    let response = not_found().with_body(Body::streaming(FailingReader));
    let err = ExchangeError::from_response(response).expect_err("construction must fail");
    assert_eq!(err.source.kind(), io::ErrorKind::ConnectionReset);
    assert!(err.to_string().starts_with("Body read error: peer hung up"));
}

#[test]
fn rethrow_preserves_message_and_chains_cause() {
    let err = ExchangeError::from_response(not_found()).unwrap();
    let message = err.message().to_owned();
    let response = err.shared_response();

    let rethrown = err.rethrow();
    assert_eq!(rethrown.message(), message);
    assert!(Arc::ptr_eq(&rethrown.shared_response(), &response));

    let cause = rethrown.cause().expect("prior error is the cause");
    assert_eq!(cause.message(), message);
    assert!(rethrown.source().is_some());
}

#[test]
fn rethrow_captures_the_new_call_site() {
    let err = ExchangeError::from_response(not_found()).unwrap();
    let original_line = err.line();

    let rethrown = err.rethrow();
    assert_eq!(rethrown.file(), file!());
    assert_ne!(rethrown.line(), original_line);
    assert_eq!(rethrown.cause().unwrap().line(), original_line);
}
