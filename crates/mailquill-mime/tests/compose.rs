//! End-to-end composition tests covering the wire-visible body contract.

#![allow(clippy::unwrap_used)]

use mailquill_mime::{Email, Error, Headers, MessagePart};

fn boundary_of(email: &Email) -> String {
    let content_type = email.headers().get("Content-Type").unwrap();
    let token = content_type
        .strip_prefix("multipart/alternative;boundary=\"")
        .unwrap();
    token.strip_suffix('"').unwrap().to_string()
}

/// Splits a serialized multipart body back into `(content_type, body)`
/// pairs using the boundary from the headers.
fn parse_parts(body: &str, boundary: &str) -> Vec<(String, String)> {
    let delimiter = format!("--{boundary}\r\n");
    let closing = format!("--{boundary}--");

    let inner = body
        .strip_prefix("This is a multi-part message in MIME format.\r\n")
        .unwrap();
    let inner = inner.strip_suffix(&closing).unwrap();

    inner
        .split(&delimiter)
        .skip(1)
        .map(|chunk| {
            let (headers, rest) = chunk.split_once("\r\n\r\n").unwrap();
            let content_type = headers
                .lines()
                .find_map(|line| line.strip_prefix("Content-Type: "))
                .unwrap();
            let content_type = content_type.split(';').next().unwrap().to_string();
            let part_body = rest.strip_suffix("\r\n\r\n").unwrap().to_string();
            (content_type, part_body)
        })
        .collect()
}

#[test]
fn composed_message_matches_wire_contract() {
    let email = Email::compose(
        "a@b.com",
        "Sender",
        "s@b.com",
        None,
        Headers::new(),
        "Hi",
        &[MessagePart::plain("Hello")],
    )
    .unwrap();

    let boundary = boundary_of(&email);
    assert_eq!(boundary.len(), 40);
    assert!(boundary.starts_with("--------"));
    assert!(
        boundary[8..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );

    assert_eq!(
        email.body(),
        format!(
            "This is a multi-part message in MIME format.\r\n\
             --{boundary}\r\n\
             Content-Type: text/plain; charset=UTF-8\r\n\
             Content-Transfer-Encoding: 8bit\r\n\
             \r\n\
             Hello\r\n\
             \r\n\
             --{boundary}--"
        )
    );
}

#[test]
fn round_trip_recovers_parts_in_order() {
    let supplied = [
        ("text/plain", "Hello, World!"),
        ("text/html", "<p>Hello, <b>World</b>!</p>"),
        ("text/plain", ""),
    ];
    let parts: Vec<MessagePart> = supplied
        .iter()
        .map(|(content_type, body)| MessagePart::new(*body, *content_type, Headers::new()))
        .collect();

    let email = Email::compose(
        "a@b.com",
        "Sender",
        "s@b.com",
        None,
        Headers::new(),
        "Round trip",
        &parts,
    )
    .unwrap();

    let recovered = parse_parts(email.body(), &boundary_of(&email));
    assert_eq!(recovered.len(), supplied.len());
    for ((content_type, body), (recovered_type, recovered_body)) in
        supplied.iter().zip(&recovered)
    {
        assert_eq!(recovered_type.as_str(), *content_type);
        assert_eq!(recovered_body.as_str(), *body);
    }
}

#[test]
fn header_block_renders_merged_headers_in_order() {
    let mut extra = Headers::new();
    extra.set("X-Campaign", "launch");

    let email = Email::compose(
        "a@b.com",
        "Sender",
        "s@b.com",
        Some("replies@b.com"),
        extra,
        "Hi",
        &[],
    )
    .unwrap();

    let block = email.header_block();
    let names: Vec<&str> = block
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(|line| line.split_once(':').unwrap().0)
        .collect();

    // Caller extras first, then system headers in generation order.
    assert_eq!(
        names,
        vec![
            "X-Campaign",
            "MIME-Version",
            "Date",
            "Content-Transfer-Encoding",
            "Content-Type",
            "From",
            "Reply-To",
        ]
    );
    assert!(block.ends_with("\r\n"));
}

#[test]
fn invalid_addresses_fail_before_composition() {
    for (to, from, reply_to) in [
        ("bad-address", "s@b.com", None),
        ("a@b.com", "also bad", None),
        ("a@b.com", "s@b.com", Some("nope")),
    ] {
        let result = Email::compose(to, "Sender", from, reply_to, Headers::new(), "Hi", &[]);
        assert!(matches!(result, Err(Error::InvalidAddress(_))));
    }
}
