//! # mailquill-mime
//!
//! Multipart MIME message composition for email.
//!
//! ## Features
//!
//! - **Message composition**: Build `multipart/alternative` messages from
//!   an ordered list of typed body parts
//! - **Address validation**: RFC 5322 subset syntax checks for recipient,
//!   sender, and reply-to addresses
//! - **Header handling**: Insertion-ordered header map with wire-exact
//!   CRLF rendering
//! - **Subject encoding**: RFC 2047 encoded words for non-ASCII subjects
//! - **Plain-text fallback**: Best-effort HTML to plain text conversion
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailquill_mime::{Email, Headers, MessagePart, html_to_plain};
//!
//! let html = "<p>Hello, <b>World</b>!</p>";
//! let parts = [
//!     MessagePart::plain(html_to_plain(html)),
//!     MessagePart::html(html),
//! ];
//!
//! let email = Email::compose(
//!     "recipient@example.com",
//!     "Sender",
//!     "sender@example.com",
//!     None,
//!     Headers::new(),
//!     "Greetings",
//!     &parts,
//! )?;
//!
//! println!("{}", email.header_block());
//! println!("{}", email.body());
//! ```
//!
//! Composition is a pure computation apart from reading the clock for the
//! `Date` header and the OS entropy source for the boundary token. Two
//! calls with identical inputs produce identical bodies modulo the
//! boundary substring.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod date;
mod encoding;
mod error;
mod header;
mod message;
mod text;

pub use address::{Address, is_valid};
pub use encoding::encode_header;
pub use error::{Error, Result};
pub use header::Headers;
pub use message::{Email, MessagePart};
pub use text::html_to_plain;
