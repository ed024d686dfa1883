//! # API Error Bodies
//!
//! On 403 the elections API answers with an XML document such as
//! `<Response><Message>Invalid key</Message></Response>`. This module pulls
//! the message text out of it.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::{ElexError, ElexResult};

/// Name of the element carrying the human-readable error.
const MESSAGE_ELEMENT: &[u8] = b"Message";

/// Returns the text of the first `Message` element in `body`.
///
/// # Errors
/// - [`ElexError::Xml`] if the document is malformed before a message is found.
/// - [`ElexError::MissingErrorMessage`] if there is no `Message` element or it has no text.
pub fn extract_error_message(body: &[u8]) -> ElexResult<String> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut in_message = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == MESSAGE_ELEMENT => {
                in_message = true;
            }
            Event::Text(t) if in_message => {
                return Ok(t.unescape()?.into_owned());
            }
            Event::CData(c) if in_message => {
                return Ok(String::from_utf8_lossy(&c.into_inner()).into_owned());
            }
            // An empty or self-closing Message has no text node.
            Event::End(_) | Event::Empty(_) if in_message => {
                return Err(ElexError::MissingErrorMessage);
            }
            Event::Empty(e) if e.local_name().as_ref() == MESSAGE_ELEMENT => {
                return Err(ElexError::MissingErrorMessage);
            }
            Event::Eof => return Err(ElexError::MissingErrorMessage),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_message_text() {
        let body = br#"<Response><Message>Invalid key</Message></Response>"#;
        assert_eq!(extract_error_message(body).unwrap(), "Invalid key");
    }

    #[test]
    fn first_message_wins() {
        let body = br#"<?xml version="1.0"?>
<Response>
  <Code>403</Code>
  <Message>Over quota</Message>
  <Message>second</Message>
</Response>"#;
        assert_eq!(extract_error_message(body).unwrap(), "Over quota");
    }

    #[test]
    fn entities_are_unescaped() {
        let body = br#"<Response><Message>Key &amp; plan mismatch</Message></Response>"#;
        assert_eq!(extract_error_message(body).unwrap(), "Key & plan mismatch");
    }

    #[test]
    fn missing_message_is_an_error() {
        let body = br#"<Response><Code>403</Code></Response>"#;
        assert!(matches!(
            extract_error_message(body),
            Err(ElexError::MissingErrorMessage)
        ));
    }

    #[test]
    fn empty_message_is_an_error() {
        assert!(matches!(
            extract_error_message(b"<Response><Message></Message></Response>"),
            Err(ElexError::MissingErrorMessage)
        ));
        assert!(matches!(
            extract_error_message(b"<Response><Message/></Response>"),
            Err(ElexError::MissingErrorMessage)
        ));
    }

    #[test]
    fn mismatched_tags_are_an_xml_error() {
        let body = b"<Response><Code>403</Response>";
        assert!(matches!(extract_error_message(body), Err(ElexError::Xml(_))));
    }
}
