use crate::core::errors::PusherError;
use regex::Regex;
use std::sync::OnceLock;

/// Longest accepted channel name
pub const MAX_CHANNEL_NAME_LENGTH: usize = 200;
/// Longest accepted event name
pub const MAX_EVENT_NAME_LENGTH: usize = 200;
/// Most channels a single trigger may target
pub const MAX_TRIGGER_CHANNELS: usize = 10;

static CHANNEL_RE: OnceLock<Regex> = OnceLock::new();
static SOCKET_ID_RE: OnceLock<Regex> = OnceLock::new();

fn channel_re() -> &'static Regex {
    CHANNEL_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_\-=@,.;]+$").expect("static regex"))
}

fn socket_id_re() -> &'static Regex {
    SOCKET_ID_RE.get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("static regex"))
}

pub fn validate_channel(channel: &str) -> Result<(), PusherError> {
    if !channel_re().is_match(channel) {
        return Err(PusherError::Validation(format!(
            "Invalid channel name: '{}'",
            channel
        )));
    }
    if channel.len() > MAX_CHANNEL_NAME_LENGTH {
        return Err(PusherError::Validation(format!(
            "Channel name too long: '{}'",
            channel
        )));
    }
    Ok(())
}

pub fn validate_socket_id(socket_id: &str) -> Result<(), PusherError> {
    if !socket_id_re().is_match(socket_id) {
        return Err(PusherError::Validation(format!(
            "Invalid socket id: '{}'",
            socket_id
        )));
    }
    Ok(())
}

/// Length is counted in UTF-16 code units, as the remote service counts it
pub fn validate_event_name(event: &str) -> Result<(), PusherError> {
    if event.encode_utf16().count() > MAX_EVENT_NAME_LENGTH {
        return Err(PusherError::Validation(format!(
            "Too long event name: '{}'",
            event
        )));
    }
    Ok(())
}

pub fn validate_channels<S: AsRef<str>>(channels: &[S]) -> Result<(), PusherError> {
    if channels.len() > MAX_TRIGGER_CHANNELS {
        return Err(PusherError::Validation(format!(
            "Can't trigger a message to more than {} channels",
            MAX_TRIGGER_CHANNELS
        )));
    }
    channels
        .iter()
        .try_for_each(|channel| validate_channel(channel.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_channels() {
        for channel in ["my-channel", "private-foo", "presence-a_b=c@d,e.f;g", "X"] {
            assert!(validate_channel(channel).is_ok(), "{}", channel);
        }
    }

    #[test]
    fn test_invalid_channels() {
        for channel in ["", "has space", "slash/", "colon:", "ünicode"] {
            assert!(validate_channel(channel).is_err(), "{}", channel);
        }
    }

    #[test]
    fn test_channel_length_limit() {
        assert!(validate_channel(&"a".repeat(200)).is_ok());
        let err = validate_channel(&"a".repeat(201)).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_socket_ids() {
        assert!(validate_socket_id("1234.5678").is_ok());
        for socket_id in [
            "",
            "1234",
            "1234.",
            ".5678",
            "12a.34",
            "1.2.3",
            " 1.2",
            "\u{661}\u{662}\u{663}.\u{664}\u{665}\u{666}",
            "\u{ff11}.\u{ff12}",
        ] {
            assert!(validate_socket_id(socket_id).is_err(), "{}", socket_id);
        }
    }

    #[test]
    fn test_event_name_length() {
        assert!(validate_event_name(&"e".repeat(200)).is_ok());
        assert!(validate_event_name(&"e".repeat(201)).is_err());
    }

    #[test]
    fn test_event_name_length_counts_characters_not_bytes() {
        // 150 chars, 300 bytes
        assert!(validate_event_name(&"é".repeat(150)).is_ok());
        assert!(validate_event_name(&"é".repeat(200)).is_ok());
        assert!(validate_event_name(&"é".repeat(201)).is_err());
        // astral chars count as two units each
        assert!(validate_event_name(&"😀".repeat(100)).is_ok());
        assert!(validate_event_name(&"😀".repeat(101)).is_err());
    }

    #[test]
    fn test_channel_count_limit() {
        let ten: Vec<String> = (0..10).map(|i| format!("c{}", i)).collect();
        assert!(validate_channels(&ten).is_ok());

        let eleven: Vec<String> = (0..11).map(|i| format!("c{}", i)).collect();
        assert!(validate_channels(&eleven).is_err());
    }
}
