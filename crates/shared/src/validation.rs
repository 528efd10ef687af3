use crate::constants::*;

pub fn validate_room_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Room name cannot be blank".into());
    }
    if trimmed.len() > MAX_ROOM_NAME_LENGTH {
        return Err(format!(
            "Room name must be at most {} characters",
            MAX_ROOM_NAME_LENGTH
        ));
    }
    Ok(())
}

pub fn validate_message_content(content: &str) -> Result<(), String> {
    if content.len() > MAX_MESSAGE_LENGTH {
        return Err(format!(
            "Message must be at most {} characters",
            MAX_MESSAGE_LENGTH
        ));
    }
    Ok(())
}

pub fn validate_sender(sender: &str) -> Result<(), String> {
    if sender.trim().is_empty() {
        return Err("Sender is required".into());
    }
    if sender.len() > MAX_SENDER_LENGTH {
        return Err(format!(
            "Sender must be at most {} characters",
            MAX_SENDER_LENGTH
        ));
    }
    Ok(())
}

pub fn validate_attachment_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Attachment name cannot be empty".into());
    }
    if name.len() > MAX_ATTACHMENT_NAME_LENGTH {
        return Err(format!(
            "Attachment name must be at most {} characters",
            MAX_ATTACHMENT_NAME_LENGTH
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_name_rejects_blank() {
        assert!(validate_room_name("   ").is_err());
        assert!(validate_room_name("lounge").is_ok());
    }

    #[test]
    fn room_name_rejects_overlong() {
        assert!(validate_room_name(&"x".repeat(MAX_ROOM_NAME_LENGTH + 1)).is_err());
        assert!(validate_room_name(&"x".repeat(MAX_ROOM_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn message_content_allows_empty_caption() {
        // Image/file posts may carry an empty caption
        assert!(validate_message_content("").is_ok());
        assert!(validate_message_content(&"x".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
    }

    #[test]
    fn sender_required() {
        assert!(validate_sender("").is_err());
        assert!(validate_sender("anonymous-fox").is_ok());
    }
}
