//! Message validation and the per-record authorization policy.
//!
//! A caller may act on a message only as its sender, its recipient, or as an
//! administrator. Denials are expressed as [`MessageAccess::NotFoundForCaller`]
//! rather than a forbidden outcome: the API maps both "row absent" and "row
//! hidden" to the same 404 response, so unauthorized callers cannot probe
//! which message ids exist.

use crate::types::DbId;

/// Maximum length of a message body in characters.
pub const MAX_BODY_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Authorization policy
// ---------------------------------------------------------------------------

/// Outcome of the per-record access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAccess {
    /// The caller may view and act on the record.
    Allowed,
    /// The record must be presented to this caller as if it did not exist.
    NotFoundForCaller,
}

/// Decide whether a caller may act on the message with the given participants.
///
/// Administrators may act on any message; everyone else must be the sender
/// or the recipient.
pub fn check_access(
    caller_id: DbId,
    caller_is_admin: bool,
    sender_id: DbId,
    recipient_id: DbId,
) -> MessageAccess {
    if caller_is_admin || caller_id == sender_id || caller_id == recipient_id {
        MessageAccess::Allowed
    } else {
        MessageAccess::NotFoundForCaller
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a path id: message ids are positive.
pub fn validate_message_id(id: DbId) -> Result<(), String> {
    if id >= 1 {
        Ok(())
    } else {
        Err(format!("Invalid message id: {id}. Ids are positive integers"))
    }
}

/// Validate a message body: must be non-empty and within the length limit.
pub fn validate_body(body: &str) -> Result<(), String> {
    if body.is_empty() {
        return Err("Message body cannot be empty".to_string());
    }
    if body.len() > MAX_BODY_LENGTH {
        return Err(format!(
            "Message body exceeds maximum length of {MAX_BODY_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the sender/recipient pair for create and replace.
///
/// Both ids must be at least 1, and a user may not message themselves.
pub fn validate_participants(sender_id: DbId, recipient_id: DbId) -> Result<(), String> {
    if sender_id < 1 {
        return Err(format!("sender_id must be a positive integer, got {sender_id}"));
    }
    if recipient_id < 1 {
        return Err(format!(
            "recipient_id must be a positive integer, got {recipient_id}"
        ));
    }
    if sender_id == recipient_id {
        return Err("sender_id and recipient_id must differ".to_string());
    }
    Ok(())
}

/// Validate a partial-update field set.
///
/// At least one field must be present. Present ids must be >= 0 -- partial
/// update deliberately admits 0 as a sentinel, unlike create/replace's >= 1
/// rule. A present body must be non-empty. Sender/recipient equality is not
/// re-checked here.
pub fn validate_partial_update(
    sender_id: Option<DbId>,
    recipient_id: Option<DbId>,
    body: Option<&str>,
) -> Result<(), String> {
    if sender_id.is_none() && recipient_id.is_none() && body.is_none() {
        return Err("Provide at least one of sender_id, recipient_id, body".to_string());
    }
    if let Some(id) = sender_id {
        if id < 0 {
            return Err(format!("sender_id must be >= 0, got {id}"));
        }
    }
    if let Some(id) = recipient_id {
        if id < 0 {
            return Err(format!("recipient_id must be >= 0, got {id}"));
        }
    }
    if let Some(body) = body {
        validate_body(body)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Authorization policy --

    #[test]
    fn test_sender_is_allowed() {
        assert_eq!(check_access(1, false, 1, 2), MessageAccess::Allowed);
    }

    #[test]
    fn test_recipient_is_allowed() {
        assert_eq!(check_access(2, false, 1, 2), MessageAccess::Allowed);
    }

    #[test]
    fn test_admin_is_allowed_on_any_message() {
        assert_eq!(check_access(99, true, 1, 2), MessageAccess::Allowed);
    }

    #[test]
    fn test_unrelated_user_gets_not_found() {
        assert_eq!(
            check_access(3, false, 1, 2),
            MessageAccess::NotFoundForCaller
        );
    }

    // -- Id validation --

    #[test]
    fn test_positive_id_is_valid() {
        assert!(validate_message_id(1).is_ok());
        assert!(validate_message_id(9_999_999).is_ok());
    }

    #[test]
    fn test_zero_and_negative_ids_are_invalid() {
        assert!(validate_message_id(0).is_err());
        assert!(validate_message_id(-1).is_err());
    }

    // -- Body validation --

    #[test]
    fn test_empty_body_is_rejected() {
        let err = validate_body("").unwrap_err();
        assert!(err.contains("empty"), "unexpected message: {err}");
    }

    #[test]
    fn test_oversized_body_is_rejected() {
        let body = "x".repeat(MAX_BODY_LENGTH + 1);
        assert!(validate_body(&body).is_err());
    }

    #[test]
    fn test_normal_body_is_accepted() {
        assert!(validate_body("hi").is_ok());
    }

    // -- Participant validation --

    #[test]
    fn test_valid_participant_pair() {
        assert!(validate_participants(1, 2).is_ok());
    }

    #[test]
    fn test_nonpositive_participants_are_rejected() {
        assert!(validate_participants(0, 2).is_err());
        assert!(validate_participants(1, 0).is_err());
        assert!(validate_participants(-5, 2).is_err());
    }

    #[test]
    fn test_self_message_is_rejected() {
        let err = validate_participants(4, 4).unwrap_err();
        assert!(err.contains("differ"), "unexpected message: {err}");
    }

    // -- Partial-update validation --

    #[test]
    fn test_empty_field_set_is_rejected() {
        assert!(validate_partial_update(None, None, None).is_err());
    }

    #[test]
    fn test_single_field_is_accepted() {
        assert!(validate_partial_update(None, None, Some("hello")).is_ok());
        assert!(validate_partial_update(Some(3), None, None).is_ok());
    }

    #[test]
    fn test_partial_update_admits_zero_ids() {
        // 0 is valid here even though create/replace require >= 1.
        assert!(validate_partial_update(Some(0), Some(0), None).is_ok());
    }

    #[test]
    fn test_partial_update_rejects_negative_ids() {
        assert!(validate_partial_update(Some(-1), None, None).is_err());
        assert!(validate_partial_update(None, Some(-2), None).is_err());
    }

    #[test]
    fn test_partial_update_rejects_empty_body() {
        assert!(validate_partial_update(None, None, Some("")).is_err());
    }

    #[test]
    fn test_partial_update_does_not_check_equality() {
        // Equality of sender and recipient is only enforced on create/replace.
        assert!(validate_partial_update(Some(5), Some(5), None).is_ok());
    }
}
