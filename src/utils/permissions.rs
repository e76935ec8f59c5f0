/// Pure functions for authorization checks (transport-agnostic)

/// Check if a sender is the configured administrator
///
/// `None` covers updates without a sender, e.g. channel posts.
pub fn is_admin(user_id: Option<u64>, admin_id: u64) -> bool {
    user_id == Some(admin_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        assert!(is_admin(Some(385919505), 385919505));
        assert!(!is_admin(Some(1), 385919505));
    }

    #[test]
    fn test_missing_sender_is_not_admin() {
        assert!(!is_admin(None, 385919505));
    }
}
