use crate::core::models::UserRef;

/// Mention syntax that renders as a user pill without notifying the user.
#[must_use]
pub fn silent_mention_syntax_for_user(user: &UserRef) -> String {
    format!("@_**{}|{}**", user.full_name, user.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_mention_carries_id() {
        let user = UserRef {
            id: 15,
            full_name: "King Hamlet".into(),
        };
        assert_eq!(silent_mention_syntax_for_user(&user), "@_**King Hamlet|15**");
    }
}
