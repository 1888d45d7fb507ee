use dto::role::Role;

/// Whether an identity carrying `user_role` may see a section restricted to
/// `allowed_roles`.
///
/// Fail-closed: no role, a blank role or a role outside the closed set grants
/// nothing. Matching is case-insensitive since roles travel as free strings.
/// `allowed_roles` has set semantics, order and duplicates don't matter.
pub fn is_role_allowed(user_role: Option<&str>, allowed_roles: &[Role]) -> bool {
    match user_role.map(str::trim) {
        None | Some("") => false,
        Some(role) => role
            .parse::<Role>()
            .map(|role| allowed_roles.contains(&role))
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::role::Role::{Admin, Member, Trainer};
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_deny_when_no_role() {
        assert!(!is_role_allowed(None, &[Admin]));
        assert!(!is_role_allowed(Some(""), &[Admin]));
        assert!(!is_role_allowed(Some("   "), &[Admin]));
    }

    #[test]
    fn should_match_case_insensitively() {
        assert!(is_role_allowed(Some("Admin"), &[Admin]));
        assert!(is_role_allowed(Some("ADMIN"), &[Admin]));
    }

    #[parameterized(
        user_role = {"member", "janitor", "trainer"},
        expected_result = {false, false, true},
    )]
    fn should_check_role_against_allowed_set(user_role: &str, expected_result: bool) {
        assert_eq!(
            expected_result,
            is_role_allowed(Some(user_role), &[Admin, Trainer])
        );
    }

    #[test]
    fn should_ignore_order_and_duplicates_in_allowed_set() {
        assert!(is_role_allowed(Some("member"), &[Member, Admin]));
        assert!(is_role_allowed(Some("member"), &[Admin, Member, Member]));
    }
}
