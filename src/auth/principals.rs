//! Special-case principals checked before any database lookup.
//!
//! These accounts exist only in this table, not in the users table. Order
//! matters: the admin entry is consulted first, then the researcher entries.
//! An entry whose password rule fails does NOT short-circuit login; the
//! attempt falls through to the regular user lookup.

#[derive(Debug, Clone, Copy)]
enum PasswordRule {
    /// Password must equal this literal.
    Literal(&'static str),
    /// Password must equal the username itself.
    MatchesUsername,
}

#[derive(Debug, Clone, Copy)]
struct SpecialPrincipal {
    username: &'static str,
    rule: PasswordRule,
    user_type: &'static str,
}

const SPECIAL_PRINCIPALS: &[SpecialPrincipal] = &[
    SpecialPrincipal {
        username: "admin",
        rule: PasswordRule::Literal("admin1234"),
        user_type: "admin",
    },
    SpecialPrincipal {
        username: "researcher",
        rule: PasswordRule::MatchesUsername,
        user_type: "researcher",
    },
    SpecialPrincipal {
        username: "researcher1",
        rule: PasswordRule::MatchesUsername,
        user_type: "researcher1",
    },
    SpecialPrincipal {
        username: "researcher2",
        rule: PasswordRule::MatchesUsername,
        user_type: "researcher2",
    },
];

/// Resolve a login attempt against the special-principal table.
///
/// Returns the principal's user type on a match, `None` otherwise.
pub fn resolve(username: &str, password: &str) -> Option<&'static str> {
    SPECIAL_PRINCIPALS
        .iter()
        .find(|p| {
            p.username == username
                && match p.rule {
                    PasswordRule::Literal(expected) => password == expected,
                    PasswordRule::MatchesUsername => password == p.username,
                }
        })
        .map(|p| p.user_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_literal_password_resolves() {
        assert_eq!(resolve("admin", "admin1234"), Some("admin"));
    }

    #[test]
    fn admin_wrong_password_falls_through() {
        assert_eq!(resolve("admin", "admin"), None);
    }

    #[test]
    fn researchers_use_their_username_as_password() {
        for name in ["researcher", "researcher1", "researcher2"] {
            assert_eq!(resolve(name, name), Some(name));
            assert_eq!(resolve(name, "wrong"), None);
        }
    }

    #[test]
    fn unknown_usernames_do_not_resolve() {
        assert_eq!(resolve("alice", "alice"), None);
        assert_eq!(resolve("researcher3", "researcher3"), None);
    }
}
