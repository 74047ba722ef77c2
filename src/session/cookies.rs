use actix_web::cookie::{
    time::{Duration, OffsetDateTime},
    Cookie, CookieBuilder, SameSite,
};

use crate::{options::PRODUCTION, session::Identity};

pub const AUTH_COOKIE: &str = "auth";
pub const ROLE_COOKIE: &str = "role";

/// 7 days, enforced only by the cookie itself.
pub const SESSION_MAX_AGE: Duration = Duration::days(7);

fn build_session_cookie(name: &'static str, value: String) -> CookieBuilder<'static> {
    Cookie::build(name, value)
        // disallow js access
        .http_only(true)
        // sent on every path, the gate reads these on page navigations
        .path("/")
        .same_site(SameSite::Lax)
        // only allow https when deployed
        .secure(*PRODUCTION)
}

/// The two cookies representing a logged-in identity. The values are the raw
/// subject id and role string, unsigned; see DESIGN.md for the tradeoff.
pub fn issue(identity: &Identity) -> [Cookie<'static>; 2] {
    [
        build_session_cookie(AUTH_COOKIE, identity.user_id.clone())
            .max_age(SESSION_MAX_AGE)
            .finish(),
        build_session_cookie(ROLE_COOKIE, identity.role.as_str().to_owned())
            .max_age(SESSION_MAX_AGE)
            .finish(),
    ]
}

/// Death cookies that overwrite and expire both session cookies.
pub fn clear() -> [Cookie<'static>; 2] {
    [expired(AUTH_COOKIE), expired(ROLE_COOKIE)]
}

fn expired(name: &'static str) -> Cookie<'static> {
    build_session_cookie(name, String::new())
        .expires(OffsetDateTime::UNIX_EPOCH)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_issue_sets_both_cookies() {
        let identity = Identity {
            user_id: "u1".into(),
            role: Role::Member,
        };

        let [auth, role] = issue(&identity);

        assert_eq!(auth.name(), AUTH_COOKIE);
        assert_eq!(auth.value(), "u1");
        assert_eq!(role.name(), ROLE_COOKIE);
        assert_eq!(role.value(), "MEMBER");

        for cookie in [&auth, &role] {
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.path(), Some("/"));
            assert_eq!(cookie.same_site(), Some(SameSite::Lax));
            assert_eq!(cookie.max_age(), Some(SESSION_MAX_AGE));
        }
    }

    #[test]
    fn test_clear_expires_both_cookies() {
        let [auth, role] = clear();

        assert_eq!(auth.value(), "");
        assert_eq!(role.value(), "");
        assert_eq!(auth.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
        assert_eq!(role.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
    }

    #[test]
    fn test_issue_resolve_round_trip() {
        let identity = Identity {
            user_id: "u42".into(),
            role: Role::Admin,
        };

        let [auth, role] = issue(&identity);
        let resolved = crate::session::resolve(Some(auth.value()), Some(role.value())).unwrap();

        assert_eq!(resolved, identity);
    }

    #[test]
    fn test_cleared_cookies_resolve_to_absent() {
        let [auth, role] = clear();
        assert!(crate::session::resolve(Some(auth.value()), Some(role.value())).is_none());
    }
}
