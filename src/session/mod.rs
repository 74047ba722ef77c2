use std::{fmt, ops::Deref, str::FromStr};

use actix_web::{cookie::Cookie, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{HResult, HandlerError};

pub mod cookies;

/// Account role, stored both in the `users` table and in the `role` session
/// cookie. The cookie carries the exact strings `ADMIN` / `MEMBER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Landing page for this role after login.
    pub fn home(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Member => "/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    // exact match only, anything else is not a role
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MEMBER" => Ok(Role::Member),
            _ => Err(()),
        }
    }
}

/// The authenticated identity reconstructed from the two session cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
}

/// Rebuilds an [`Identity`] from raw cookie values.
///
/// Both values must be present together; presence of only one, an empty
/// subject id, or a role value other than `ADMIN`/`MEMBER` all resolve to
/// `None`. This never fails louder than `None`.
pub fn resolve(auth: Option<&str>, role: Option<&str>) -> Option<Identity> {
    let user_id = auth?;
    if user_id.is_empty() {
        return None;
    }

    let role = role?.parse::<Role>().ok()?;

    Some(Identity {
        user_id: user_id.to_owned(),
        role,
    })
}

pub fn resolve_request(req: &HttpRequest) -> Option<Identity> {
    let auth = req.cookie(cookies::AUTH_COOKIE);
    let role = req.cookie(cookies::ROLE_COOKIE);

    resolve(
        auth.as_ref().map(Cookie::value),
        role.as_ref().map(Cookie::value),
    )
}

/// Extractor for API routes. Every `/api` route re-derives the identity from
/// the cookies itself instead of relying on the navigation gate having run.
pub struct IdentityEx(pub Identity);

impl Deref for IdentityEx {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for IdentityEx {
    type Error = HandlerError;
    type Future = Ready<HResult<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            resolve_request(req)
                .map(IdentityEx)
                .ok_or_else(|| HandlerError::from(401)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_exact_values_only() {
        assert_eq!("ADMIN".parse(), Ok(Role::Admin));
        assert_eq!("MEMBER".parse(), Ok(Role::Member));
        assert!("admin".parse::<Role>().is_err());
        assert!("Member".parse::<Role>().is_err());
        assert!("ROOT".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_resolve_requires_both_cookies() {
        assert!(resolve(Some("u1"), None).is_none());
        assert!(resolve(None, Some("ADMIN")).is_none());
        assert!(resolve(None, None).is_none());
    }

    #[test]
    fn test_resolve_valid_pair() {
        let ident = resolve(Some("u1"), Some("ADMIN")).unwrap();
        assert_eq!(ident.user_id, "u1");
        assert_eq!(ident.role, Role::Admin);
    }

    #[test]
    fn test_resolve_rejects_malformed_role() {
        assert!(resolve(Some("u1"), Some("SUPERUSER")).is_none());
        assert!(resolve(Some("u1"), Some("member")).is_none());
    }

    #[test]
    fn test_resolve_rejects_empty_subject() {
        assert!(resolve(Some(""), Some("MEMBER")).is_none());
    }
}
