use lazy_static::lazy_static;
use regex::Regex;

use crate::session::Identity;

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_HOME: &str = "/admin";
pub const MEMBER_HOME: &str = "/dashboard";

/// Pages reachable without a session.
const PUBLIC_PREFIXES: [&str; 3] = ["/login", "/register", "/forgot-password"];

lazy_static! {
    static ref STATIC_ASSET_REGEX: Regex =
        Regex::new(r"\.(png|jpe?g|svg|webp|gif|ico|css|js)$").unwrap();
}

/// Which bucket a navigation path falls into. Computed per request from the
/// path string alone, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Admin,
    Member,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

// `/admin` and `/admin/users` match the `/admin` prefix, `/administration`
// does not
fn under_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Paths the gate never sees: the JSON API (which does its own identity
/// checks), the frontend asset directory, the favicon and static file
/// extensions.
pub fn is_excluded(path: &str) -> bool {
    path == "/favicon.ico"
        || under_prefix(path, "/api")
        || under_prefix(path, "/assets")
        || STATIC_ASSET_REGEX.is_match(path)
}

pub fn classify(path: &str) -> RouteClass {
    if PUBLIC_PREFIXES.iter().any(|p| under_prefix(path, p)) {
        RouteClass::Public
    } else if under_prefix(path, ADMIN_HOME) {
        RouteClass::Admin
    } else if under_prefix(path, MEMBER_HOME) {
        RouteClass::Member
    } else {
        RouteClass::General
    }
}

/// The whole access-control state machine, evaluated once per navigation.
///
/// - a logged-in user never sees the public pages again, they bounce to
///   their role's home
/// - anything non-public without a session bounces to the login page
/// - the admin tree is for admins, the member dashboard tree is for members,
///   and neither role may browse the other's tree
/// - everything else passes through
pub fn decide(class: RouteClass, identity: Option<&Identity>) -> Decision {
    match (class, identity) {
        (RouteClass::Public, Some(ident)) => Decision::Redirect(ident.role.home()),
        (RouteClass::Public, None) => Decision::Allow,
        (_, None) => Decision::Redirect(LOGIN_PATH),
        (RouteClass::Admin, Some(ident)) if !ident.role.is_admin() => {
            Decision::Redirect(MEMBER_HOME)
        }
        (RouteClass::Member, Some(ident)) if ident.role.is_admin() => {
            Decision::Redirect(ADMIN_HOME)
        }
        _ => Decision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    fn ident(role: Role) -> Identity {
        Identity {
            user_id: "u1".into(),
            role,
        }
    }

    #[test]
    fn test_classify_public_prefixes() {
        assert_eq!(classify("/login"), RouteClass::Public);
        assert_eq!(classify("/register"), RouteClass::Public);
        assert_eq!(classify("/forgot-password"), RouteClass::Public);
        assert_eq!(classify("/forgot-password/step2"), RouteClass::Public);
    }

    #[test]
    fn test_classify_prefix_is_not_substring_match() {
        assert_eq!(classify("/loginx"), RouteClass::General);
        assert_eq!(classify("/administration"), RouteClass::General);
        assert_eq!(classify("/dashboardd"), RouteClass::General);
    }

    #[test]
    fn test_classify_role_trees() {
        assert_eq!(classify("/admin"), RouteClass::Admin);
        assert_eq!(classify("/admin/users"), RouteClass::Admin);
        assert_eq!(classify("/dashboard"), RouteClass::Member);
        assert_eq!(classify("/dashboard/metrics"), RouteClass::Member);
        assert_eq!(classify("/"), RouteClass::General);
        assert_eq!(classify("/about"), RouteClass::General);
    }

    #[test]
    fn test_excluded_paths() {
        assert!(is_excluded("/api/auth/login"));
        assert!(is_excluded("/assets/app.bundle"));
        assert!(is_excluded("/favicon.ico"));
        assert!(is_excluded("/logo.png"));
        assert!(is_excluded("/styles/main.css"));
        assert!(is_excluded("/app.js"));
        assert!(!is_excluded("/dashboard"));
        assert!(!is_excluded("/apidocs"));
    }

    #[test]
    fn test_public_paths_allow_anonymous() {
        assert_eq!(decide(RouteClass::Public, None), Decision::Allow);
    }

    #[test]
    fn test_public_paths_bounce_authenticated_to_home() {
        assert_eq!(
            decide(RouteClass::Public, Some(&ident(Role::Admin))),
            Decision::Redirect(ADMIN_HOME)
        );
        assert_eq!(
            decide(RouteClass::Public, Some(&ident(Role::Member))),
            Decision::Redirect(MEMBER_HOME)
        );
    }

    #[test]
    fn test_protected_paths_require_identity() {
        for class in [RouteClass::Admin, RouteClass::Member, RouteClass::General] {
            assert_eq!(decide(class, None), Decision::Redirect(LOGIN_PATH));
        }
    }

    #[test]
    fn test_admin_tree_role_enforcement() {
        assert_eq!(
            decide(RouteClass::Admin, Some(&ident(Role::Admin))),
            Decision::Allow
        );
        assert_eq!(
            decide(RouteClass::Admin, Some(&ident(Role::Member))),
            Decision::Redirect(MEMBER_HOME)
        );
    }

    #[test]
    fn test_member_tree_role_enforcement() {
        assert_eq!(
            decide(RouteClass::Member, Some(&ident(Role::Member))),
            Decision::Allow
        );
        assert_eq!(
            decide(RouteClass::Member, Some(&ident(Role::Admin))),
            Decision::Redirect(ADMIN_HOME)
        );
    }

    #[test]
    fn test_general_pages_allow_any_identity() {
        assert_eq!(
            decide(RouteClass::General, Some(&ident(Role::Admin))),
            Decision::Allow
        );
        assert_eq!(
            decide(RouteClass::General, Some(&ident(Role::Member))),
            Decision::Allow
        );
    }
}
