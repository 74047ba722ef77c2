use actix_web::{
    cookie::Cookie,
    http::{header, StatusCode},
    test, web, App, HttpResponse,
};
use gym_server::gate::AccessGate;

/// Runs one navigation through the gate with the given cookies and reports
/// the status plus any redirect target. Every path falls through to a dummy
/// "page" handler when the gate lets it pass.
async fn navigate(path: &str, cookies: &[(&str, &str)]) -> (StatusCode, Option<String>) {
    let app = test::init_service(
        App::new()
            .wrap(AccessGate)
            .default_service(web::to(|| async { HttpResponse::Ok().body("page") })),
    )
    .await;

    let mut req = test::TestRequest::get().uri(path);
    for (name, value) in cookies {
        req = req.cookie(Cookie::new(name.to_string(), value.to_string()));
    }

    let resp = test::call_service(&app, req.to_request()).await;
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|l| l.to_str().unwrap().to_owned());

    (resp.status(), location)
}

const ADMIN: &[(&str, &str)] = &[("auth", "u1"), ("role", "ADMIN")];
const MEMBER: &[(&str, &str)] = &[("auth", "u1"), ("role", "MEMBER")];

#[actix_web::test]
async fn test_public_paths_pass_anonymously() {
    for path in ["/login", "/register", "/forgot-password", "/forgot-password/sent"] {
        let (status, _) = navigate(path, &[]).await;
        assert_eq!(status, StatusCode::OK, "{} should be public", path);
    }
}

#[actix_web::test]
async fn test_public_paths_bounce_logged_in_users_home() {
    let (status, location) = navigate("/login", &[("auth", "u2"), ("role", "ADMIN")]).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/admin"));

    let (status, location) = navigate("/login", MEMBER).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/dashboard"));
}

#[actix_web::test]
async fn test_protected_paths_require_login() {
    for path in ["/admin", "/admin/users", "/dashboard", "/dashboard/metrics", "/somewhere"] {
        let (status, location) = navigate(path, &[]).await;
        assert_eq!(status, StatusCode::FOUND, "{} should bounce to login", path);
        assert_eq!(location.as_deref(), Some("/login"));
    }
}

#[actix_web::test]
async fn test_member_is_kept_out_of_admin_tree() {
    let (status, location) = navigate("/admin/users", MEMBER).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/dashboard"));
}

#[actix_web::test]
async fn test_admin_is_allowed_in_admin_tree() {
    let (status, _) = navigate("/admin/users", ADMIN).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_admin_is_kept_out_of_member_tree() {
    let (status, location) = navigate("/dashboard/metrics", ADMIN).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/admin"));
}

#[actix_web::test]
async fn test_member_is_allowed_in_member_tree() {
    let (status, _) = navigate("/dashboard/metrics", MEMBER).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_general_pages_allow_any_role() {
    let (status, _) = navigate("/some/other/protected/page", ADMIN).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = navigate("/some/other/protected/page", MEMBER).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_malformed_role_cookie_counts_as_logged_out() {
    let (status, location) =
        navigate("/dashboard", &[("auth", "u1"), ("role", "SUPERUSER")]).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/login"));
}

#[actix_web::test]
async fn test_lone_cookie_counts_as_logged_out() {
    let (status, location) = navigate("/dashboard", &[("auth", "u1")]).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/login"));

    let (status, location) = navigate("/dashboard", &[("role", "MEMBER")]).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/login"));
}

#[actix_web::test]
async fn test_api_and_static_paths_are_never_intercepted() {
    for path in [
        "/api/auth/whoami",
        "/api/payments",
        "/favicon.ico",
        "/logo.png",
        "/assets/app.bundle",
        "/styles/main.css",
    ] {
        let (status, _) = navigate(path, &[]).await;
        assert_eq!(status, StatusCode::OK, "{} should bypass the gate", path);
    }
}
