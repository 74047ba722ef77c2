use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    get,
    http::StatusCode,
    test, App, HttpResponse, Responder,
};
use gym_server::session::{cookies, Identity, IdentityEx, Role};

#[get("/issue")]
async fn issue_route() -> impl Responder {
    let [auth, role] = cookies::issue(&Identity {
        user_id: "u7".into(),
        role: Role::Member,
    });

    HttpResponse::Ok().cookie(auth).cookie(role).finish()
}

#[get("/clear")]
async fn clear_route() -> impl Responder {
    let [auth, role] = cookies::clear();

    HttpResponse::Ok().cookie(auth).cookie(role).finish()
}

#[get("/whoami")]
async fn whoami_route(identity: IdentityEx) -> impl Responder {
    HttpResponse::Ok().body(format!("{}:{}", identity.user_id, identity.role))
}

macro_rules! session_app {
    () => {
        test::init_service(
            App::new()
                .service(issue_route)
                .service(clear_route)
                .service(whoami_route),
        )
        .await
    };
}

#[actix_web::test]
async fn test_issue_then_resolve_round_trip() {
    let app = session_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/issue").to_request()).await;
    let issued: Vec<Cookie> = resp.response().cookies().collect();
    assert_eq!(issued.len(), 2);

    // replay the issued cookies like a browser would
    let mut req = test::TestRequest::get().uri("/whoami");
    for cookie in &issued {
        req = req.cookie(cookie.clone());
    }

    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"u7:MEMBER");
}

#[actix_web::test]
async fn test_issued_cookie_attributes() {
    let app = session_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/issue").to_request()).await;

    for cookie in resp.response().cookies() {
        assert!(["auth", "role"].contains(&cookie.name()));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }
}

#[actix_web::test]
async fn test_clear_then_resolve_is_absent() {
    let app = session_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/clear").to_request()).await;
    let cleared: Vec<Cookie> = resp.response().cookies().collect();
    assert_eq!(cleared.len(), 2);

    let mut req = test::TestRequest::get().uri("/whoami");
    for cookie in &cleared {
        req = req.cookie(cookie.clone());
    }

    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_no_cookies_is_unauthorized() {
    let app = session_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_tampered_role_cookie_is_unauthorized() {
    let app = session_app!();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("auth", "u7"))
        .cookie(Cookie::new("role", "OWNER"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
