//! Per-request access gate for page navigations.
//!
//! Sits in front of everything except the API, assets and static files, and
//! either lets the navigation through or answers with a redirect. It only
//! reads the session cookies, it never mutates them.

use actix_web::{
    body::EitherBody,
    cookie::Cookie,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::debug;

use crate::session;

pub mod policy;

pub struct AccessGate;

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AccessGateMiddleware { service })
    }
}

pub struct AccessGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if policy::is_excluded(req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        // identity is resolved once from the incoming cookies, then handed to
        // the decision function as a plain value
        let auth = req.cookie(session::cookies::AUTH_COOKIE);
        let role = req.cookie(session::cookies::ROLE_COOKIE);
        let identity = session::resolve(
            auth.as_ref().map(Cookie::value),
            role.as_ref().map(Cookie::value),
        );

        let class = policy::classify(req.path());

        match policy::decide(class, identity.as_ref()) {
            policy::Decision::Allow => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            policy::Decision::Redirect(target) => {
                debug!("gate: {} ({:?}) -> {}", req.path(), class, target);

                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, target))
                    .finish()
                    .map_into_right_body();

                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}
