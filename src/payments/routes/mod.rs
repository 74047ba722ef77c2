use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod delete_payment;
pub mod list_payments;
pub mod record_payment;

#[derive(Deserialize, IntoParams)]
pub struct PaymentIdParams {
    pub payment_id: String,
}

pub type PaymentPath = Path<PaymentIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(record_payment::record_payment)
        .service(list_payments::list_payments)
        .service(delete_payment::delete_payment);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "payments")
    ),
    paths(
        record_payment::record_payment,
        list_payments::list_payments,
        delete_payment::delete_payment
    ),
    components(schemas(
        crate::payments::payment::Payment,
        record_payment::RecordPaymentRequest,
        record_payment::RecordPaymentResponse
    ))
)]
pub struct PaymentsApiDocs;
