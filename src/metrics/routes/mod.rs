use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod add_entry;
pub mod delete_entry;
pub mod list_entries;

#[derive(Deserialize, IntoParams)]
pub struct EntryIdParams {
    pub entry_id: String,
}

pub type EntryPath = Path<EntryIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(add_entry::add_entry)
        .service(list_entries::list_entries)
        .service(delete_entry::delete_entry);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "metrics")
    ),
    paths(
        add_entry::add_entry,
        list_entries::list_entries,
        delete_entry::delete_entry
    ),
    components(schemas(
        crate::metrics::metric::MetricEntry,
        add_entry::AddEntryRequest,
        add_entry::AddEntryResponse
    ))
)]
pub struct MetricsApiDocs;
