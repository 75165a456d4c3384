use actix_web::{get, HttpResponse};

use crate::services::global_tag_mutation::PALETTE;

#[tracing::instrument(name = "Listing the tag color palette")]
#[get("/palette")]
pub async fn list_palette() -> HttpResponse {
    HttpResponse::Ok().json(PALETTE)
}
