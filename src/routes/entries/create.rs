use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::domain::tag_input;
use crate::routes::utils::{response_400, response_500};
use crate::services::tag_entry_mutation::{NewTagEntry, TagEntryMutation};
use crate::types::{TagEntryCreateRequest, TagEntryVisible};

#[tracing::instrument(name = "Adding a tag entry", skip(db))]
#[post("")]
pub async fn create_entry(db: Data<DbConn>, req: Json<TagEntryCreateRequest>) -> HttpResponse {
    match tag_input::parse_input(&req.input) {
        Ok(parsed) => {
            match TagEntryMutation::create(
                &db,
                NewTagEntry {
                    date: req.date,
                    name: parsed.name,
                    value: parsed.value,
                    rating: parsed.rating,
                },
            )
            .await
            {
                Ok(entry) => HttpResponse::Created().json(TagEntryVisible::from(entry)),
                Err(e) => response_500(e),
            }
        }
        Err(e) => response_400(&e.to_string()),
    }
}
