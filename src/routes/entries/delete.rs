use actix_web::{
    delete,
    web::{Data, Path},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::routes::utils::response_500;
use crate::services::tag_entry_mutation::TagEntryMutation;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    entry_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a tag entry", skip(db))]
#[delete("/{entry_id}")]
pub async fn delete_entry(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match TagEntryMutation::delete(&db, path_param.entry_id).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => response_500(e),
    }
}
