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
    date: chrono::NaiveDate,
    name: String,
}

#[tracing::instrument(name = "Deleting a day's entries for a tag name", skip(db))]
#[delete("/{date}/{name}")]
pub async fn delete_entries_for_date_and_name(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match TagEntryMutation::delete_by_date_and_name(&db, path_param.date, &path_param.name).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => response_500(e),
    }
}
