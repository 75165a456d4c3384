use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use sea_orm::{DbConn, DbErr};

use crate::routes::utils::response_500;
use crate::services::{
    app_settings_query::AppSettingsQuery, global_tag_query::GlobalTagQuery,
    tag_entry_query::TagEntryQuery,
};
use crate::types::TagEntryVisible;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    date: chrono::NaiveDate,
}

#[tracing::instrument(name = "Listing a day's tag entries", skip(db))]
#[get("/{date}")]
pub async fn list_entries_for_date(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match visible_entries(&db, path_param.date).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => response_500(e),
    }
}

/// Entries whose tag is hidden stay out unless the user opted in.
async fn visible_entries(
    db: &DbConn,
    date: chrono::NaiveDate,
) -> Result<Vec<TagEntryVisible>, DbErr> {
    let entries = TagEntryQuery::find_by_date(db, date).await?;
    let global_tags = GlobalTagQuery::find_all_as_map(db).await?;
    let show_hidden_tags = AppSettingsQuery::show_hidden_tags(db).await?;

    Ok(entries
        .into_iter()
        .filter(|entry| {
            show_hidden_tags
                || !global_tags
                    .get(&entry.name)
                    .is_some_and(|tag| tag.hidden)
        })
        .map(TagEntryVisible::from)
        .collect())
}
