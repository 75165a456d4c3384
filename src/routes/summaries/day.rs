use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use sea_orm::{DbConn, DbErr};

use crate::domain::aggregation::{aggregate_day_tags, TagSummary};
use crate::routes::utils::response_500;
use crate::services::tag_entry_query::TagEntryQuery;

use super::aggregation_context;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    date: chrono::NaiveDate,
}

#[tracing::instrument(name = "Building a day summary", skip(db))]
#[get("/day/{date}")]
pub async fn day_summary(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match build(&db, path_param.date).await {
        Ok(summaries) => HttpResponse::Ok().json(summaries),
        Err(e) => response_500(e),
    }
}

async fn build(db: &DbConn, date: chrono::NaiveDate) -> Result<Vec<TagSummary>, DbErr> {
    let entries = TagEntryQuery::find_by_date(db, date).await?;
    let (global_tags, show_hidden_tags) = aggregation_context(db).await?;
    Ok(aggregate_day_tags(&entries, &global_tags, show_hidden_tags))
}
