use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use sea_orm::{DbConn, DbErr};

use crate::domain::aggregation::{
    build_month_summary, group_entries_by_date, month_bounds, DateSummary,
};
use crate::routes::utils::response_500;
use crate::services::tag_entry_query::TagEntryQuery;

use super::aggregation_context;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    date: chrono::NaiveDate,
}

#[tracing::instrument(name = "Building a month summary", skip(db))]
#[get("/month/{date}")]
pub async fn month_summary(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match build(&db, path_param.date).await {
        Ok(summaries) => HttpResponse::Ok().json(summaries),
        Err(e) => response_500(e),
    }
}

async fn build(db: &DbConn, reference: chrono::NaiveDate) -> Result<Vec<DateSummary>, DbErr> {
    let (first, last) = month_bounds(reference);
    let entries = TagEntryQuery::find_in_date_range(db, first, last).await?;
    let entries_by_date = group_entries_by_date(entries);
    let (global_tags, show_hidden_tags) = aggregation_context(db).await?;
    Ok(build_month_summary(
        reference,
        &entries_by_date,
        &global_tags,
        show_hidden_tags,
    ))
}
