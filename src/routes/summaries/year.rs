use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use chrono::NaiveDate;
use sea_orm::{DbConn, DbErr};

use crate::domain::aggregation::{build_year_summary, group_entries_by_date, MonthSummary};
use crate::routes::utils::{response_400, response_500};
use crate::services::tag_entry_query::TagEntryQuery;

use super::aggregation_context;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    year: i32,
}

#[tracing::instrument(name = "Building a year summary", skip(db))]
#[get("/year/{year}")]
pub async fn year_summary(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    let (first, last) = match year_bounds(path_param.year) {
        Some(bounds) => bounds,
        None => return response_400("Year is out of range."),
    };
    match build(&db, path_param.year, first, last).await {
        Ok(summaries) => HttpResponse::Ok().json(summaries),
        Err(e) => response_500(e),
    }
}

fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

async fn build(
    db: &DbConn,
    year: i32,
    first: NaiveDate,
    last: NaiveDate,
) -> Result<Vec<MonthSummary>, DbErr> {
    let entries = TagEntryQuery::find_in_date_range(db, first, last).await?;
    let entries_by_date = group_entries_by_date(entries);
    let (global_tags, show_hidden_tags) = aggregation_context(db).await?;
    Ok(build_year_summary(
        year,
        &entries_by_date,
        &global_tags,
        show_hidden_tags,
    ))
}
