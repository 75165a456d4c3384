mod day;
mod month;
mod week;
mod year;

use std::collections::HashMap;

use actix_web::web::{scope, ServiceConfig};
use sea_orm::{DbConn, DbErr};

use crate::entities::global_tag;
use crate::services::{app_settings_query::AppSettingsQuery, global_tag_query::GlobalTagQuery};

pub fn summary_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/summaries")
            .service(day::day_summary)
            .service(week::week_summary)
            .service(month::month_summary)
            .service(year::year_summary),
    );
}

/// Registry + visibility inputs shared by every summary endpoint. Summaries
/// are recomputed from a fresh read on each request.
async fn aggregation_context(
    db: &DbConn,
) -> Result<(HashMap<String, global_tag::Model>, bool), DbErr> {
    let global_tags = GlobalTagQuery::find_all_as_map(db).await?;
    let show_hidden_tags = AppSettingsQuery::show_hidden_tags(db).await?;
    Ok((global_tags, show_hidden_tags))
}
