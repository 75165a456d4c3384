use actix_web::{get, web::Data, HttpResponse};
use sea_orm::DbConn;

use crate::routes::utils::response_500;
use crate::services::global_tag_query::GlobalTagQuery;
use crate::types::GlobalTagVisible;

#[tracing::instrument(name = "Listing global tags", skip(db))]
#[get("")]
pub async fn list_global_tags(db: Data<DbConn>) -> HttpResponse {
    match GlobalTagQuery::find_all(&db).await {
        Ok(tags) => {
            let res: Vec<GlobalTagVisible> =
                tags.into_iter().map(GlobalTagVisible::from).collect();
            HttpResponse::Ok().json(res)
        }
        Err(e) => response_500(e),
    }
}
