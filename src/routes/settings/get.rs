use actix_web::{get, web::Data, HttpResponse};
use sea_orm::DbConn;

use crate::routes::utils::response_500;
use crate::services::app_settings_query::AppSettingsQuery;
use crate::types::SettingsVisible;

#[tracing::instrument(name = "Reading the app settings", skip(db))]
#[get("")]
pub async fn get_settings(db: Data<DbConn>) -> HttpResponse {
    match AppSettingsQuery::get(&db).await {
        Ok(settings) => HttpResponse::Ok().json(
            settings
                .map(SettingsVisible::from)
                .unwrap_or_default(),
        ),
        Err(e) => response_500(e),
    }
}
