use actix_web::{
    put,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::routes::utils::response_500;
use crate::services::app_settings_mutation::AppSettingsMutation;
use crate::types::{SettingsUpdateRequest, SettingsVisible};

#[tracing::instrument(name = "Updating the app settings", skip(db))]
#[put("")]
pub async fn update_settings(
    db: Data<DbConn>,
    req: Json<SettingsUpdateRequest>,
) -> HttpResponse {
    match AppSettingsMutation::set_show_hidden_tags(&db, req.show_hidden_tags).await {
        Ok(settings) => HttpResponse::Ok().json(SettingsVisible::from(settings)),
        Err(e) => response_500(e),
    }
}
