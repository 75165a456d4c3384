use sea_orm::{DbConn, DbErr, EntityTrait};

use crate::entities::app_settings::{self, SETTINGS_ROW_ID};

pub struct AppSettingsQuery;

impl AppSettingsQuery {
    pub async fn get(db: &DbConn) -> Result<Option<app_settings::Model>, DbErr> {
        app_settings::Entity::find_by_id(SETTINGS_ROW_ID).one(db).await
    }

    /// Defaults to false while the settings row does not exist yet.
    pub async fn show_hidden_tags(db: &DbConn) -> Result<bool, DbErr> {
        Ok(Self::get(db)
            .await?
            .map(|settings| settings.show_hidden_tags)
            .unwrap_or(false))
    }
}
