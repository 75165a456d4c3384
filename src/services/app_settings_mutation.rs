use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Set};

use crate::entities::app_settings::{self, SETTINGS_ROW_ID};

pub struct AppSettingsMutation;

impl AppSettingsMutation {
    /// Single-row upsert; the row is materialized on first update.
    pub async fn set_show_hidden_tags(
        db: &DbConn,
        show: bool,
    ) -> Result<app_settings::Model, DbErr> {
        match app_settings::Entity::find_by_id(SETTINGS_ROW_ID).one(db).await? {
            Some(settings) => {
                let mut settings = settings.into_active_model();
                settings.show_hidden_tags = Set(show);
                settings.update(db).await
            }
            None => {
                app_settings::ActiveModel {
                    id: Set(SETTINGS_ROW_ID),
                    show_hidden_tags: Set(show),
                }
                .insert(db)
                .await
            }
        }
    }
}
