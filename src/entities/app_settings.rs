use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const SETTINGS_ROW_ID: i16 = 1;

/// Single-row table (id = SETTINGS_ROW_ID). Absent row reads as defaults.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,
    pub show_hidden_tags: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
