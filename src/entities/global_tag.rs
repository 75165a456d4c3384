use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Registry record for a tag name. Entries reference it by name only, so a
/// row may be deleted while entries carrying the name survive.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "global_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub color: i32,
    pub hidden: bool,
    pub user_selected_color: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
