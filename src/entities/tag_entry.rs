use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One recorded tag on a calendar day. `name` is plain text without a
/// foreign key, so entries outlive their global tag.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tag_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub name: String,
    pub value: Option<String>,
    pub rating: Option<i16>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
