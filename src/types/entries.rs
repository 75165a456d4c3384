use serde::{Deserialize, Serialize};

use crate::entities::tag_entry;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TagEntryVisible {
    pub id: uuid::Uuid,
    pub date: chrono::NaiveDate,
    pub name: String,
    pub value: Option<String>,
    pub rating: Option<i16>,
}

impl From<tag_entry::Model> for TagEntryVisible {
    fn from(item: tag_entry::Model) -> Self {
        TagEntryVisible {
            id: item.id,
            date: item.date,
            name: item.name,
            value: item.value,
            rating: item.rating,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TagEntryCreateRequest {
    pub date: chrono::NaiveDate,
    pub input: String,
}
