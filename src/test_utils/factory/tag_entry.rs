use chrono::{NaiveDate, Utc};
use sea_orm::Set;
use uuid::Uuid;

use crate::entities::tag_entry;

pub fn tag_entry(date: NaiveDate, name: &str) -> tag_entry::ActiveModel {
    tag_entry::ActiveModel {
        id: Set(Uuid::now_v7()),
        date: Set(date),
        name: Set(name.to_string()),
        value: Set(None),
        rating: Set(None),
        created_at: Set(Utc::now().fixed_offset()),
    }
}

pub trait TagEntryFactory {
    fn value(self, value: &str) -> tag_entry::ActiveModel;
    fn rating(self, rating: i16) -> tag_entry::ActiveModel;
}

impl TagEntryFactory for tag_entry::ActiveModel {
    fn value(mut self, value: &str) -> tag_entry::ActiveModel {
        self.value = Set(Some(value.to_string()));
        self
    }

    fn rating(mut self, rating: i16) -> tag_entry::ActiveModel {
        self.rating = Set(Some(rating));
        self
    }
}
