use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::tag_entry;

pub struct TagEntryQuery;

impl TagEntryQuery {
    pub async fn find_by_date(
        db: &DbConn,
        date: chrono::NaiveDate,
    ) -> Result<Vec<tag_entry::Model>, DbErr> {
        tag_entry::Entity::find()
            .filter(tag_entry::Column::Date.eq(date))
            .order_by_asc(tag_entry::Column::CreatedAt)
            .all(db)
            .await
    }

    /// Inclusive on both ends.
    pub async fn find_in_date_range(
        db: &DbConn,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    ) -> Result<Vec<tag_entry::Model>, DbErr> {
        tag_entry::Entity::find()
            .filter(tag_entry::Column::Date.between(from, to))
            .order_by_asc(tag_entry::Column::Date)
            .order_by_asc(tag_entry::Column::CreatedAt)
            .all(db)
            .await
    }
}
