use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Set, TransactionError,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{global_tag, tag_entry};

use super::global_tag_mutation::default_color_for;

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewTagEntry {
    pub date: chrono::NaiveDate,
    pub name: String,
    pub value: Option<String>,
    pub rating: Option<i16>,
}

pub struct TagEntryMutation;

impl TagEntryMutation {
    /// Appends an entry and registers its name on first use, atomically.
    /// The registry lookup folds case, so "Workout" and "workout" share one
    /// registry row while each entry keeps the name exactly as typed.
    pub async fn create(
        db: &DbConn,
        form_data: NewTagEntry,
    ) -> Result<tag_entry::Model, TransactionError<DbErr>> {
        db.transaction::<_, tag_entry::Model, DbErr>(|txn| {
            Box::pin(async move {
                let registered = global_tag::Entity::find()
                    .filter(
                        Expr::expr(Func::lower(Expr::col(global_tag::Column::Name)))
                            .eq(form_data.name.to_lowercase()),
                    )
                    .one(txn)
                    .await?;
                if registered.is_none() {
                    global_tag::ActiveModel {
                        name: Set(form_data.name.clone()),
                        color: Set(default_color_for(&form_data.name)),
                        hidden: Set(false),
                        user_selected_color: Set(false),
                    }
                    .insert(txn)
                    .await?;
                }

                tag_entry::ActiveModel {
                    id: Set(Uuid::now_v7()),
                    date: Set(form_data.date),
                    name: Set(form_data.name.clone()),
                    value: Set(form_data.value.clone()),
                    rating: Set(form_data.rating),
                    created_at: Set(Utc::now().fixed_offset()),
                }
                .insert(txn)
                .await
            })
        })
        .await
    }

    pub async fn delete(db: &DbConn, entry_id: Uuid) -> Result<(), DbErr> {
        tag_entry::Entity::delete_by_id(entry_id).exec(db).await?;
        Ok(())
    }

    pub async fn delete_by_date_and_name(
        db: &DbConn,
        date: chrono::NaiveDate,
        name: &str,
    ) -> Result<(), DbErr> {
        tag_entry::Entity::delete_many()
            .filter(tag_entry::Column::Date.eq(date))
            .filter(tag_entry::Column::Name.eq(name))
            .exec(db)
            .await?;
        Ok(())
    }
}
