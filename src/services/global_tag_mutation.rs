use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter, Set,
    TransactionError, TransactionTrait,
};

use crate::entities::{global_tag, tag_entry};
use crate::types::CustomDbErr;

use super::global_tag_query::GlobalTagQuery;

/// Colors handed out to tags whose color the user never picked.
pub const PALETTE: [i32; 8] = [
    0xFF1D4ED8_u32 as i32,
    0xFF0891B2_u32 as i32,
    0xFF0F766E_u32 as i32,
    0xFF4D7C0F_u32 as i32,
    0xFFB45309_u32 as i32,
    0xFFBE123C_u32 as i32,
    0xFF7E22CE_u32 as i32,
    0xFF374151_u32 as i32,
];

pub(crate) fn default_color_for(name: &str) -> i32 {
    let hash = name
        .bytes()
        .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)));
    PALETTE[hash as usize % PALETTE.len()]
}

pub struct GlobalTagMutation;

impl GlobalTagMutation {
    /// Renames the registry row and every historical entry in one
    /// transaction. A missing current tag is a silent no-op; a
    /// case-insensitive collision with another tag aborts with `Duplicate`.
    pub async fn rename(
        db: &DbConn,
        current_name: &str,
        new_name: &str,
    ) -> Result<(), TransactionError<DbErr>> {
        if current_name == new_name {
            return Ok(());
        }
        let current_name = current_name.to_string();
        let new_name = new_name.to_string();
        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                let current = match global_tag::Entity::find_by_id(current_name.clone())
                    .one(txn)
                    .await?
                {
                    Some(tag) => tag,
                    None => return Ok(()),
                };

                let collision = global_tag::Entity::find()
                    .filter(
                        Expr::expr(Func::lower(Expr::col(global_tag::Column::Name)))
                            .eq(new_name.to_lowercase()),
                    )
                    .filter(global_tag::Column::Name.ne(current_name.clone()))
                    .one(txn)
                    .await?;
                if collision.is_some() {
                    return Err(DbErr::Custom(CustomDbErr::Duplicate.to_string()));
                }

                // name is the primary key; move the row via delete + insert
                global_tag::Entity::delete_by_id(current_name.clone())
                    .exec(txn)
                    .await?;
                global_tag::ActiveModel {
                    name: Set(new_name.clone()),
                    color: Set(current.color),
                    hidden: Set(current.hidden),
                    user_selected_color: Set(current.user_selected_color),
                }
                .insert(txn)
                .await?;

                tag_entry::Entity::update_many()
                    .col_expr(tag_entry::Column::Name, Expr::value(new_name.clone()))
                    .filter(tag_entry::Column::Name.eq(current_name.clone()))
                    .exec(txn)
                    .await?;
                Ok(())
            })
        })
        .await
    }

    /// Registry-only deletion. Entries keep the name as orphaned plain text.
    pub async fn delete(db: &DbConn, name: &str) -> Result<(), DbErr> {
        global_tag::Entity::delete_by_id(name.to_string())
            .exec(db)
            .await?;
        Ok(())
    }

    /// Missing tags are a no-op, matching the rename policy.
    pub async fn set_color(db: &DbConn, name: &str, color: i32) -> Result<(), DbErr> {
        if let Some(tag) = GlobalTagQuery::find_by_name(db, name).await? {
            let mut tag = tag.into_active_model();
            tag.color = Set(color);
            tag.user_selected_color = Set(true);
            tag.update(db).await?;
        }
        Ok(())
    }

    pub async fn set_hidden(db: &DbConn, name: &str, hidden: bool) -> Result<(), DbErr> {
        if let Some(tag) = GlobalTagQuery::find_by_name(db, name).await? {
            let mut tag = tag.into_active_model();
            tag.hidden = Set(hidden);
            tag.update(db).await?;
        }
        Ok(())
    }
}
