use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    DbConn, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
};

use crate::entities::global_tag;

pub struct GlobalTagQuery;

impl GlobalTagQuery {
    /// All registry rows, sorted case-insensitively by name for listing.
    pub async fn find_all(db: &DbConn) -> Result<Vec<global_tag::Model>, DbErr> {
        global_tag::Entity::find()
            .order_by(
                SimpleExpr::from(Func::lower(Expr::col(global_tag::Column::Name))),
                Order::Asc,
            )
            .all(db)
            .await
    }

    pub async fn find_all_as_map(
        db: &DbConn,
    ) -> Result<HashMap<String, global_tag::Model>, DbErr> {
        let tags = global_tag::Entity::find().all(db).await?;
        Ok(tags.into_iter().map(|tag| (tag.name.clone(), tag)).collect())
    }

    pub async fn find_by_name(
        db: &DbConn,
        name: &str,
    ) -> Result<Option<global_tag::Model>, DbErr> {
        global_tag::Entity::find_by_id(name.to_string()).one(db).await
    }

    /// Collision lookup. The stored key stays case-sensitive; only this
    /// comparison folds case.
    pub async fn find_by_name_case_insensitive(
        db: &DbConn,
        name: &str,
    ) -> Result<Option<global_tag::Model>, DbErr> {
        global_tag::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(global_tag::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .one(db)
            .await
    }
}
