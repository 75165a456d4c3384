use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use uuid::Uuid;

use tagday_backend::entities::tag_entry;

use crate::utils::{date, init_app, tag_entry as tag_entry_factory};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let kept = tag_entry_factory(date(15), "workout").insert(&db).await?;
    let removed = tag_entry_factory(date(15), "workout").insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/entries/{}", removed.id))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    let remaining = tag_entry::Entity::find().all(&db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

#[actix_web::test]
async fn deleting_an_unknown_entry_still_succeeds() -> Result<(), DbErr> {
    let (app, _db) = init_app().await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/entries/{}", Uuid::now_v7()))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    Ok(())
}
