use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use tagday_backend::entities::{global_tag as global_tag_entity, tag_entry};

use crate::utils::{date, global_tag, init_app, tag_entry as tag_entry_factory};

#[actix_web::test]
async fn entries_survive_registry_deletion() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    global_tag("workout").insert(&db).await?;
    tag_entry_factory(date(15), "workout").insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri("/api/tags/workout")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    assert!(global_tag_entity::Entity::find().all(&db).await?.is_empty());
    assert_eq!(tag_entry::Entity::find().all(&db).await?.len(), 1);

    Ok(())
}

#[actix_web::test]
async fn deleting_an_unknown_tag_still_succeeds() -> Result<(), DbErr> {
    let (app, _db) = init_app().await?;

    let req = test::TestRequest::delete()
        .uri("/api/tags/ghost")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    Ok(())
}
