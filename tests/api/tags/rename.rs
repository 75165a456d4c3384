use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use tagday_backend::entities::{global_tag as global_tag_entity, tag_entry};
use tagday_backend::types::{ErrorResponse, TagRenameRequest};

use crate::utils::{date, global_tag, init_app, tag_entry as tag_entry_factory};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    global_tag("workout").insert(&db).await?;
    tag_entry_factory(date(15), "workout").insert(&db).await?;

    let req = test::TestRequest::put()
        .set_json(TagRenameRequest {
            new_name: "exercise".to_string(),
        })
        .uri("/api/tags/workout")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    assert!(global_tag_entity::Entity::find_by_id("exercise".to_string())
        .one(&db)
        .await?
        .is_some());
    assert!(global_tag_entity::Entity::find_by_id("workout".to_string())
        .one(&db)
        .await?
        .is_none());

    // historical entries follow the rename
    let entries = tag_entry::Entity::find().all(&db).await?;
    assert_eq!(entries[0].name, "exercise");

    Ok(())
}

#[actix_web::test]
async fn invalid_new_name_is_rejected() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    global_tag("workout").insert(&db).await?;

    let req = test::TestRequest::put()
        .set_json(TagRenameRequest {
            new_name: "-bad-".to_string(),
        })
        .uri("/api/tags/workout")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert!(res.error.contains("Invalid tag name"));

    Ok(())
}

#[actix_web::test]
async fn collision_with_another_tag_conflicts() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    global_tag("workout").insert(&db).await?;
    global_tag("Exercise").insert(&db).await?;

    let req = test::TestRequest::put()
        .set_json(TagRenameRequest {
            new_name: "exercise".to_string(),
        })
        .uri("/api/tags/workout")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CONFLICT);

    // nothing changed
    assert!(global_tag_entity::Entity::find_by_id("workout".to_string())
        .one(&db)
        .await?
        .is_some());

    Ok(())
}

#[actix_web::test]
async fn renaming_a_missing_tag_is_a_no_op() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::put()
        .set_json(TagRenameRequest {
            new_name: "anything".to_string(),
        })
        .uri("/api/tags/ghost")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    assert!(global_tag_entity::Entity::find().all(&db).await?.is_empty());

    Ok(())
}
