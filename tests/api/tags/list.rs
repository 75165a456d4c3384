use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use tagday_backend::types::GlobalTagVisible;

use crate::utils::{global_tag, init_app};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    global_tag("banana").insert(&db).await?;
    global_tag("Apple").insert(&db).await?;
    global_tag("cherry").insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/tags").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<GlobalTagVisible> = test::read_body_json(resp).await;
    let names: Vec<&str> = res.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "banana", "cherry"]);

    Ok(())
}

#[actix_web::test]
async fn empty_registry_yields_empty_list() -> Result<(), DbErr> {
    let (app, _db) = init_app().await?;

    let req = test::TestRequest::get().uri("/api/tags").to_request();

    let res: Vec<GlobalTagVisible> = test::call_and_read_body_json(&app, req).await;
    assert!(res.is_empty());

    Ok(())
}
