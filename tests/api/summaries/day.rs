use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use tagday_backend::domain::aggregation::{TagSummary, DEFAULT_COLOR};
use tagday_backend::types::SettingsUpdateRequest;

use crate::utils::{
    date, global_tag, hidden_global_tag, init_app, rated_tag_entry,
    tag_entry as tag_entry_factory, valued_tag_entry,
};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    global_tag("workout").insert(&db).await?;
    rated_tag_entry(date(15), "workout", 5).insert(&db).await?;
    rated_tag_entry(date(15), "workout", 4).insert(&db).await?;
    rated_tag_entry(date(15), "workout", 2).insert(&db).await?;
    tag_entry_factory(date(15), "dinner-with-family")
        .insert(&db)
        .await?;
    tag_entry_factory(date(15), "dinner-with-family")
        .insert(&db)
        .await?;
    valued_tag_entry(date(15), "watching-movie", "tron")
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/summaries/day/2026-02-15")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<TagSummary> = test::read_body_json(resp).await;
    assert_eq!(res.len(), 3);

    // name-ascending order
    assert_eq!(res[0].label, "dinner-with-family (2)");
    assert_eq!(res[1].label, "watching-movie (tron)");
    assert_eq!(res[2].label, "workout");
    assert_eq!(res[2].rating, Some(4));
    assert_eq!(res[2].rating_count, 3);

    // registered color vs orphan default
    assert_eq!(res[2].color, 0xFF1D4ED8_u32 as i32);
    assert_eq!(res[0].color, DEFAULT_COLOR);

    Ok(())
}

#[actix_web::test]
async fn hidden_tags_respect_the_setting() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    hidden_global_tag("secret").insert(&db).await?;
    tag_entry_factory(date(15), "secret").insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/summaries/day/2026-02-15")
        .to_request();
    let res: Vec<TagSummary> = test::call_and_read_body_json(&app, req).await;
    assert!(res.is_empty());

    let req = test::TestRequest::put()
        .set_json(SettingsUpdateRequest {
            show_hidden_tags: true,
        })
        .uri("/api/settings")
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/summaries/day/2026-02-15")
        .to_request();
    let res: Vec<TagSummary> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].name, "secret");

    Ok(())
}

#[actix_web::test]
async fn empty_day_yields_empty_summary() -> Result<(), DbErr> {
    let (app, _db) = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/summaries/day/2026-02-15")
        .to_request();

    let res: Vec<TagSummary> = test::call_and_read_body_json(&app, req).await;
    assert!(res.is_empty());

    Ok(())
}
