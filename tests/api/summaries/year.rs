use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use tagday_backend::domain::aggregation::MonthSummary;

use crate::utils::{date, init_app, tag_entry as tag_entry_factory};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    for _ in 0..5 {
        tag_entry_factory(date(10), "c-tag").insert(&db).await?;
    }
    for _ in 0..3 {
        tag_entry_factory(date(11), "b-tag").insert(&db).await?;
    }
    for _ in 0..3 {
        tag_entry_factory(date(12), "a-tag").insert(&db).await?;
    }

    let req = test::TestRequest::get()
        .uri("/api/summaries/year/2026")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<MonthSummary> = test::read_body_json(resp).await;
    assert_eq!(res.len(), 12);

    // count-descending, ties broken case-insensitively by name
    let february = &res[1];
    assert_eq!(february.month, 2);
    assert_eq!(
        february.top_labels,
        vec!["c-tag (5)".to_string(), "a-tag (3)".to_string()]
    );
    assert_eq!(february.extra_count, 1);

    assert!(res[0].top_labels.is_empty());
    assert_eq!(res[0].extra_count, 0);

    Ok(())
}
