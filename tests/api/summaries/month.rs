use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use tagday_backend::domain::aggregation::DateSummary;

use crate::utils::{date, init_app, tag_entry as tag_entry_factory};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    tag_entry_factory(date(1), "workout").insert(&db).await?;
    tag_entry_factory(date(28), "workout").insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/summaries/month/2026-02-15")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<DateSummary> = test::read_body_json(resp).await;
    // every day of February 2026
    assert_eq!(res.len(), 28);
    assert_eq!(res[0].date, date(1));
    assert_eq!(res[27].date, date(28));

    assert_eq!(res[0].top_labels, vec!["workout".to_string()]);
    assert_eq!(res[27].top_labels, vec!["workout".to_string()]);
    assert!(res[1].top_labels.is_empty());

    Ok(())
}
