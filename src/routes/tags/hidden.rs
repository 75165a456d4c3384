use actix_web::{
    put,
    web::{Data, Json, Path},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::routes::utils::response_500;
use crate::services::global_tag_mutation::GlobalTagMutation;
use crate::types::TagHiddenRequest;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    name: String,
}

#[tracing::instrument(name = "Setting a global tag's visibility", skip(db))]
#[put("/{name}/hidden")]
pub async fn set_global_tag_hidden(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
    req: Json<TagHiddenRequest>,
) -> HttpResponse {
    match GlobalTagMutation::set_hidden(&db, &path_param.name, req.hidden).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => response_500(e),
    }
}
