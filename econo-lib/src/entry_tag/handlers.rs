use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use econo_repo::entry_tag_repo::{EntryTagLink, EntryTagRepo};
use std::sync::Arc;

#[get("")]
pub async fn get_all_links(
    entry_tag_repo: web::Data<Arc<dyn EntryTagRepo>>,
) -> Result<impl Responder, HandlerError> {
    let links = entry_tag_repo.get_all_links().await?;
    Ok(HttpResponse::Ok().json(links))
}

#[post("")]
pub async fn create_link(
    entry_tag_repo: web::Data<Arc<dyn EntryTagRepo>>,
    link: web::Json<EntryTagLink>,
) -> Result<impl Responder, HandlerError> {
    entry_tag_repo.create_link(link.into_inner()).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({ "message": "Link created" })))
}

#[delete("/{entry_id}/{tag_id}")]
pub async fn delete_link(
    entry_tag_repo: web::Data<Arc<dyn EntryTagRepo>>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, HandlerError> {
    let (entry_id, tag_id) = path.into_inner();
    entry_tag_repo.delete_link(entry_id, tag_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
