use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use econo_repo::tag_repo::{NewTag, TagRepo, TagUpdate};
use std::sync::Arc;

#[get("")]
pub async fn get_all_tags(
    tag_repo: web::Data<Arc<dyn TagRepo>>,
) -> Result<impl Responder, HandlerError> {
    let tags = tag_repo.get_all_tags().await?;
    Ok(HttpResponse::Ok().json(tags))
}

#[get("/{tag_id}")]
pub async fn get_tag(
    tag_repo: web::Data<Arc<dyn TagRepo>>,
    tag_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    let tag = tag_repo.get_tag(tag_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tag))
}

#[post("")]
pub async fn create_tag(
    tag_repo: web::Data<Arc<dyn TagRepo>>,
    new_tag: web::Json<NewTag>,
) -> Result<impl Responder, HandlerError> {
    let tag = tag_repo.create_tag(new_tag.into_inner()).await?;
    Ok(HttpResponse::Created().json(tag))
}

#[put("/{tag_id}")]
pub async fn update_tag(
    tag_repo: web::Data<Arc<dyn TagRepo>>,
    tag_id: web::Path<i32>,
    update: web::Json<TagUpdate>,
) -> Result<impl Responder, HandlerError> {
    let update = update.into_inner();
    if update.is_empty() {
        return Err(HandlerError::EmptyUpdate);
    }
    let tag = tag_repo.update_tag(tag_id.into_inner(), update).await?;
    Ok(HttpResponse::Ok().json(tag))
}

#[delete("/{tag_id}")]
pub async fn delete_tag(
    tag_repo: web::Data<Arc<dyn TagRepo>>,
    tag_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    tag_repo.delete_tag(tag_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
