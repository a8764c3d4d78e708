use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use econo_repo::entry_repo::{EntryRepo, EntryUpdate, NewEntry};
use std::sync::Arc;

#[get("")]
pub async fn get_all_entries(
    entry_repo: web::Data<Arc<dyn EntryRepo>>,
) -> Result<impl Responder, HandlerError> {
    let entries = entry_repo.get_all_entries().await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[get("/{entry_id}")]
pub async fn get_entry(
    entry_repo: web::Data<Arc<dyn EntryRepo>>,
    entry_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    let entry = entry_repo.get_entry(entry_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[post("")]
pub async fn create_entry(
    entry_repo: web::Data<Arc<dyn EntryRepo>>,
    new_entry: web::Json<NewEntry>,
) -> Result<impl Responder, HandlerError> {
    let entry = entry_repo.create_entry(new_entry.into_inner()).await?;
    Ok(HttpResponse::Created().json(entry))
}

#[put("/{entry_id}")]
pub async fn update_entry(
    entry_repo: web::Data<Arc<dyn EntryRepo>>,
    entry_id: web::Path<i32>,
    update: web::Json<EntryUpdate>,
) -> Result<impl Responder, HandlerError> {
    let update = update.into_inner();
    if update.is_empty() {
        return Err(HandlerError::EmptyUpdate);
    }
    let entry = entry_repo.update_entry(entry_id.into_inner(), update).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[delete("/{entry_id}")]
pub async fn delete_entry(
    entry_repo: web::Data<Arc<dyn EntryRepo>>,
    entry_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    entry_repo.delete_entry(entry_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
