use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use econo_repo::category_repo::{CategoryRepo, CategoryUpdate, NewCategory};
use std::sync::Arc;

#[get("")]
pub async fn get_all_categories(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
) -> Result<impl Responder, HandlerError> {
    let categories = category_repo.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/{category_id}")]
pub async fn get_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    category_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    let category = category_repo.get_category(category_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}

#[post("")]
pub async fn create_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    new_category: web::Json<NewCategory>,
) -> Result<impl Responder, HandlerError> {
    let category = category_repo
        .create_category(new_category.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(category))
}

#[put("/{category_id}")]
pub async fn update_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    category_id: web::Path<i32>,
    update: web::Json<CategoryUpdate>,
) -> Result<impl Responder, HandlerError> {
    let update = update.into_inner();
    if update.is_empty() {
        return Err(HandlerError::EmptyUpdate);
    }
    let category = category_repo
        .update_category(category_id.into_inner(), update)
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

#[delete("/{category_id}")]
pub async fn delete_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    category_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    category_repo
        .delete_category(category_id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
