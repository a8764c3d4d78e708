use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use econo_repo::user_repo::{NewUser, UserRepo, UserUpdate};
use std::sync::Arc;

#[get("")]
pub async fn get_all_users(
    user_repo: web::Data<Arc<dyn UserRepo>>,
) -> Result<impl Responder, HandlerError> {
    let users = user_repo.get_all_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    let user = user_repo.get_user(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("")]
pub async fn create_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    new_user: web::Json<NewUser>,
) -> Result<impl Responder, HandlerError> {
    let user = user_repo.create_user(new_user.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[put("/{user_id}")]
pub async fn update_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<i32>,
    update: web::Json<UserUpdate>,
) -> Result<impl Responder, HandlerError> {
    let update = update.into_inner();
    if update.is_empty() {
        return Err(HandlerError::EmptyUpdate);
    }
    let user = user_repo.update_user(user_id.into_inner(), update).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    user_repo.delete_user(user_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
