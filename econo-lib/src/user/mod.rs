mod handlers;

use actix_web::{web, Scope};

pub fn user_service() -> Scope {
    web::scope("/usuarios")
        .service(handlers::get_all_users)
        .service(handlers::get_user)
        .service(handlers::create_user)
        .service(handlers::update_user)
        .service(handlers::delete_user)
}
