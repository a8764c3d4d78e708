mod handlers;

use actix_web::{web, Scope};

pub fn entry_service() -> Scope {
    web::scope("/financas")
        .service(handlers::get_all_entries)
        .service(handlers::get_entry)
        .service(handlers::create_entry)
        .service(handlers::update_entry)
        .service(handlers::delete_entry)
}
