mod handlers;

use actix_web::{web, Scope};

pub fn entry_tag_service() -> Scope {
    web::scope("/financas-tags")
        .service(handlers::get_all_links)
        .service(handlers::create_link)
        .service(handlers::delete_link)
}
