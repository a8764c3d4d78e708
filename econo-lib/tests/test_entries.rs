use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::{read_body_json, TestRequest};
use actix_web::web::Data;
use actix_web::App;
use chrono::{NaiveDate, NaiveDateTime};
use econo_repo::entry_repo::{Entry, NewEntry};
use econo_repo::Repos;
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;

use utils::repos;
use utils::tracing_setup;

#[macro_use]
mod utils;

fn date(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[rstest]
#[actix_rt::test]
async fn test_create_and_get_entry(_tracing_setup: &(), repos: Repos) {
    let service = test::init_service(build_app!(repos)).await;

    let new_entry = NewEntry::new(
        1,
        "D".to_owned(),
        Some(2),
        Some("groceries".to_owned()),
        Decimal::from_str("54.30").unwrap(),
        date(2025, 11, 25, 10),
    );
    let request = TestRequest::post()
        .uri("/financas")
        .set_json(&new_entry)
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(StatusCode::CREATED, response.status());

    let created_entry: Entry = read_body_json(response).await;
    assert_eq!(new_entry.user_id, created_entry.user_id);
    assert_eq!(new_entry.kind, created_entry.kind);
    assert_eq!(new_entry.category_id, created_entry.category_id);
    assert_eq!(new_entry.description, created_entry.description);
    assert_eq!(new_entry.amount, created_entry.amount);
    assert_eq!(new_entry.date, created_entry.date);

    let request = TestRequest::get()
        .uri(format!("/financas/{}", created_entry.id).as_str())
        .to_request();
    let stored_entry: Entry = test::call_and_read_body_json(&service, request).await;
    assert_eq!(created_entry, stored_entry);
}

#[rstest]
#[actix_rt::test]
async fn test_create_entry_without_optional_fields(_tracing_setup: &(), repos: Repos) {
    let service = test::init_service(build_app!(repos)).await;

    // id_categoria and descricao omitted entirely
    let request = TestRequest::post()
        .uri("/financas")
        .set_json(serde_json::json!({
            "id_usuario": 1,
            "tipo": "R",
            "valor": 1500,
            "data": "2025-11-25T10:00:00",
        }))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(StatusCode::CREATED, response.status());

    let created_entry: Entry = read_body_json(response).await;
    assert_eq!(None, created_entry.category_id);
    assert_eq!(None, created_entry.description);
    assert_eq!(date(2025, 11, 25, 10), created_entry.date);
}

#[rstest]
#[actix_rt::test]
async fn test_list_entries_ordering(_tracing_setup: &(), repos: Repos) {
    let service = test::init_service(build_app!(repos)).await;

    let mut ids = Vec::new();
    for entry_date in [date(2025, 3, 1, 9), date(2025, 5, 20, 18), date(2025, 5, 20, 18)] {
        let new_entry = NewEntry::new(
            1,
            "D".to_owned(),
            None,
            None,
            Decimal::from(10),
            entry_date,
        );
        let request = TestRequest::post()
            .uri("/financas")
            .set_json(&new_entry)
            .to_request();
        let entry: Entry = test::call_and_read_body_json(&service, request).await;
        ids.push(entry.id);
    }

    let request = TestRequest::get().uri("/financas").to_request();
    let entries: Vec<Entry> = test::call_and_read_body_json(&service, request).await;
    let listed_ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
    // newest date first, the tie broken by id descending
    assert_eq!(vec![ids[2], ids[1], ids[0]], listed_ids);
}

#[rstest]
#[actix_rt::test]
async fn test_update_entry(_tracing_setup: &(), repos: Repos) {
    let service = test::init_service(build_app!(repos)).await;

    let new_entry = NewEntry::new(
        1,
        "D".to_owned(),
        None,
        Some("cinema".to_owned()),
        Decimal::from(50),
        date(2025, 7, 4, 20),
    );
    let request = TestRequest::post()
        .uri("/financas")
        .set_json(&new_entry)
        .to_request();
    let entry: Entry = test::call_and_read_body_json(&service, request).await;

    let request = TestRequest::put()
        .uri(format!("/financas/{}", entry.id).as_str())
        .set_json(serde_json::json!({ "valor": 65 }))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert!(response.status().is_success());

    let updated_entry: Entry = read_body_json(response).await;
    assert_eq!(Decimal::from(65), updated_entry.amount);
    assert_eq!(entry.description, updated_entry.description);
    assert_eq!(entry.date, updated_entry.date);
}

#[rstest]
#[actix_rt::test]
async fn test_entry_not_found(_tracing_setup: &(), repos: Repos) {
    let service = test::init_service(build_app!(repos)).await;

    let request = TestRequest::get().uri("/financas/999999").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let request = TestRequest::put()
        .uri("/financas/999999")
        .set_json(serde_json::json!({ "valor": 1 }))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let request = TestRequest::delete().uri("/financas/999999").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[rstest]
#[actix_rt::test]
async fn test_delete_entry(_tracing_setup: &(), repos: Repos) {
    let service = test::init_service(build_app!(repos)).await;

    let new_entry = NewEntry::new(
        1,
        "R".to_owned(),
        None,
        None,
        Decimal::from(100),
        date(2025, 2, 14, 8),
    );
    let request = TestRequest::post()
        .uri("/financas")
        .set_json(&new_entry)
        .to_request();
    let entry: Entry = test::call_and_read_body_json(&service, request).await;

    let request = TestRequest::delete()
        .uri(format!("/financas/{}", entry.id).as_str())
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(StatusCode::NO_CONTENT, response.status());

    let request = TestRequest::get()
        .uri(format!("/financas/{}", entry.id).as_str())
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}
