mod utils;

use chrono::NaiveDate;
use econo_repo::entry_repo::{EntryRepoError, EntryUpdate};
use econo_repo::Repos;
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;
use utils::generator::{generate_new_entry, generate_new_entry_with_date, generate_new_user};
use utils::repos;

#[rstest]
#[actix_rt::test]
async fn test_create_and_get_entry(repos: Repos) {
    let user = repos
        .user_repo
        .create_user(generate_new_user())
        .await
        .unwrap();

    let new_entry = generate_new_entry(user.id);
    let entry = repos.entry_repo.create_entry(new_entry.clone()).await.unwrap();

    let stored_entry = repos.entry_repo.get_entry(entry.id).await.unwrap();
    assert_eq!(entry, stored_entry);
    assert_eq!(new_entry.user_id, stored_entry.user_id);
    assert_eq!(new_entry.kind, stored_entry.kind);
    assert_eq!(new_entry.category_id, stored_entry.category_id);
    assert_eq!(new_entry.description, stored_entry.description);
    assert_eq!(new_entry.amount, stored_entry.amount);
    assert_eq!(new_entry.date, stored_entry.date);
}

#[rstest]
#[actix_rt::test]
async fn test_get_invalid_entry(repos: Repos) {
    let get_result = repos.entry_repo.get_entry(999999).await;
    assert!(matches!(
        get_result,
        Err(EntryRepoError::EntryNotFound(999999))
    ));
}

#[rstest]
#[actix_rt::test]
async fn test_get_all_entries_ordering(repos: Repos) {
    let user = repos
        .user_repo
        .create_user(generate_new_user())
        .await
        .unwrap();

    let old = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let recent = NaiveDate::from_ymd_opt(2025, 6, 15)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();

    let old_entry = repos
        .entry_repo
        .create_entry(generate_new_entry_with_date(user.id, old))
        .await
        .unwrap();
    let first_recent = repos
        .entry_repo
        .create_entry(generate_new_entry_with_date(user.id, recent))
        .await
        .unwrap();
    let second_recent = repos
        .entry_repo
        .create_entry(generate_new_entry_with_date(user.id, recent))
        .await
        .unwrap();

    let entries = repos.entry_repo.get_all_entries().await.unwrap();
    let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
    // most recent date first, same date broken by id descending
    assert_eq!(vec![second_recent.id, first_recent.id, old_entry.id], ids);
}

#[rstest]
#[actix_rt::test]
async fn test_update_entry_partial(repos: Repos) {
    let user = repos
        .user_repo
        .create_user(generate_new_user())
        .await
        .unwrap();
    let entry = repos
        .entry_repo
        .create_entry(generate_new_entry(user.id))
        .await
        .unwrap();

    let update = EntryUpdate {
        amount: Some(Decimal::from_str("123.45").unwrap()),
        ..EntryUpdate::default()
    };
    let updated_entry = repos.entry_repo.update_entry(entry.id, update).await.unwrap();

    assert_eq!(Decimal::from_str("123.45").unwrap(), updated_entry.amount);
    assert_eq!(entry.kind, updated_entry.kind);
    assert_eq!(entry.description, updated_entry.description);
    assert_eq!(entry.date, updated_entry.date);
}

#[rstest]
#[actix_rt::test]
async fn test_update_invalid_entry(repos: Repos) {
    let update = EntryUpdate {
        description: Some("groceries".to_owned()),
        ..EntryUpdate::default()
    };
    let update_result = repos.entry_repo.update_entry(999999, update).await;
    assert!(matches!(
        update_result,
        Err(EntryRepoError::EntryNotFound(999999))
    ));
}

#[rstest]
#[actix_rt::test]
async fn test_delete_entry(repos: Repos) {
    let user = repos
        .user_repo
        .create_user(generate_new_user())
        .await
        .unwrap();
    let entry = repos
        .entry_repo
        .create_entry(generate_new_entry(user.id))
        .await
        .unwrap();

    repos.entry_repo.delete_entry(entry.id).await.unwrap();

    let get_result = repos.entry_repo.get_entry(entry.id).await;
    assert!(matches!(get_result, Err(EntryRepoError::EntryNotFound(_))));

    let delete_result = repos.entry_repo.delete_entry(entry.id).await;
    assert!(matches!(
        delete_result,
        Err(EntryRepoError::EntryNotFound(_))
    ));
}
