mod utils;

use econo_repo::tag_repo::{NewTag, TagRepoError, TagUpdate};
use econo_repo::Repos;
use rstest::rstest;
use utils::generator::generate_new_user;
use utils::repos;

#[rstest]
#[actix_rt::test]
async fn test_create_and_get_tag(repos: Repos) {
    let user = repos
        .user_repo
        .create_user(generate_new_user())
        .await
        .unwrap();

    let new_tag = NewTag::new("urgent".to_owned(), "FF0000".to_owned(), Some(user.id));
    let tag = repos.tag_repo.create_tag(new_tag.clone()).await.unwrap();

    let stored_tag = repos.tag_repo.get_tag(tag.id).await.unwrap();
    assert_eq!(tag, stored_tag);
    assert_eq!(new_tag.name, stored_tag.name);
    assert_eq!(new_tag.color, stored_tag.color);
    assert_eq!(new_tag.user_id, stored_tag.user_id);
}

#[rstest]
#[actix_rt::test]
async fn test_create_tag_without_owner(repos: Repos) {
    let tag = repos
        .tag_repo
        .create_tag(NewTag::new("shared".to_owned(), "00FF00".to_owned(), None))
        .await
        .unwrap();

    let stored_tag = repos.tag_repo.get_tag(tag.id).await.unwrap();
    assert_eq!(None, stored_tag.user_id);
}

#[rstest]
#[actix_rt::test]
async fn test_update_tag_partial(repos: Repos) {
    let tag = repos
        .tag_repo
        .create_tag(NewTag::new("urgent".to_owned(), "FF0000".to_owned(), None))
        .await
        .unwrap();

    let update = TagUpdate {
        color: Some("0000FF".to_owned()),
        ..TagUpdate::default()
    };
    let updated_tag = repos.tag_repo.update_tag(tag.id, update).await.unwrap();

    assert_eq!("0000FF", updated_tag.color);
    assert_eq!(tag.name, updated_tag.name);
    assert_eq!(tag.user_id, updated_tag.user_id);
}

#[rstest]
#[actix_rt::test]
async fn test_update_invalid_tag(repos: Repos) {
    let update = TagUpdate {
        name: Some("renamed".to_owned()),
        ..TagUpdate::default()
    };
    let update_result = repos.tag_repo.update_tag(999999, update).await;
    assert!(matches!(
        update_result,
        Err(TagRepoError::TagNotFound(999999))
    ));
}

#[rstest]
#[actix_rt::test]
async fn test_delete_tag(repos: Repos) {
    let tag = repos
        .tag_repo
        .create_tag(NewTag::new("urgent".to_owned(), "FF0000".to_owned(), None))
        .await
        .unwrap();

    repos.tag_repo.delete_tag(tag.id).await.unwrap();

    let get_result = repos.tag_repo.get_tag(tag.id).await;
    assert!(matches!(get_result, Err(TagRepoError::TagNotFound(_))));

    let delete_result = repos.tag_repo.delete_tag(tag.id).await;
    assert!(matches!(delete_result, Err(TagRepoError::TagNotFound(_))));
}
