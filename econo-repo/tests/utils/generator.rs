use chrono::NaiveDateTime;
use econo_repo::entry_repo::NewEntry;
use econo_repo::user_repo::NewUser;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::{Fake, Faker};
use rust_decimal::Decimal;

#[allow(dead_code)]
pub fn generate_new_user() -> NewUser {
    // uuid keeps the generated email unique across a test run
    let email = format!("{}-{}", uuid::Uuid::new_v4(), SafeEmail().fake::<String>());
    NewUser::new(Name().fake(), email, "not a real hash".to_owned())
}

#[allow(dead_code)]
pub fn generate_new_entry(user_id: i32) -> NewEntry {
    let date: NaiveDateTime = fake::faker::chrono::en::DateTime().fake();
    generate_new_entry_with_date(user_id, date)
}

#[allow(dead_code)]
pub fn generate_new_entry_with_date(user_id: i32, date: NaiveDateTime) -> NewEntry {
    let kind = if Faker.fake::<bool>() { "R" } else { "D" };
    NewEntry::new(
        user_id,
        kind.to_owned(),
        None,
        Some(Sentence(1..3).fake()),
        Decimal::from(Faker.fake::<i32>()),
        date,
    )
}
