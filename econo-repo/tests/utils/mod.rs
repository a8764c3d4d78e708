use econo_repo::Repos;
use rstest::fixture;

pub mod generator;

#[fixture]
pub fn repos() -> Repos {
    econo_repo::mem_repo::create_repos()
}
