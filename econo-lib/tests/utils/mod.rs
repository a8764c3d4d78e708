use econo_repo::Repos;
use rstest::fixture;
use tracing::info;
use tracing::Level;

macro_rules! build_app {
    ($repos:expr) => {{
        let repos = $repos;
        let app = App::new()
            .app_data(Data::new(repos.user_repo.clone()))
            .app_data(Data::new(repos.category_repo.clone()))
            .app_data(Data::new(repos.entry_repo.clone()))
            .app_data(Data::new(repos.tag_repo.clone()))
            .app_data(Data::new(repos.entry_tag_repo.clone()))
            .wrap(econo_lib::tracing::create_middleware())
            .service(econo_lib::user::user_service())
            .service(econo_lib::category::category_service())
            .service(econo_lib::entry::entry_service())
            .service(econo_lib::tag::tag_service())
            .service(econo_lib::entry_tag::entry_tag_service());
        tracing::info!("Built app");
        app
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos() -> Repos {
    econo_repo::mem_repo::create_repos()
}
