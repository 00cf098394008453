mod api;
mod cors;
mod db;
mod error;
mod schema;
mod settings;


#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
extern crate dotenv;
#[macro_use]
extern crate diesel_migrations;

use std::path::{Path, PathBuf};

use rocket::fairing::AdHoc;
use rocket::fs::{FileServer, NamedFile};
use rocket::{Build, Rocket, State};

use cors::CORS;
use db::run_db_migrations;
use settings::Settings;

/// Everything the API and static mounts don't claim falls through to the
/// frontend entry document.
#[get("/<_path..>", rank = 20)]
async fn frontend(_path: PathBuf, settings: &State<Settings>) -> Option<NamedFile> {
    NamedFile::open(Path::new(&settings.public_dir).join("index.html"))
        .await
        .ok()
}

fn build_rocket(settings: Settings) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", settings.port))
        .merge((
            "databases.collection",
            rocket_sync_db_pools::Config {
                url: settings.database_path().display().to_string(),
                pool_size: 8,
                timeout: 5,
            },
        ));

    rocket::custom(figment)
        .attach(CORS)
        .attach(db::DbConn::fairing())
        .attach(AdHoc::on_ignite("Database Migrations", run_db_migrations))
        .mount("/uploads", FileServer::from(settings.upload_dir()))
        .mount("/", FileServer::from(settings.public_dir.clone()).rank(11))
        .mount("/", routes![frontend])
        .mount(
            "/api",
            routes![
                crate::api::item_management::list::get_items,
                crate::api::item_management::metadata::get_metadata,
                crate::api::item_management::create::create_item,
                crate::api::item_management::edit::edit_item,
                crate::api::item_management::toggle::toggle_owned,
                crate::api::item_management::delete::delete_item,
            ],
        )
        .manage(settings)
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();

    let settings = Settings::new();
    settings
        .ensure_directories()
        .expect("can create data directories");

    build_rocket(settings)
}
