use diesel::connection::SimpleConnection;
use rocket::{Build, Rocket};
use rocket_sync_db_pools::{database, diesel};

#[database("collection")]
pub(crate) struct DbConn(diesel::SqliteConnection);

embed_migrations!();

// busy_timeout is per-connection state, so every writer sets it before
// touching the database; a contended write then waits out the lock instead
// of failing immediately.
pub(crate) fn set_busy_timeout(c: &diesel::SqliteConnection) -> diesel::QueryResult<()> {
    c.batch_execute("PRAGMA busy_timeout = 5000;")
}

pub(crate) async fn run_db_migrations(rocket: Rocket<Build>) -> Rocket<Build> {
    let conn = DbConn::get_one(&rocket).await.expect("database connection");
    conn.run(|c| {
        // The WAL switch sticks to the database file, so once at startup is
        // enough; readers stay unblocked from then on.
        c.batch_execute("PRAGMA journal_mode = WAL;")
            .expect("can configure sqlite");
        set_busy_timeout(c).expect("can configure sqlite");
        embedded_migrations::run(c).expect("can run migrations");
    })
    .await;

    rocket
}
