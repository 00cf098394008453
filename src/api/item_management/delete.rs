use crate::api::item_management::models::Success;
use crate::db::{set_busy_timeout, DbConn};
use crate::error::ErrorResponse;
use crate::schema::items;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::serde::json::Json;

// Uploaded files referenced by the row are left behind; orphans are an
// accepted gap at this scale.
#[delete("/items/<item_id>")]
pub(crate) async fn delete_item(
    item_id: i32,
    conn: DbConn,
) -> Result<Json<Success>, ErrorResponse> {
    conn.run(move |c| {
        set_busy_timeout(c)?;
        diesel::delete(items::table.filter(items::id.eq(item_id))).execute(c)
    })
    .await
    .map_err(|_| ErrorResponse::new(Status { code: 500 }, "Couldn't delete item".to_string()))?;

    Ok(Json(Success { success: true }))
}
