use crate::api::item_management::merge::OwnedFlag;
use crate::api::item_management::models::Success;
use crate::db::{set_busy_timeout, DbConn};
use crate::error::ErrorResponse;
use crate::schema::items;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ToggleBody {
    owned: Option<OwnedFlag>,
}

#[post("/items/<item_id>/toggle", data = "<body>")]
pub(crate) async fn toggle_owned(
    item_id: i32,
    body: Json<ToggleBody>,
    conn: DbConn,
) -> Result<Json<Success>, ErrorResponse> {
    let owned_flag = body.owned.as_ref().map(OwnedFlag::as_bool).unwrap_or(false);

    conn.run(move |c| {
        set_busy_timeout(c)?;
        diesel::update(items::table.filter(items::id.eq(item_id)))
            .set(items::owned.eq(owned_flag))
            .execute(c)
    })
    .await
    .map_err(|_| ErrorResponse::new(Status { code: 500 }, "Couldn't update item".to_string()))?;

    Ok(Json(Success { success: true }))
}
