use crate::api::item_management::models::{Item, ItemOut};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema::items;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/items?<category>")]
pub(crate) async fn get_items(
    category: Option<String>,
    conn: DbConn,
) -> Result<Json<Vec<ItemOut>>, ErrorResponse> {
    let item_list = conn
        .run(move |c| {
            let mut query = items::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(wanted) = category {
                query = query.filter(items::category.eq(wanted));
            }
            query
                .order((items::created_at.desc(), items::id.desc()))
                .load::<Item>(c)
        })
        .await
        .map_err(|_| ErrorResponse::new(Status { code: 500 }, "Couldn't load items".to_string()))?;

    Ok(Json(item_list.into_iter().map(ItemOut::from).collect()))
}
