use crate::api::item_management::merge::{field_or_default, merge_form_attributes, owned_from_form};
use crate::api::item_management::models::{Item, ItemOut};
use crate::api::item_management::uploads::store_uploads;
use crate::db::{set_busy_timeout, DbConn};
use crate::error::ErrorResponse;
use crate::schema::items;
use crate::settings::Settings;
use diesel::prelude::*;
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

#[derive(FromForm)]
pub struct FormItem<'a> {
    pub(crate) name: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) collection: Option<String>,
    pub(crate) barcode: Option<String>,
    pub(crate) owned: Option<String>,
    pub(crate) attributes: Option<String>,
    pub(crate) images: Vec<TempFile<'a>>,
}

#[derive(Insertable)]
#[table_name = "items"]
struct NewItem {
    name: String,
    category: String,
    collection: String,
    barcode: Option<String>,
    owned: bool,
    attributes: String,
}

#[post("/items", data = "<form_item>")]
pub(crate) async fn create_item(
    mut form_item: Form<FormItem<'_>>,
    conn: DbConn,
    settings: &State<Settings>,
) -> Result<Json<ItemOut>, ErrorResponse> {
    let stored = store_uploads(&mut form_item.images, settings)
        .await
        .map_err(|_| {
            ErrorResponse::new(
                Status { code: 500 },
                "Couldn't save uploaded images".to_string(),
            )
        })?;

    let attributes_blob = merge_form_attributes(form_item.attributes.take(), stored);

    let new_item = NewItem {
        name: form_item.name.take().unwrap_or_default(),
        category: field_or_default(form_item.category.take(), "Toy"),
        collection: field_or_default(form_item.collection.take(), "General"),
        barcode: form_item.barcode.take(),
        owned: owned_from_form(form_item.owned.as_deref()),
        attributes: attributes_blob.to_string(),
    };

    // Sqlite has no RETURNING in diesel 1.4; read the freshly assigned row
    // back inside the same transaction so a concurrent create on another
    // pooled connection can't slip in between the insert and the select.
    let item = conn
        .run(move |c| {
            set_busy_timeout(c)?;
            c.transaction::<_, diesel::result::Error, _>(|| {
                diesel::insert_into(items::table).values(&new_item).execute(c)?;
                items::table.order(items::id.desc()).first::<Item>(c)
            })
        })
        .await
        .map_err(|_| {
            ErrorResponse::new(Status { code: 500 }, "Couldn't create item".to_string())
        })?;

    Ok(Json(item.into()))
}
