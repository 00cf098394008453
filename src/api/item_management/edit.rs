use crate::api::item_management::create::FormItem;
use crate::api::item_management::merge::{field_or_default, merge_form_attributes, owned_from_form};
use crate::api::item_management::models::{Item, ItemOut};
use crate::api::item_management::uploads::store_uploads;
use crate::db::{set_busy_timeout, DbConn};
use crate::error::ErrorResponse;
use crate::schema::items;
use crate::settings::Settings;
use diesel::prelude::*;
use rocket::form::Form;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

// treat_none_as_null: an update is a full overwrite, so an omitted barcode
// really clears the column.
#[derive(AsChangeset)]
#[table_name = "items"]
#[changeset_options(treat_none_as_null = "true")]
struct ItemChanges {
    name: String,
    category: String,
    collection: String,
    barcode: Option<String>,
    owned: bool,
    attributes: String,
}

#[put("/items/<item_id>", data = "<form_item>")]
pub(crate) async fn edit_item(
    item_id: i32,
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

    let changes = ItemChanges {
        name: form_item.name.take().unwrap_or_default(),
        category: field_or_default(form_item.category.take(), "Toy"),
        collection: field_or_default(form_item.collection.take(), "General"),
        barcode: form_item.barcode.take(),
        owned: owned_from_form(form_item.owned.as_deref()),
        attributes: attributes_blob.to_string(),
    };

    // An unknown id is a silent no-op; echo the submitted fields back.
    let echo = ItemOut {
        id: item_id,
        name: changes.name.clone(),
        category: changes.category.clone(),
        collection: changes.collection.clone(),
        barcode: changes.barcode.clone(),
        owned: changes.owned,
        attributes: attributes_blob,
        created_at: None,
    };

    let row = conn
        .run(move |c| {
            set_busy_timeout(c)?;
            diesel::update(items::table.filter(items::id.eq(item_id)))
                .set(&changes)
                .execute(c)?;
            items::table
                .filter(items::id.eq(item_id))
                .first::<Item>(c)
                .optional()
        })
        .await
        .map_err(|_| {
            ErrorResponse::new(Status { code: 500 }, "Couldn't update item".to_string())
        })?;

    Ok(Json(row.map(ItemOut::from).unwrap_or(echo)))
}
