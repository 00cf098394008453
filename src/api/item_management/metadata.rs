use std::collections::BTreeSet;

use crate::api::item_management::models::Item;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema::items;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;
use serde_json::Value;

/// Distinct observed values for the autocomplete fields, each sorted.
#[derive(Serialize)]
pub struct MetadataOut {
    pub collection: Vec<String>,
    pub brand: Vec<String>,
    pub theme: Vec<String>,
    pub developer: Vec<String>,
    pub publisher: Vec<String>,
}

// Full scan on every call; fine at personal-collection row counts.
#[get("/metadata")]
pub(crate) async fn get_metadata(conn: DbConn) -> Result<Json<MetadataOut>, ErrorResponse> {
    let rows = conn
        .run(|c| items::table.load::<Item>(c))
        .await
        .map_err(|_| {
            ErrorResponse::new(Status { code: 500 }, "Couldn't load metadata".to_string())
        })?;

    let mut collections = BTreeSet::new();
    let mut brands = BTreeSet::new();
    let mut themes = BTreeSet::new();
    let mut developers = BTreeSet::new();
    let mut publishers = BTreeSet::new();

    for item in &rows {
        insert_non_empty(&mut collections, Some(item.collection.as_str()));

        let attributes: Value = serde_json::from_str(&item.attributes).unwrap_or(Value::Null);
        insert_non_empty(&mut brands, attributes.get("brand").and_then(Value::as_str));
        insert_non_empty(&mut themes, attributes.get("theme").and_then(Value::as_str));
        insert_non_empty(
            &mut developers,
            attributes.get("developer").and_then(Value::as_str),
        );
        insert_non_empty(
            &mut publishers,
            attributes.get("publisher").and_then(Value::as_str),
        );
    }

    Ok(Json(MetadataOut {
        collection: collections.into_iter().collect(),
        brand: brands.into_iter().collect(),
        theme: themes.into_iter().collect(),
        developer: developers.into_iter().collect(),
        publisher: publishers.into_iter().collect(),
    }))
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            set.insert(value.to_string());
        }
    }
}
