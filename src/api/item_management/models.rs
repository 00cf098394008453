use crate::schema::items;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

#[derive(Queryable, Debug, Identifiable)]
#[table_name = "items"]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub collection: String,
    pub barcode: Option<String>,
    pub owned: bool,
    pub attributes: String,
    pub created_at: String,
}

/// Wire shape of an item. The attribute blob is surfaced as the JSON
/// object it is stored as.
#[derive(Serialize)]
pub struct ItemOut {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub collection: String,
    pub barcode: Option<String>,
    pub owned: bool,
    pub attributes: Value,
    /// None only for the echo of an update that matched no row.
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl From<Item> for ItemOut {
    fn from(item: Item) -> Self {
        let attributes =
            serde_json::from_str(&item.attributes).unwrap_or_else(|_| Value::Object(Default::default()));

        ItemOut {
            id: item.id,
            name: item.name,
            category: item.category,
            collection: item.collection,
            barcode: item.barcode,
            owned: item.owned,
            attributes,
            created_at: Some(item.created_at),
        }
    }
}

#[derive(Serialize)]
pub struct Success {
    pub success: bool,
}
