table! {
    items (id) {
        id -> Integer,
        name -> Text,
        category -> Text,
        collection -> Text,
        barcode -> Nullable<Text>,
        owned -> Bool,
        attributes -> Text,
        created_at -> Text,
    }
}
