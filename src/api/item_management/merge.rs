//! Attribute-blob merging and input normalization shared by the create,
//! edit and toggle handlers.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Client-supplied attribute payload. Multipart requests carry it as a
/// still-encoded JSON string field; callers that already hold a structured
/// object can pass it through unchanged.
pub(crate) enum AttributePayload {
    RawEncoded(String),
    Structured(Map<String, Value>),
}

impl AttributePayload {
    /// Resolve into a structured object. Malformed or non-object input
    /// falls back to an empty object; a bad payload must never block the
    /// rest of the mutation.
    pub(crate) fn decode(self) -> Map<String, Value> {
        match self {
            AttributePayload::RawEncoded(raw) => match serde_json::from_str(&raw) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            },
            AttributePayload::Structured(map) => map,
        }
    }
}

/// Reconcile the payload's echoed `imageUrls` with this request's freshly
/// stored upload paths and derive the cover image.
///
/// New uploads always append after the echoed images, preserving order
/// within each group. A payload that omits `imageUrls` starts from empty:
/// clients are responsible for re-sending the images they want kept.
pub(crate) fn merge_attributes(payload: AttributePayload, new_images: Vec<String>) -> Value {
    let mut attributes = payload.decode();

    let mut image_urls = match attributes.get("imageUrls") {
        Some(Value::Array(existing)) => existing.clone(),
        _ => Vec::new(),
    };
    image_urls.extend(new_images.into_iter().map(Value::String));

    let cover = image_urls.first().cloned().unwrap_or(Value::Null);
    attributes.insert("imageUrls".to_string(), Value::Array(image_urls));
    attributes.insert("imageUrl".to_string(), cover);

    Value::Object(attributes)
}

/// Convenience for the multipart handlers: an absent `attributes` field is
/// an empty payload.
pub(crate) fn merge_form_attributes(raw: Option<String>, new_images: Vec<String>) -> Value {
    let payload = match raw {
        Some(raw) => AttributePayload::RawEncoded(raw),
        None => AttributePayload::Structured(Map::new()),
    };
    merge_attributes(payload, new_images)
}

/// `owned` as it arrives in a multipart form. Only the exact string
/// `"true"` maps to true; everything else, absent included, is false.
pub(crate) fn owned_from_form(input: Option<&str>) -> bool {
    matches!(input, Some("true"))
}

/// `owned` as it arrives in the toggle endpoint's JSON body. Clients send
/// booleans or strings; the mapping is total so nothing else sneaks
/// through as true.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum OwnedFlag {
    Bool(bool),
    Text(String),
    Other(Value),
}

impl OwnedFlag {
    pub(crate) fn as_bool(&self) -> bool {
        match self {
            OwnedFlag::Bool(b) => *b,
            OwnedFlag::Text(s) => s == "true",
            OwnedFlag::Other(_) => false,
        }
    }
}

/// Category/collection defaulting: empty and absent input both fall back,
/// so neither column is ever stored empty.
pub(crate) fn field_or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(s: &str) -> AttributePayload {
        AttributePayload::RawEncoded(s.to_string())
    }

    #[test]
    fn malformed_payload_decodes_to_empty_object() {
        assert!(raw("not json at all").decode().is_empty());
        assert!(raw("[1,2,3]").decode().is_empty());
        assert!(raw("").decode().is_empty());
    }

    #[test]
    fn new_uploads_append_after_echoed_images() {
        let merged = merge_attributes(
            raw(r#"{"imageUrls":["/uploads/old.png"],"brand":"Lego"}"#),
            vec!["/uploads/new1.png".into(), "/uploads/new2.png".into()],
        );
        assert_eq!(
            merged["imageUrls"],
            json!(["/uploads/old.png", "/uploads/new1.png", "/uploads/new2.png"])
        );
        assert_eq!(merged["imageUrl"], json!("/uploads/old.png"));
        assert_eq!(merged["brand"], json!("Lego"));
    }

    #[test]
    fn uploads_without_echo_become_the_whole_list() {
        let merged = merge_form_attributes(None, vec!["/uploads/a.png".into(), "/uploads/b.png".into()]);
        assert_eq!(merged["imageUrls"], json!(["/uploads/a.png", "/uploads/b.png"]));
        assert_eq!(merged["imageUrl"], json!("/uploads/a.png"));
    }

    #[test]
    fn echoing_images_with_no_uploads_is_idempotent() {
        let merged = merge_attributes(raw(r#"{"imageUrls":["/uploads/keep.png"]}"#), Vec::new());
        assert_eq!(merged["imageUrls"], json!(["/uploads/keep.png"]));
        assert_eq!(merged["imageUrl"], json!("/uploads/keep.png"));
    }

    // Omitting imageUrls on an update drops previously stored images; the
    // client contract is to always resend the full list.
    #[test]
    fn omitted_images_reset_to_empty() {
        let merged = merge_attributes(raw(r#"{"brand":"Nintendo"}"#), Vec::new());
        assert_eq!(merged["imageUrls"], json!([]));
        assert_eq!(merged["imageUrl"], Value::Null);
    }

    #[test]
    fn non_array_image_urls_are_ignored() {
        let merged = merge_attributes(
            raw(r#"{"imageUrls":"/uploads/not-a-list.png"}"#),
            vec!["/uploads/new.png".into()],
        );
        assert_eq!(merged["imageUrls"], json!(["/uploads/new.png"]));
        assert_eq!(merged["imageUrl"], json!("/uploads/new.png"));
    }

    #[test]
    fn owned_form_mapping_is_total() {
        assert!(owned_from_form(Some("true")));
        assert!(!owned_from_form(Some("false")));
        assert!(!owned_from_form(Some("True")));
        assert!(!owned_from_form(Some("1")));
        assert!(!owned_from_form(None));
    }

    #[test]
    fn owned_flag_mapping_is_total() {
        assert!(OwnedFlag::Bool(true).as_bool());
        assert!(!OwnedFlag::Bool(false).as_bool());
        assert!(OwnedFlag::Text("true".into()).as_bool());
        assert!(!OwnedFlag::Text("false".into()).as_bool());
        assert!(!OwnedFlag::Text("True".into()).as_bool());
        assert!(!OwnedFlag::Other(json!(1)).as_bool());
        assert!(!OwnedFlag::Other(Value::Null).as_bool());
    }

    #[test]
    fn empty_and_absent_fields_fall_back() {
        assert_eq!(field_or_default(None, "Toy"), "Toy");
        assert_eq!(field_or_default(Some(String::new()), "General"), "General");
        assert_eq!(field_or_default(Some("Shelf A".into()), "General"), "Shelf A");
    }
}
