use inv_derive::view_model;
use serde_json::json;

#[view_model]
pub struct StoreRef {
    pub store_id: String,
    pub display_name: String,
}

#[view_model(rename_all = "snake_case", deny_unknown_fields = false)]
pub struct LooseRef {
    pub store_id: String,
}

#[test]
fn fields_use_camel_case() {
    let store = StoreRef { store_id: "#089".to_owned(), display_name: "Seattle-Pike".to_owned() };
    let value = serde_json::to_value(&store).unwrap();
    assert_eq!(value, json!({ "storeId": "#089", "displayName": "Seattle-Pike" }));
}

#[test]
fn unknown_fields_are_rejected_by_default() {
    let raw = json!({ "storeId": "#089", "displayName": "Seattle-Pike", "extra": 1 });
    assert!(serde_json::from_value::<StoreRef>(raw).is_err());
}

#[test]
fn arguments_override_the_policy() {
    let raw = json!({ "store_id": "#156", "extra": true });
    let loose: LooseRef = serde_json::from_value(raw).unwrap();
    assert_eq!(loose.clone().store_id, "#156");
}
