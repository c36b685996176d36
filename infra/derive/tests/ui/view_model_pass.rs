use inv_derive::view_model;

#[view_model(deny_unknown_fields = false)]
pub struct StoreRef {
    pub store_id: String,
    pub display_name: String,
}

fn main() {
    let store = StoreRef { store_id: "#089".to_owned(), display_name: "Seattle-Pike".to_owned() };
    let _ = store.clone();
}
