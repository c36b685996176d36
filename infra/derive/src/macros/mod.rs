pub mod attrs;
pub mod error;
pub mod slice;
pub mod view_model;
