pub mod api;
pub mod draft;
pub mod machine;
pub mod payload;
pub mod state;
pub mod ui;
pub mod view_model;
