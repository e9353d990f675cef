pub mod layout;
pub mod scene;
pub mod viewport;
