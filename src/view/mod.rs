pub mod marker;
pub mod render;
pub mod viewport;
