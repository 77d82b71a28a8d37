pub mod info;
pub mod post;
pub mod render;
