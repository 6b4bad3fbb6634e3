pub mod prelude;

pub mod admin;
pub mod category;
pub mod post;
pub mod video;
