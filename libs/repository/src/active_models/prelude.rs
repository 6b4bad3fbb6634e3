pub use super::admin::Entity as Admin;
pub use super::category::Entity as Category;
pub use super::post::Entity as Post;
pub use super::video::Entity as Video;
