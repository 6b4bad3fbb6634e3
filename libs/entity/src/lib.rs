pub mod admin;
pub mod category;
pub mod post;
pub mod video;

pub mod prelude {
    pub use crate::admin::Admin as AdminEntity;
    pub use crate::category::Category as CategoryEntity;
    pub use crate::post::Post as PostEntity;
    pub use crate::video::Video as VideoEntity;
}
