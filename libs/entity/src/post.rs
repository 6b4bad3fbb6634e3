#[derive(Debug, Default, PartialEq, Clone)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    /// File name under the image upload directory.
    pub image: String,
    pub category_id: Option<i32>,
    pub english_content: Option<String>,
}
