#[derive(Debug, Default, PartialEq, Clone)]
pub struct Video {
    pub id: i32,
    /// File name under the video upload directory.
    pub filename: String,
}
