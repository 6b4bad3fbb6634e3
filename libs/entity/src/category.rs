#[derive(Debug, Default, PartialEq, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
