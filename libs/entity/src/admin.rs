/// Admin credential row. `password` holds an argon2id PHC hash.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub password: String,
}
