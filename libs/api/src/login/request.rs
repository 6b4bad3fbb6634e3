use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Login body. Fields are kept loose so that a malformed body is a failed
/// check rather than a rejected request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginParam {
    #[schema(value_type = Option<String>)]
    pub username: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub password: Option<Value>,
}

impl LoginParam {
    /// Both fields as strings, `None` when either is missing or not a string.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_ref()?.as_str()?;
        let password = self.password.as_ref()?.as_str()?;

        Some((username, password))
    }
}
