use crate::{response::ApiResponse, ApiError};

/// Parses the `categoryId` form value. Absent, blank, `null` and `undefined`
/// all mean "no category".
pub fn parse_category_id(value: Option<&str>) -> ApiResponse<Option<i32>> {
    let Some(value) = value
        .map(str::trim)
        .filter(|value| !matches!(*value, "" | "null" | "undefined"))
    else {
        return Ok(None);
    };

    value.parse::<i32>().map(Some).map_err(|_| {
        ApiError::ValidationError(format!("Invalid categoryId: {}", value))
    })
}

/// Narrows a path id to the stored id type. Ids outside that range can never
/// match a row.
pub fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
