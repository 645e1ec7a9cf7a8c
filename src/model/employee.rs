use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering", nullable = true)]
    pub department: Option<String>,
}

/// Request payload for creating or replacing an employee.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "John Doe")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[schema(example = "john.doe@company.com", format = "email")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[schema(example = "Engineering", nullable = true)]
    pub department: Option<String>,
}
