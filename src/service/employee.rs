use sqlx::SqlitePool;
use tracing::{debug, error, info};

use crate::error::{is_unique_violation, ApiError};
use crate::model::employee::{Employee, NewEmployee};

const EMPLOYEE_COLUMNS: &str = "id, name, email, department";

/// Insert a new employee, letting the UNIQUE index on email arbitrate
/// duplicates.
pub async fn create(pool: &SqlitePool, data: &NewEmployee) -> Result<Employee, ApiError> {
    let sql = format!(
        "INSERT INTO employees (name, email, department) VALUES (?, ?, ?) RETURNING {EMPLOYEE_COLUMNS}"
    );
    let result = sqlx::query_as::<_, Employee>(&sql)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.department)
        .fetch_one(pool)
        .await;

    match result {
        Ok(employee) => {
            info!(employee_id = employee.id, "Employee created");
            Ok(employee)
        }
        Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
            "Employee with this email already exists or invalid data.".to_string(),
        )),
        Err(e) => {
            error!(error = %e, "Failed to create employee");
            Err(e.into())
        }
    }
}

pub async fn get(pool: &SqlitePool, employee_id: i64) -> Result<Employee, ApiError> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
    sqlx::query_as::<_, Employee>(&sql)
        .bind(employee_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id");
    debug!("Fetching all employees");
    Ok(sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?)
}

/// Full replacement of name/email/department; the id never changes.
pub async fn update(
    pool: &SqlitePool,
    employee_id: i64,
    data: &NewEmployee,
) -> Result<Employee, ApiError> {
    let sql = format!(
        "UPDATE employees SET name = ?, email = ?, department = ? WHERE id = ? RETURNING {EMPLOYEE_COLUMNS}"
    );
    let result = sqlx::query_as::<_, Employee>(&sql)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.department)
        .bind(employee_id)
        .fetch_optional(pool)
        .await;

    match result {
        Ok(Some(employee)) => Ok(employee),
        Ok(None) => Err(ApiError::NotFound("Employee not found".to_string())),
        Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
            "Employee with this email already exists or invalid data.".to_string(),
        )),
        Err(e) => {
            error!(error = %e, employee_id, "Failed to update employee");
            Err(e.into())
        }
    }
}

/// Removes the employee row; the schema cascades the delete to any attendance
/// history.
pub async fn delete(pool: &SqlitePool, employee_id: i64) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(employee_id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to delete employee");
            ApiError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    info!(employee_id, "Employee deleted");
    Ok(())
}
