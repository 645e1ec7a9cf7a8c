use chrono::NaiveDate;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{error, info};

use crate::error::{is_unique_violation, ApiError};
use crate::model::attendance::{Attendance, NewAttendance};

const ATTENDANCE_COLUMNS: &str = "id, employee_id, date, status";

async fn employee_exists(
    tx: &mut Transaction<'_, Sqlite>,
    employee_id: i64,
) -> Result<bool, ApiError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
        .bind(employee_id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(found.is_some())
}

/// Create one attendance row for (employee, date). The existence check and
/// the insert run in a single transaction; the UNIQUE(employee_id, date)
/// constraint is the sole arbiter when two marks race.
pub async fn mark(pool: &SqlitePool, data: &NewAttendance) -> Result<Attendance, ApiError> {
    let mut tx = pool.begin().await?;

    if !employee_exists(&mut tx, data.employee_id).await? {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let sql = format!(
        "INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?) RETURNING {ATTENDANCE_COLUMNS}"
    );
    let result = sqlx::query_as::<_, Attendance>(&sql)
        .bind(data.employee_id)
        .bind(data.date)
        .bind(data.status)
        .fetch_one(&mut *tx)
        .await;

    match result {
        Ok(record) => {
            tx.commit().await?;
            info!(
                employee_id = record.employee_id,
                date = %record.date,
                status = %record.status,
                "Attendance marked"
            );
            Ok(record)
        }
        Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
            "Attendance record already exists for this employee on this date.".to_string(),
        )),
        Err(e) => {
            error!(error = %e, employee_id = data.employee_id, "Failed to mark attendance");
            Err(e.into())
        }
    }
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Attendance>, ApiError> {
    let sql = format!("SELECT {ATTENDANCE_COLUMNS} FROM attendance ORDER BY id");
    Ok(sqlx::query_as::<_, Attendance>(&sql).fetch_all(pool).await?)
}

/// All records for one employee; the employee must exist, zero records is not
/// an error.
pub async fn list_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Vec<Attendance>, ApiError> {
    let mut tx = pool.begin().await?;
    if !employee_exists(&mut tx, employee_id).await? {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let sql = format!("SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE employee_id = ? ORDER BY id");
    Ok(sqlx::query_as::<_, Attendance>(&sql)
        .bind(employee_id)
        .fetch_all(&mut *tx)
        .await?)
}

pub async fn get_by_date(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> Result<Attendance, ApiError> {
    let mut tx = pool.begin().await?;
    if !employee_exists(&mut tx, employee_id).await? {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let sql = format!("SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE employee_id = ? AND date = ?");
    sqlx::query_as::<_, Attendance>(&sql)
        .bind(employee_id)
        .bind(date)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(
                "No attendance record found for this employee on the specified date".to_string(),
            )
        })
}
