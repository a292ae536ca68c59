use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};

use crate::model::{NewTask, Task, TaskPatch};
use crate::validate::validate_title;

const TASK_COLUMNS: &str = "id, title, description, due_date, status, priority, category";

const INSERT_TASK: &str = "
INSERT INTO tasks (title, description, due_date, status, priority, category)
VALUES (:title, :description, :due_date, :status, :priority, :category)
";

const UPDATE_TASK: &str = "
UPDATE tasks
SET title = :title, description = :description, due_date = :due_date,
    status = :status, priority = :priority, category = :category
WHERE id = :id
";

const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

fn read_task_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        due_date: row.get("due_date")?,
        status: row.get("status")?,
        priority: row.get("priority")?,
        category: row.get("category")?,
    })
}

/// Insert a task and return its generated id. Absent optional fields are
/// stored as NULL.
pub fn add_task(conn: &Connection, task: &NewTask) -> Result<i64> {
    let title = validate_title(task.title.as_deref())?;
    conn.execute(
        INSERT_TASK,
        rusqlite::named_params! {
            ":title": title,
            ":description": task.description,
            ":due_date": task.due_date,
            ":status": task.status,
            ":priority": task.priority,
            ":category": task.category,
        },
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_task(conn: &Connection, id: i64) -> Result<Option<Task>> {
    let task = conn
        .query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
            [id],
            read_task_row,
        )
        .optional()?;
    Ok(task)
}

/// All tasks, newest first.
pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks ORDER BY id DESC"
    ))?;
    let rows = stmt.query_map([], read_task_row)?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Into::into)
}

/// Overlay `patch` onto the stored task and write every column back.
///
/// The read and the write share one IMMEDIATE transaction, so no other
/// writer can slip in between them. Returns `None` when `id` does not exist.
/// The title is written back unchecked; an explicit `null` title fails on the
/// column's NOT NULL constraint.
pub fn update_task(conn: &mut Connection, id: i64, mut patch: TaskPatch) -> Result<Option<Task>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let Some(mut task) = get_task(&tx, id)? else {
        return Ok(None);
    };
    if patch.is_empty() {
        return Ok(Some(task));
    }
    let title = match patch.title.take() {
        Some(title) => title,
        None => Some(task.title.clone()),
    };
    patch.apply(&mut task);
    tx.execute(
        UPDATE_TASK,
        rusqlite::named_params! {
            ":title": title,
            ":description": task.description,
            ":due_date": task.due_date,
            ":status": task.status,
            ":priority": task.priority,
            ":category": task.category,
            ":id": id,
        },
    )?;
    tx.commit()?;
    if let Some(title) = title {
        task.title = title;
    }
    Ok(Some(task))
}

/// Delete unconditionally. Returns the number of rows removed, which is 0
/// when the task did not exist.
pub fn remove_task(conn: &Connection, id: i64) -> Result<usize> {
    Ok(conn.execute(DELETE_TASK, [id])?)
}
