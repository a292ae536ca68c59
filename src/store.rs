//! Storage accessor.
//!
//! Every call opens its own connection to the database file, runs one
//! operation from [`crate::ops`], and drops the connection. There is no pool
//! and no connection shared between requests; SQLite's busy timeout is the
//! only coordination between concurrent writers.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::db;
use crate::model::{NewTask, Task, TaskPatch};
use crate::ops;

#[derive(Debug, Clone)]
pub struct Store {
    path: String,
}

impl Store {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Create the database file and apply the initialization script.
    /// A file that already exists is left untouched.
    pub fn init(&self) -> Result<bool> {
        let path = Path::new(&self.path);
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
        }
        let conn = db::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path))?;
        db::init(&conn)?;
        Ok(true)
    }

    /// Run `f` against a fresh connection on the blocking thread pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = db::open(&path)?;
            f(&mut conn)
        })
        .await?
    }

    pub async fn list(&self) -> Result<Vec<Task>> {
        self.with_conn(|conn| ops::list_tasks(conn)).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Task>> {
        self.with_conn(move |conn| ops::get_task(conn, id)).await
    }

    pub async fn create(&self, task: NewTask) -> Result<i64> {
        self.with_conn(move |conn| ops::add_task(conn, &task)).await
    }

    pub async fn update(&self, id: i64, patch: TaskPatch) -> Result<Option<Task>> {
        self.with_conn(move |conn| ops::update_task(conn, id, patch))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<usize> {
        self.with_conn(move |conn| ops::remove_task(conn, id)).await
    }
}
