use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::domain::{User, UserId};

pub fn insert_user(conn: &Connection, name: &str, is_admin: bool) -> Result<User> {
    let sql = "INSERT INTO users (name, is_admin) VALUES (?1, ?2) RETURNING id, name, is_admin";

    conn.query_row(sql, params![name, is_admin], parse_user_row)
        .with_context(|| format!("Failed to insert user {}", name))
}

fn parse_user_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        is_admin: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: UserId) -> Result<Option<User>> {
    let sql = "SELECT id, name, is_admin FROM users WHERE id = ?1";

    conn.query_row(sql, params![id], parse_user_row)
        .optional()
        .context("Failed to query user by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<User>> {
    let sql = "SELECT id, name, is_admin FROM users ORDER BY name";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_user_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn name_map(conn: &Connection) -> Result<HashMap<UserId, String>> {
    Ok(list_all(conn)?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect())
}
