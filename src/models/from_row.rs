use rusqlite::{Connection, OptionalExtension, Params, Row};

/// Builds a model from a result row, reading columns by name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Run `sql` and map every returned row into `T`.
pub fn query_all<T, P>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<Vec<T>>
where
    T: FromSqliteRow,
    P: Params,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, T::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Run `sql` and map the first row into `T`, if there is one.
pub fn query_one<T, P>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<Option<T>>
where
    T: FromSqliteRow,
    P: Params,
{
    conn.query_row(sql, params, T::from_row).optional()
}
