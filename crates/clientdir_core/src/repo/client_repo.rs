//! Client repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the insert and name-prefix lookup capabilities over `clients`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Prefix matching is case-sensitive and treats every character literally.
//! - Lookup order is `name ASC` under SQLite `BINARY` collation, then `id ASC`.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::client::{Client, ClientId, ClientValidationError, NewClient};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CLIENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    initials
FROM clients";

const CLIENTS_TABLE: &str = "clients";
const REQUIRED_CLIENT_COLUMNS: &[&str] = &["id", "name", "phone_number", "initials"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for client persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ClientValidationError),
    Db(DbError),
    /// Connection was not opened through `open_db*`, or is behind on migrations.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ClientValidationError> for RepoError {
    fn from(value: ClientValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface consumed by the lookup service and the seeder.
pub trait ClientRepository {
    /// Persists one client and returns its store-assigned ID.
    fn insert_client(&self, client: &NewClient) -> RepoResult<ClientId>;
    /// Returns every client whose name starts with `prefix`, sorted by name.
    fn find_by_name_prefix(&self, prefix: &str) -> RepoResult<Vec<Client>>;
    fn count_clients(&self) -> RepoResult<u64>;
}

impl<R: ClientRepository + ?Sized> ClientRepository for &R {
    fn insert_client(&self, client: &NewClient) -> RepoResult<ClientId> {
        (**self).insert_client(client)
    }

    fn find_by_name_prefix(&self, prefix: &str) -> RepoResult<Vec<Client>> {
        (**self).find_by_name_prefix(prefix)
    }

    fn count_clients(&self) -> RepoResult<u64> {
        (**self).count_clients()
    }
}

/// SQLite-backed client repository.
pub struct SqliteClientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClientRepository<'conn> {
    /// Wraps a migrated connection after checking its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` is not the latest.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `clients`
    ///   table does not have the expected shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        ensure_clients_schema(conn)?;
        Ok(Self { conn })
    }
}

impl ClientRepository for SqliteClientRepository<'_> {
    fn insert_client(&self, client: &NewClient) -> RepoResult<ClientId> {
        client.validate()?;

        self.conn.execute(
            "INSERT INTO clients (
                name,
                phone_number,
                initials
            ) VALUES (?1, ?2, ?3);",
            params![
                client.name.as_str(),
                client.phone_number.as_str(),
                client.initials.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_name_prefix(&self, prefix: &str) -> RepoResult<Vec<Client>> {
        // LIKE is case-insensitive in SQLite and GLOB treats `*`/`?` as
        // wildcards; comparing the leading substring keeps the match literal.
        let mut stmt = self.conn.prepare(&format!(
            "{CLIENT_SELECT_SQL}
             WHERE substr(name, 1, length(?1)) = ?1
             ORDER BY name ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([prefix])?;
        let mut clients = Vec::new();
        while let Some(row) = rows.next()? {
            clients.push(parse_client_row(row)?);
        }

        Ok(clients)
    }

    fn count_clients(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM clients;", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

fn parse_client_row(row: &Row<'_>) -> RepoResult<Client> {
    Ok(Client {
        id: row.get("id")?,
        name: row.get("name")?,
        phone_number: row.get("phone_number")?,
        initials: row.get("initials")?,
    })
}

fn ensure_clients_schema(conn: &Connection) -> RepoResult<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([CLIENTS_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(RepoError::MissingRequiredTable(CLIENTS_TABLE));
    }

    for &column in REQUIRED_CLIENT_COLUMNS {
        if !columns.iter().any(|existing| existing == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: CLIENTS_TABLE,
                column,
            });
        }
    }

    Ok(())
}
