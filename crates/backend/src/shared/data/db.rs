use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_SUPPORT_CONTACT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_support_contact (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        number TEXT NOT NULL DEFAULT '',
        message TEXT NOT NULL DEFAULT '',
        is_brand INTEGER NOT NULL DEFAULT 0,
        category_name TEXT,
        category_code TEXT,
        created_at TEXT,
        updated_at TEXT
    );
"#;

/// Build a SQLite URL; Windows drive paths get a leading slash
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_SUPPORT_CONTACT_TABLE.to_string(),
    ))
    .await?;
    tracing::info!("Table a001_support_contact is ready");

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/var/lib/app/support.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/app/support.db?mode=rwc");
    }
}
