use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// Connect with default options and make sure the schema exists
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    init_db_with(connect_options(database_url, false)).await
}

pub async fn init_db_with(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;

    // No migration tooling: the schema is created in place on startup
    run_migrations(&db).await?;

    Ok(db)
}

/// Pool options for a SQLite URL.
///
/// An in-memory database lives and dies with its connection, so the pool is
/// pinned to one connection there.
pub fn connect_options(database_url: &str, log_statements: bool) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(log_statements);
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    options
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Foreign keys are declared on the entities only; the store does not enforce them.
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS director (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS genre (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS movie (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            trailer TEXT,
            year INTEGER,
            rating REAL,
            genre_id INTEGER,
            director_id INTEGER
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_movie_director_id ON movie (director_id)",
        "CREATE INDEX IF NOT EXISTS idx_movie_genre_id ON movie (genre_id)",
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_owned(),
        ))
        .await?;
    }

    tracing::debug!("Schema ready");
    Ok(())
}
