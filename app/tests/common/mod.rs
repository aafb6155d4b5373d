use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

/// Creates a blank in-memory database with the application schema and
/// foreign key enforcement turned on, so the cascade / set null delete
/// policies behave like the real storage layer.
///
/// a single pooled connection is used, every pooled connection would
/// otherwise get its own empty in-memory database.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);

    let db = Database::connect(opt)
        .await
        .expect("failed to open the in-memory test database");

    db.execute_unprepared("PRAGMA foreign_keys = ON")
        .await
        .expect("failed to enable foreign keys");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let tables = vec![
        schema.create_table_from_entity(entity::user::Entity),
        schema.create_table_from_entity(entity::vehicle_model::Entity),
        schema.create_table_from_entity(entity::service::Entity),
        schema.create_table_from_entity(entity::vehicle::Entity),
        schema.create_table_from_entity(entity::order::Entity),
        schema.create_table_from_entity(entity::order_line::Entity),
        schema.create_table_from_entity(entity::order_comment::Entity),
        schema.create_table_from_entity(entity::profile::Entity),
    ];

    for table in tables {
        db.execute(backend.build(&table))
            .await
            .expect("failed to create a table");
    }

    db
}
