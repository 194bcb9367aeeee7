use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create fitness_classes table. The slot counter can never leave
    // [0, total_slots].
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fitness_classes (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            instructor VARCHAR(100) NOT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            total_slots INTEGER NOT NULL,
            available_slots INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT slots_within_capacity
                CHECK (available_slots >= 0 AND available_slots <= total_slots)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. One booking per (class, email) pair; deleting
    // a class takes its bookings with it.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id BIGSERIAL PRIMARY KEY,
            fitness_class_id BIGINT NOT NULL
                REFERENCES fitness_classes(id) ON DELETE CASCADE,
            client_name VARCHAR(100) NOT NULL,
            client_email VARCHAR(254) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT one_booking_per_client
                UNIQUE (fitness_class_id, client_email)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_fitness_classes_start_time ON fitness_classes(start_time)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_fitness_class_id ON bookings(fitness_class_id)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_client_email ON bookings(client_email)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
