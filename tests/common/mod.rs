#![allow(dead_code)]

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use trip_registry::db::{DbConnection, DbPool, establish_connection_pool};
use trip_registry::models::country::{CountryTrip, NewCountry};
use trip_registry::models::trip::NewTrip;
use trip_registry::repository::DieselRepository;
use trip_registry::schema::{client_trip, clients, countries, country_trip, trips};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database in a temporary directory, migrated to the latest schema.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("connection pool");

        let mut pooled = pool.get().expect("connection");
        let conn: &mut SqliteConnection = &mut pooled;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations should apply");
        drop(pooled);

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    fn conn(&self) -> DbConnection {
        self.pool.get().expect("connection")
    }

    pub fn seed_trip(&self, name: &str, date_from: NaiveDateTime) -> i32 {
        let mut conn = self.conn();
        diesel::insert_into(trips::table)
            .values(&NewTrip {
                name,
                description: "Seeded trip",
                date_from,
                date_to: date_from + chrono::Duration::days(7),
                max_people: 20,
            })
            .returning(trips::id)
            .get_result(&mut conn)
            .expect("trip inserted")
    }

    pub fn seed_country(&self, name: &str) -> i32 {
        let mut conn = self.conn();
        diesel::insert_into(countries::table)
            .values(&NewCountry { name })
            .returning(countries::id)
            .get_result(&mut conn)
            .expect("country inserted")
    }

    pub fn link_country(&self, country_id: i32, trip_id: i32) {
        let mut conn = self.conn();
        diesel::insert_into(country_trip::table)
            .values(&CountryTrip {
                country_id,
                trip_id,
            })
            .execute(&mut conn)
            .expect("country linked");
    }

    /// Inserts a client row directly, bypassing the value-object checks.
    pub fn insert_raw_client(&self, first_name: &str, last_name: &str, email: &str, pesel: &str) -> i32 {
        let mut conn = self.conn();
        diesel::insert_into(clients::table)
            .values((
                clients::first_name.eq(first_name),
                clients::last_name.eq(last_name),
                clients::email.eq(email),
                clients::telephone.eq("000"),
                clients::pesel.eq(pesel),
            ))
            .returning(clients::id)
            .get_result(&mut conn)
            .expect("client inserted")
    }

    pub fn count_clients(&self) -> i64 {
        let mut conn = self.conn();
        clients::table
            .count()
            .get_result(&mut conn)
            .expect("clients counted")
    }

    pub fn count_client_trips(&self) -> i64 {
        let mut conn = self.conn();
        client_trip::table
            .count()
            .get_result(&mut conn)
            .expect("registrations counted")
    }

    pub fn registered_at(&self, client_id: i32, trip_id: i32) -> NaiveDateTime {
        let mut conn = self.conn();
        client_trip::table
            .find((client_id, trip_id))
            .select(client_trip::registered_at)
            .first(&mut conn)
            .expect("registration exists")
    }
}
