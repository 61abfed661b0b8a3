#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use model::entities::{film, people, planet, user, vehicle};
    use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const SEEDED_USERS: usize = 5;
    pub const SEEDED_PEOPLE: usize = 12;
    pub const SEEDED_FILMS: usize = 3;
    pub const SEEDED_PLANETS: usize = 2;
    pub const SEEDED_VEHICLES: usize = 2;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        db.execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .expect("Failed to enable foreign keys");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Fill the catalog with a small, predictable data set. Ids start at 1.
    pub async fn seed_catalog(db: &DatabaseConnection) {
        for i in 1..=SEEDED_USERS {
            user::ActiveModel {
                username: Set(format!("user{}", i)),
                firstname: Set(format!("First{}", i)),
                lastname: Set(format!("Last{}", i)),
                email: Set(format!("user{}@holocron.test", i)),
                password: Set("$argon2id$v=19$m=19456,t=2,p=1$c2VlZA$c2VlZA".to_string()),
                is_active: Set(true),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test user");
        }

        for i in 1..=SEEDED_PEOPLE {
            people::ActiveModel {
                firstname: Set(format!("Person{}", i)),
                lastname: Set("Skywalker".to_string()),
                specie: Set("Human".to_string()),
                created: Set("2014-12-09T13:50:51.644000Z".to_string()),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test people");
        }

        let films = [
            ("A New Hope", "George Lucas", (1977, 5, 25)),
            ("The Empire Strikes Back", "Irvin Kershner", (1980, 5, 17)),
            ("Return of the Jedi", "Richard Marquand", (1983, 5, 25)),
        ];
        for (name, director, (y, m, d)) in films {
            film::ActiveModel {
                name: Set(name.to_string()),
                director: Set(director.to_string()),
                created: Set("2014-12-10T14:23:31.880000Z".to_string()),
                edited: Set(NaiveDate::from_ymd_opt(2014, 12, 20).unwrap()),
                release_date: Set(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test film");
        }

        for (name, climate) in [("Tatooine", "arid"), ("Hoth", "frozen")] {
            planet::ActiveModel {
                name: Set(name.to_string()),
                diameter: Set("10465".to_string()),
                climate: Set(climate.to_string()),
                terrain: Set("desert".to_string()),
                surface_water: Set("1".to_string()),
                created: Set("2014-12-09T13:50:49.641000Z".to_string()),
                edited: Set(NaiveDate::from_ymd_opt(2014, 12, 20).unwrap()),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test planet");
        }

        for (name, model) in [("Sand Crawler", "Digger Crawler"), ("Snowspeeder", "t-47 airspeeder")] {
            vehicle::ActiveModel {
                name: Set(name.to_string()),
                model: Set(model.to_string()),
                vehicles_class: Set("wheeled".to_string()),
                created: Set("2014-12-10T15:36:25.724000Z".to_string()),
                edited: Set(NaiveDate::from_ymd_opt(2014, 12, 20).unwrap()),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test vehicle");
        }
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        seed_catalog(&db).await;
        AppState { db }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is read from RUST_LOG and defaults to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _guard = init_test_tracing();
        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Test server over a freshly seeded database
    pub async fn setup_test_server() -> TestServer {
        let app = setup_test_app().await;
        TestServer::new(app).unwrap()
    }
}
