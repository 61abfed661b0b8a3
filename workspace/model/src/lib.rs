pub mod association;
pub mod entities;

// Re-export tracing for use in this crate
pub use tracing;

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
    };

    use super::association::{self, Link};
    use super::entities::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn create_user(db: &DatabaseConnection, username: &str) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            username: Set(username.to_string()),
            firstname: Set("Luke".to_string()),
            lastname: Set("Skywalker".to_string()),
            email: Set(format!("{}@rebellion.org", username)),
            password: Set("not-a-real-hash".to_string()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    async fn create_people(db: &DatabaseConnection, firstname: &str) -> Result<people::Model, DbErr> {
        people::ActiveModel {
            firstname: Set(firstname.to_string()),
            lastname: Set("Organa".to_string()),
            specie: Set("Human".to_string()),
            created: Set("2014-12-10T15:20:09.791000Z".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    async fn create_film(db: &DatabaseConnection, name: &str) -> Result<film::Model, DbErr> {
        film::ActiveModel {
            name: Set(name.to_string()),
            director: Set("George Lucas".to_string()),
            created: Set("2014-12-10T14:23:31.880000Z".to_string()),
            edited: Set(NaiveDate::from_ymd_opt(2014, 12, 20).unwrap()),
            release_date: Set(NaiveDate::from_ymd_opt(1977, 5, 25).unwrap()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    async fn create_planet(db: &DatabaseConnection, name: &str) -> Result<planet::Model, DbErr> {
        planet::ActiveModel {
            name: Set(name.to_string()),
            diameter: Set("10465".to_string()),
            climate: Set("arid".to_string()),
            terrain: Set("desert".to_string()),
            surface_water: Set("1".to_string()),
            created: Set("2014-12-09T13:50:49.641000Z".to_string()),
            edited: Set(NaiveDate::from_ymd_opt(2014, 12, 20).unwrap()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    async fn create_vehicle(db: &DatabaseConnection, name: &str) -> Result<vehicle::Model, DbErr> {
        vehicle::ActiveModel {
            name: Set(name.to_string()),
            model: Set("Digger Crawler".to_string()),
            vehicles_class: Set("wheeled".to_string()),
            created: Set("2014-12-10T15:36:25.724000Z".to_string()),
            edited: Set(NaiveDate::from_ymd_opt(2014, 12, 20).unwrap()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_user_serialization_omits_password() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "luke").await?;

        let value = serde_json::to_value(&user).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert_eq!(object["username"], "luke");
        assert_eq!(object["is_active"], true);
        assert_eq!(object.len(), 6);

        Ok(())
    }

    #[tokio::test]
    async fn test_film_dates_serialize_as_iso() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let film = create_film(&db, "A New Hope").await?;

        let value = serde_json::to_value(&film).unwrap();
        assert_eq!(value["release_date"], "1977-05-25");
        assert_eq!(value["edited"], "2014-12-20");

        Ok(())
    }

    #[tokio::test]
    async fn test_link_is_idempotent() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "leia").await?;
        let people = create_people(&db, "Leia").await?;

        let first = association::link::<PeopleFavorite, _>(&db, user.id, people.id).await?;
        let second = association::link::<PeopleFavorite, _>(&db, user.id, people.id).await?;

        assert_eq!(first, Link::Created);
        assert_eq!(second, Link::AlreadyLinked);
        assert_eq!(PeopleFavorite::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_pair_rejected_by_store() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "han").await?;
        let film = create_film(&db, "Empire").await?;

        association::link::<FavoriteFilm, _>(&db, user.id, film.id).await?;

        // Bypass the existence check: the composite key must still hold
        let duplicate = favorite_film::ActiveModel {
            user_id: Set(user.id),
            film_id: Set(film.id),
        };
        let result = FavoriteFilm::insert(duplicate).exec_without_returning(&db).await;
        assert!(result.is_err());
        assert_eq!(FavoriteFilm::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_link_to_missing_parent_fails() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "chewie").await?;

        let result = association::link::<PeopleFavorite, _>(&db, user.id, 999).await;
        assert!(result.is_err());
        assert_eq!(PeopleFavorite::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_unlink_absent_pair_is_noop() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "lando").await?;
        let film = create_film(&db, "Return of the Jedi").await?;

        assert!(!association::unlink::<FavoriteFilm, _>(&db, user.id, film.id).await?);

        association::link::<FavoriteFilm, _>(&db, user.id, film.id).await?;
        assert!(association::unlink::<FavoriteFilm, _>(&db, user.id, film.id).await?);
        assert!(!association::exists::<FavoriteFilm, _>(&db, user.id, film.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_related_returns_linked_parents_in_order() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let film = create_film(&db, "A New Hope").await?;
        let tatooine = create_planet(&db, "Tatooine").await?;
        let alderaan = create_planet(&db, "Alderaan").await?;
        let yavin = create_planet(&db, "Yavin IV").await?;

        association::link::<FilmPlanet, _>(&db, film.id, yavin.id).await?;
        association::link::<FilmPlanet, _>(&db, film.id, tatooine.id).await?;

        let planets = association::related::<FilmPlanet, _>(&db, film.id).await?;
        let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tatooine", "Yavin IV"]);
        assert!(!planets.iter().any(|p| p.id == alderaan.id));

        let none = association::related::<FilmVehicle, _>(&db, film.id).await?;
        assert!(none.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_film_junctions_filter_on_their_own_columns() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "poe").await?;
        let hope = create_film(&db, "A New Hope").await?;
        let empire = create_film(&db, "The Empire Strikes Back").await?;
        let luke = create_people(&db, "Luke").await?;
        let han = create_people(&db, "Han").await?;
        let speeder = create_vehicle(&db, "Snowspeeder").await?;

        association::link::<FavoriteFilm, _>(&db, user.id, empire.id).await?;
        association::link::<PeopleFilm, _>(&db, hope.id, luke.id).await?;
        association::link::<PeopleFilm, _>(&db, empire.id, han.id).await?;
        association::link::<FilmVehicle, _>(&db, empire.id, speeder.id).await?;

        let favorites = association::related::<FavoriteFilm, _>(&db, user.id).await?;
        assert_eq!(favorites.iter().map(|f| f.id).collect::<Vec<_>>(), vec![empire.id]);

        let cast = association::related::<PeopleFilm, _>(&db, hope.id).await?;
        assert_eq!(cast.iter().map(|p| p.id).collect::<Vec<_>>(), vec![luke.id]);

        let vehicles = association::related::<FilmVehicle, _>(&db, empire.id).await?;
        assert_eq!(vehicles.iter().map(|v| v.id).collect::<Vec<_>>(), vec![speeder.id]);
        assert!(association::related::<FilmVehicle, _>(&db, hope.id).await?.is_empty());

        assert!(association::exists::<PeopleFilm, _>(&db, empire.id, han.id).await?);
        assert!(!association::exists::<PeopleFilm, _>(&db, empire.id, luke.id).await?);
        assert!(association::unlink::<PeopleFilm, _>(&db, empire.id, han.id).await?);
        assert!(association::related::<PeopleFilm, _>(&db, empire.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_user_delete_cascades_to_favorites() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "obiwan").await?;
        let other = create_user(&db, "yoda").await?;
        let people = create_people(&db, "Leia").await?;
        let film = create_film(&db, "A New Hope").await?;

        association::link::<PeopleFavorite, _>(&db, user.id, people.id).await?;
        association::link::<FavoriteFilm, _>(&db, user.id, film.id).await?;
        association::link::<FavoriteFilm, _>(&db, other.id, film.id).await?;

        let user_id = user.id;
        user.delete(&db).await?;

        let remaining_people = PeopleFavorite::find()
            .filter(people_favorite::Column::UserId.eq(user_id))
            .count(&db)
            .await?;
        let remaining_films = FavoriteFilm::find()
            .filter(favorite_film::Column::UserId.eq(user_id))
            .count(&db)
            .await?;
        assert_eq!(remaining_people, 0);
        assert_eq!(remaining_films, 0);

        // Parents and other users' favorites survive
        assert!(People::find_by_id(people.id).one(&db).await?.is_some());
        assert!(Film::find_by_id(film.id).one(&db).await?.is_some());
        assert!(association::exists::<FavoriteFilm, _>(&db, other.id, film.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_film_delete_cascades_to_every_junction() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = create_user(&db, "r2d2").await?;
        let people = create_people(&db, "Leia").await?;
        let film = create_film(&db, "A New Hope").await?;
        let planet = create_planet(&db, "Tatooine").await?;
        let vehicle = create_vehicle(&db, "Sand Crawler").await?;

        association::link::<FavoriteFilm, _>(&db, user.id, film.id).await?;
        association::link::<PeopleFilm, _>(&db, film.id, people.id).await?;
        association::link::<FilmPlanet, _>(&db, film.id, planet.id).await?;
        association::link::<FilmVehicle, _>(&db, film.id, vehicle.id).await?;

        Film::delete_by_id(film.id).exec(&db).await?;

        assert_eq!(FavoriteFilm::find().count(&db).await?, 0);
        assert_eq!(PeopleFilm::find().count(&db).await?, 0);
        assert_eq!(FilmPlanet::find().count(&db).await?, 0);
        assert_eq!(FilmVehicle::find().count(&db).await?, 0);

        assert_eq!(User::find().count(&db).await?, 1);
        assert_eq!(People::find().count(&db).await?, 1);
        assert_eq!(Planet::find().count(&db).await?, 1);
        assert_eq!(Vehicle::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_unique_username_and_email() -> Result<(), DbErr> {
        let db = setup_db().await?;
        create_user(&db, "vader").await?;

        let same_username = create_user(&db, "vader").await;
        assert!(same_username.is_err());

        let same_email = user::ActiveModel {
            username: Set("anakin".to_string()),
            firstname: Set("Anakin".to_string()),
            lastname: Set("Skywalker".to_string()),
            email: Set("vader@rebellion.org".to_string()),
            password: Set("not-a-real-hash".to_string()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(same_email.is_err());

        Ok(())
    }
}
