//! SeaORM entity modules for the catalog.
//!
//! Five parent entities (users, people, films, planets, vehicles) and five
//! junction entities linking them. Every junction is keyed by the pair of
//! parent ids and implements [`crate::association::Association`].

pub mod favorite_film;
pub mod film;
pub mod film_planet;
pub mod film_vehicle;
pub mod people;
pub mod people_favorite;
pub mod people_film;
pub mod planet;
pub mod user;
pub mod vehicle;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::favorite_film::Entity as FavoriteFilm;
    pub use super::film::Entity as Film;
    pub use super::film_planet::Entity as FilmPlanet;
    pub use super::film_vehicle::Entity as FilmVehicle;
    pub use super::people::Entity as People;
    pub use super::people_favorite::Entity as PeopleFavorite;
    pub use super::people_film::Entity as PeopleFilm;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
    pub use super::vehicle::Entity as Vehicle;
}
