pub mod common;
pub mod favorites;
pub mod film_links;
pub mod films;
pub mod health;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;
pub mod vehicles;
