use crate::handlers::{
    favorites::{
        add_favorite_film, add_favorite_people, get_user_favorites, missing_user_id,
        remove_favorite_film, remove_favorite_people,
    },
    film_links::{
        add_film_people, add_film_planet, add_film_vehicle, get_film_people, get_film_planets,
        get_film_vehicles, remove_film_people, remove_film_planet, remove_film_vehicle,
    },
    films::{create_film, delete_film, get_film, get_films},
    health::health_check,
    people::{create_people, delete_people, get_people, get_people_by_id},
    planets::{create_planet, delete_planet, get_planet, get_planets},
    sitemap::sitemap,
    users::{create_user, delete_user, get_user, get_users},
    vehicles::{create_vehicle, delete_vehicle, get_vehicle, get_vehicles},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Every API endpoint as (method, path), in the order listed by the sitemap.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/user"),
    ("POST", "/user"),
    ("GET", "/user/{user_id}"),
    ("DELETE", "/user/{user_id}"),
    ("GET", "/user/favorite"),
    ("GET", "/user/{user_id}/favorite"),
    ("POST", "/user/{user_id}/favorite/people/{people_id}"),
    ("DELETE", "/user/{user_id}/favorite/people/{people_id}"),
    ("POST", "/user/{user_id}/favorite/film/{film_id}"),
    ("DELETE", "/user/{user_id}/favorite/film/{film_id}"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/{people_id}"),
    ("DELETE", "/people/{people_id}"),
    ("GET", "/film"),
    ("POST", "/film"),
    ("GET", "/film/{film_id}"),
    ("DELETE", "/film/{film_id}"),
    ("GET", "/film/{film_id}/people"),
    ("POST", "/film/{film_id}/people/{people_id}"),
    ("DELETE", "/film/{film_id}/people/{people_id}"),
    ("GET", "/film/{film_id}/planet"),
    ("POST", "/film/{film_id}/planet/{planet_id}"),
    ("DELETE", "/film/{film_id}/planet/{planet_id}"),
    ("GET", "/film/{film_id}/vehicle"),
    ("POST", "/film/{film_id}/vehicle/{vehicle_id}"),
    ("DELETE", "/film/{film_id}/vehicle/{vehicle_id}"),
    ("GET", "/planet"),
    ("POST", "/planet"),
    ("GET", "/planet/{planet_id}"),
    ("DELETE", "/planet/{planet_id}"),
    ("GET", "/vehicle"),
    ("POST", "/vehicle"),
    ("GET", "/vehicle/{vehicle_id}"),
    ("DELETE", "/vehicle/{vehicle_id}"),
];

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health_check))
        // Users and their favorites
        .route("/user", get(get_users).post(create_user))
        .route("/user/favorite", get(missing_user_id))
        .route("/user/:user_id", get(get_user).delete(delete_user))
        .route("/user/:user_id/favorite", get(get_user_favorites))
        .route(
            "/user/:user_id/favorite/people/:people_id",
            post(add_favorite_people).delete(remove_favorite_people),
        )
        .route(
            "/user/:user_id/favorite/film/:film_id",
            post(add_favorite_film).delete(remove_favorite_film),
        )
        // Catalog
        .route("/people", get(get_people).post(create_people))
        .route("/people/:people_id", get(get_people_by_id).delete(delete_people))
        .route("/film", get(get_films).post(create_film))
        .route("/film/:film_id", get(get_film).delete(delete_film))
        .route("/planet", get(get_planets).post(create_planet))
        .route("/planet/:planet_id", get(get_planet).delete(delete_planet))
        .route("/vehicle", get(get_vehicles).post(create_vehicle))
        .route("/vehicle/:vehicle_id", get(get_vehicle).delete(delete_vehicle))
        // Film associations
        .route("/film/:film_id/people", get(get_film_people))
        .route(
            "/film/:film_id/people/:people_id",
            post(add_film_people).delete(remove_film_people),
        )
        .route("/film/:film_id/planet", get(get_film_planets))
        .route(
            "/film/:film_id/planet/:planet_id",
            post(add_film_planet).delete(remove_film_planet),
        )
        .route("/film/:film_id/vehicle", get(get_film_vehicles))
        .route(
            "/film/:film_id/vehicle/:vehicle_id",
            post(add_film_vehicle).delete(remove_film_vehicle),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // The Prometheus recorder is process-global and can only be installed once,
    // so tests build routers without it.
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
