use actix_web::web;

pub mod decks;
pub mod health;

/// Register every HTTP route. Shared by `main.rs` and the test app builder;
/// middleware is wrapped by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Decks: /decks/**
    cfg.service(web::scope("/decks").configure(decks::configure_routes));
}
