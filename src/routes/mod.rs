use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Greetings (any method)
            .route("", web::to(handlers::hello))
            .route("/salam", web::to(handlers::salam))
            .route("/privet", web::to(handlers::privet))
            // Health check
            .route("/health", web::get().to(handlers::health_check)),
    )
    .service(
        web::scope("/users")
            // Creation form
            .route("/add", web::get().to(handlers::show_create_form))
            // Form submission, redirects to the list
            .route("/save", web::post().to(handlers::save_user))
            // List all users
            .route("/find-all", web::get().to(handlers::find_all_users))
            // Edit form for one user
            .route("/{id}/edit", web::get().to(handlers::show_edit_form))
            // Update name and age
            .route("/{id}/update", web::post().to(handlers::update_user))
            // Delete
            .route("/{id}/delete", web::post().to(handlers::delete_user)),
    );
}
