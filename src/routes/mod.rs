use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::types::error::AppError;

pub mod auth;
pub mod dashboard;
pub mod logout;
pub mod pages;
pub mod user;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid request body: {err}")).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));

    cfg.service(
        web::scope("/api/auth")
            .service(web::scope("/register").service(auth::register::register))
            .service(web::scope("/login").service(auth::login::login))
            .service(web::scope("/session").service(auth::session::session)),
    );
    cfg.service(
        web::scope("/api/v1/users")
            .service(user::create::create)
            .service(user::delete::delete_user),
    );
    cfg.service(dashboard::dashboard);
    cfg.service(logout::logout);
    pages::configure(cfg);
}
