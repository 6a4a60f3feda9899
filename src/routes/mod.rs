use crate::utils::webutils::access_guard;
use actix_web::{middleware::from_fn, web};

pub mod health;
pub mod login;
pub mod publication;
pub mod user;

/// Everything except sign-up, login and health sits behind `access_guard`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/login").service(login::login));
    cfg.service(
        web::scope("/users")
            .service(user::create::create)
            .service(
                web::scope("")
                    .wrap(from_fn(access_guard))
                    .service(user::directory::search)
                    .service(user::directory::get_user)
                    .service(user::directory::update_user)
                    .service(user::directory::delete_user)
                    .service(user::directory::publications)
                    .service(user::follow::follow)
                    .service(user::follow::unfollow)
                    .service(user::follow::followers)
                    .service(user::follow::following)
                    .service(user::password::update_password)
            )
    );
    cfg.service(
        web::scope("/publications")
            .wrap(from_fn(access_guard))
            .service(publication::create)
            .service(publication::timeline)
            .service(publication::get_publication)
            .service(publication::update_publication)
            .service(publication::delete_publication)
            .service(publication::like)
            .service(publication::unlike)
    );
}
