use actix_cors::Cors;
use actix_web::http::header;
use dine_models::settings::{Cors as CorsSettings, CorsMode};

/// Methods served under the API scope.
const METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

pub(crate) fn middleware(settings: &CorsSettings) -> Cors {
    let cors = match settings.mode {
        CorsMode::AllowAll => Cors::default().allow_any_origin(),
        CorsMode::Origins => {
            let origins = settings.origins.clone();
            Cors::default().allowed_origin_fn(move |origin, _| {
                origins.iter().any(|o| o.as_bytes() == origin.as_bytes())
            })
        }
    };

    cors.allowed_methods(METHODS)
        .allowed_header(header::CONTENT_TYPE)
        .max_age(settings.max_age)
}
