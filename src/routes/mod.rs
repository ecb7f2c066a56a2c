use actix_web::web;

pub mod generate_itinerary;
pub mod health;
pub mod route_comparison;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(generate_itinerary::resource("/generate-itinerary"))
                .service(route_comparison::resource("/routes/compare")),
        )
        // Path the web client used when generation ran as an edge function
        .service(
            web::scope("/functions/v1")
                .service(generate_itinerary::resource("/generate-itinerary")),
        );
}
