use std::io::Result;

use actix_cors::Cors;
use actix_web::{
    web::{self, resource, scope, Form, Path, ServiceConfig},
    App, HttpResponse, HttpServer,
};
use chrono::Local;
use serde_json::json;
use tracing::{error, info};

use crate::{
    core::data::{fetch_home_data, submit_query, DataError},
    core::settings::Settings,
    menu::group_services,
    pages,
    types::ContactForm,
};

const LOAD_FAILED: &str = "Error loading data. Please try again later.";
const SUBMIT_FAILED: &str = "Failed to send message. Please try again.";

pub async fn start_server(settings: Settings) -> Result<()> {
    let addr = settings.addr();
    let settings = web::Data::new(settings);
    info!(%addr, "vitrine listening");
    HttpServer::new(move || {
        App::new()
            .app_data(settings.clone())
            .configure(routes)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allow_any_method(),
            )
    })
    .bind(addr)?
    .run()
    .await
}

/// Route table, separated out so integration tests can mount it.
pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/v1")
            .service(
                scope("/pages")
                    .service(resource("/home").route(web::get().to(home_handler)))
                    .service(resource("/about").route(web::get().to(about_handler)))
                    .service(resource("/services/{id}").route(web::get().to(service_handler)))
                    .service(resource("/contact").route(web::get().to(contact_handler)))
                    .service(resource("/terms").route(web::get().to(terms_handler))),
            )
            .service(resource("/menu/services").route(web::get().to(menu_handler)))
            .service(resource("/queries").route(web::post().to(query_handler)))
            .service(resource("/vitrine").route(web::get().to(status_handler))),
    );
}

async fn home_handler(settings: web::Data<Settings>) -> HttpResponse {
    match fetch_home_data(settings.api_base()).await {
        Ok(data) => HttpResponse::Ok().json(pages::home_page(&data, settings.storage_base())),
        Err(error) => load_failure("home", &error),
    }
}

async fn about_handler(settings: web::Data<Settings>) -> HttpResponse {
    match fetch_home_data(settings.api_base()).await {
        Ok(data) => HttpResponse::Ok().json(pages::about_page(&data, settings.storage_base())),
        Err(error) => load_failure("about", &error),
    }
}

async fn service_handler(settings: web::Data<Settings>, id: Path<u32>) -> HttpResponse {
    let id = id.into_inner();
    match fetch_home_data(settings.api_base()).await {
        Ok(data) => match pages::service_page(&data, id, settings.storage_base()) {
            Some(page) => HttpResponse::Ok().json(page),
            None => HttpResponse::NotFound().json(json!({
                "status": "error",
                "message": "Service Not Found",
            })),
        },
        Err(error) => load_failure("services", &error),
    }
}

async fn contact_handler(settings: web::Data<Settings>) -> HttpResponse {
    match fetch_home_data(settings.api_base()).await {
        Ok(data) => HttpResponse::Ok().json(pages::contact_page(&data, settings.storage_base())),
        Err(error) => load_failure("contact", &error),
    }
}

// Terms content is local, so this page cannot fail to load.
async fn terms_handler() -> HttpResponse {
    HttpResponse::Ok().json(pages::terms_page())
}

async fn menu_handler(settings: web::Data<Settings>) -> HttpResponse {
    match fetch_home_data(settings.api_base()).await {
        Ok(data) => HttpResponse::Ok().json(group_services(&data.services)),
        Err(error) => load_failure("menu", &error),
    }
}

async fn query_handler(settings: web::Data<Settings>, form: Form<ContactForm>) -> HttpResponse {
    let form = form.into_inner().pruned();
    match submit_query(settings.api_base(), &form).await {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(error) => {
            error!(%error, "failed to forward contact query");
            HttpResponse::BadGateway().json(json!({
                "status": "error",
                "message": SUBMIT_FAILED,
            }))
        }
    }
}

async fn status_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "vitrine is running",
        "time": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}

fn load_failure(page: &str, error: &DataError) -> HttpResponse {
    error!(page, %error, "failed to load content data");
    HttpResponse::BadGateway().json(json!({
        "status": "error",
        "message": LOAD_FAILED,
    }))
}
