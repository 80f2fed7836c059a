//! HTTP read endpoint: `GET /authors`.
//!
//! The single connection lives behind a mutex in the app data. Each request
//! takes the lock on the blocking pool, runs one listing, and lets it go.

use std::sync::Mutex;

use actix_web::{App, HttpResponse, HttpServer, web};
use rusqlite::Connection;
use shelfmark_lib::list_authors;

use crate::CliError;

/// Body of every failed `/authors` response. Internal detail goes to the log.
pub(crate) const AUTHORS_ERROR_MESSAGE: &str = "Failed to retrieve author information";

pub(crate) struct AppState {
    conn: Mutex<Connection>,
}

impl AppState {
    pub(crate) fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

async fn get_authors(state: web::Data<AppState>) -> HttpResponse {
    let result = web::block(move || {
        let conn = state
            .conn
            .lock()
            .map_err(|_| "library connection mutex poisoned".to_string())?;
        list_authors(&*conn).map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(Ok(authors)) => HttpResponse::Ok().json(authors),
        Ok(Err(e)) => {
            log::error!("GET /authors failed: {}", e);
            authors_error()
        }
        Err(e) => {
            log::error!("GET /authors blocking task failed: {}", e);
            authors_error()
        }
    }
}

fn authors_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body(AUTHORS_ERROR_MESSAGE)
}

/// Register the routes on an app or test service.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/authors").route(web::get().to(get_authors)));
}

/// Serve on `bind` until the process is interrupted.
pub(crate) fn run(conn: Connection, bind: &str) -> Result<(), CliError> {
    let state = web::Data::new(AppState::new(conn));

    actix_web::rt::System::new().block_on(async move {
        let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
            .bind(bind)
            .map_err(|e| CliError::server(format!("Failed to bind {}: {}", bind, e)))?;

        log::info!("Listening on http://{}", bind);
        server
            .run()
            .await
            .map_err(|e| CliError::server(e.to_string()))
    })
}

#[cfg(test)]
#[path = "tests/server_tests.rs"]
mod tests;
