use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::Tera;

use crate::dto::main::IndexPageData;
use crate::routes::{base_context, render_template};
use crate::services::main::{IndexQuery, load_index_page};
use crate::source::http::HttpUserSource;

#[derive(Deserialize)]
struct IndexQueryParams {
    page: Option<usize>,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    source: web::Data<HttpUserSource>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = IndexQuery { page: params.page };
    let mut context = base_context("index");

    match load_index_page(source.get_ref(), query).await {
        IndexPageData::Loaded(data) => {
            context.insert("users", &data.users);
            context.insert("nav", &data.navigation);
            render_template(&tera, "main/index.html", &context)
        }
        IndexPageData::Failed { status_code } => {
            context.insert("status_code", &status_code);
            render_template(&tera, "main/error.html", &context)
        }
    }
}
