//! # Page Handlers
//!
//! HTML routes. The request path goes through the core router, so anything
//! other than the home path renders the not-found screen.

pub mod assets;
pub mod theme;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use folio_core::contact::{ContactForm, ContactSession, SubmitOutcome};
use folio_core::gallery::GalleryView;
use folio_core::shell::Route;

use crate::render::{render_home, render_not_found, HomeView, PageContext};
use crate::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Gallery preselection
    pub category: Option<String>,
}

fn page_context(state: &SharedState, headers: &HeaderMap) -> PageContext {
    PageContext {
        theme: theme::preference(headers, state.config.default_theme).mode(),
        loading_delay: state.config.loading_delay(),
        reveal_interval: state.config.reveal_interval(),
    }
}

fn home_response(ctx: &PageContext, gallery: &GalleryView, contact: &ContactSession) -> String {
    render_home(ctx, &HomeView { gallery, contact })
}

/// Home or not-found, decided by [`Route::resolve`]
pub async fn page(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    query: Result<Query<HomeQuery>, QueryRejection>,
) -> Response {
    let ctx = page_context(&state, &headers);
    // an unreadable query means no preselection
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(%rejection, "Ignoring query string");
            HomeQuery::default()
        }
    };
    match Route::resolve(uri.path()) {
        Route::Home => {
            let mut gallery = GalleryView::new();
            if let Some(category) = &query.category {
                gallery.select_category(category);
            }
            Html(home_response(&ctx, &gallery, &ContactSession::new())).into_response()
        }
        Route::NotFound => {
            tracing::debug!(path = uri.path(), "Rendering not-found page");
            (StatusCode::NOT_FOUND, Html(render_not_found(&ctx))).into_response()
        }
    }
}

/// Contact form post: validate, relay once, re-render the page
pub async fn send_message(
    State(state): State<SharedState>,
    headers: HeaderMap,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Response {
    let ctx = page_context(&state, &headers);
    // an unreadable body is validated as an empty form
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable contact form body");
            ContactForm::default()
        }
    };
    let mut session = ContactSession::with_form(form);
    let outcome = session
        .submit_once(state.transport.as_ref(), &state.in_flight)
        .await;
    tracing::info!(?outcome, "Contact form submitted");

    let status = match outcome {
        SubmitOutcome::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed => StatusCode::BAD_GATEWAY,
        SubmitOutcome::Busy => StatusCode::CONFLICT,
        SubmitOutcome::Sent => StatusCode::OK,
    };
    let gallery = GalleryView::new();
    (status, Html(home_response(&ctx, &gallery, &session))).into_response()
}
