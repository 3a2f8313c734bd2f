//! `bookshelf add`: route a single create-book request.

use tracing::{info, instrument};

use bookshelf_core::prelude::*;

use crate::{
    cli::{AddArgs, OutputFormat},
    commands::build_router,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub async fn execute(args: AddArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let router = build_router(&config)?;
    let response = router
        .route(Some(HttpRequest::new(request_body(args))))
        .await;

    info!(status = %response.status_code(), "Request routed");

    let status = response.status_code();
    if status.is_success() || output.format() == OutputFormat::Json {
        output.response(&response)?;
    }

    match response.body() {
        Some(payload) if !status.is_success() => Err(CliError::Rejected {
            status,
            payload: payload.clone(),
        }),
        _ => Ok(()),
    }
}

/// Flags left off the command line stay absent in the body.
fn request_body(args: AddArgs) -> BookRequestBody {
    BookRequestBody {
        title: args.title,
        publisher: args.publisher,
        photo: args.photo,
        authors: (!args.authors.is_empty()).then_some(args.authors),
    }
}
