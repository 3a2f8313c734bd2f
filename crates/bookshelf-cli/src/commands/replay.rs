//! `bookshelf replay`: route a file of requests against one store.

use std::path::Path;

use tracing::{debug, info, instrument};

use bookshelf_core::prelude::*;

use crate::{
    cli::ReplayArgs,
    commands::build_router,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub async fn execute(args: ReplayArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let requests = read_requests(&args.file)?;
    if requests.is_empty() {
        return Err(CliError::InvalidInput {
            message: format!("{} holds no requests", args.file.display()),
            source: None,
        });
    }
    let router = build_router(&config)?;

    let total = requests.len();
    let mut failed = 0;
    for (index, request) in requests.into_iter().enumerate() {
        let response = router.route(Some(request)).await;
        debug!(index, status = %response.status_code(), "Replayed request");
        if !response.status_code().is_success() {
            failed += 1;
        }
        output.response(&response)?;
    }

    info!(total, failed, "Replay finished");

    if args.strict && failed > 0 {
        return Err(CliError::ReplayIncomplete { failed, total });
    }
    Ok(())
}

fn read_requests(path: &Path) -> CliResult<Vec<HttpRequest>> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::RequestFile {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;

    parse_requests(&text).map_err(|e| CliError::RequestFile {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: Some(Box::new(e)),
    })
}

/// A JSON array whose elements are request bodies, or `null` for a request
/// that arrived without one.
fn parse_requests(text: &str) -> serde_json::Result<Vec<HttpRequest>> {
    let bodies: Vec<Option<BookRequestBody>> = serde_json::from_str(text)?;
    Ok(bodies.into_iter().map(|body| HttpRequest { body }).collect())
}
