//! Print the OpenAPI document as JSON.

use blog_api::ApiDoc;
use color_eyre::eyre::{Context, Result};
use utoipa::OpenApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("serialise OpenAPI document")?;
    println!("{json}");
    Ok(())
}
