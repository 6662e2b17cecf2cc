//! Embedded assets compiled into the CLI binary.
//!
//! At compile time, `include_dir!` embeds everything under `cli/assets/`:
//!   - `Dockerfile.j2`: the default build-file template

use anyhow::Result;
use include_dir::{Dir, include_dir};

static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// File name of the built-in build-file template.
pub const DEFAULT_TEMPLATE: &str = "Dockerfile.j2";

/// Return the contents of a single embedded asset as UTF-8 text.
///
/// # Errors
///
/// Returns an error if no asset with the given `name` exists or it is not UTF-8.
pub fn get_asset_text(name: &str) -> Result<&'static str> {
    EMBEDDED_ASSETS
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| anyhow::anyhow!("embedded asset not found: {name}"))
}

/// The built-in build-file template.
///
/// # Errors
///
/// Returns an error if the template was not embedded.
pub fn default_template() -> Result<&'static str> {
    get_asset_text(DEFAULT_TEMPLATE)
}
