//! Settings command handler

use std::io::Write;
use crate::state::{AppContext, Outcome};
use crate::utils::errors::{HostelMateError, Result};

/// Handle `config`: print the effective settings as TOML
pub fn handle_config(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let rendered = ctx
        .settings
        .to_toml()
        .map_err(|e| HostelMateError::Config(e.to_string()))?;
    write!(out, "{}", rendered)?;
    Ok(Outcome::Applied)
}
