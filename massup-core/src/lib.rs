mod error;
pub mod model;
mod service;

use std::{fs, path::Path};

pub use error::Error;
use model::Template;

pub fn load<P: AsRef<Path>>(path: P) -> Result<Template, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::ReadTemplate {
        path: path.to_owned(),
        source,
    })?;

    Ok(service::template_parser::parse(&content))
}
