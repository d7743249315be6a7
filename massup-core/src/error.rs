use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read template `{}`", .path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save action is missing a ` to ` separator: `{params}`")]
    MalformedSave { params: String },
    #[error("could not write `{}`", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write to output")]
    Output(#[source] io::Error),
}
