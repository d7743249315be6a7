use std::{fs, io, io::Write, path::PathBuf};

use log::debug;

use crate::{
    Error,
    model::{Action, FieldContext, Template},
    service::resolver::{resolve_field, resolve_fields},
};

pub mod action_parser;
pub mod resolver;
pub mod template_parser;

impl Template {
    /// Runs the template against stdout.
    pub fn run(&self) -> Result<(), Error> {
        self.run_with(&mut io::stdout().lock())
    }

    /// Runs the template, sending `print` output to `out`. With a foreach
    /// field present, the resolve-then-execute cycle repeats once per value,
    /// each time with a fresh [`FieldContext`] seeded with the foreach field;
    /// otherwise it runs exactly once with an empty seed.
    ///
    /// Only the first foreach field is honored. A second `foreach`
    /// declaration is parsed but never iterated.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        if let Some((name, raw_values)) = self.foreach_fields.first() {
            for value in split_foreach_values(raw_values) {
                debug!("foreach iteration: {name} = {value}");
                let mut resolved = FieldContext::default();
                resolved.set(name, value);
                resolve_fields(&self.fields, &mut resolved, Some(value));
                self.execute_actions(&resolved, out)?;
            }
        } else {
            let mut resolved = FieldContext::default();
            resolve_fields(&self.fields, &mut resolved, None);
            self.execute_actions(&resolved, out)?;
        }

        Ok(())
    }

    fn execute_actions<W: Write>(
        &self,
        resolved: &FieldContext,
        out: &mut W,
    ) -> Result<(), Error> {
        for action in &self.actions {
            match action {
                Action::Print(params) => {
                    writeln!(out, "{}", resolve_field(params, resolved)).map_err(Error::Output)?;
                }
                Action::Save(params) => {
                    let mut parts = params.split(" to ");
                    let data = parts.next().unwrap_or_default();
                    let path = parts.next().ok_or_else(|| Error::MalformedSave {
                        params: params.clone(),
                    })?;
                    let data = resolve_field(data.trim(), resolved);
                    let path = PathBuf::from(resolve_field(path.trim(), resolved));
                    fs::write(&path, &data).map_err(|source| Error::WriteFile { path, source })?;
                }
                Action::Mkdir(_) => {
                    writeln!(out, "mkdir is not implemented yet").map_err(Error::Output)?;
                }
            }
        }

        Ok(())
    }
}

/// Splits a foreach field's raw value on `,`, without trimming. Trailing
/// empty segments are dropped, while a fully empty value still yields one
/// empty-string iteration.
fn split_foreach_values(raw: &str) -> Vec<&str> {
    if raw.is_empty() {
        return vec![""];
    }
    let mut values: Vec<&str> = raw.split(',').collect();
    while values.last() == Some(&"") {
        values.pop();
    }
    values
}
