use indexmap::IndexMap;
use log::debug;

use crate::{model::Template, service::action_parser};

const COMMENT_PREFIXES: [&str; 6] = ["#", "<!--", "//", "--", "/*", "'"];

/// Single-pass, line-oriented template parser. Never fails: lines that match
/// no known shape are ignored, and an unterminated `={{` block simply
/// swallows the rest of the input.
pub fn parse(content: &str) -> Template {
    let mut template = Template::default();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        if COMMENT_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
        {
            continue;
        }

        if let Some(action) = action_parser::from_directive(line) {
            template.actions.push(action);
            continue;
        }

        if let Some(rest) = line.strip_prefix("foreach ") {
            put_field(&mut template.foreach_fields, rest.trim());
            continue;
        }

        if line.len() > 3 && line.ends_with("={{") {
            let Some((name, _)) = line.split_once("={{") else {
                continue;
            };
            let mut value = String::new();
            for body_line in lines.by_ref() {
                if body_line == "}}" {
                    break;
                }
                value.push_str(body_line);
                value.push('\n');
            }
            if value.ends_with('\n') {
                value.pop();
            }
            let name = name.trim();
            if !name.is_empty() {
                template.fields.insert(name.to_owned(), value);
            }
            continue;
        }

        if line.len() > 2 && line.contains(" =") {
            put_field(&mut template.fields, line);
        }
    }

    debug!(
        "parsed {} actions, {} fields, {} foreach fields",
        template.actions.len(),
        template.fields.len(),
        template.foreach_fields.len()
    );
    template
}

/// Field-assignment rule shared by single-line fields and `foreach`
/// declarations: the name is everything before the first ` =`, trimmed; the
/// value is everything after the first ` = `, untrimmed, or empty when the
/// line ends right at ` =`.
fn put_field(map: &mut IndexMap<String, String>, line: &str) {
    let Some((name, _)) = line.split_once(" =") else {
        return;
    };
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    let value = if line.ends_with(" =") {
        ""
    } else if let Some((_, rest)) = line.split_once(" = ") {
        rest
    } else {
        return;
    };
    map.insert(name.to_owned(), value.to_owned());
}
