use indexmap::IndexMap;

use crate::model::FieldContext;

/// Resolves every raw field against `resolved`, in declaration order. A field
/// may reference any field resolved before it in the same pass, but never one
/// declared after it.
///
/// A qualified name `base.selector` only contributes (under `base`) when an
/// active foreach value is present and equals the selector exactly.
pub fn resolve_fields(
    fields: &IndexMap<String, String>,
    resolved: &mut FieldContext,
    foreach_value: Option<&str>,
) {
    for (name, raw_value) in fields {
        match (name.split_once('.'), foreach_value) {
            (Some((base, selector)), Some(active)) => {
                if selector.trim() == active {
                    let value = resolve_field(raw_value, resolved);
                    resolved.set(base.trim(), &value);
                }
            }
            _ => {
                let value = resolve_field(raw_value, resolved);
                resolved.set(name, &value);
            }
        }
    }
}

/// Replaces every `<%name%>` placeholder in `text` with the field's value and
/// every `<%NAME%>` with the value uppercased. An empty-valued field standing
/// on its own line disappears together with the line.
///
/// Substitution runs field by field over the accumulating string, so one
/// field's replacement text can be picked up by a later field's pattern.
/// Placeholders naming no known field are left untouched.
pub fn resolve_field(text: &str, resolved: &FieldContext) -> String {
    let mut result = text.to_owned();
    for (name, value) in resolved.iter() {
        let upper_name = name.to_uppercase();
        if value.is_empty() {
            result = result.replace(&format!("\n<%{name}%>\n"), "\n");
            result = result.replace(&format!("\n<%{upper_name}%>\n"), "\n");
        }
        result = result.replace(&format!("<%{name}%>"), value);
        result = result.replace(&format!("<%{upper_name}%>"), &value.to_uppercase());
    }
    result
}
