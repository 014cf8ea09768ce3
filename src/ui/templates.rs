use std::collections::HashMap;
use std::path::Path;

use tera::{Context, Tera, Value};

use crate::data::models::View;
use crate::utils::render_to_string;

/// Parses every `*.html` under `dir` and registers the custom filters.
pub fn load(dir: impl AsRef<Path>) -> tera::Result<Tera> {
    let glob = format!("{}/**/*.html", dir.as_ref().display());
    let mut tera = Tera::new(&glob)?;
    tera.register_filter("nl2br", nl2br);
    Ok(tera)
}

/// Escapes the text, then turns each `\n` into `<br>`.
///
/// The output is already escaped, so templates pipe it through `safe`.
fn nl2br(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = tera::try_get_value!("nl2br", "value", String, value);
    Ok(Value::String(tera::escape_html(&text).replace('\n', "<br>")))
}

pub fn render_view(tera: &Tera, view: &View) -> String {
    let context = match Context::from_serialize(view) {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to build context for {}: {}", view.template_name(), e);
            Context::new()
        }
    };
    render_to_string(tera, view.template_name(), &context)
}
