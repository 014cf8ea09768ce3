use axum::response::Html;
use tera::{Context, Tera};

pub fn render_template(tera: &Tera, template_name: &str, context: Context) -> Html<String> {
    Html(render_to_string(tera, template_name, &context))
}

pub fn render_to_string(tera: &Tera, template_name: &str, context: &Context) -> String {
    tera.render(template_name, context).unwrap_or_else(|e| {
        log::error!("Failed to render {}: {:?}", template_name, e);
        format!("Error rendering template: {}", template_name)
    })
}
