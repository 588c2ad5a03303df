use handlebars::{Handlebars, TemplateError};
use std::{path::Path, sync::Arc};

pub type Hbs = Arc<Handlebars<'static>>;

const TEMPLATES: &[&str] = &[
    // Layout + pages
    "layouts/base",
    "pages/trade",
    "pages/orders",
    "pages/not_found",
];

const PARTIALS: &[&str] = &["navbar", "footer", "order_table"];

/// Loads templates from `templates/` relative to the working directory.
pub fn build_handlebars() -> Result<Hbs, TemplateError> {
    build_handlebars_from("templates")
}

pub fn build_handlebars_from(dir: impl AsRef<Path>) -> Result<Hbs, TemplateError> {
    let dir = dir.as_ref();
    let mut hb = Handlebars::new();

    for name in TEMPLATES {
        hb.register_template_file(name, dir.join(format!("{name}.hbs")))?;
    }

    for name in PARTIALS {
        let path = dir.join("partials").join(format!("{name}.hbs"));
        let source = std::fs::read_to_string(&path)
            .map_err(|e| TemplateError::from((e, path.display().to_string())))?;
        hb.register_partial(name, source)?;
    }

    Ok(Arc::new(hb))
}
