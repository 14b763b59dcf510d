use super::view::Page;
use crate::error::Result;
use minijinja::{Environment, context};

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Renders a [`Page`] to a complete HTML document.
///
/// The template name ends in `.html`, so minijinja escapes every
/// interpolated value.
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, page: &Page) -> Result<String> {
        let template = self.env.get_template(PAGE_TEMPLATE_NAME)?;
        Ok(template.render(context! { page => page })?)
    }
}

impl std::fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlRenderer").finish_non_exhaustive()
    }
}
