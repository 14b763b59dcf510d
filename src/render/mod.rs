//! Turns the task catalog into a localized render tree, and the render tree
//! into HTML.
//!
//! - [`render_page`]: full render pass for one locale
//! - [`render_board`]: grouped tasks to columns and cards
//! - [`build_metadata`]: title, description, Open Graph, Twitter, alternates
//! - [`HtmlRenderer`]: minijinja page template

mod html;
mod metadata;
mod text;
mod view;

pub use html::HtmlRenderer;
pub use metadata::{OpenGraph, PageMetadata, TwitterCard, build_metadata};
pub use text::{Link, RichText, Segment};
pub use view::{
    BoardView, CardView, ColumnLabels, ColumnView, DueView, FooterView, HeaderView,
    LocaleOption, LocaleSwitcher, Page, SummaryView, render_board, render_page,
    task_count_forms,
};
