use super::metadata::{PageMetadata, build_metadata};
use super::text::{Link, RichText};
use crate::board::{COLUMN_ORDER, Grouping, group_by_column};
use crate::catalog::load_tasks;
use crate::context::RenderContext;
use crate::error::Result;
use crate::i18n::{Locale, PluralCategory, PluralForms, Translator};
use crate::model::{Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

pub const BRAND: &str = "General Translation";
pub const BRAND_URL: &str = "https://generaltranslation.com";
pub const REPOSITORY_URL: &str = "https://github.com/gt-examples/task-manager";
pub const AXUM_URL: &str = "https://github.com/tokio-rs/axum";
pub const SEO_URL: &str = "https://generaltranslation.com/en-US/blog/multilingual-nextjs-seo";

/// Column header text, translated once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    todo: String,
    in_progress: String,
    done: String,
}

impl ColumnLabels {
    pub fn translate(translator: &dyn Translator) -> Result<Self> {
        Ok(Self {
            todo: translator.translate("To Do")?,
            in_progress: translator.translate("In Progress")?,
            done: translator.translate("Done")?,
        })
    }

    pub fn label(&self, key: TaskStatus) -> &str {
        match key {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }
}

/// Source plural forms of the per-column count.
pub fn task_count_forms() -> PluralForms {
    PluralForms::new("{n} tasks").with(PluralCategory::One, "{n} task")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub locale: Locale,
    pub metadata: PageMetadata,
    pub disclaimer: RichText,
    pub header: HeaderView,
    pub board: BoardView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub brand: String,
    pub product: String,
    pub repository: Link,
    pub switcher: LocaleSwitcher,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSwitcher {
    pub label: String,
    pub options: Vec<LocaleOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    pub tag: Locale,
    pub name: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub lines: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub summary: SummaryView,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn counts(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.count).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub total: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub key: TaskStatus,
    pub label: String,
    pub count: usize,
    pub count_label: String,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub priority_label: String,
    pub due: DueView,
    pub assignee: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueView {
    pub label: String,
    pub date: String,
    pub iso: NaiveDate,
}

fn priority_label(translator: &dyn Translator, priority: TaskPriority) -> Result<String> {
    match priority {
        TaskPriority::High => translator.translate("High"),
        TaskPriority::Medium => translator.translate("Medium"),
        TaskPriority::Low => translator.translate("Low"),
    }
}

fn count_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn render_card(translator: &dyn Translator, due_label: &str, task: &Task) -> Result<CardView> {
    Ok(CardView {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        priority: task.priority,
        priority_label: priority_label(translator, task.priority)?,
        due: DueView {
            label: due_label.to_string(),
            date: translator.translate_date(task.due)?,
            iso: task.due,
        },
        assignee: task.assignee.clone(),
    })
}

/// Renders grouped tasks into the board section of the page.
///
/// Titles and descriptions were translated at load time and are copied as
/// they are. The summary total counts every bucket in `grouping`.
pub fn render_board(
    ctx: &RenderContext,
    grouping: &Grouping,
    labels: &ColumnLabels,
) -> Result<BoardView> {
    let translator = ctx.translator();
    let forms = task_count_forms();
    let due_label = translator.translate("Due")?;

    let mut columns = Vec::with_capacity(grouping.len());
    for (key, tasks) in grouping.iter() {
        let cards = tasks
            .iter()
            .map(|task| render_card(translator, &due_label, task))
            .collect::<Result<Vec<_>>>()?;
        columns.push(ColumnView {
            key,
            label: labels.label(key).to_string(),
            count: tasks.len(),
            count_label: translator.translate_plural(count_i64(tasks.len()), &forms)?,
            cards,
        });
    }

    let total = columns.iter().map(|c| c.count).sum::<usize>();
    let summary = SummaryView {
        total,
        text: translator
            .translate("{n} total tasks across all columns")?
            .replace("{n}", &translator.translate_number(count_i64(total))?),
    };

    Ok(BoardView { summary, columns })
}

fn render_switcher(ctx: &RenderContext, locales: &[Locale]) -> Result<LocaleSwitcher> {
    let options = locales
        .iter()
        .map(|locale| LocaleOption {
            tag: locale.clone(),
            name: locale.native_name().to_string(),
            href: format!("/{}", locale),
            active: *locale == ctx.locale,
        })
        .collect();
    Ok(LocaleSwitcher {
        label: ctx.translator().translate("Language")?,
        options,
    })
}

fn brand_link() -> Link {
    Link::new(BRAND, BRAND_URL)
}

/// Runs a full render for one locale: load, group, render and metadata.
pub fn render_page(ctx: &RenderContext, locales: &[Locale]) -> Result<Page> {
    let translator = ctx.translator();

    let tasks = load_tasks(translator)?;
    let grouping = group_by_column(&tasks, &COLUMN_ORDER);
    let labels = ColumnLabels::translate(translator)?;
    let board = render_board(ctx, &grouping, &labels)?;

    let disclaimer = RichText::from_template(
        &translator.translate(
            "This is an example app built with {gt} to demonstrate internationalization. Not a real product.",
        )?,
        &[("gt", brand_link())],
    );

    let header = HeaderView {
        brand: BRAND.to_string(),
        product: translator.translate("Task Manager")?,
        repository: Link::new("GitHub", REPOSITORY_URL),
        switcher: render_switcher(ctx, locales)?,
    };

    let footer = FooterView {
        lines: vec![
            RichText::from_template(
                &translator.translate("Built with {gt} and {axum}")?,
                &[("gt", brand_link()), ("axum", Link::new("axum", AXUM_URL))],
            ),
            RichText::from_template(
                &translator.translate("Learn about {seo}")?,
                &[(
                    "seo",
                    Link::new(translator.translate("multilingual SEO")?, SEO_URL),
                )],
            ),
        ],
    };

    tracing::debug!(locale = %ctx.locale, total = board.summary.total, "Rendered board");

    Ok(Page {
        locale: ctx.locale.clone(),
        metadata: build_metadata(ctx, locales)?,
        disclaimer,
        header,
        board,
        footer,
    })
}
