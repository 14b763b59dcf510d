use std::sync::Arc;

use chrono::NaiveDate;
use lingoboard::board::{COLUMN_ORDER, group_by_column};
use lingoboard::catalog::{SEED_TASKS, build_tasks, load_tasks};
use lingoboard::context::RenderContext;
use lingoboard::error::{BoardError, Result};
use lingoboard::i18n::{
    CatalogTranslator, IdentityTranslator, Locale, MessageCatalog, PluralForms, Translations,
    Translator,
};
use lingoboard::model::{Task, TaskStatus};
use lingoboard::render::{ColumnLabels, HtmlRenderer, render_board, render_page};

fn locales() -> Vec<Locale> {
    ["en", "es", "fr", "ja", "zh"]
        .iter()
        .map(|tag| Locale::parse(tag).unwrap())
        .collect()
}

fn identity_ctx() -> RenderContext {
    RenderContext::new(Arc::new(IdentityTranslator::default()))
}

fn catalog_ctx(tag: &str) -> RenderContext {
    let translations = Translations::embedded().unwrap();
    RenderContext::for_locale(&translations, &Locale::parse(tag).unwrap()).unwrap()
}

/// Delegates to the identity translator but fails on one source string.
struct FailingTranslator {
    inner: IdentityTranslator,
    fail_on: &'static str,
}

impl Translator for FailingTranslator {
    fn locale(&self) -> &Locale {
        self.inner.locale()
    }

    fn translate(&self, source: &str) -> Result<String> {
        if source == self.fail_on {
            return Err(BoardError::translation("en", source));
        }
        self.inner.translate(source)
    }

    fn translate_number(&self, n: i64) -> Result<String> {
        self.inner.translate_number(n)
    }

    fn translate_date(&self, date: NaiveDate) -> Result<String> {
        self.inner.translate_date(date)
    }

    fn translate_plural(&self, n: i64, forms: &PluralForms) -> Result<String> {
        self.inner.translate_plural(n, forms)
    }
}

fn tasks_with(statuses: &[TaskStatus]) -> Vec<Task> {
    let due = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            Task::new(i as u32 + 1, format!("Task {}", i + 1), due).with_status(*status)
        })
        .collect()
}

// =============================================================================
// Board shape
// =============================================================================

#[test]
fn test_identity_board_counts() {
    let page = render_page(&identity_ctx(), &locales()).unwrap();
    assert_eq!(page.board.counts(), [3, 3, 2]);
    assert_eq!(page.board.summary.total, 8);
    let keys: Vec<_> = page.board.columns.iter().map(|c| c.key).collect();
    assert_eq!(keys, COLUMN_ORDER.to_vec());
}

#[test]
fn test_card_order_follows_catalog() {
    let page = render_page(&identity_ctx(), &locales()).unwrap();
    let ids: Vec<Vec<u32>> = page
        .board
        .columns
        .iter()
        .map(|c| c.cards.iter().map(|card| card.id).collect())
        .collect();
    assert_eq!(ids, vec![vec![1, 3, 6], vec![2, 4, 8], vec![5, 7]]);
}

#[test]
fn test_empty_columns_render_with_zero_count() {
    let ctx = identity_ctx();
    let tasks = tasks_with(&[TaskStatus::Done]);
    let grouping = group_by_column(&tasks, &COLUMN_ORDER);
    let labels = ColumnLabels::translate(ctx.translator()).unwrap();
    let board = render_board(&ctx, &grouping, &labels).unwrap();

    assert_eq!(board.counts(), [0, 0, 1]);
    assert_eq!(board.columns[0].count_label, "0 tasks");
    assert!(board.columns[0].cards.is_empty());
    assert_eq!(board.columns[2].count_label, "1 task");
    assert_eq!(board.summary.text, "1 total tasks across all columns");
}

// =============================================================================
// Pluralization
// =============================================================================

#[test]
fn test_french_zero_and_one_share_a_form() {
    let ctx = catalog_ctx("fr");
    let tasks = tasks_with(&[TaskStatus::InProgress]);
    let grouping = group_by_column(&tasks, &COLUMN_ORDER);
    let labels = ColumnLabels::translate(ctx.translator()).unwrap();
    // Titles are copied untranslated by render_board.
    let board = render_board(&ctx, &grouping, &labels).unwrap();
    assert_eq!(board.columns[0].count_label, "0 tâche");
    assert_eq!(board.columns[1].count_label, "1 tâche");
}

#[test]
fn test_translator_category_selection_is_respected() {
    let catalog = MessageCatalog::from_yaml(
        r#"
messages:
  "To Do": "К выполнению"
  "In Progress": "В работе"
  "Done": "Готово"
  "Due": "Срок"
  "High": "Высокий"
  "Medium": "Средний"
  "Low": "Низкий"
  "{n} total tasks across all columns": "Всего задач во всех колонках: {n}"
plurals:
  "{n} tasks":
    one: "{n} задача"
    few: "{n} задачи"
    many: "{n} задач"
    other: "{n} задачи"
"#,
    )
    .unwrap();
    let ru = Locale::parse("ru").unwrap();
    let translator = CatalogTranslator::new(ru, Arc::new(catalog));
    let ctx = RenderContext::new(Arc::new(translator));

    use TaskStatus::*;
    let tasks = tasks_with(&[
        Todo, InProgress, InProgress, InProgress, Done, Done, Done, Done, Done,
    ]);
    let grouping = group_by_column(&tasks, &COLUMN_ORDER);
    let labels = ColumnLabels::translate(ctx.translator()).unwrap();
    let board = render_board(&ctx, &grouping, &labels).unwrap();

    let count_labels: Vec<_> = board
        .columns
        .iter()
        .map(|c| c.count_label.as_str())
        .collect();
    assert_eq!(count_labels, ["1 задача", "3 задачи", "5 задач"]);
    assert_eq!(board.summary.text, "Всего задач во всех колонках: 9");
}

// =============================================================================
// Localization
// =============================================================================

#[test]
fn test_every_shipped_locale_renders() {
    for locale in locales() {
        let page = render_page(&catalog_ctx(locale.as_str()), &locales()).unwrap();
        assert_eq!(page.locale, locale);
        assert_eq!(page.board.counts(), [3, 3, 2]);
        assert_eq!(page.metadata.alternates.len(), 5);
    }
}

#[test]
fn test_assignee_is_never_translated() {
    let page = render_page(&catalog_ctx("ja"), &locales()).unwrap();
    let assignees: Vec<_> = page.board.columns[0]
        .cards
        .iter()
        .map(|c| c.assignee.as_str())
        .collect();
    assert_eq!(assignees, ["Alice", "Carol", "Alice"]);
}

#[test]
fn test_dates_are_locale_formatted() {
    let en = render_page(&catalog_ctx("en"), &locales()).unwrap();
    let ja = render_page(&catalog_ctx("ja"), &locales()).unwrap();
    assert_eq!(en.board.columns[0].cards[0].due.date, "Mar 1, 2026");
    assert_eq!(ja.board.columns[0].cards[0].due.date, "2026年3月1日");
    assert_eq!(ja.board.columns[0].cards[0].due.label, "期限");
}

// =============================================================================
// Purity and errors
// =============================================================================

#[test]
fn test_rendering_is_idempotent() {
    let ctx = catalog_ctx("es");
    let first = render_page(&ctx, &locales()).unwrap();
    let second = render_page(&ctx, &locales()).unwrap();
    assert_eq!(first, second);

    let html = HtmlRenderer::new().unwrap();
    assert_eq!(html.render(&first).unwrap(), html.render(&second).unwrap());
}

#[test]
fn test_translation_failure_propagates_from_render() {
    let translator = FailingTranslator {
        inner: IdentityTranslator::default(),
        fail_on: "Due",
    };
    let ctx = RenderContext::new(Arc::new(translator));
    let err = render_page(&ctx, &locales()).unwrap_err();
    assert!(matches!(err, BoardError::Translation { source_text, .. } if source_text == "Due"));
}

#[test]
fn test_translation_failure_propagates_from_catalog() {
    let translator = FailingTranslator {
        inner: IdentityTranslator::default(),
        fail_on: "Search indexing",
    };
    let err = load_tasks(&translator).unwrap_err();
    assert!(matches!(err, BoardError::Translation { .. }));
}

#[test]
fn test_unknown_status_never_reaches_render() {
    let mut seeds = SEED_TASKS.to_vec();
    seeds[4].status = "archived";
    let err = build_tasks(&seeds, &IdentityTranslator::default()).unwrap_err();
    assert!(matches!(err, BoardError::UnknownStatus(_)));
}
