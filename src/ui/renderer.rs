//! Plain-text rendering of a [`RenderModel`].
//!
//! Used by the `herodex` shell. Layout is deliberately simple: a status line, the
//! hero list with favorite stars, the pager, and the detail panel.

use crate::domain::Hero;
use crate::ui::viewmodel::{DetailPanel, RenderModel};
use std::fmt::Write;

const FAVORITE_MARK: char = '★';
const PLAIN_MARK: char = '☆';
const SELECTED_MARK: char = '▶';

/// Renders `model` as a multi-line string.
#[must_use]
pub fn render_text(model: &RenderModel) -> String {
    let mut out = String::new();

    render_status(&mut out, model);

    if let Some(empty) = &model.empty_state {
        let _ = writeln!(out, "  {}", empty.message);
        let _ = writeln!(out, "  {}", empty.subtitle);
    }

    for card in &model.cards {
        let star = if card.is_favorite { FAVORITE_MARK } else { PLAIN_MARK };
        let cursor = if card.is_selected { SELECTED_MARK } else { ' ' };
        let publisher = card.hero.publisher.as_deref().unwrap_or("unknown publisher");
        let _ = writeln!(
            out,
            "{cursor} {star} [{:>4}] {} ({publisher})",
            card.hero.id, card.hero.name
        );
    }

    render_pager(&mut out, model);
    render_detail(&mut out, &model.detail);

    out
}

fn render_status(out: &mut String, model: &RenderModel) {
    let _ = write!(out, "search: \"{}\"", model.query);
    if model.loading {
        out.push_str("  (loading...)");
    }
    out.push('\n');

    if let Some(error) = &model.error {
        let _ = writeln!(out, "error: {error}");
    }
}

fn render_pager(out: &mut String, model: &RenderModel) {
    let pager = &model.pager;
    if pager.page_count == 0 {
        return;
    }

    let _ = write!(
        out,
        "page {}/{} ({} heroes)",
        pager.current_page, pager.page_count, pager.total_items
    );
    if let Some(label) = &pager.prev_label {
        let _ = write!(out, "  [p] {label}");
    }
    if let Some(label) = &pager.next_label {
        let _ = write!(out, "  [n] {label}");
    }
    out.push('\n');
}

fn render_detail(out: &mut String, detail: &DetailPanel) {
    out.push_str("--\n");
    match detail {
        DetailPanel::Hero(hero) => render_hero(out, hero),
        DetailPanel::Placeholder { message } => {
            let _ = writeln!(out, "{message}");
        }
    }
}

fn render_hero(out: &mut String, hero: &Hero) {
    let _ = writeln!(out, "{} (#{})", hero.name, hero.id);
    if let Some(full_name) = &hero.full_name {
        let _ = writeln!(out, "  full name: {full_name}");
    }
    if let Some(publisher) = &hero.publisher {
        let _ = writeln!(out, "  publisher: {publisher}");
    }
    if let Some(alignment) = &hero.alignment {
        let _ = writeln!(out, "  alignment: {alignment}");
    }
    if let Some(stats) = &hero.powerstats {
        for (label, value) in stats.entries() {
            match value {
                Some(value) => {
                    let _ = writeln!(out, "  {label:<12} {value:>3}");
                }
                None => {
                    let _ = writeln!(out, "  {label:<12}   -");
                }
            }
        }
    }
    if !hero.thumbnail_url.is_empty() {
        let _ = writeln!(out, "  image: {}", hero.thumbnail_url);
    }
}
