//! Small cell renderers shared by the list columns.

use contracts::shared::format::format_currency;
use contracts::shared::status::StatusDisplay;
use leptos::prelude::*;

use super::ui::StatusBadge;

pub fn text(value: &str) -> AnyView {
    value.to_string().into_any()
}

pub fn strong(value: &str) -> AnyView {
    view! { <strong>{value.to_string()}</strong> }.into_any()
}

/// Missing values render as a muted dash
pub fn opt_text(value: Option<&str>) -> AnyView {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string().into_any(),
        None => view! { <span class="text-muted">"\u{2014}"</span> }.into_any(),
    }
}

pub fn money(amount: f64) -> AnyView {
    format_currency(amount).into_any()
}

/// Main line plus a muted second line (name + email)
pub fn two_line(main: &str, sub: &str) -> AnyView {
    view! {
        <div class="cell-two-line">
            <div>{main.to_string()}</div>
            <div class="text-muted">{sub.to_string()}</div>
        </div>
    }
    .into_any()
}

pub fn status<S: StatusDisplay + Send + Sync>(value: S) -> AnyView {
    view! { <StatusBadge status=value /> }.into_any()
}

/// `4.8 ★`
pub fn rating(value: f64) -> AnyView {
    format!("{:.1} \u{2605}", value).into_any()
}
