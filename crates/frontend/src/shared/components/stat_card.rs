use crate::shared::icons::icon;
use contracts::shared::badge::BadgeVariant;
use leptos::prelude::*;

/// Summary card: label, formatted value and an optional subtitle.
///
/// `None` shows a dash while the value is loading or failed to load.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(optional, into)] icon_name: Option<String>,
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(optional, into)] subtitle: Signal<Option<String>>,
    /// Colour accent of the card
    #[prop(optional)]
    variant: Option<BadgeVariant>,
) -> impl IntoView {
    let class = match variant {
        Some(v) => format!("stat-card stat-card--{}", v.code()),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            {icon_name.map(|name| view! {
                <div class="stat-card__icon">{icon(&name)}</div>
            })}
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "\u{2014}".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
