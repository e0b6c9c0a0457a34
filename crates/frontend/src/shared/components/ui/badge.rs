use contracts::shared::badge::BadgeVariant;
use contracts::shared::status::StatusDisplay;
use leptos::prelude::*;

/// Badge with one of the shared colour variants
#[component]
pub fn Badge(variant: BadgeVariant, children: Children) -> impl IntoView {
    view! {
        <span class=variant.css_class()>
            {children()}
        </span>
    }
}

/// Badge for any status enum; label and colour come from the enum itself
#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: StatusDisplay + Send + Sync,
{
    view! {
        <span class=status.badge().css_class() data-status=status.code()>
            {status.display_name()}
        </span>
    }
}
