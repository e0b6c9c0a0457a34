use contracts::shared::detail::DetailRef;
use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Tab title of a detail placeholder, e.g. "job J-2841"
pub fn detail_title(detail: &DetailRef) -> String {
    if detail.chat {
        format!("{} {} (chat)", detail.param, detail.value)
    } else {
        format!("{} {}", detail.param, detail.value)
    }
}

/// Shared detail placeholder. The key is shown as given and not looked up.
#[component]
pub fn DetailPlaceholder(detail: DetailRef) -> impl IntoView {
    let query = format!("?{}", detail.to_query());
    let title = detail_title(&detail);

    view! {
        <PageFrame page_id="detail--placeholder" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="placeholder">
                    <p>"Detail view"</p>
                    <dl class="detail-key">
                        <dt>{detail.param.clone()}</dt>
                        <dd>{detail.value.clone()}</dd>
                        {detail.chat.then(|| view! {
                            <dt>"chat"</dt>
                            <dd>"1"</dd>
                        })}
                    </dl>
                    <code>{query}</code>
                </div>
            </div>
        </PageFrame>
    }
}
