//! Generic list page for an admin collection.
//!
//! Filters, sorting and paging go to the backend as a [`ListQuery`]; the
//! table only renders the page it gets back. Row actions are posted with the
//! version the row was rendered with, so a concurrent change comes back as a
//! conflict instead of being overwritten.

use contracts::shared::actions::{ActionKind, ActionParams, ActionStyle, RowActions};
use contracts::shared::aggregate::AdminAggregate;
use contracts::shared::detail::DetailRef;
use contracts::shared::listing::{FilterControl, FilterSpec, ListQuery, ListRecord};
use contracts::shared::metadata::Stored;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use super::action_menu::{ActionMenu, MenuItem};
use super::action_prompt::{ActionPromptForm, PendingAction};
use super::filter_panel::{FilterPanel, FilterTag};
use super::pagination_controls::PaginationControls;
use super::table::SortableHeaderCell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::{fetch_page, get_text, send_action};
use crate::shared::api_utils::with_query;
use crate::shared::download::{export_filename, save_text_file};
use crate::shared::icons::icon;
use crate::shared::list_utils::toggle_sort;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Menu entry every row has, ahead of its state actions
pub const VIEW_DETAILS: &str = "view_details";

/// One table column
pub struct Column<T> {
    pub title: &'static str,
    /// Sort key understood by `ListRecord::compare_by`
    pub sort: Option<&'static str>,
    pub align_right: bool,
    pub render: fn(&T) -> AnyView,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub fn new(title: &'static str, render: fn(&T) -> AnyView) -> Self {
        Self {
            title,
            sort: None,
            align_right: false,
            render,
        }
    }

    pub fn sortable(mut self, field: &'static str) -> Self {
        self.sort = Some(field);
        self
    }

    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }
}

/// A record type that has a list page
pub trait EntityView:
    AdminAggregate + ListRecord + RowActions + DeserializeOwned + Clone + Send + Sync + 'static
{
    fn columns() -> Vec<Column<Self>>;
}

/// "View details" followed by the actions the record's state allows
pub fn menu_items<T: RowActions>(record: &T) -> Vec<MenuItem> {
    let mut items = vec![MenuItem {
        code: VIEW_DETAILS,
        label: "View details",
        danger: false,
    }];
    items.extend(record.available_actions().into_iter().map(|a| MenuItem {
        code: a.code(),
        label: a.label(),
        danger: a.is_danger(),
    }));
    items
}

/// Label of an active filter chip, e.g. "Status: Pending"
pub fn filter_tag_label(spec: &FilterSpec, value: &str) -> String {
    let shown = match &spec.control {
        FilterControl::Select(options) => options
            .iter()
            .find(|(code, _)| *code == value)
            .map(|(_, label)| *label)
            .unwrap_or(value),
        _ => value,
    };
    format!("{}: {}", spec.label, shown)
}

/// Date bounds as shown in a chip
pub fn date_tag_label(from: Option<&str>, to: Option<&str>) -> String {
    match (from, to) {
        (Some(f), Some(t)) => format!("Date: {} \u{2192} {}", f, t),
        (Some(f), None) => format!("Date: from {}", f),
        (None, Some(t)) => format!("Date: until {}", t),
        (None, None) => "Date: any".to_string(),
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn EntityTable<T>(
    /// CSV endpoint; adds an Export button that downloads the filtered set
    #[prop(optional)]
    export_path: Option<&'static str>,
    /// Owned by the page when something else (summary cards) follows the filters
    #[prop(optional)]
    query: Option<RwSignal<ListQuery>>,
    /// Bump to reload the current page from outside
    #[prop(optional)]
    refresh: Option<RwSignal<u32>>,
    /// Row click selects the record instead of doing nothing
    #[prop(optional)]
    selected: Option<RwSignal<Option<Stored<T>>>>,
    /// Summary cards rendered between the header and the table
    #[prop(optional, into)]
    summary: Option<ViewFn>,
    /// Extra buttons in the page header
    #[prop(optional, into)]
    header_actions: Option<ViewFn>,
) -> impl IntoView
where
    T: EntityView,
{
    let auth = use_auth();
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let query = query.unwrap_or_else(|| RwSignal::new(ListQuery::default()));
    let refresh = refresh.unwrap_or_else(|| RwSignal::new(0));
    let search_text = RwSignal::new(String::new());
    let filters_expanded = RwSignal::new(true);

    let (items, set_items) = signal(Vec::<Stored<T>>::new());
    let (total_count, set_total_count) = signal(0usize);
    let (total_pages, set_total_pages) = signal(0usize);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (busy, set_busy) = signal(false);
    let pending = RwSignal::new(None::<PendingAction>);
    let request_seq = StoredValue::new(0u32);

    let columns = StoredValue::new(T::columns());
    let specs = StoredValue::new(T::filter_specs());

    // Reload whenever the query changes or someone bumps `refresh`
    Effect::new(move |_| {
        let current = query.get();
        refresh.track();
        let seq = request_seq.get_value().wrapping_add(1);
        request_seq.set_value(seq);
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_page::<T>(auth, T::collection_name(), &current).await;
            // a newer request is in flight
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(page) => {
                    set_total_count.set(page.total);
                    set_total_pages.set(page.total_pages);
                    set_items.set(page.items);
                    set_error.set(None);
                }
                Err(e) => {
                    log!("Failed to load {}: {}", T::collection_name(), e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    // Search is applied after typing pauses
    Effect::new(move |_| {
        let text = search_text.get();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_text.try_get_untracked().as_deref() != Some(text.as_str()) {
                return;
            }
            let text = text.trim().to_string();
            if query.with_untracked(|q| q.search != text) {
                query.update(|q| {
                    q.search = text;
                    q.page = 0;
                });
            }
        });
    });

    let set_filter = move |field: &'static str, value: String| {
        query.update(|q| {
            q.set_filter(field, &value);
            q.page = 0;
        });
    };

    let run_action = move |pending_action: PendingAction, params: ActionParams| {
        set_busy.set(true);
        set_notice.set(None);
        spawn_local(async move {
            let result = send_action::<T>(
                auth,
                T::collection_name(),
                &pending_action.record_id,
                pending_action.code,
                pending_action.version,
                params,
            )
            .await;
            match result {
                Ok(updated) => {
                    log!(
                        "{} {}: {} -> version {}",
                        T::element_name(),
                        pending_action.record_id,
                        pending_action.code,
                        updated.version()
                    );
                    pending.set(None);
                    set_error.set(None);
                    set_notice.set(Some(format!(
                        "{} \u{00b7} {}",
                        pending_action.label, pending_action.record_id
                    )));
                    if let Some(selected) = selected {
                        if selected.with_untracked(|s| {
                            s.as_ref().map(|s| s.item.record_id()) == Some(updated.item.record_id())
                        }) {
                            selected.set(Some(updated));
                        }
                    }
                    refresh.update(|n| *n += 1);
                }
                Err(e) => {
                    log!("Action {} failed: {}", pending_action.code, e);
                    set_error.set(Some(e));
                    // the row may have moved on; show its current state
                    refresh.update(|n| *n += 1);
                }
            }
            set_busy.set(false);
        });
    };

    let on_menu = Callback::new(move |(stored, code): (Stored<T>, &'static str)| {
        if code == VIEW_DETAILS {
            tabs_store.open_detail(&stored.item.detail_ref());
            return;
        }
        let Some(action) = T::Action::from_code(code) else {
            log!("Unknown action code: {}", code);
            return;
        };
        if !stored.item.is_available(action) {
            set_error.set(Some(format!("'{}' is not available", action.label())));
            return;
        }
        if let ActionStyle::Navigate { param, chat } = action.style() {
            tabs_store.open_detail(&DetailRef::new(param, stored.item.record_id()).with_chat(chat));
            return;
        }
        let pending_action = PendingAction {
            record_id: stored.item.record_id().to_string(),
            version: stored.version(),
            code: action.code(),
            label: action.label(),
            prompts: action.prompts(),
            danger: action.is_danger(),
        };
        if !pending_action.prompts.is_empty() {
            pending.set(Some(pending_action));
            return;
        }
        if pending_action.danger
            && !confirm(&format!("{} {}?", pending_action.label, pending_action.record_id))
        {
            return;
        }
        run_action(pending_action, ActionParams::default());
    });

    let on_prompt_submit = Callback::new(move |params: ActionParams| {
        let Some(pending_action) = pending.get_untracked() else {
            return;
        };
        if pending_action.danger
            && !confirm(&format!("{} {}?", pending_action.label, pending_action.record_id))
        {
            return;
        }
        run_action(pending_action, params);
    });

    let export = move |_| {
        let Some(path) = export_path else {
            return;
        };
        let mut params = query.get_untracked().to_params();
        params.remove("page");
        params.remove("page_size");
        let url = with_query(path, &params);
        spawn_local(async move {
            match get_text(auth, &url).await {
                Ok(csv) => {
                    let filename = export_filename(T::collection_name());
                    if let Err(e) = save_text_file(&csv, &filename, "text/csv;charset=utf-8") {
                        set_error.set(Some(e));
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_sort = Callback::new(move |field: &'static str| query.update(|q| toggle_sort(q, field)));
    let current_sort = Signal::derive(move || query.with(|q| q.sort.clone().unwrap_or_default()));
    let sort_ascending = Signal::derive(move || query.with(|q| !q.desc));

    let filter_controls = move || {
        specs.get_value().into_iter().map(|spec| {
            let field = spec.field;
            let control = match spec.control {
                FilterControl::Text => view! {
                    <input
                        type="text"
                        class="filter-input"
                        prop:value=move || query.with(|q| q.filter(field).to_string())
                        on:change=move |ev| set_filter(field, event_target_value(&ev))
                    />
                }.into_any(),
                FilterControl::Select(options) => view! {
                    <select
                        class="filter-select"
                        prop:value=move || query.with(|q| q.filter(field).to_string())
                        on:change=move |ev| set_filter(field, event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        {options.into_iter().map(|(code, label)| view! {
                            <option value=code>{label}</option>
                        }).collect_view()}
                    </select>
                }.into_any(),
                FilterControl::DateRange => view! {
                    <div class="filter-date-range">
                        <input
                            type="date"
                            class="filter-input"
                            prop:value=move || query.with(|q| q.date_from.clone().unwrap_or_default())
                            on:change=move |ev| query.update(|q| {
                                q.date_from = non_empty(event_target_value(&ev));
                                q.page = 0;
                            })
                        />
                        <span>"\u{2013}"</span>
                        <input
                            type="date"
                            class="filter-input"
                            prop:value=move || query.with(|q| q.date_to.clone().unwrap_or_default())
                            on:change=move |ev| query.update(|q| {
                                q.date_to = non_empty(event_target_value(&ev));
                                q.page = 0;
                            })
                        />
                    </div>
                }.into_any(),
            };
            view! {
                <div class="filter-field" data-field=field>
                    <Label>{spec.label}</Label>
                    {control}
                </div>
            }
        }).collect_view()
    };

    let filter_tags = move || {
        let q = query.get();
        let mut tags: Vec<AnyView> = Vec::new();
        if !q.search.is_empty() {
            tags.push(view! {
                <FilterTag
                    label=format!("Search: {}", q.search)
                    on_remove=Callback::new(move |_| search_text.set(String::new()))
                />
            }.into_any());
        }
        for spec in specs.get_value() {
            let field = spec.field;
            let value = q.filter(field);
            if !value.is_empty() {
                tags.push(view! {
                    <FilterTag
                        label=filter_tag_label(&spec, value)
                        on_remove=Callback::new(move |_| set_filter(field, String::new()))
                    />
                }.into_any());
            }
        }
        if q.date_from.is_some() || q.date_to.is_some() {
            tags.push(view! {
                <FilterTag
                    label=date_tag_label(q.date_from.as_deref(), q.date_to.as_deref())
                    on_remove=Callback::new(move |_| query.update(|q| {
                        q.date_from = None;
                        q.date_to = None;
                        q.page = 0;
                    }))
                />
            }.into_any());
        }
        tags
    };

    let row_view = move |stored: Stored<T>| {
        let record_id = stored.item.record_id().to_string();
        let cells = columns.with_value(|cols| {
            cols.iter().map(|col| {
                let content = (col.render)(&stored.item);
                let class = if col.align_right { "table__cell--right" } else { "" };
                view! {
                    <TableCell class=class>
                        <TableCellLayout>{content}</TableCellLayout>
                    </TableCell>
                }
            }).collect_view()
        });
        let items = menu_items(&stored.item);
        let for_menu = stored.clone();
        let on_select = Callback::new(move |code: &'static str| on_menu.run((for_menu.clone(), code)));
        let id_for_selected = record_id.clone();
        let is_selected = move || {
            selected
                .map(|s| s.with(|s| s.as_ref().map(|s| s.item.record_id() == id_for_selected).unwrap_or(false)))
                .unwrap_or(false)
        };
        view! {
            <TableRow
                class:table__row--selected=is_selected
                attr:data-id=record_id
                on:click=move |_| {
                    if let Some(selected) = selected {
                        selected.set(Some(stored.clone()));
                    }
                }
            >
                {cells}
                <TableCell>
                    <ActionMenu items=items on_select=on_select />
                </TableCell>
            </TableRow>
        }
    };

    let header_actions = StoredValue::new(header_actions);
    let summary = StoredValue::new(summary);
    let has_export = export_path.is_some();

    view! {
        <PageFrame page_id=format!("{}--list", T::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{T::list_name()}</h1>
                    <span class="page__subtitle">
                        {move || format!("{} records", total_count.get())}
                    </span>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        {header_actions.with_value(|h| h.as_ref().map(|h| h.run()))}
                        {has_export.then(|| view! {
                            <Button appearance=ButtonAppearance::Secondary on_click=export>
                                {icon("download")}
                                " Export CSV"
                            </Button>
                        })}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| refresh.update(|n| *n += 1)
                            disabled=Signal::derive(move || loading.get())
                        >
                            {icon("refresh")}
                            " Refresh"
                        </Button>
                    </Flex>
                </div>
            </div>

            {summary.with_value(|s| s.as_ref().map(|s| s.run()))}

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || query.with(|q| q.active_filters_count()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            query=query
                            total_pages=total_pages
                            total_count=total_count
                        />
                    }
                    filter_content=move || view! {
                        <div class="filter-field filter-field--search">
                            <Label>"Search"</Label>
                            <Input value=search_text placeholder=T::search_placeholder() />
                        </div>
                        {filter_controls()}
                    }
                    filter_tags=move || view! { <Flex gap=FlexGap::Small>{filter_tags}</Flex> }
                />

                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}
                {move || notice.get().map(|n| view! {
                    <div class="alert alert--success">{n}</div>
                })}

                {move || pending.get().map(|p| view! {
                    <ActionPromptForm
                        pending=p
                        on_submit=on_prompt_submit
                        on_cancel=Callback::new(move |_| pending.set(None))
                        busy=busy
                    />
                })}

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {columns.get_value().into_iter().map(|col| match col.sort {
                                    Some(field) => view! {
                                        <SortableHeaderCell
                                            label=col.title
                                            sort_field=field
                                            align_right=col.align_right
                                            current_sort_field=current_sort
                                            sort_ascending=sort_ascending
                                            on_sort=on_sort
                                        />
                                    }.into_any(),
                                    None => view! {
                                        <TableHeaderCell>{col.title}</TableHeaderCell>
                                    }.into_any(),
                                }).collect_view()}
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    let colspan = columns.with_value(|c| c.len() + 1);
                                    let text = if loading.get() { "Loading..." } else { "No records found" };
                                    view! {
                                        <tr class="table__row--empty">
                                            <td colspan=colspan>{text}</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    rows.into_iter().map(row_view).collect_view().into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>
                {move || loading.get().then(|| view! {
                    <div class="table-loading"><Spinner /></div>
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_queue_job::QueueJob;

    #[test]
    fn test_filter_tag_label_uses_option_label() {
        let spec = FilterSpec::select("status", "Status", vec![("in_progress", "In progress")]);
        assert_eq!(filter_tag_label(&spec, "in_progress"), "Status: In progress");
        assert_eq!(filter_tag_label(&spec, "other"), "Status: other");

        let text = FilterSpec::text("location", "Location");
        assert_eq!(filter_tag_label(&text, "Austin"), "Location: Austin");
    }

    #[test]
    fn test_date_tag_label() {
        assert_eq!(
            date_tag_label(Some("2025-02-01"), None),
            "Date: from 2025-02-01"
        );
        assert_eq!(
            date_tag_label(Some("2025-02-01"), Some("2025-02-10")),
            "Date: 2025-02-01 \u{2192} 2025-02-10"
        );
    }

    #[test]
    fn test_menu_starts_with_view_details() {
        let job: QueueJob = serde_json::from_value(serde_json::json!({
            "id": "q1",
            "job_id": "J-2841",
            "customer_name": "Sarah Johnson",
            "service_category": "Plumbing",
            "scheduled_time": "2025-02-16T10:00:00Z",
            "assigned_professional": null,
            "status": "unassigned",
            "priority": "high",
            "flag": null
        }))
        .unwrap();
        let items = menu_items(&job);
        assert_eq!(items[0].code, VIEW_DETAILS);
        let codes: Vec<&str> = items.iter().map(|i| i.code).collect();
        for action in job.available_actions() {
            assert!(codes.contains(&action.code()));
        }
        assert_eq!(items.len(), job.available_actions().len() + 1);
    }
}
