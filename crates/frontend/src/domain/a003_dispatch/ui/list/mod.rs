//! Dispatch board: jobs waiting for a professional on the left, ranked
//! candidates for the selected job on the right.

use contracts::domain::a003_dispatch::{DispatchAction, DispatchJob, RankedCandidate};
use contracts::shared::actions::{ActionKind, ActionParams, RowActions};
use contracts::shared::metadata::Stored;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::{get_json, send_action};
use crate::shared::components::cells::{opt_text, rating, status, strong, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView, StatusBadge};
use crate::system::auth::use_auth;

impl EntityView for DispatchJob {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Job ID", |j: &DispatchJob| strong(&j.job_id)).sortable("job_id"),
            Column::new("Customer", |j: &DispatchJob| text(&j.customer_name)),
            Column::new("Service", |j: &DispatchJob| two_line(&j.service_category, &j.location)),
            Column::new("Scheduled", |j: &DispatchJob| text(&j.scheduled_time)).sortable("scheduled_time"),
            Column::new("Priority", |j: &DispatchJob| status(j.priority)),
            Column::new("Status", |j: &DispatchJob| status(j.status)),
            Column::new("Deadline", |j: &DispatchJob| opt_text(j.response_deadline.as_deref())),
        ]
    }
}

#[component]
pub fn DispatchList() -> impl IntoView {
    let selected = RwSignal::new(None::<Stored<DispatchJob>>);
    let refresh = RwSignal::new(0u32);

    view! {
        <div class="dispatch-board">
            <div class="dispatch-board__jobs">
                <EntityTable<DispatchJob> selected=selected refresh=refresh />
            </div>
            <div class="dispatch-board__candidates">
                <CandidatePanel selected=selected refresh=refresh />
            </div>
        </div>
    }
}

#[component]
fn CandidatePanel(selected: RwSignal<Option<Stored<DispatchJob>>>, refresh: RwSignal<u32>) -> impl IntoView {
    let auth = use_auth();
    let (candidates, set_candidates) = signal(Vec::<RankedCandidate>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    // Reload the candidates when another job is selected or the selected one changes
    Effect::new(move |_| {
        let Some(job) = selected.get() else {
            set_candidates.set(Vec::new());
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let path = format!("/api/dispatch/{}/eligible", urlencoding::encode(&job.item.id));
            match get_json::<Vec<RankedCandidate>>(auth, &path).await {
                Ok(list) => {
                    set_candidates.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let act = move |action: DispatchAction, professional_id: String| {
        let Some(job) = selected.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let params = ActionParams {
                target: Some(professional_id.clone()),
                ..Default::default()
            };
            match send_action::<DispatchJob>(auth, "dispatch", &job.item.id, action.code(), job.version(), params).await {
                Ok(updated) => {
                    log!("Dispatch {}: {} -> {}", updated.item.job_id, action.code(), professional_id);
                    selected.set(Some(updated));
                    refresh.update(|n| *n += 1);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        {move || match selected.get() {
            None => view! {
                <div class="placeholder">"Select a job to see eligible professionals"</div>
            }.into_any(),
            Some(job) => {
                let can_offer = job.item.is_available(DispatchAction::SendOffer);
                let can_assign = job.item.is_available(DispatchAction::DirectAssign);
                let job = job.item;
                view! {
                    <div class="dispatch-job">
                        <h3>{format!("{} \u{00b7} {}", job.job_id, job.customer_name)}</h3>
                        <div class="dispatch-job__meta">
                            <span>{format!("{} \u{00b7} {}", job.service_category, job.location)}</span>
                            <span>{job.scheduled_time.clone()}</span>
                            <StatusBadge status=job.priority />
                            <StatusBadge status=job.status />
                        </div>
                        {job.assigned_professional.clone().map(|p| view! {
                            <div class="dispatch-job__assigned">{format!("Assigned to {}", p)}</div>
                        })}
                        {job.response_deadline.clone().map(|d| view! {
                            <div>{format!("Response deadline: {}", d)}</div>
                        })}
                        {job.internal_notes.clone().map(|n| view! {
                            <div class="dispatch-job__notes">{n}</div>
                        })}
                    </div>
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    {move || loading.get().then(|| view! { <Spinner /> })}
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Professional"</TableHeaderCell>
                                <TableHeaderCell>"Distance"</TableHeaderCell>
                                <TableHeaderCell>"Availability"</TableHeaderCell>
                                <TableHeaderCell>"Rating"</TableHeaderCell>
                                <TableHeaderCell>"Workload"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || candidates.get().into_iter().map(|c| {
                                let offer_id = c.professional.id.clone();
                                let assign_id = c.professional.id.clone();
                                let offered = c.offered;
                                view! {
                                    <TableRow class:dispatch-candidate--mismatch=!c.category_match>
                                        <TableCell>
                                            <TableCellLayout>
                                                {two_line(&c.professional.name, &c.professional.service_category)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{format!("{:.1} km", c.professional.distance_km)}</TableCell>
                                        <TableCell><StatusBadge status=c.professional.availability /></TableCell>
                                        <TableCell>{rating(c.professional.rating)}</TableCell>
                                        <TableCell>{format!("{} jobs", c.professional.current_workload)}</TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    disabled=Signal::derive(move || busy.get() || offered || !can_offer)
                                                    on_click=move |_| act(DispatchAction::SendOffer, offer_id.clone())
                                                >
                                                    {if offered { "Offered" } else { "Send offer" }}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    disabled=Signal::derive(move || busy.get() || !can_assign)
                                                    on_click=move |_| act(DispatchAction::DirectAssign, assign_id.clone())
                                                >
                                                    "Assign"
                                                </Button>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                }.into_any()
            }
        }}
    }
}
