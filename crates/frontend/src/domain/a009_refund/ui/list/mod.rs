use contracts::domain::a009_refund::{AdjustmentType, NewAdjustment, RefundAdjustment, RelatedTo};
use contracts::shared::format::format_currency;
use contracts::shared::metadata::Stored;
use contracts::shared::status::StatusDisplay;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::post_json;
use crate::shared::components::cells::{money, opt_text, status, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;

impl EntityView for RefundAdjustment {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Type", |r: &RefundAdjustment| status(r.adjustment_type)),
            Column::new("Amount", |r: &RefundAdjustment| money(r.amount)).sortable("amount").right(),
            Column::new("Reason", |r: &RefundAdjustment| text(&r.reason)),
            Column::new("Related to", |r: &RefundAdjustment| {
                view! {
                    <div class="cell-two-line">
                        {status(r.related_to)}
                        <div class="text-muted">{r.original_transaction.reference_id.clone()}</div>
                    </div>
                }
                .into_any()
            }),
            Column::new("Original", |r: &RefundAdjustment| {
                two_line(
                    &format_currency(r.original_transaction.original_amount),
                    r.original_transaction.description.as_deref().unwrap_or(&r.original_transaction.date),
                )
            })
            .right(),
            Column::new("Requested", |r: &RefundAdjustment| text(&r.requested_at)).sortable("requested_at"),
            Column::new("Approval", |r: &RefundAdjustment| status(r.approval_status)),
            Column::new("Approved by", |r: &RefundAdjustment| opt_text(r.approved_by.as_deref())),
            Column::new("Notes", |r: &RefundAdjustment| opt_text(r.internal_notes.as_deref())),
        ]
    }
}

/// Raw values of the create form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustmentForm {
    pub adjustment_type: String,
    pub amount: String,
    pub reason: String,
    pub related_to: String,
    pub reference_id: String,
    pub original_amount: String,
    pub description: String,
    pub internal_notes: String,
}

fn parse_amount(label: &str, raw: &str) -> Result<f64, String> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", label))
}

fn optional(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

impl AdjustmentForm {
    /// Same checks the backend runs, so most mistakes never leave the page
    pub fn build(&self) -> Result<NewAdjustment, String> {
        let adjustment_type = AdjustmentType::from_code(&self.adjustment_type)
            .ok_or_else(|| "Choose an adjustment type".to_string())?;
        let related_to =
            RelatedTo::from_code(&self.related_to).ok_or_else(|| "Choose what it relates to".to_string())?;
        let adjustment = NewAdjustment {
            adjustment_type,
            amount: parse_amount("Amount", &self.amount)?,
            reason: self.reason.trim().to_string(),
            related_to,
            reference_id: self.reference_id.trim().to_string(),
            original_amount: parse_amount("Original amount", &self.original_amount)?,
            description: optional(&self.description),
            internal_notes: optional(&self.internal_notes),
        };
        adjustment.validate()?;
        Ok(adjustment)
    }
}

#[component]
fn NewAdjustmentForm(on_created: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let adjustment_type = RwSignal::new(AdjustmentType::RefundPartial.code().to_string());
    let related_to = RwSignal::new(RelatedTo::Job.code().to_string());
    let amount = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let reference_id = RwSignal::new(String::new());
    let original_amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let internal_notes = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let form = AdjustmentForm {
            adjustment_type: adjustment_type.get_untracked(),
            amount: amount.get_untracked(),
            reason: reason.get_untracked(),
            related_to: related_to.get_untracked(),
            reference_id: reference_id.get_untracked(),
            original_amount: original_amount.get_untracked(),
            description: description.get_untracked(),
            internal_notes: internal_notes.get_untracked(),
        };
        let new_adjustment = match form.build() {
            Ok(a) => a,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match post_json::<_, Stored<RefundAdjustment>>(auth, "/api/refunds", &new_adjustment).await {
                Ok(created) => {
                    log!("Adjustment {} created", created.item.id);
                    set_error.set(None);
                    on_created.run(());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="form-card">
            <h3>"New adjustment"</h3>
            <div class="form-grid">
                <div class="form-group">
                    <Label>"Type *"</Label>
                    <Select value=adjustment_type>
                        {AdjustmentType::options().into_iter().map(|(code, label)| view! {
                            <option value=code>{label}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form-group">
                    <Label>"Amount *"</Label>
                    <Input value=amount placeholder="0.00" />
                </div>
                <div class="form-group">
                    <Label>"Related to *"</Label>
                    <Select value=related_to>
                        {RelatedTo::options().into_iter().map(|(code, label)| view! {
                            <option value=code>{label}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form-group">
                    <Label>"Reference *"</Label>
                    <Input value=reference_id placeholder="J-2841 / TXN-8921" />
                </div>
                <div class="form-group">
                    <Label>"Original amount"</Label>
                    <Input value=original_amount placeholder="0.00" />
                </div>
                <div class="form-group">
                    <Label>"Reason *"</Label>
                    <Input value=reason />
                </div>
                <div class="form-group">
                    <Label>"Description"</Label>
                    <Input value=description />
                </div>
                <div class="form-group">
                    <Label>"Internal notes"</Label>
                    <Textarea value=internal_notes />
                </div>
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Create adjustment" }}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </Flex>
        </div>
    }
}

#[component]
pub fn RefundList() -> impl IntoView {
    let refresh = RwSignal::new(0u32);
    let show_form = RwSignal::new(false);

    view! {
        <EntityTable<RefundAdjustment>
            refresh=refresh
            header_actions=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.set(true)>
                    {icon("plus")}
                    " New adjustment"
                </Button>
            }
            summary=move || view! {
                <Show when=move || show_form.get()>
                    <NewAdjustmentForm
                        on_created=Callback::new(move |_| {
                            show_form.set(false);
                            refresh.update(|n| *n += 1);
                        })
                        on_cancel=Callback::new(move |_| show_form.set(false))
                    />
                </Show>
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AdjustmentForm {
        AdjustmentForm {
            adjustment_type: "refund_partial".into(),
            amount: "$45.00".into(),
            reason: "Late arrival".into(),
            related_to: "job".into(),
            reference_id: "J-2841".into(),
            original_amount: "120".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_valid_partial_refund() {
        let adjustment = form().build().unwrap();
        assert_eq!(adjustment.adjustment_type, AdjustmentType::RefundPartial);
        assert_eq!(adjustment.amount, 45.0);
        assert_eq!(adjustment.description, None);
    }

    #[test]
    fn test_build_rejects_bad_input() {
        let mut bad = form();
        bad.amount = "lots".into();
        assert_eq!(bad.build().unwrap_err(), "Amount must be a number");

        let mut bad = form();
        bad.amount = "150".into();
        assert!(bad.build().unwrap_err().contains("less than the original"));

        let mut bad = form();
        bad.adjustment_type = String::new();
        assert!(bad.build().is_err());
    }
}
