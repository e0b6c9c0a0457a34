//! Inline form for actions that need input (assign, penalty, notes...).

use contracts::shared::actions::{ActionParams, ParamField, ParamPrompt};
use leptos::prelude::*;
use thaw::*;

/// An action waiting for its parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    pub record_id: String,
    pub version: i32,
    pub code: &'static str,
    pub label: &'static str,
    pub prompts: &'static [ParamPrompt],
    pub danger: bool,
}

/// Turns the raw inputs (one per prompt, same order) into params.
pub fn collect_params(prompts: &[ParamPrompt], values: &[String]) -> Result<ActionParams, String> {
    let mut params = ActionParams::default();
    for (prompt, raw) in prompts.iter().zip(values) {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match prompt.field {
            ParamField::Target => params.target = Some(raw.to_string()),
            ParamField::Value => params.value = Some(raw.to_string()),
            ParamField::Note => params.note = Some(raw.to_string()),
            ParamField::Amount => {
                let amount = raw
                    .replace(',', "")
                    .trim_start_matches('$')
                    .parse::<f64>()
                    .map_err(|_| format!("{}: enter a number", prompt.label))?;
                if !amount.is_finite() || amount < 0.0 {
                    return Err(format!("{}: enter a positive number", prompt.label));
                }
                params.amount = Some(amount);
            }
        }
    }
    params.validate(prompts).map_err(|e| e.to_string())?;
    Ok(params)
}

#[component]
pub fn ActionPromptForm(
    pending: PendingAction,
    on_submit: Callback<ActionParams>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let prompts = pending.prompts;
    let values: Vec<RwSignal<String>> = prompts.iter().map(|_| RwSignal::new(String::new())).collect();
    let values = StoredValue::new(values);
    let (form_error, set_form_error) = signal(None::<String>);

    let submit = move |_| {
        let raw: Vec<String> = values.with_value(|v| v.iter().map(|s| s.get_untracked()).collect());
        match collect_params(prompts, &raw) {
            Ok(params) => {
                set_form_error.set(None);
                on_submit.run(params);
            }
            Err(e) => set_form_error.set(Some(e)),
        }
    };

    let title = format!("{} \u{00b7} {}", pending.label, pending.record_id);
    let submit_appearance = if pending.danger {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Secondary
    };

    view! {
        <div class="action-prompt" class:action-prompt--danger=pending.danger>
            <div class="action-prompt__title">{title}</div>
            {prompts.iter().enumerate().map(|(i, prompt)| {
                let value = values.with_value(|v| v[i]);
                let label = if prompt.required {
                    format!("{} *", prompt.label)
                } else {
                    prompt.label.to_string()
                };
                let input = match prompt.field {
                    ParamField::Note => view! {
                        <Textarea value=value placeholder=prompt.label />
                    }.into_any(),
                    _ => view! {
                        <Input value=value placeholder=prompt.label />
                    }.into_any(),
                };
                view! {
                    <div class="action-prompt__field">
                        <Label>{label}</Label>
                        {input}
                    </div>
                }
            }).collect_view()}
            {move || form_error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=submit_appearance
                    on_click=submit
                    disabled=Signal::derive(move || busy.get())
                >
                    {pending.label}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::actions::{optional, required};

    const ASSIGN: &[ParamPrompt] = &[required(ParamField::Target, "Professional")];
    const PENALTY: &[ParamPrompt] = &[
        required(ParamField::Amount, "Penalty amount"),
        optional(ParamField::Note, "Reason"),
    ];

    #[test]
    fn test_collect_required_target() {
        let params = collect_params(ASSIGN, &["  Mike Johnson ".to_string()]).unwrap();
        assert_eq!(params.target.as_deref(), Some("Mike Johnson"));

        let err = collect_params(ASSIGN, &[String::new()]).unwrap_err();
        assert!(err.contains("target"));
    }

    #[test]
    fn test_collect_amount() {
        let params = collect_params(PENALTY, &["$1,250.50".to_string(), String::new()]).unwrap();
        assert_eq!(params.amount, Some(1250.5));
        assert_eq!(params.note, None);

        assert!(collect_params(PENALTY, &["abc".to_string(), String::new()]).is_err());
        assert!(collect_params(PENALTY, &["-5".to_string(), String::new()]).is_err());
    }
}
