//! Row actions: named commands gated by a record's current state.

use super::state_machine::TransitionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Normal,
    /// Rendered in red in the action menu
    Danger,
    /// Opens the detail placeholder instead of calling the backend
    Navigate { param: &'static str, chat: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Target,
    Value,
    Amount,
    Note,
}

/// A parameter the operator is asked for before the action is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamPrompt {
    pub field: ParamField,
    pub label: &'static str,
    pub required: bool,
}

pub const fn required(field: ParamField, label: &'static str) -> ParamPrompt {
    ParamPrompt {
        field,
        label,
        required: true,
    }
}

pub const fn optional(field: ParamField, label: &'static str) -> ParamPrompt {
    ParamPrompt {
        field,
        label,
        required: false,
    }
}

pub trait ActionKind: Sized + Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn style(&self) -> ActionStyle;

    fn prompts(&self) -> &'static [ParamPrompt];

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.code() == code)
    }

    fn is_danger(&self) -> bool {
        self.style() == ActionStyle::Danger
    }

    /// Navigation-only actions never reach the backend
    fn is_navigation(&self) -> bool {
        matches!(self.style(), ActionStyle::Navigate { .. })
    }
}

/// Record-side gating
pub trait RowActions {
    type Action: ActionKind;

    fn available_actions(&self) -> Vec<Self::Action>;

    fn is_available(&self, action: Self::Action) -> bool {
        self.available_actions().contains(&action)
    }
}

/// Action type for read-only datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoAction {}

impl ActionKind for NoAction {
    const ALL: &'static [Self] = &[];

    fn code(&self) -> &'static str {
        match *self {}
    }

    fn label(&self) -> &'static str {
        match *self {}
    }

    fn style(&self) -> ActionStyle {
        match *self {}
    }

    fn prompts(&self) -> &'static [ParamPrompt] {
        match *self {}
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ActionParams {
    pub fn target(&self) -> Result<&str, ActionError> {
        non_empty(&self.target).ok_or(ActionError::MissingParam("target"))
    }

    pub fn value(&self) -> Result<&str, ActionError> {
        non_empty(&self.value).ok_or(ActionError::MissingParam("value"))
    }

    pub fn amount(&self) -> Result<f64, ActionError> {
        match self.amount {
            Some(a) if a.is_finite() => Ok(a),
            Some(_) => Err(ActionError::InvalidParam("amount must be a number".into())),
            None => Err(ActionError::MissingParam("amount")),
        }
    }

    pub fn note(&self) -> Option<&str> {
        non_empty(&self.note)
    }

    pub fn optional_target(&self) -> Option<&str> {
        non_empty(&self.target)
    }

    /// Checks that every required prompt has a value
    pub fn validate(&self, prompts: &[ParamPrompt]) -> Result<(), ActionError> {
        for prompt in prompts.iter().filter(|p| p.required) {
            match prompt.field {
                ParamField::Target => self.target().map(|_| ())?,
                ParamField::Value => self.value().map(|_| ())?,
                ParamField::Amount => self.amount().map(|_| ())?,
                ParamField::Note => {
                    if self.note().is_none() {
                        return Err(ActionError::MissingParam("note"));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Body of `POST /api/{collection}/:id/actions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest<A> {
    pub action: A,
    pub expected_version: i32,
    #[serde(default)]
    pub params: ActionParams,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("action '{0}' is not available in the current state")]
    NotAvailable(&'static str),
    #[error("missing parameter: {0}")]
    MissingParam(&'static str),
    #[error("{0}")]
    InvalidParam(String),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Declares an action enum with its code, label, style and prompts.
///
/// Styles and prompt helpers are in scope unqualified inside the macro:
///
/// ```ignore
/// action_enum! {
///     pub enum PayoutAction {
///         Hold => ("hold", "Hold payout", Normal, []),
///         Adjust => ("adjust", "Adjust payout", Normal, [required(Amount, "New net amount")]),
///     }
/// }
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => ($code:literal, $label:literal, $style:expr, [ $( $prompt:expr ),* $(,)? ]) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant, )+
        }

        impl $crate::shared::actions::ActionKind for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            #[allow(unused_imports)]
            fn style(&self) -> $crate::shared::actions::ActionStyle {
                use $crate::shared::actions::ActionStyle::*;
                match self {
                    $( $name::$variant => $style, )+
                }
            }

            #[allow(unused_imports)]
            fn prompts(&self) -> &'static [$crate::shared::actions::ParamPrompt] {
                use $crate::shared::actions::{optional, required, ParamField::*, ParamPrompt};
                match self {
                    $( $name::$variant => {
                        const PROMPTS: &[ParamPrompt] = &[ $( $prompt ),* ];
                        PROMPTS
                    } )+
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::shared::actions::ActionKind::code(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::shared::actions::ActionKind>::from_code(&code).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::unknown_variant(&code, &[ $( $code ),+ ])
                })
            }
        }
    };
}
