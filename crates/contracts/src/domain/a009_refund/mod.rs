pub mod aggregate;

pub use aggregate::{
    AdjustmentType, NewAdjustment, OriginalTransaction, RefundAction, RefundAdjustment, RelatedTo,
};
