//! Per-field state stored in the [`ValueStore`](crate::ValueStore).

use crate::value::InputValue;

#[derive(Clone, Debug, Default)]
pub(crate) struct FieldState {
    /// Current typed value; `None` when absent.
    pub value: Option<InputValue>,

    /// Monotonic revision counter, incremented on every write.
    pub value_rev: u64,
}
