use serde::{Deserialize, Serialize};

/// Caller-supplied fields of a cheque. Both are required; no other rules apply,
/// and `cheque_number` is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewCheque {
    pub cheque_number: String,
    pub manager_approved: bool,
}
