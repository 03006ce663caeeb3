use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account balances at the end of the requested day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub available: Decimal,
    pub limit: Decimal,
    pub check_on_hold: Decimal,
    pub judicially_blocked: Decimal,
    pub administratively_blocked: Decimal,
}
