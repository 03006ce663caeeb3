use rust_decimal::Decimal;
use serde::Deserialize;

// GET /banking/v2/saldo
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct InterBalance {
    #[serde(rename = "disponivel")]
    pub(crate) available: Decimal,
    #[serde(rename = "limite")]
    pub(crate) limit: Decimal,
    #[serde(rename = "bloqueadoCheque")]
    pub(crate) check_on_hold: Decimal,
    #[serde(rename = "bloqueadoJudicialmente")]
    pub(crate) judicially_blocked: Decimal,
    #[serde(rename = "bloqueadoAdministrativo")]
    pub(crate) administratively_blocked: Decimal,
}

// GET /banking/v2/extrato
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StatementResponse {
    #[serde(rename = "transacoes")]
    pub(crate) transactions: Vec<InterTransaction>,
}

/// Every field arrives as a string, amounts included.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct InterTransaction {
    #[serde(rename = "dataEntrada")]
    pub(crate) date: String,
    #[serde(rename = "tipoTransacao")]
    pub(crate) transaction_type: String,
    #[serde(rename = "tipoOperacao")]
    pub(crate) operation: String,
    #[serde(rename = "valor")]
    pub(crate) value: String,
    #[serde(rename = "titulo")]
    pub(crate) title: String,
    #[serde(rename = "descricao")]
    pub(crate) description: String,
}

// POST /oauth/v2/token
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    pub(crate) token_type: String,
    pub(crate) expires_in: i64,
    #[serde(default)]
    pub(crate) scope: String,
}
