use anyhow::{Result, bail};
use chrono::Local;
use common::SettlementRequest;

use super::open_state;
use crate::config::Config;
use crate::service::settlement;

pub async fn settle(
    config: &Config,
    kind: &str,
    id: String,
    account: Option<String>,
    method: Option<String>,
) -> Result<()> {
    let request = match kind.to_ascii_lowercase().as_str() {
        "recurring" => SettlementRequest::Recurring { id, method, account },
        "debt" => SettlementRequest::Debt { id, method, account },
        "manual" => SettlementRequest::Manual { id },
        other => bail!("unknown settlement kind `{other}` (expected recurring, debt, or manual)"),
    };

    let state = open_state(config);
    let today = Local::now().date_naive();
    let outcome = settlement::settle(&state, request, today).await?;
    println!(
        "settled `{}`: posted {} on {} [{}]",
        outcome.posted.name, outcome.posted.amount, outcome.posted.date, outcome.posted.id
    );
    Ok(())
}
