use crate::api::SlackClient;
use crate::config::Config;
use crate::core::assembler::{AssemblerSettings, LedgerAssembler};
use crate::core::mock::create_mock_ledger;
use crate::errors::AppResult;
use crate::models::{AttendanceLedger, YearMonth};
use tracing::info;

/// Build the ledger for a month from the configured source.
///
/// Mock mode never touches the network. Otherwise token and channel id are
/// checked before the first request is sent.
pub async fn fetch_ledger(cfg: &Config, ym: YearMonth) -> AppResult<AttendanceLedger> {
    if cfg.use_mock {
        info!(month = %ym, "mock mode: synthesizing ledger");
        return create_mock_ledger(ym);
    }

    let creds = cfg.slack_credentials()?;
    let settings = AssemblerSettings::from_config(cfg)?;
    let client = SlackClient::new(creds.token).with_base_url(&cfg.api_base_url);

    let mut assembler = LedgerAssembler::new(&client, settings);
    assembler.fetch_ledger(ym).await
}
