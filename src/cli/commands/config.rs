use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// `config`: where the file lives, and with `--print` the effective values.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config { print_config } = cmd else {
        return Ok(());
    };

    let path = Config::config_file();
    if !*print_config {
        println!("{}", path.display());
        return Ok(());
    }

    let source = if path.exists() {
        path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    println!("📄 Effective configuration (from {source}, environment applied):\n");
    println!("{}", serde_yaml::to_string(&cfg.redacted())?);

    let slack = if cfg.use_mock {
        "mock mode, Slack is not contacted".to_string()
    } else {
        match cfg.slack_credentials() {
            Ok(_) => "token and channel id set".to_string(),
            Err(e) => e.user_message(),
        }
    };
    println!("Slack: {slack}");
    Ok(())
}
