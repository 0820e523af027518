// src/main.rs
mod cli;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, has_config_overrides};
use logging::setup_logging;
use tba_api::{AppError, Config, TbaClient};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = Config::load_unchecked(&Config::get_config_path()).await?;
    apply_arg_overrides(&mut config, &args);

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        config.display();
        return Ok(());
    }

    if args.save_config {
        if !has_config_overrides(&args) {
            return Err(AppError::config_error(
                "--save-config needs at least one of --org, --app-id, --app-version or --base-url",
            ));
        }
        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        if args.command.is_none() {
            return Ok(());
        }
    }

    let Some(command) = args.command.as_ref() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    config.validate()?;
    let client = TbaClient::from_config(&config)?;

    let endpoint = command.endpoint();
    tracing::info!("Running command {:?} against {}", command, client.base_url());
    let data = client.fetch_endpoint(endpoint).await?;

    let output = if args.compact {
        serde_json::to_string(&data)?
    } else {
        serde_json::to_string_pretty(&data)?
    };
    println!("{output}");

    Ok(())
}

/// Command-line identity and base URL win over the config file and environment.
fn apply_arg_overrides(config: &mut Config, args: &Args) {
    if let Some(organization) = &args.organization {
        config.organization = organization.clone();
    }
    if let Some(app_identifier) = &args.app_identifier {
        config.app_identifier = app_identifier.clone();
    }
    if let Some(app_version) = &args.app_version {
        config.app_version = app_version.clone();
    }
    if let Some(base_url) = &args.base_url {
        config.api_base_url = base_url.clone();
    }
}
