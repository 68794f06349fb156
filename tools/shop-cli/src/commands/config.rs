//! Configuration management commands.

use anyhow::{bail, Context as _, Result};
use shop_widget::WidgetConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "defaults"),
    }
    println!();
    println!(
        "{}",
        toml::to_string_pretty(&ctx.config).context("Failed to render config")?
    );
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = default_config_file()?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output.warn("No config file found; defaults are in use");
        return Ok(());
    };

    let config = WidgetConfig::load(path)?;
    let problems = check(&config);
    if problems.is_empty() {
        ctx.output
            .success(&format!("{} is valid", path.display()));
        return Ok(());
    }

    for problem in &problems {
        ctx.output.warn(problem);
    }
    bail!("{} problem(s) in {}", problems.len(), path.display())
}

/// Semantic checks beyond parsing.
fn check(config: &WidgetConfig) -> Vec<String> {
    let mut problems = Vec::new();
    let base = config.api.base_url.trim();
    if !base.is_empty() && !(base.starts_with("http://") || base.starts_with("https://")) {
        problems.push(format!("api.base_url must be http(s): {}", base));
    }
    if !config.orders_page.starts_with('/') && !config.orders_page.contains("://") {
        problems.push(format!(
            "orders_page should be a path or URL: {}",
            config.orders_page
        ));
    }
    if config.toast_ms == 0 {
        problems.push("toast_ms must be greater than zero".to_string());
    }
    if config.default_payment.trim().is_empty() {
        problems.push("default_payment must not be empty".to_string());
    }
    problems
}

/// Commented default `shop.toml`.
fn default_config_file() -> Result<String> {
    let body = toml::to_string_pretty(&WidgetConfig::default())
        .context("Failed to render default config")?;
    Ok(format!(
        "# Clothshop widget configuration\n# api.base_url empty means the page origin in the browser.\n\n{}",
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let text = default_config_file().unwrap();
        assert_eq!(WidgetConfig::from_toml(&text).unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_check_flags_bad_values() {
        let mut config = WidgetConfig::default().with_base_url("localhost:5000");
        config.toast_ms = 0;
        let problems = check(&config);
        assert_eq!(problems.len(), 2);
        assert!(check(&WidgetConfig::default()).is_empty());
    }
}
