use anyhow::Context;
use colored::Colorize;

use blog_server::{BlogServer, LogFormat, ServerConfig};

use crate::cli::*;
use crate::logging;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let level = if cli.verbose { "debug" } else { "info" };
    match cli.command {
        Command::Serve(args) => cmd_serve(args, level).await,
        Command::Config(args) => cmd_config(args),
    }
}

async fn cmd_serve(args: ServeArgs, level: &str) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    logging::init(config.log_format, level).context("failed to install logger")?;

    let server = BlogServer::new(config).context("failed to initialize server")?;
    println!(
        "{} Blog posts API on {}",
        "✓".green().bold(),
        server.config().bind_addr.to_string().bold()
    );
    server.serve().await.context("server error")
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?
        .with_port_from_env()
        .context("invalid environment")?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Defaults, then the config file, then `$PORT`, then flags.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?
        .with_port_from_env()
        .context("invalid environment")?;
    apply_flags(&mut config, args);
    Ok(config)
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn apply_flags(config: &mut ServerConfig, args: &ServeArgs) {
    if let Some(port) = args.port {
        config.bind_addr.set_port(port);
    }
    if args.no_seed {
        config.seed_sample_post = false;
    }
    if let Some(format) = args.log_format {
        config.log_format = match format {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn serve_args(argv: &[&str]) -> ServeArgs {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Command::Serve(args) => args,
            Command::Config(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = ServerConfig::default();
        let args = serve_args(&["blog", "serve", "-p", "9999", "--no-seed", "--log-format", "json"]);
        apply_flags(&mut config, &args);
        assert_eq!(config.bind_addr.port(), 9999);
        assert!(!config.seed_sample_post);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn no_flags_keep_config() {
        let mut config = ServerConfig::default();
        apply_flags(&mut config, &serve_args(&["blog", "serve"]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn no_config_file_means_defaults() {
        assert_eq!(load_config(None).unwrap(), ServerConfig::default());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(std::path::Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }
}
