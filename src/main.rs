use anyhow::Context;
use roots_kit::config::{locate_source_root, Cli};
use roots_kit::ui::messages;
use roots_kit::{Config, KitError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::try_parse_permissive(std::env::args_os()).unwrap_or_else(|e| e.exit());

    if let Err(err) = try_main(&cli) {
        match err.downcast_ref::<KitError>() {
            Some(kit) => {
                eprintln!("{}", messages::error(kit));
                std::process::exit(kit.exit_code());
            }
            None => {
                eprintln!("{}", messages::format_error(&format!("{err:#}"), None));
                std::process::exit(1);
            }
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("cannot read current directory")?;
    let exe = std::env::current_exe().context("cannot locate the roots-kit executable")?;

    let config = Config::new(cli, &working_dir, locate_source_root(&exe));
    roots_kit::commands::init::run(&config)?;

    Ok(())
}
