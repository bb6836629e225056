use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;
use tracing::{debug, error};
use uidit_frontend::settings::Settings;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
    #[error("Tracing error")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[tokio::main]
async fn main() {
    if let Err(err) = init_logging() {
        eprintln!("uidit: {}", err);
        return;
    }

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    match uidit_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
        }
    }
}

fn init_logging() -> Result<(), Error> {
    let logfile = tracing_appender::rolling::daily(get_logging_path()?, "log");
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn cli() -> Command {
    Command::new("uidit")
        .about("uidit - read, edit, validate, and save uid files")
        .args([
            // NOTE: arguments
            Arg::new("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help(".txt or .json file to load on startup"),
            // NOTE: options
            Arg::new("url")
                .long("url")
                .action(ArgAction::Set)
                .help("launch url, its uid query parameter prefills the editor"),
            Arg::new("download-dir")
                .long("download-dir")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("directory downloads are written to"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.startup_path = args.get_one("path").cloned();
    settings.startup_url = args.get_one("url").cloned();

    if let Some(path) = args.get_one::<PathBuf>("download-dir") {
        settings.download_path = path.to_owned();
    }
}

fn get_logging_path() -> Result<PathBuf, Error> {
    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("uidit").join("logs")),
        None => Err(Error::Initialization),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uidit_frontend::settings::Settings;

    #[test]
    fn args_map_to_settings() {
        let args = super::cli().get_matches_from([
            "uidit",
            "list.txt",
            "--url",
            "https://host/?uid=1",
            "--download-dir",
            "/tmp/out",
        ]);

        let mut settings = Settings::default();
        super::map_args_to_settings(&args, &mut settings);

        assert_eq!(settings.startup_path, Some(PathBuf::from("list.txt")));
        assert_eq!(settings.startup_url, Some("https://host/?uid=1".to_string()));
        assert_eq!(settings.download_path, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn missing_args_keep_defaults() {
        let args = super::cli().get_matches_from(["uidit"]);

        let mut settings = Settings::default();
        let download_path = settings.download_path.clone();
        super::map_args_to_settings(&args, &mut settings);

        assert_eq!(settings.startup_path, None);
        assert_eq!(settings.startup_url, None);
        assert_eq!(settings.download_path, download_path);
    }
}
