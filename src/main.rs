// SPDX-License-Identifier: MPL-2.0
use accident_uploader::app::{self, Flags};
use accident_uploader::config::{self, paths};
use accident_uploader::infrastructure::HttpUploader;
use accident_uploader::logging;
use accident_uploader::ui::notifications::{NotificationCenter, Surface};
use std::path::PathBuf;
use std::sync::Arc;

const HELP: &str = "\
Accident Uploader

USAGE:
  accident_uploader [OPTIONS] [IMAGE]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --endpoint <URL>     Upload endpoint, overrides the config
  -h, --help           Print this help

ARGS:
  <IMAGE>              Image to preselect
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let endpoint: Option<String> = args.opt_value_from_str("--endpoint")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    logging::init_logging();
    paths::init_cli_override(config_dir);

    let (mut config, config_warning) = config::load();
    if let Some(endpoint) = endpoint {
        config.upload.endpoint = Some(endpoint);
    }

    let mut notifications = NotificationCenter::new(Surface::from_config(&config.notifications));
    notifications.initialize()?;

    let uploader = HttpUploader::new(config.upload.request_timeout())?;

    app::run(Flags {
        lang,
        file_path,
        config,
        config_warning,
        notifications,
        uploader: Arc::new(uploader),
    })?;
    Ok(())
}
