//! `pushover config` subcommands.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use pushover::config::{
    ConfigCommand, ConfigError, default_config_template, existing, load_config, search_paths,
    write_default_config,
};

use crate::app::{exit_code, print_config_hint};

/// Runs a configuration subcommand.
pub fn execute(command: &ConfigCommand, config: Option<&Path>) -> ExitCode {
    let result = match command {
        ConfigCommand::Defaults { output } => write_defaults(output.as_deref()),
        ConfigCommand::ListFiles { only_existing } => {
            list_files(*only_existing);
            Ok(())
        }
        ConfigCommand::DumpConfig { validate } => dump_config(config, *validate),
        ConfigCommand::ListPresets => list_presets(config),
        ConfigCommand::ShowPreset { preset } => show_preset(config, preset.as_deref()),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

fn write_defaults(output: Option<&Path>) -> Result<(), ConfigError> {
    if let Some(path) = output {
        write_default_config(path)?;
        println!("Configuration template written to: {}", path.display());
    } else {
        print!("{}", default_config_template()?);
    }
    Ok(())
}

fn list_files(only_existing: bool) {
    let paths = search_paths();
    let paths = if only_existing {
        existing(paths)
    } else {
        paths
    };
    for path in paths {
        println!("{}", path.display());
    }
}

fn dump_config(config: Option<&Path>, validate: bool) -> Result<(), ConfigError> {
    let store = load_config(config)?;
    if validate {
        store.validate_all()?;
    }
    let mut stdout = std::io::stdout().lock();
    store
        .dump(&mut stdout)
        .and_then(|()| stdout.flush())
        .map_err(|source| ConfigError::FileWrite {
            path: "<stdout>".into(),
            source,
        })
}

fn list_presets(config: Option<&Path>) -> Result<(), ConfigError> {
    let store = load_config(config)?;
    for name in store.list_presets() {
        println!("{name}");
    }
    Ok(())
}

fn show_preset(config: Option<&Path>, name: Option<&str>) -> Result<(), ConfigError> {
    let store = load_config(config)?;
    let preset = store.get_preset(name)?;
    for (key, value) in preset.iter() {
        let value = value.map(|v| v.to_string()).unwrap_or_default();
        println!("{key} = {value}");
    }
    Ok(())
}
