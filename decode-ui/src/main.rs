mod runtime;
mod screens;
mod ui;

use std::fs::File;
use std::path::{Path, PathBuf};

use decode_audio::{FilePreferences, SoundBank, SoundService};
use decode_core::config::Config;
use decode_core::engine::GameEngine;
use decode_core::session_log::SessionLog;

use runtime::AppRuntime;
use ui::{keybindings, RatatuiBackend};

const USAGE: &str = "\
usage: signal-decode [options]

  -v, --verbose           debug-level logging
      --mute              start with sound off (not saved)
      --seed <N>          deterministic patterns
      --export-sounds <DIR>
                          write every sound cue as WAV and exit
  -h, --help              show this help";

#[derive(Debug, Default, PartialEq)]
struct Args {
    verbose: bool,
    mute: bool,
    help: bool,
    seed: Option<u64>,
    export_sounds: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => parsed.verbose = true,
            "--mute" => parsed.mute = true,
            "-h" | "--help" => parsed.help = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid seed '{}': {}", value, e))?;
                parsed.seed = Some(seed);
            }
            "--export-sounds" => {
                let dir = iter.next().ok_or("--export-sounds needs a directory")?;
                parsed.export_sounds = Some(PathBuf::from(dir));
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(parsed)
}

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("signal-decode")
        .join("signal-decode.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(_) => match File::create(std::env::temp_dir().join("signal-decode.log")) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("logging disabled: {}", e);
                return;
            }
        },
    };

    if let Err(e) = WriteLogger::init(log_level, Config::default(), log_file) {
        eprintln!("logging disabled: {}", e);
        return;
    }

    log::info!("signal-decode starting (log level: {:?})", log_level);
}

fn export_sounds(dir: &Path, sample_rate: u32) -> std::io::Result<()> {
    let bank = SoundBank::render(sample_rate);
    let written = bank
        .export_dir(dir)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn build_engine(config: &Config) -> GameEngine {
    let engine = GameEngine::from_config(config);
    if !config.session_log_enabled() {
        return engine;
    }
    match SessionLog::open_default() {
        Some(log) => engine.with_session_log(log),
        None => engine,
    }
}

fn main() -> std::io::Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("signal-decode: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_logging(args.verbose);

    let mut config = Config::load();
    if let Some(seed) = args.seed {
        config.set_seed(seed);
    }

    if let Some(dir) = &args.export_sounds {
        return export_sounds(dir, config.sample_rate());
    }

    let output = decode_audio::default_output(config.sample_rate());
    let mut sound = SoundService::new(Box::new(FilePreferences::at_default_path()), output)
        .with_master_volume(config.master_volume());
    if args.mute {
        sound.mute_session();
    }

    let mut runtime = AppRuntime::new(
        build_engine(&config),
        sound,
        keybindings::load_keybindings(),
        config.pad_count(),
    );

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;

    let result = runtime.run(&mut backend);

    backend.stop()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        let owned: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        parse_args(&owned)
    }

    #[test]
    fn no_arguments_is_default() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn flags_and_values() {
        let parsed = args(&["-v", "--mute", "--seed", "42", "--export-sounds", "out"]).unwrap();
        assert!(parsed.verbose);
        assert!(parsed.mute);
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.export_sounds, Some(PathBuf::from("out")));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(args(&["--seed"]).unwrap_err().contains("needs a value"));
        assert!(args(&["--seed", "abc"]).unwrap_err().contains("invalid seed"));
        assert!(args(&["--fullscreen"]).unwrap_err().contains("unknown argument"));
    }

    #[test]
    fn export_writes_wav_files() {
        let dir = tempfile::tempdir().unwrap();
        export_sounds(dir.path(), 8_000).unwrap();
        assert!(dir.path().join("success.wav").exists());
        assert!(dir.path().join("pad-5.wav").exists());
    }
}
