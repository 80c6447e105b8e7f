//! keyscript: drive a USB HID keyboard gadget from the command line.
//!
//! # Usage
//!
//! ```text
//! keyscript [OPTIONS] <COMMAND>
//!
//! Commands:
//!   run          Execute a script file
//!   exec         Execute script text given inline (or `-` for stdin)
//!   key          Press and release one key
//!   combo        Press several keys and modifiers together
//!   type         Type a string
//!   status       Show whether the gadget device is usable
//!   descriptor   Print the HID report descriptor as hex
//!   init-config  Write a config file with the current settings
//!
//! Options:
//!   --config <PATH>   Config file [env: KEYSCRIPT_CONFIG]
//!   --device <PATH>   Gadget device node [env: KEYSCRIPT_DEVICE]
//!   --dry-run         Record reports in memory and print them; no delays
//!   --json            Print responses as JSON
//! ```
//!
//! # Log level
//!
//! `RUST_LOG` wins when set.  Otherwise `[logging] level` from the config file
//! is used, falling back to `info`.  Logs go to stderr so `--json` output on
//! stdout stays machine-readable.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use keyscript_core::{
    Clock, KeyboardEngine, ManualClock, MemorySink, ModifierFlags, ReportSink, SystemClock,
    KEYBOARD_REPORT_DESCRIPTOR,
};
use keyscript_gadget::infrastructure::config::{self, GadgetConfig};
use keyscript_gadget::{ActionResponse, AutomationService, HidGadgetDevice};

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "keyscript",
    about = "Keystroke automation for Linux USB HID keyboard gadgets",
    version
)]
struct Cli {
    /// Config file to read instead of the default location.
    #[arg(long, global = true, env = "KEYSCRIPT_CONFIG")]
    config: Option<PathBuf>,

    /// Gadget device node; overrides `[device] path` from the config.
    #[arg(long, global = true, env = "KEYSCRIPT_DEVICE")]
    device: Option<PathBuf>,

    /// Record reports in memory and print them instead of writing the device.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Print the response as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Execute a script file.
    Run { path: PathBuf },

    /// Execute script text; `-` reads it from stdin.
    Exec { script: String },

    /// Press and release a single key.
    Key {
        /// Key name (`enter`, `f5`, `a`) or a single character.
        name: String,
        #[arg(long)]
        ctrl: bool,
        #[arg(long)]
        shift: bool,
        #[arg(long)]
        alt: bool,
        #[arg(long)]
        gui: bool,
        /// Raw modifier byte, OR-ed with the flags above.
        #[arg(long, default_value_t = 0)]
        modifiers: u8,
    },

    /// Press keys and modifiers together, e.g. `combo ctrl alt delete`.
    Combo {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Type a string.
    Type { text: String },

    /// Show whether the gadget device exists and is writable.
    Status,

    /// Print the HID report descriptor the gadget must be configured with.
    Descriptor,

    /// Write the effective configuration to the config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    fn key_modifiers(ctrl: bool, shift: bool, alt: bool, gui: bool, raw: u8) -> ModifierFlags {
        let mut flags = ModifierFlags::from_bits(raw);
        for (set, bit) in [
            (ctrl, ModifierFlags::LEFT_CTRL),
            (shift, ModifierFlags::LEFT_SHIFT),
            (alt, ModifierFlags::LEFT_ALT),
            (gui, ModifierFlags::LEFT_GUI),
        ] {
            if set {
                flags |= bit;
            }
        }
        flags
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_output<T: Serialize>(value: &T, json: bool, text: impl FnOnce() -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value).context("serialising response")?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn print_response(response: &ActionResponse, json: bool) -> anyhow::Result<()> {
    print_output(response, json, || {
        let mut out = response.message.clone();
        for line in response.results.iter().flatten() {
            out.push_str("\n  ");
            out.push_str(line);
        }
        out
    })
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Loads the config file and applies the `--device` override.
fn effective_config(cli: &Cli) -> anyhow::Result<GadgetConfig> {
    let mut cfg = config::load_config(cli.config.as_deref()).context("loading configuration")?;
    if let Some(device) = &cli.device {
        cfg.device.path = device.clone();
    }
    Ok(cfg)
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = effective_config(&cli);
    let level = cfg
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or("info");
    init_tracing(level);

    match cfg.and_then(|cfg| run(cli, cfg)) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, cfg: GadgetConfig) -> anyhow::Result<ExitCode> {
    let device = HidGadgetDevice::new(&cfg.device.path);

    let memory = Arc::new(MemorySink::new());
    let manual_clock = Arc::new(ManualClock::new());
    let (sink, clock): (Arc<dyn ReportSink>, Arc<dyn Clock>) = if cli.dry_run {
        (memory.clone(), manual_clock.clone())
    } else {
        (Arc::new(device.clone()), Arc::new(SystemClock))
    };
    let service = AutomationService::new(KeyboardEngine::new(sink, clock, cfg.timing.to_timing()));

    let response = match cli.command {
        Command::Status => {
            let status = device.status();
            print_output(&status, cli.json, || {
                format!(
                    "HID: {} ({})",
                    if status.writable { "Ready" } else { "Not available" },
                    status.path.display()
                )
            })?;
            return Ok(if status.writable { ExitCode::SUCCESS } else { ExitCode::FAILURE });
        }
        Command::Descriptor => {
            print_output(&KEYBOARD_REPORT_DESCRIPTOR, cli.json, || hex(KEYBOARD_REPORT_DESCRIPTOR))?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::InitConfig { force } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => config::config_file_path()?,
            };
            if path.exists() && !force {
                anyhow::bail!("{} already exists; pass --force to overwrite", path.display());
            }
            config::save_config(&cfg, &path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("wrote {}", path.display());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Run { path } => {
            info!(device = %cfg.device.path.display(), dry_run = cli.dry_run, "running script file");
            service.run_script_file(&path)
        }
        Command::Exec { script } => {
            let script = if script == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading script from stdin")?;
                buf
            } else {
                script
            };
            info!(device = %cfg.device.path.display(), dry_run = cli.dry_run, "running script text");
            service.run_script(&script)
        }
        Command::Key {
            name,
            ctrl,
            shift,
            alt,
            gui,
            modifiers,
        } => service.send_key(&name, Command::key_modifiers(ctrl, shift, alt, gui, modifiers)),
        Command::Combo { keys } => service.send_combo(&keys.join(" ")),
        Command::Type { text } => service.type_string(&text),
    };

    print_response(&response, cli.json)?;

    if cli.dry_run {
        for bytes in memory.report_bytes() {
            eprintln!("report: {}", hex(&bytes));
        }
        eprintln!(
            "dry run: {} reports, {:?} of delays skipped",
            memory.reports().len(),
            manual_clock.total()
        );
    }

    Ok(if response.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
