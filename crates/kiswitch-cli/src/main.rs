use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use indexmap::IndexMap;
use kiswitch_keycap::KeycapFamily;
use kiswitch_switch::{Manifest, Request, SwitchFamily};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod output;

use error::CliError;
use output::{write_footprints, Format};

#[derive(Parser)]
#[command(name = "kiswitch", version, about = "Generate KiCad keyswitch footprints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one switch family, optionally with one footprint per keycap size
    Generate(GenerateArgs),
    /// Generate a whole footprint library, one `.pretty` directory per group
    Library(LibraryArgs),
    /// List switch and keycap families with their parameters
    List,
}

#[derive(Args)]
struct GenerateArgs {
    /// Switch family, e.g. SwitchCherryMX
    #[arg(value_name = "FAMILY")]
    family: String,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    output: PathBuf,

    /// Switch parameters as KEY=VALUE, one or more per flag
    #[arg(short = 's', long = "switch-arg", value_name = "KEY=VALUE", num_args = 1..)]
    switch_args: Vec<String>,

    /// Keycap family to add, e.g. Keycap or KeycapChoc
    #[arg(short, long, value_name = "KEYCAP")]
    keycap: Option<String>,

    /// Keycap sizes; defaults to the family's own list
    #[arg(long = "keycap-sizes", value_name = "SIZE", num_args = 1..)]
    keycap_sizes: Option<Vec<String>>,

    /// Keycap parameters as KEY=VALUE, one or more per flag
    #[arg(short = 'b', long = "keycap-arg", value_name = "KEY=VALUE", num_args = 1..)]
    keycap_args: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Kicad)]
    format: Format,
}

#[derive(Args)]
struct LibraryArgs {
    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "library")]
    output: PathBuf,

    /// YAML manifest; the built-in library when omitted
    #[arg(short, long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Kicad)]
    format: Format,
}

fn parse_pairs(raw: &[String]) -> Result<IndexMap<String, String>, CliError> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| CliError::input(format!("Expected KEY=VALUE, got \"{pair}\"")))
        })
        .collect()
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_tracing(cli.debug);

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Library(args) => run_library(args),
        Command::List => {
            run_list();
            Ok(())
        }
    };
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.code as i32);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let family: SwitchFamily = args.family.parse()?;
    let keycap = args
        .keycap
        .as_deref()
        .map(str::parse::<KeycapFamily>)
        .transpose()?;

    let request = Request {
        family,
        switch_args: parse_pairs(&args.switch_args)?,
        keycap,
        keycap_sizes: args.keycap_sizes,
        keycap_args: parse_pairs(&args.keycap_args)?,
    };
    debug!(?request, "generate");
    let footprints = request.build()?;

    let written = write_footprints(&args.output, &footprints, args.format)
        .map_err(|e| CliError::processing(format!("{e:#}")))?;
    info!(count = written.len(), dir = %args.output.display(), "footprints written");
    Ok(())
}

fn run_library(args: LibraryArgs) -> Result<(), CliError> {
    let manifest = match &args.manifest {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                CliError::input(format!("Could not read manifest {}: {e}", path.display()))
            })?;
            Manifest::from_yaml(&raw).map_err(|e| CliError::input(e.to_string()))?
        }
        None => Manifest::builtin(),
    };

    let mut failed = 0;
    for group in manifest.generate() {
        let dir = args.output.join(group.dir_name());
        let written = write_footprints(&dir, &group.footprints, args.format)
            .map_err(|e| CliError::processing(format!("{e:#}")))?;
        info!(group = %group.name, dir = %dir.display(), count = written.len(), "wrote group");
        for (job, err) in &group.failures {
            warn!(group = %group.name, %job, "skipped: {err}");
        }
        failed += group.failures.len();
    }

    if failed > 0 {
        return Err(CliError::processing(format!("{failed} job(s) failed")));
    }
    Ok(())
}

fn run_list() {
    for family in SwitchFamily::ALL {
        println!("{family}");
        print_schema(&family.schema());
    }
    for family in KeycapFamily::ALL {
        println!("{family}");
        print_schema(&family.schema());
    }
}

fn print_schema(schema: &kiswitch_params::Schema) {
    for prop in schema.iter() {
        let mut line = format!("  {} ({}{})", prop.name, prop.kind, if prop.list { " list" } else { "" });
        if let Some(default) = &prop.default {
            line.push_str(&format!(" = {default}"));
        }
        if let Some(allowed) = &prop.allowed {
            let allowed: Vec<_> = allowed.iter().map(ToString::to_string).collect();
            line.push_str(&format!(" [{}]", allowed.join(", ")));
        }
        if !prop.doc.is_empty() {
            line.push_str(&format!("  {}", prop.doc));
        }
        println!("{line}");
    }
}
