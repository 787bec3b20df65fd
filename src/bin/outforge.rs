use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use outforge::{OutfitDef, eval_stage, output_file_name, stage_position};

#[derive(Parser, Debug)]
#[command(name = "outforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the built-in outfit catalog to definition files.
    Generate(GenerateArgs),
    /// Print the evaluated per-stage parameter tables as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Template directory.
    #[arg(long, default_value = "templates")]
    templates: PathBuf,

    /// Output directory for the generated files.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Only generate the named outfit line.
    #[arg(long)]
    only: Option<String>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Only dump the named outfit line.
    #[arg(long)]
    only: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn select(only: Option<&str>) -> anyhow::Result<Vec<OutfitDef>> {
    let defs = outforge::builtin_outfits();
    let Some(name) = only else {
        return Ok(defs);
    };
    let selected: Vec<OutfitDef> = defs.into_iter().filter(|d| d.name == name).collect();
    if selected.is_empty() {
        anyhow::bail!("no outfit named '{name}' in the catalog");
    }
    Ok(selected)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let defs = select(args.only.as_deref())?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    outforge::generate_all(&defs, &args.templates, &args.out)?;

    for def in &defs {
        for stage in &def.stages {
            eprintln!("wrote {}", args.out.join(output_file_name(stage)).display());
        }
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let defs = select(args.only.as_deref())?;

    let mut out = serde_json::Map::new();
    for def in &defs {
        def.validate()?;
        let stages: Vec<serde_json::Value> = def
            .stages
            .iter()
            .enumerate()
            .map(|(k, stage)| {
                let x = stage_position(k, def.stages.len());
                serde_json::json!({
                    "stage": stage,
                    "position": x,
                    "params": eval_stage(&def.params, stage, x),
                })
            })
            .collect();
        out.insert(def.name.clone(), serde_json::Value::Array(stages));
    }

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
