use anyhow::{Context, bail};
use clap::Parser;
use lsystem_turtle::{LSystem, Output, Preset, bounds};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lsystem")]
#[command(about = "Expand an L-System and print its line segments as JSON", long_about = None)]
struct Cli {
    /// TOML grammar file
    #[arg(conflicts_with = "preset", required_unless_present = "preset")]
    grammar: Option<PathBuf>,

    /// Use a built-in grammar (koch, snowflake, sierpinski, plant, tree)
    #[arg(long)]
    preset: Option<String>,

    /// Override the iteration count
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Print the expanded string instead of geometry
    #[arg(long)]
    raw: bool,

    /// Include step length, heading and stack depth in each record
    #[arg(long)]
    extra_info: bool,

    /// Keep duplicate segments
    #[arg(long)]
    no_dedup: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// On-disk grammar description. Angles are given in degrees.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GrammarFile {
    axiom: String,
    #[serde(default)]
    rules: BTreeMap<char, String>,
    iterations: usize,
    angle: f64,
    #[serde(default = "default_heading")]
    heading: f64,
    #[serde(default = "default_step")]
    step: f64,
    #[serde(default)]
    aliases: Vec<char>,
}

fn default_heading() -> f64 {
    90.0
}

fn default_step() -> f64 {
    1.0
}

impl From<GrammarFile> for LSystem {
    fn from(file: GrammarFile) -> Self {
        LSystem {
            axiom: file.axiom,
            rules: file.rules,
            iterations: file.iterations,
            angle_increment: file.angle.to_radians(),
            initial_heading: file.heading.to_radians(),
            step_length: file.step,
            aliases: file.aliases,
            ..Default::default()
        }
    }
}

fn load(cli: &Cli) -> anyhow::Result<LSystem> {
    if let Some(name) = &cli.preset {
        let Some(preset) = Preset::from_name(name) else {
            bail!("unknown preset '{name}'");
        };
        return Ok(preset.build(cli.iterations.unwrap_or(4)));
    }
    let path = cli
        .grammar
        .as_ref()
        .context("either a grammar file or --preset is required")?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading grammar file {}", path.display()))?;
    let file: GrammarFile =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let mut system = LSystem::from(file);
    if let Some(n) = cli.iterations {
        system.iterations = n;
    }
    Ok(system)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let system = load(&cli)?
        .with_raw(cli.raw)
        .with_extra_info(cli.extra_info)
        .with_deduplicate(!cli.no_dedup);

    let output = system.generate()?;
    match &output {
        Output::Raw(s) => {
            info!(len = s.len(), "expanded string");
            println!("{s}");
        }
        Output::Segments(segments) => {
            if let Some((min, max)) = bounds(segments) {
                info!(count = segments.len(), ?min, ?max, "generated segments");
            }
            let json = if cli.pretty {
                serde_json::to_string_pretty(segments)?
            } else {
                serde_json::to_string(segments)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_file_uses_degrees() {
        let file: GrammarFile = toml::from_str(
            r#"
            axiom = "A"
            iterations = 2
            angle = 60.0
            aliases = ["A", "B"]

            [rules]
            A = "B-A-B"
            B = "A+B+A"
            "#,
        )
        .unwrap();
        let system = LSystem::from(file);
        assert!((system.angle_increment - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
        assert!((system.initial_heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(system.rules.get(&'A').map(String::as_str), Some("B-A-B"));
        assert_eq!(system.generate().unwrap().as_segments().unwrap().len(), 9);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: Result<GrammarFile, _> =
            toml::from_str("axiom = \"F\"\niterations = 1\nangle = 90.0\ncolour = 3\n");
        assert!(parsed.is_err());
    }
}
