//! # PS INOX CLI
//!
//! Command line front end for the pre-sizing engine. Requests are JSON
//! files (or `-` for stdin), results are pretty JSON on stdout, logs go to
//! stderr.
//!
//! ```text
//! inox beam --input beam.json
//! inox --narrate structure --input slab.json
//! inox budget --input items.json --customer "ACME" --pdf budget.pdf
//! ```

mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

use inox_core::calculations::{
    beam, column, footing, geometry, size_structure, BeamInput, ColumnInput, FootingInput, GeometryInput,
    StructureInput,
};
use inox_core::catalog::{ProfileSeries, SpanMode, SteelDeckTable, LOAD_CLASSES_KGF_M2};
use inox_core::narrative::{narrate, Language, NarrativeRequest, NarrativeSubject, TemplateNarrator};
use inox_core::pdf::render_budget_pdf;
use inox_core::pricing::{Budget, PricingInput};
use inox_core::DesignSettings;

#[derive(Parser)]
#[command(author, version, about = "PS INOX steel profile selection and pre-sizing")]
struct Cli {
    /// Design settings JSON (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Attach a plain-language explanation to the result
    #[arg(long, global = true)]
    narrate: bool,

    /// Explanation language: "en" or "pt-BR"
    #[arg(long, global = true, default_value = "en")]
    language: String,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear spans and overhang advice
    Geometry {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Size a simply-supported beam
    Beam {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Size or check a column
    Column {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Size a spread footing
    Footing {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Size the whole load path of a slab
    Structure {
        #[arg(short, long)]
        input: PathBuf,

        /// Also print the priced bill of materials
        #[arg(long)]
        bill: bool,
    },
    /// Price a list of items
    Budget {
        /// JSON array of pricing inputs
        #[arg(short, long)]
        input: PathBuf,

        /// Customer name for the PDF title block
        #[arg(long, default_value = "")]
        customer: String,

        /// Write the budget as PDF to this path
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// List a profile catalog in selection order
    Catalog {
        #[arg(long, default_value = "W")]
        series: String,
    },
    /// List the steel deck table
    Deck {
        /// "single" or "double"
        #[arg(long, default_value = "double")]
        mode: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = match &cli.config {
        Some(path) => DesignSettings::from_json_file(path)?,
        None => DesignSettings::default(),
    };
    let language = parse_language(&cli.language)?;

    match cli.command {
        Commands::Geometry { input } => {
            let input: GeometryInput = read_json(&input)?;
            print_json(&geometry::analyze(&input, settings.max_cantilever_ratio)?)?;
        }
        Commands::Beam { input } => {
            let input: BeamInput = read_json(&input)?;
            let result = beam::calculate(&input)?;
            emit(&result, cli.narrate.then(|| NarrativeSubject::Beam(result.clone())), language)?;
        }
        Commands::Column { input } => {
            let input: ColumnInput = read_json(&input)?;
            let result = column::calculate(&input)?;
            emit(&result, cli.narrate.then(|| NarrativeSubject::Column(result.clone())), language)?;
        }
        Commands::Footing { input } => {
            let input: FootingInput = read_json(&input)?;
            let result = footing::calculate(&input)?;
            emit(&result, cli.narrate.then(|| NarrativeSubject::Footing(result.clone())), language)?;
        }
        Commands::Structure { input, bill } => {
            let input: StructureInput = read_json(&input)?;
            let result = size_structure(&input, &settings)?;
            let subject = cli.narrate.then(|| NarrativeSubject::Structure(Box::new(result.clone())));
            if bill {
                let mut budget = Budget::new();
                budget.extend(result.bill_of_materials(), &settings.pricing)?;
                let priced = serde_json::json!({ "structure": result, "budget": budget, "total": budget.total() });
                emit(&priced, subject, language)?;
            } else {
                emit(&result, subject, language)?;
            }
        }
        Commands::Budget { input, customer, pdf } => {
            let items: Vec<PricingInput> = read_json(&input)?;
            let mut budget = Budget::new();
            budget.extend(items, &settings.pricing)?;

            if let Some(path) = pdf {
                let bytes = render_budget_pdf(&budget, &customer)?;
                fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
                tracing::info!(path = %path.display(), "budget PDF written");
            }
            print_json(&serde_json::json!({
                "items": budget.items(),
                "total": budget.total(),
                "total_weight_kg": budget.total_weight_kg(),
            }))?;
        }
        Commands::Catalog { series } => {
            let series: ProfileSeries = series.parse()?;
            for profile in series.catalog().iter() {
                println!("{}", profile);
            }
        }
        Commands::Deck { mode } => {
            let mode = match mode.to_lowercase().as_str() {
                "single" => SpanMode::Single,
                "double" => SpanMode::Double,
                other => anyhow::bail!("unknown span mode '{}', expected single or double", other),
            };
            let header: Vec<String> = LOAD_CLASSES_KGF_M2.iter().map(|c| format!("{:>6.0}", c)).collect();
            println!("{:<12} {:>6} {}", "deck", "kg/m²", header.join(" "));
            for deck in SteelDeckTable::standard().records() {
                let spans: Vec<String> = LOAD_CLASSES_KGF_M2
                    .iter()
                    .map(|&c| deck.max_span(mode, c).map_or_else(|| format!("{:>6}", "-"), |s| format!("{:>6.2}", s)))
                    .collect();
                println!("{:<12} {:>6.1} {}", deck.name, deck.self_weight_kg_m2, spans.join(" "));
            }
        }
    }

    Ok(())
}

fn parse_language(code: &str) -> Result<Language> {
    match code {
        "en" => Ok(Language::English),
        "pt-BR" | "pt" => Ok(Language::Portuguese),
        other => anyhow::bail!("unknown language '{}', expected en or pt-BR", other),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("reading stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a result, with its explanation when one was asked for.
fn emit<T: Serialize>(result: &T, subject: Option<NarrativeSubject>, language: Language) -> Result<()> {
    print_json(&with_narrative(result, subject, language)?)
}

fn with_narrative<T: Serialize>(
    result: &T,
    subject: Option<NarrativeSubject>,
    language: Language,
) -> Result<serde_json::Value> {
    let Some(subject) = subject else {
        return Ok(serde_json::to_value(result)?);
    };

    let request = NarrativeRequest {
        language,
        ..NarrativeRequest::new(subject)
    };
    let narrated = narrate(&TemplateNarrator, &request);
    Ok(serde_json::json!({
        "result": result,
        "narrative": narrated.narrative,
        "warning": narrated.warning,
    }))
}
