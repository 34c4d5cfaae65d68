use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use avia_frailty::report::{banner, render_cohort_line, render_report};
use avia_frailty::{
    demo_cohort, load_model, predict_frailty, FrailtyError, FrailtyModel, LogisticPipeline,
    NamedPatient, RiskAssessment, DEFAULT_MODEL_PATH,
};
use clap::Parser;
use log::{info, warn, LevelFilter};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "avia",
    version,
    about = "Frailty risk demo for older adults",
    long_about = "avia loads a pre-trained frailty model and scores example patient records.\n\n\
        Each probability is reported as a low (robust), medium (pre-frail) or\n\
        high (frail) risk band.\n\n\
        EXAMPLES:\n\
        \n  avia                                   Score the built-in demo patients\n\
        \n  avia --model models/frailty.json       Use a model at another path\n\
        \n  avia --patients cohort.json --json     Score your own patients, JSON output"
)]
struct Cli {
    /// Serialized frailty model
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// JSON array of {"name", "record"} patients (defaults to the built-in demo cohort)
    #[arg(short, long, value_name = "FILE")]
    patients: Option<PathBuf>,

    /// Print one JSON object per patient instead of the text report
    #[arg(long)]
    json: bool,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    name: &'a str,
    model: &'a str,
    #[serde(flatten)]
    assessment: RiskAssessment,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let rc = run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock());
    std::process::exit(rc);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write, err_out: &mut impl Write) -> i32 {
    match execute(cli, out) {
        Ok(()) => 0,
        Err(err) => {
            if let Err(e) = report_error(err_out, &*err, &cli.model) {
                warn!("failed to write error report: {e}");
            }
            1
        }
    }
}

fn report_error(
    out: &mut impl Write,
    err: &(dyn Error + 'static),
    model_path: &Path,
) -> io::Result<()> {
    writeln!(out, "error: {err}")?;
    let mut cause = err.source();
    while let Some(e) = cause {
        writeln!(out, "  caused by: {e}")?;
        cause = e.source();
    }
    let missing = err
        .downcast_ref::<FrailtyError>()
        .is_some_and(FrailtyError::is_missing_artifact);
    if missing {
        writeln!(
            out,
            "hint: make sure the model file exists at {} or pass --model <FILE>",
            model_path.display()
        )?;
    }
    Ok(())
}

fn execute(cli: &Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    if !cli.json {
        writeln!(out, "{}", banner("AVIA MODEL - FRAILTY PREDICTION\nModel usage example"))?;
        writeln!(out, "Loading model from: {}", cli.model.display())?;
    }
    let model = load_model(&cli.model)?;
    info!("model '{}' ready", model.name());

    let patients = match &cli.patients {
        Some(path) => load_patients(path)?,
        None => demo_cohort(),
    };
    if patients.is_empty() {
        warn!("no patients to score");
        return Ok(());
    }

    if cli.json {
        print_json(out, &model, &patients)
    } else {
        writeln!(out, "Model loaded successfully")?;
        print_text(out, &model, &patients)
    }
}

fn print_text(
    out: &mut impl Write,
    model: &LogisticPipeline,
    patients: &[NamedPatient],
) -> Result<(), Box<dyn Error>> {
    let first = &patients[0];
    writeln!(out, "\nScoring {}...", first.name)?;
    let assessment = predict_frailty(model, &first.record)?;
    writeln!(out, "\n{}", render_report(&assessment, &first.record))?;

    writeln!(out, "\n{}", banner("MULTI-PATIENT EXAMPLE"))?;
    for patient in patients {
        let assessment = predict_frailty(model, &patient.record)?;
        writeln!(out, "\n{}", render_cohort_line(&patient.name, &assessment))?;
    }
    Ok(())
}

fn print_json(
    out: &mut impl Write,
    model: &LogisticPipeline,
    patients: &[NamedPatient],
) -> Result<(), Box<dyn Error>> {
    for patient in patients {
        let line = JsonLine {
            name: &patient.name,
            model: model.name(),
            assessment: predict_frailty(model, &patient.record)?,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}

fn load_patients(path: &Path) -> Result<Vec<NamedPatient>, FrailtyError> {
    let s = fs::read_to_string(path).map_err(|source| FrailtyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let patients: Vec<NamedPatient> =
        serde_json::from_str(&s).map_err(|source| FrailtyError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!("loaded {} patients from {}", patients.len(), path.display());
    Ok(patients)
}
