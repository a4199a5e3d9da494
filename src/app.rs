//! Command-line front end.
//!
//! Restores the last session's inputs, applies any overrides given on the
//! command line, prints the results and stores the inputs for next time.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use rustbmi::metrics::{Gender, MetricId, Units};
use rustbmi::storage::config::{self, AppSettings, Mode};
use rustbmi::ui::{InputField, InputForm, ResultsPanel};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Average,
    Female,
    Male,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Average => Gender::Average,
            GenderArg::Female => Gender::Female,
            GenderArg::Male => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Basic,
    Advanced,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Basic => Mode::Basic,
            ModeArg::Advanced => Mode::Advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Bmi,
    Whtr,
    Whr,
    Bri,
}

impl From<MetricArg> for MetricId {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Bmi => MetricId::Bmi,
            MetricArg::Whtr => MetricId::Whtr,
            MetricArg::Whr => MetricId::Whr,
            MetricArg::Bri => MetricId::Bri,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rustbmi")]
#[command(about = "Body Mass Index, waist ratios and Body Roundness Index", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Height, in centimetres or inches
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight, in kilograms or pounds
    #[arg(long)]
    pub weight: Option<f64>,

    /// Waist circumference, in centimetres or inches
    #[arg(long)]
    pub waist: Option<f64>,

    /// Hip circumference, in centimetres or inches
    #[arg(long)]
    pub hip: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<f64>,

    /// Gender used for waist-to-hip thresholds
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Unit system for inputs (remembered)
    #[arg(short, long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Result mode (remembered)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Forget input values after this run
    #[arg(long, conflicts_with = "remember")]
    pub forget: bool,

    /// Remember input values after this run
    #[arg(long)]
    pub remember: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print only the rendered value of one metric
    #[arg(long, value_enum)]
    pub copy: Option<MetricArg>,

    /// Colour feedback labels by severity
    #[arg(long)]
    pub color: bool,

    /// Settings file (defaults to the platform data directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not write settings back
    #[arg(long)]
    pub no_save: bool,
}

/// JSON report.
#[derive(Debug, Serialize)]
struct Report<'a> {
    units: Units,
    form: &'a InputForm,
    results: &'a ResultsPanel,
}

/// Run one calculation session.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(config::get_config_path);

    let mut settings = match config::load_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
            AppSettings::default()
        }
    };

    if cli.forget {
        settings.forget = true;
    } else if cli.remember {
        settings.forget = false;
    }
    if let Some(mode) = cli.mode {
        settings.mode = mode.into();
    }

    let mut form = InputForm::from_settings(&settings);
    apply_overrides(&mut form, &cli);

    let measurements = form.measurements();
    tracing::debug!(?measurements, mode = %form.mode, "Recomputing results");

    let panel = ResultsPanel::build(&measurements, form.mode)
        .context("Failed to calculate body metrics")?;

    if let Some(metric) = cli.copy {
        let metric = MetricId::from(metric);
        match panel.copy_text(metric) {
            Some(value) => println!("{value}"),
            None => bail!("{} is not shown in {} mode", metric.title(), form.mode),
        }
    } else {
        match cli.format {
            OutputFormat::Text => println!("{}", render_text(&form, &panel, cli.color)),
            OutputFormat::Json => {
                let report = Report {
                    units: form.units(),
                    form: &form,
                    results: &panel,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }

    if !cli.no_save {
        form.store(&mut settings);
        settings.prepare_for_exit();
        config::save_settings(&path, &settings)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
    }

    Ok(())
}

/// Apply command-line values on top of the restored form.
fn apply_overrides(form: &mut InputForm, cli: &Cli) {
    if let Some(units) = cli.units {
        form.set_units(units.into());
    }
    if let Some(gender) = cli.gender {
        form.gender = gender.into();
    }

    let overrides = [
        (InputField::Height, cli.height),
        (InputField::Weight, cli.weight),
        (InputField::Waist, cli.waist),
        (InputField::Hip, cli.hip),
        (InputField::Age, cli.age),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            form.set(field, value);
            let (lower, upper) = form.row(field).limits();
            if !(lower..=upper).contains(&value) {
                tracing::warn!(?field, value, lower, upper, "Input clamped to limits");
            }
        }
    }
}

fn render_text(form: &InputForm, panel: &ResultsPanel, color: bool) -> String {
    let mut lines: Vec<String> = form
        .visible_fields()
        .into_iter()
        .map(|field| {
            format!(
                "{}: {} {}",
                form.title(field),
                form.row(field).display_value(),
                form.subtitle(field)
            )
        })
        .collect();

    if form.mode == Mode::Advanced {
        lines.push(format!("Gender: {}", form.gender));
    }

    lines.push(String::new());
    lines.push(panel.to_text(color));
    lines.join("\n")
}
