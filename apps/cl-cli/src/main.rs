use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cl_app::{AppError, AppResult, LabView, StepOutcome, lab_service, script};
use cl_core::{Variant, ensure_positive, fixed};
use cl_solver::{Inputs, Reading, model_for};

#[derive(Parser)]
#[command(name = "cl-cli")]
#[command(about = "circuitlab CLI - drag-and-drop circuit labs without the browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a lab definition file
    Validate {
        /// Path to the lab YAML or JSON file
        lab_path: PathBuf,
    },
    /// List the built-in labs
    Presets,
    /// Write a built-in lab as a file
    ExportPreset {
        /// Preset name (ohm, mesh)
        name: String,
        /// Output file (.yaml or .json); defaults to YAML on stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a lab's board as it looks when first opened
    Show {
        /// Preset name or lab file path
        lab: String,
    },
    /// Compute a result directly, as if every slot were filled
    #[command(subcommand)]
    Evaluate(EvaluateCommands),
    /// Replay a scripted session against a lab
    Replay {
        /// Preset name or lab file path
        lab: String,
        /// Path to the session script YAML
        script_path: PathBuf,
        /// Print step reports as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum EvaluateCommands {
    /// Power dissipated by V across R
    Ohm {
        /// Source voltage (V)
        #[arg(long)]
        v: f64,
        /// Resistance (Ω)
        #[arg(long)]
        r: f64,
    },
    /// Shared-branch current of the two-loop network
    Mesh {
        #[arg(long)]
        v1: f64,
        #[arg(long)]
        v2: f64,
        #[arg(long)]
        r1: f64,
        #[arg(long)]
        r2: f64,
        #[arg(long)]
        r3: f64,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { lab_path } => cmd_validate(&lab_path),
        Commands::Presets => cmd_presets(),
        Commands::ExportPreset { name, output } => cmd_export_preset(&name, output.as_deref()),
        Commands::Show { lab } => cmd_show(&lab),
        Commands::Evaluate(eval_cmd) => match eval_cmd {
            EvaluateCommands::Ohm { v, r } => {
                cmd_evaluate(Variant::OhmPower, &[("v", v), ("r", r)])
            }
            EvaluateCommands::Mesh { v1, v2, r1, r2, r3 } => cmd_evaluate(
                Variant::MeshCurrent,
                &[("v1", v1), ("v2", v2), ("r1", r1), ("r2", r2), ("r3", r3)],
            ),
        },
        Commands::Replay {
            lab,
            script_path,
            json,
        } => cmd_replay(&lab, &script_path, json),
    }
}

fn cmd_validate(lab_path: &Path) -> AppResult<()> {
    println!("Validating lab: {}", lab_path.display());
    let lab = lab_service::validate_lab_file(lab_path)?;
    println!(
        "✓ Lab is valid: {} ({}, {} slots, {} parameters)",
        lab.name,
        lab.variant,
        lab.slots.len(),
        lab.parameters.len()
    );
    Ok(())
}

fn cmd_presets() -> AppResult<()> {
    println!("Built-in labs:");
    for preset in lab_service::list_presets() {
        println!(
            "  {} - {} [{}] ({} slots; fill: {}; inputs: {})",
            preset.key,
            preset.name,
            preset.variant,
            preset.slot_count,
            preset.required_slots.join(", "),
            preset.parameters.join(", ")
        );
    }
    Ok(())
}

fn cmd_export_preset(name: &str, output: Option<&Path>) -> AppResult<()> {
    let lab = cl_project::preset(name).ok_or_else(|| AppError::LabNotFound(name.to_string()))?;

    match output {
        None => {
            let yaml = serde_yaml::to_string(&lab)
                .map_err(|e| AppError::Lab(format!("Failed to serialize lab: {}", e)))?;
            print!("{}", yaml);
        }
        Some(path) => {
            let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
            if is_json {
                cl_project::save_json(path, &lab)?;
            } else {
                cl_project::save_yaml(path, &lab)?;
            }
            println!("✓ Wrote {} to {}", lab.name, path.display());
        }
    }
    Ok(())
}

fn cmd_show(lab: &str) -> AppResult<()> {
    let session = lab_service::session_for(lab)?;
    print_view(&session.view());
    Ok(())
}

fn cmd_evaluate(variant: Variant, values: &[(&'static str, f64)]) -> AppResult<()> {
    let mut inputs = Inputs::new();
    for &(id, value) in values {
        let value = ensure_positive(value, id)?;
        inputs.insert(id, value);
    }

    let reading = model_for(variant).solve(&inputs)?;
    let display = fixed(reading.headline(), variant.decimals());

    match reading {
        Reading::Ohm(r) => {
            println!("P = {} W", display);
            println!("I = {} mA", fixed(cl_core::as_milliamps(r.current), 1));
        }
        Reading::Mesh(r) => {
            println!("|I3| = {} A", display);
            println!("  det = {}", fixed(r.determinant, 4));
            println!(
                "  Ia = {} A, Ib = {} A",
                fixed(r.loop_currents[0].value, 4),
                fixed(r.loop_currents[1].value, 4)
            );
        }
    }
    Ok(())
}

fn cmd_replay(lab: &str, script_path: &Path, json: bool) -> AppResult<()> {
    let mut session = lab_service::session_for(lab)?;
    let actions = script::load_script(script_path)?;
    let reports = script::replay(&mut session, &actions)?;
    tracing::info!(steps = reports.len(), lab = session.name(), "replayed session script");

    if json {
        let out = serde_json::to_string_pretty(&reports)
            .map_err(|e| AppError::Script(format!("Failed to serialize reports: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    println!("Replaying {} steps on {}", reports.len(), session.name());
    for report in &reports {
        let outcome = match &report.outcome {
            StepOutcome::Placed => "placed".to_string(),
            StepOutcome::Rejected => "rejected".to_string(),
            StepOutcome::Edited => "edited".to_string(),
            StepOutcome::Computed(display) => format!("result {}", display),
            StepOutcome::NotReady(reason) => format!("not ready ({})", reason),
        };
        println!("  {:>2}. {:?} -> {}", report.index + 1, report.action, outcome);
    }

    if let Some(last) = reports.last() {
        println!();
        print_view(&last.view);
    }
    Ok(())
}

fn print_view(view: &LabView) {
    println!("{} [{}]", view.title, view.variant);
    println!(
        "  Status: {} {}",
        if view.status.ready { "●" } else { "○" },
        view.status.text
    );
    for slot in &view.slots {
        let label = slot
            .label
            .as_deref()
            .filter(|_| slot.label_visible)
            .unwrap_or("");
        println!(
            "  slot {:<10} {:<9} {:<4} {}",
            slot.id, slot.expects, label, slot.status_text
        );
    }
    for param in &view.parameters {
        println!(
            "  {:<12} = {:>8} {:<2} (slider {} in [{}, {}])",
            param.label, param.text, param.unit, param.slider, param.min, param.max
        );
    }
    println!("  Result: {}", view.display);
    if let Some(led) = &view.led {
        println!(
            "  LED: {:?} {}{}",
            led.band,
            led.fill,
            if led.blinking { " (blinking)" } else { "" }
        );
    }
}
