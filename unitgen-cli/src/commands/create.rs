use colored::Colorize;
use std::path::Path;

use super::detect::{detect_framework, Detection, DetectionReason};
use super::emit::{emit_unit, EmitOutcome};
use super::routes::{register_route, RouteOutcome};
use super::templates::Framework;
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::unit::{Unit, UnitKind};

/// What a full run did, step by step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReport {
    pub unit: Unit,
    pub detection: Detection,
    pub emitted: EmitOutcome,
    /// `None` for components, and for pages whose file was skipped.
    pub route: Option<RouteOutcome>,
}

/// Scaffold `name` in the current directory — `create-component <name>`.
pub fn run(
    name: &str,
    kind: UnitKind,
    framework: Option<Framework>,
) -> Result<(), ScaffoldError> {
    let root = std::env::current_dir().map_err(ScaffoldError::io("."))?;
    let config = ScaffoldConfig::load(&root)?;
    let report = create_unit(&root, &config, name, kind, framework)?;
    print_report(&report);
    Ok(())
}

/// Run the pipeline under `root`: normalize, detect, emit, and for pages
/// register the route.
///
/// Skips and missing collaborators are recorded in the report; only I/O
/// failures while writing are errors.
pub fn create_unit(
    root: &Path,
    config: &ScaffoldConfig,
    name: &str,
    kind: UnitKind,
    framework: Option<Framework>,
) -> Result<CreateReport, ScaffoldError> {
    let unit = Unit::new(name, kind);
    tracing::debug!(raw = unit.raw_name(), name = unit.pascal_name(), %kind, "normalized unit name");

    let detection = detect_framework(root, framework, config.default_framework);
    tracing::debug!(framework = %detection.framework, reason = ?detection.reason, "framework selected");
    let dialect = detection.framework.dialect();

    let emitted = emit_unit(root, config, &unit, dialect)?;

    let route = match (&emitted, kind) {
        (EmitOutcome::Created { .. }, UnitKind::Page) => {
            Some(register_route(root, config, &unit, dialect)?)
        }
        _ => None,
    };

    Ok(CreateReport {
        unit,
        detection,
        emitted,
        route,
    })
}

fn print_report(report: &CreateReport) {
    if let DetectionReason::Unreadable(reason) = &report.detection.reason {
        println!(
            "{} Could not parse package.json ({}), using the {} template",
            "!".yellow(),
            reason,
            report.detection.framework.to_string().cyan()
        );
    }

    match &report.emitted {
        EmitOutcome::Skipped { path } => {
            println!(
                "{} File already exists, skipped: {}",
                "!".yellow(),
                path.display().to_string().cyan()
            );
        }
        EmitOutcome::Created { path } => {
            println!(
                "{} Created {} {}: {}",
                "✓".green(),
                report.detection.framework.to_string().to_uppercase(),
                report.unit.kind(),
                path.display().to_string().cyan()
            );
        }
    }

    let route_path = report.unit.route_path();
    match &report.route {
        None => {}
        Some(RouteOutcome::Registered { path }) => {
            println!(
                "{} Registered route {} in {}",
                "✓".green(),
                route_path.cyan(),
                path.display()
            );
        }
        Some(RouteOutcome::AlreadyRegistered { path }) => {
            println!(
                "{} Route {} already registered in {}, skipped",
                "!".yellow(),
                route_path.cyan(),
                path.display()
            );
        }
        Some(RouteOutcome::MissingRouteFile { path }) => {
            println!(
                "{} Route file {} not found, add {} manually",
                "!".yellow(),
                path.display(),
                route_path.cyan()
            );
        }
        Some(RouteOutcome::NoRouteArray { path }) => {
            println!(
                "{} No route array found in {}, add {} manually",
                "!".yellow(),
                path.display(),
                route_path.cyan()
            );
        }
    }
}
