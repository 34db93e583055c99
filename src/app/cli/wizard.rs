//! Interactive questionnaire.
//!
//! Each step replaces the answer snapshot; progress is recomputed from the new
//! snapshot and printed after the step. Esc keeps the current answer, Ctrl-C
//! leaves the wizard.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect, Select};

use crate::app::api;
use crate::domain::answers::resolve_choice;
use crate::domain::{
    AnswerSet, AppConfig, AppError, Catalog, Labels, OTHER_KEY, StackMode, Step, StepCompletion,
    compose, step_completion,
};

const SKIP_OPTION: &str = "[skip]";
const OTHER_LABEL: &str = "Other (describe)";
const DEFAULT_ANSWERS_FILE: &str = "answers.json";

enum Flow {
    Cancelled,
    Failed(AppError),
}

impl From<AppError> for Flow {
    fn from(err: AppError) -> Self {
        Flow::Failed(err)
    }
}

type Ask<T> = Result<T, Flow>;

fn dialog_error(err: DialoguerError, what: &str) -> Flow {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => Flow::Cancelled,
        other => Flow::Failed(AppError::PromptError(format!("Failed to read {}: {}", what, other))),
    }
}

pub fn run_wizard(config: &AppConfig, preload: Option<&Path>) -> Result<(), AppError> {
    let catalog = api::catalog(config)?;
    let answers = match preload {
        Some(path) => api::load_answers(&path.to_string_lossy())?,
        None => AnswerSet::default(),
    };

    match ask_all(&catalog, answers) {
        Ok(answers) => end_menu(config, &catalog, &answers),
        Err(Flow::Cancelled) => {
            eprintln!("Wizard cancelled");
            Ok(())
        }
        Err(Flow::Failed(err)) => Err(err),
    }
}

fn ask_all(catalog: &Catalog, mut answers: AnswerSet) -> Ask<AnswerSet> {
    eprintln!("{}", progress_line(&step_completion(&answers, catalog)));
    for step in Step::ALL {
        answers = ask_step(step, &answers, catalog)?;
        eprintln!("{}", progress_line(&step_completion(&answers, catalog)));
    }
    Ok(answers)
}

fn progress_line(completion: &StepCompletion) -> String {
    let bar: String = completion.iter().map(|(_, done)| if done { '■' } else { '□' }).collect();
    format!(
        "Progress {} {}/{} ({}%)",
        bar,
        completion.completed_count(),
        completion.total(),
        completion.percent()
    )
}

fn ask_step(step: Step, current: &AnswerSet, catalog: &Catalog) -> Ask<AnswerSet> {
    let labels = &catalog.labels;
    let mut next = current.clone();

    match step {
        Step::SystemType => {
            (next.system_type, next.system_type_custom) = ask_choice(
                "System type",
                &catalog.system_types,
                &current.system_type,
                &current.system_type_custom,
            )?;
        }
        Step::Objective => {
            next.objective = ask_text(&labels.objective, &current.objective)?;
        }
        Step::Features => {
            (next.general_features, next.general_features_custom) = ask_multi(
                &labels.general,
                &catalog.general_features,
                &current.general_features,
                &current.general_features_custom,
            )?;
            let specific = next
                .resolved_system_type()
                .map(|system_type| catalog.specific_features_for(system_type))
                .unwrap_or_default();
            (next.specific_features, next.specific_features_custom) = ask_multi(
                &labels.specific,
                specific,
                &current.specific_features,
                &current.specific_features_custom,
            )?;
        }
        Step::Design => {
            (next.colors, next.colors_custom) =
                ask_multi(&labels.colors, &catalog.colors, &current.colors, &current.colors_custom)?;
            (next.visual_style, next.visual_style_custom) = ask_choice(
                &labels.visual_style,
                &catalog.visual_styles,
                &current.visual_style,
                &current.visual_style_custom,
            )?;
            (next.menu_type, next.menu_type_custom) = ask_choice(
                &labels.menu_type,
                &catalog.menu_types,
                &current.menu_type,
                &current.menu_type_custom,
            )?;
            (next.auth_type, next.auth_type_custom) = ask_choice(
                &labels.authentication,
                &catalog.auth_types,
                &current.auth_type,
                &current.auth_type_custom,
            )?;
        }
        Step::LandingPage => {
            next.has_landing_page = ask_confirm(
                &format!("Include a {}?", labels.landing_page),
                current.has_landing_page,
            )?;
            if next.has_landing_page {
                (next.landing_structure, next.landing_structure_custom) = ask_multi(
                    &labels.structure,
                    &catalog.landing_structure,
                    &current.landing_structure,
                    &current.landing_structure_custom,
                )?;
                (next.landing_elements, next.landing_elements_custom) = ask_multi(
                    &labels.elements,
                    &catalog.landing_elements,
                    &current.landing_elements,
                    &current.landing_elements_custom,
                )?;
                (next.landing_style, next.landing_style_custom) = ask_choice(
                    &labels.style,
                    &catalog.landing_styles,
                    &current.landing_style,
                    &current.landing_style_custom,
                )?;
            }
        }
        Step::Dashboard => {
            next.has_dashboard =
                ask_confirm(&format!("Include a {}?", labels.dashboard), current.has_dashboard)?;
            if next.has_dashboard {
                (next.dashboard_features, next.dashboard_features_custom) = ask_multi(
                    &labels.dashboard,
                    &catalog.dashboard_features,
                    &current.dashboard_features,
                    &current.dashboard_features_custom,
                )?;
            }
        }
        Step::TechStack => {
            next.stack_mode = ask_stack_mode(current.stack_mode, labels)?;
            match next.stack_mode {
                StackMode::Separate => {
                    (next.frontend, next.frontend_custom) = ask_choice(
                        &labels.frontend,
                        &catalog.frontend,
                        &current.frontend,
                        &current.frontend_custom,
                    )?;
                    (next.backend, next.backend_custom) = ask_choice(
                        &labels.backend,
                        &catalog.backend,
                        &current.backend,
                        &current.backend_custom,
                    )?;
                }
                StackMode::Fullstack => {
                    (next.fullstack, next.fullstack_custom) = ask_choice(
                        &labels.fullstack,
                        &catalog.fullstack,
                        &current.fullstack,
                        &current.fullstack_custom,
                    )?;
                }
            }
            (next.database, next.database_custom) = ask_choice(
                &labels.database,
                &catalog.databases,
                &current.database,
                &current.database_custom,
            )?;
            (next.orm, next.orm_custom) =
                ask_choice(&labels.orm, &catalog.orms, &current.orm, &current.orm_custom)?;
            (next.deploy, next.deploy_custom) =
                ask_choice(&labels.deploy, &catalog.deploy, &current.deploy, &current.deploy_custom)?;
        }
        Step::Security => {
            (next.security_requirements, next.security_custom) = ask_multi(
                &labels.security,
                &catalog.security_requirements,
                &current.security_requirements,
                &current.security_custom,
            )?;
        }
        Step::CodeStructure => {
            (next.folder_organization, next.folder_organization_custom) = ask_choice(
                &labels.folder_organization,
                &catalog.folder_organizations,
                &current.folder_organization,
                &current.folder_organization_custom,
            )?;
            (next.architecture_pattern, next.architecture_pattern_custom) = ask_choice(
                &labels.architecture_pattern,
                &catalog.architecture_patterns,
                &current.architecture_pattern,
                &current.architecture_pattern_custom,
            )?;
            (next.best_practices, next.best_practices_custom) = ask_multi(
                &labels.best_practices,
                &catalog.best_practices,
                &current.best_practices,
                &current.best_practices_custom,
            )?;
        }
        Step::Restrictions => {
            (next.restrictions, next.restrictions_custom) = ask_multi(
                &labels.restrictions,
                &catalog.restrictions,
                &current.restrictions,
                &current.restrictions_custom,
            )?;
        }
    }

    Ok(next)
}

fn display_option(option: &str) -> &str {
    if option == OTHER_KEY { OTHER_LABEL } else { option }
}

/// Single choice from `options`, with the free-text companion for "other".
/// An empty option list falls back to free text.
fn ask_choice(
    prompt: &str,
    options: &[String],
    current: &str,
    current_custom: &str,
) -> Ask<(String, String)> {
    if options.is_empty() {
        let initial = resolve_choice(current, current_custom).unwrap_or("");
        return Ok((ask_text(prompt, initial)?, String::new()));
    }

    let mut items: Vec<&str> = options.iter().map(|option| display_option(option)).collect();
    items.push(SKIP_OPTION);
    let default = options.iter().position(|option| option == current).unwrap_or(options.len());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| dialog_error(err, prompt))?;

    let Some(index) = selection else {
        return Ok((current.to_string(), current_custom.to_string()));
    };
    if index == options.len() {
        return Ok((String::new(), current_custom.to_string()));
    }

    let value = options[index].clone();
    let custom = if value == OTHER_KEY {
        ask_text(&format!("{}: describe", prompt), current_custom)?
    } else {
        current_custom.to_string()
    };
    Ok((value, custom))
}

/// Multiple choice plus an optional free-text addition. Stored values that
/// are not in `options` are kept.
fn ask_multi(
    prompt: &str,
    options: &[String],
    current: &[String],
    current_custom: &str,
) -> Ask<(Vec<String>, String)> {
    let mut selected = current.to_vec();

    if !options.is_empty() {
        let defaults: Vec<bool> = options.iter().map(|option| current.contains(option)).collect();
        let picked = MultiSelect::new()
            .with_prompt(format!("{} (space to toggle)", prompt))
            .items(options)
            .defaults(&defaults)
            .interact_opt()
            .map_err(|err| dialog_error(err, prompt))?;

        if let Some(indices) = picked {
            selected = current.iter().filter(|value| !options.contains(value)).cloned().collect();
            selected.extend(indices.into_iter().map(|index| options[index].clone()));
        }
    }

    let custom = ask_text(&format!("{}: other (optional)", prompt), current_custom)?;
    Ok((selected, custom))
}

fn ask_text(prompt: &str, current: &str) -> Ask<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .with_initial_text(current)
        .interact_text()
        .map_err(|err| dialog_error(err, prompt))
}

fn ask_confirm(prompt: &str, current: bool) -> Ask<bool> {
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(current)
        .interact_opt()
        .map_err(|err| dialog_error(err, prompt))?;
    Ok(answer.unwrap_or(current))
}

fn ask_stack_mode(current: StackMode, labels: &Labels) -> Ask<StackMode> {
    let modes = [StackMode::Separate, StackMode::Fullstack];
    let items = [
        format!("{} + {}", labels.frontend, labels.backend),
        labels.fullstack.clone(),
    ];
    let default = modes.iter().position(|mode| *mode == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(labels.tech_stack.as_str())
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| dialog_error(err, "stack mode"))?;
    Ok(selection.map(|index| modes[index]).unwrap_or(current))
}

const MENU_ITEMS: [&str; 5] =
    ["Copy to clipboard", "Save to file", "Enhance with AI", "Save answers", "Quit"];

fn end_menu(config: &AppConfig, catalog: &Catalog, answers: &AnswerSet) -> Result<(), AppError> {
    let mut document = compose(answers, catalog);
    preview(&document);

    loop {
        let selection = match Select::new()
            .with_prompt("What next?")
            .items(&MENU_ITEMS)
            .default(0)
            .interact_opt()
        {
            Ok(selection) => selection,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => return Ok(()),
            Err(err) => {
                return Err(AppError::PromptError(format!("Failed to read menu choice: {}", err)));
            }
        };

        // Boundary failures are reported and the menu is shown again.
        let result = match selection {
            Some(0) => api::copy_to_clipboard(config, &document).map(|outcome| {
                println!("✅ Copied prompt to clipboard");
                if let Some(entry) = outcome.saved {
                    println!("  Saved to history as {}", entry.id);
                }
            }),
            Some(1) => prompt_path("Save prompt to", None).and_then(|target| {
                let path = api::export(&document, target.as_deref())?;
                println!("✅ Saved prompt to {}", path.display());
                Ok(())
            }),
            Some(2) => api::enhance(config, &document, answers.resolved_system_type()).map(
                |outcome| {
                    if let Some(reason) = &outcome.fallback_reason {
                        eprintln!("⚠️  Enhancement unavailable ({}); prompt unchanged", reason);
                    } else {
                        document = outcome.text;
                        preview(&document);
                    }
                },
            ),
            Some(3) => prompt_path("Save answers to", Some(DEFAULT_ANSWERS_FILE)).and_then(
                |target| {
                    let path = target.unwrap_or_else(|| PathBuf::from(DEFAULT_ANSWERS_FILE));
                    api::save_answers(&path, answers)?;
                    println!("✅ Saved answers to {}", path.display());
                    Ok(())
                },
            ),
            _ => return Ok(()),
        };

        if let Err(err) = result {
            eprintln!("Error: {}", err);
        }
    }
}

fn preview(document: &str) {
    if document.is_empty() {
        println!("(nothing to compose yet; answer at least one question)");
    } else {
        println!("\n{}", document);
    }
}

/// Ask for a path; blank input means `None` (use the default location).
fn prompt_path(prompt: &str, initial: Option<&str>) -> Result<Option<PathBuf>, AppError> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .with_initial_text(initial.unwrap_or(""))
        .interact_text()
        .map_err(|err| AppError::PromptError(format!("Failed to read path: {}", err)))?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| PathBuf::from(value)))
}
