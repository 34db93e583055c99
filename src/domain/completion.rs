//! Step completion record for the wizard's progress indicator.
//!
//! Each step maps to one section of the section table. A step is complete
//! exactly when that section would render, so progress and the composed
//! document always agree. Steps behind an unset toggle count as complete.

use std::collections::BTreeMap;

use crate::domain::answers::AnswerSet;
use crate::domain::catalog::Catalog;
use crate::domain::composer::SectionId;
use crate::domain::composer::sections::{find_section, section_table};

/// Wizard steps in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    SystemType,
    Objective,
    Features,
    Design,
    LandingPage,
    Dashboard,
    TechStack,
    Security,
    CodeStructure,
    Restrictions,
}

impl Step {
    pub const ALL: [Step; 10] = [
        Step::SystemType,
        Step::Objective,
        Step::Features,
        Step::Design,
        Step::LandingPage,
        Step::Dashboard,
        Step::TechStack,
        Step::Security,
        Step::CodeStructure,
        Step::Restrictions,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Step::SystemType => "System Type",
            Step::Objective => "Objective",
            Step::Features => "Features",
            Step::Design => "Design",
            Step::LandingPage => "Landing Page",
            Step::Dashboard => "Dashboard",
            Step::TechStack => "Tech Stack",
            Step::Security => "Security",
            Step::CodeStructure => "Code Structure",
            Step::Restrictions => "Restrictions",
        }
    }

    /// Section whose rendering decides this step.
    pub fn section(self) -> SectionId {
        match self {
            Step::SystemType => SectionId::Title,
            Step::Objective => SectionId::Objective,
            Step::Features => SectionId::Functionalities,
            Step::Design => SectionId::Design,
            Step::LandingPage => SectionId::LandingPage,
            Step::Dashboard => SectionId::Dashboard,
            Step::TechStack => SectionId::TechStack,
            Step::Security => SectionId::Security,
            Step::CodeStructure => SectionId::CodeStructure,
            Step::Restrictions => SectionId::Restrictions,
        }
    }
}

/// Derived step → complete mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCompletion {
    steps: BTreeMap<Step, bool>,
}

impl StepCompletion {
    pub fn is_complete(&self, step: Step) -> bool {
        self.steps.get(&step).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.steps.values().filter(|done| **done).count()
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    /// Whole-number percentage of completed steps.
    pub fn percent(&self) -> u8 {
        if self.steps.is_empty() {
            return 0;
        }
        (self.completed_count() * 100 / self.total()) as u8
    }

    /// Steps in wizard order with their state.
    pub fn iter(&self) -> impl Iterator<Item = (Step, bool)> + '_ {
        self.steps.iter().map(|(step, done)| (*step, *done))
    }
}

/// Compute the completion record for an answer set.
pub fn step_completion(answers: &AnswerSet, catalog: &Catalog) -> StepCompletion {
    let table = section_table();
    let steps = Step::ALL
        .into_iter()
        .map(|step| {
            let done = match find_section(&table, step.section()) {
                Some(section) => match section.gate {
                    Some(gate) if !gate(answers) => true,
                    _ => section.build(answers, catalog, 1).is_some(),
                },
                None => false,
            };
            (step, done)
        })
        .collect();
    StepCompletion { steps }
}
