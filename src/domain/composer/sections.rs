//! The section table: which fields feed which heading, in output order.
//!
//! Every section is evaluated by the same routine: build the children, drop
//! the empty ones, and emit the heading only if something survives. Step
//! completion reads the very same table, so a step is complete exactly when
//! its section would render.

use crate::domain::answers::{AnswerSet, StackMode, ordered_selection, resolve_choice};
use crate::domain::catalog::{Catalog, Labels};

use super::fragment::Fragment;

type Label = fn(&Labels) -> &str;
type Gate = fn(&AnswerSet) -> bool;
type TextField = fn(&AnswerSet) -> &str;
type ChoiceField = fn(&AnswerSet) -> (&str, &str);
type MultiField = fn(&AnswerSet) -> (&[String], &str);
type Options = for<'c, 'a> fn(&'c Catalog, &'a AnswerSet) -> &'c [String];

/// Identifies a section or subsection of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Title,
    Objective,
    Functionalities,
    GeneralFeatures,
    SpecificFeatures,
    Design,
    Colors,
    VisualStyle,
    MenuType,
    LandingPage,
    LandingStructure,
    LandingElements,
    LandingStyle,
    Authentication,
    Dashboard,
    TechStack,
    Security,
    CodeStructure,
    FolderOrganization,
    ArchitecturePattern,
    BestPractices,
    Restrictions,
}

/// A heading and the rules that fill it.
pub(crate) struct Section {
    pub(crate) id: SectionId,
    label: Label,
    /// Toggle the whole section depends on.
    pub(crate) gate: Option<Gate>,
    body: Body,
}

enum Body {
    /// `# <prefix> <value>`; the label is the prefix.
    Title(ChoiceField),
    Rules(Vec<Rule>),
}

enum Rule {
    Text(TextField),
    Choice(ChoiceField),
    Multi(MultiField, Options),
    /// Labelled single-selects rendered together as one bullet list.
    Entries(Vec<Entry>),
    Sub(Section),
}

struct Entry {
    label: Label,
    value: ChoiceField,
    gate: Option<Gate>,
}

impl Section {
    fn new(id: SectionId, label: Label, rules: Vec<Rule>) -> Self {
        Self { id, label, gate: None, body: Body::Rules(rules) }
    }

    fn gated(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Build this section at heading `level`; `None` when nothing would render.
    pub(crate) fn build(
        &self,
        answers: &AnswerSet,
        catalog: &Catalog,
        level: usize,
    ) -> Option<Fragment> {
        if let Some(gate) = self.gate
            && !gate(answers)
        {
            return None;
        }

        let label = (self.label)(&catalog.labels);
        match &self.body {
            Body::Title(field) => {
                let (value, custom) = field(answers);
                let value = resolve_choice(value, custom)?;
                let title = match label.trim() {
                    "" => value.to_string(),
                    prefix => format!("{} {}", prefix, value),
                };
                Some(Fragment::Title(title))
            }
            Body::Rules(rules) => {
                let children =
                    rules.iter().filter_map(|rule| rule.build(answers, catalog, level)).collect();
                Fragment::section(level, label, children)
            }
        }
    }

    /// Depth-first lookup of a section by id.
    pub(crate) fn find(&self, id: SectionId) -> Option<&Section> {
        if self.id == id {
            return Some(self);
        }
        match &self.body {
            Body::Title(_) => None,
            Body::Rules(rules) => rules.iter().find_map(|rule| match rule {
                Rule::Sub(section) => section.find(id),
                _ => None,
            }),
        }
    }
}

impl Rule {
    fn build(&self, answers: &AnswerSet, catalog: &Catalog, level: usize) -> Option<Fragment> {
        match self {
            Rule::Text(field) => {
                let text = field(answers).trim();
                if text.is_empty() { None } else { Some(Fragment::Text(text.to_string())) }
            }
            Rule::Choice(field) => {
                let (value, custom) = field(answers);
                resolve_choice(value, custom).map(|text| Fragment::Text(text.to_string()))
            }
            Rule::Multi(field, options) => {
                let (selected, custom) = field(answers);
                Fragment::bullets(ordered_selection(selected, custom, options(catalog, answers)))
            }
            Rule::Entries(entries) => {
                let items = entries
                    .iter()
                    .filter(|entry| entry.gate.is_none_or(|gate| gate(answers)))
                    .filter_map(|entry| {
                        let (value, custom) = (entry.value)(answers);
                        let value = resolve_choice(value, custom)?;
                        Some(format!("{}: {}", (entry.label)(&catalog.labels), value))
                    })
                    .collect();
                Fragment::bullets(items)
            }
            Rule::Sub(section) => section.build(answers, catalog, level + 1),
        }
    }
}

fn entry(label: Label, value: ChoiceField) -> Entry {
    Entry { label, value, gate: None }
}

fn separate_stack(answers: &AnswerSet) -> bool {
    answers.stack_mode == StackMode::Separate
}

fn fullstack(answers: &AnswerSet) -> bool {
    answers.stack_mode == StackMode::Fullstack
}

/// The ordered table of top-level sections.
pub(crate) fn section_table() -> Vec<Section> {
    use SectionId::*;

    vec![
        Section {
            id: Title,
            label: |l| l.title_prefix.as_str(),
            gate: None,
            body: Body::Title(|a| (a.system_type.as_str(), a.system_type_custom.as_str())),
        },
        Section::new(
            Objective,
            |l| l.objective.as_str(),
            vec![Rule::Text(|a| a.objective.as_str())],
        ),
        Section::new(
            Functionalities,
            |l| l.functionalities.as_str(),
            vec![
                Rule::Sub(Section::new(
                    GeneralFeatures,
                    |l| l.general.as_str(),
                    vec![Rule::Multi(
                        |a| (a.general_features.as_slice(), a.general_features_custom.as_str()),
                        |c, _| c.general_features.as_slice(),
                    )],
                )),
                Rule::Sub(Section::new(
                    SpecificFeatures,
                    |l| l.specific.as_str(),
                    vec![Rule::Multi(
                        |a| (a.specific_features.as_slice(), a.specific_features_custom.as_str()),
                        |c, a| match a.resolved_system_type() {
                            Some(system_type) => c.specific_features_for(system_type),
                            None => &[],
                        },
                    )],
                )),
            ],
        ),
        Section::new(
            Design,
            |l| l.design.as_str(),
            vec![
                Rule::Sub(Section::new(
                    Colors,
                    |l| l.colors.as_str(),
                    vec![Rule::Multi(
                        |a| (a.colors.as_slice(), a.colors_custom.as_str()),
                        |c, _| c.colors.as_slice(),
                    )],
                )),
                Rule::Sub(Section::new(
                    VisualStyle,
                    |l| l.visual_style.as_str(),
                    vec![Rule::Choice(|a| (a.visual_style.as_str(), a.visual_style_custom.as_str()))],
                )),
                Rule::Sub(Section::new(
                    MenuType,
                    |l| l.menu_type.as_str(),
                    vec![Rule::Choice(|a| (a.menu_type.as_str(), a.menu_type_custom.as_str()))],
                )),
                Rule::Sub(
                    Section::new(
                        LandingPage,
                        |l| l.landing_page.as_str(),
                        vec![
                            Rule::Sub(Section::new(
                                LandingStructure,
                                |l| l.structure.as_str(),
                                vec![Rule::Multi(
                                    |a| {
                                        (
                                            a.landing_structure.as_slice(),
                                            a.landing_structure_custom.as_str(),
                                        )
                                    },
                                    |c, _| c.landing_structure.as_slice(),
                                )],
                            )),
                            Rule::Sub(Section::new(
                                LandingElements,
                                |l| l.elements.as_str(),
                                vec![Rule::Multi(
                                    |a| {
                                        (
                                            a.landing_elements.as_slice(),
                                            a.landing_elements_custom.as_str(),
                                        )
                                    },
                                    |c, _| c.landing_elements.as_slice(),
                                )],
                            )),
                            Rule::Sub(Section::new(
                                LandingStyle,
                                |l| l.style.as_str(),
                                vec![Rule::Choice(|a| {
                                    (a.landing_style.as_str(), a.landing_style_custom.as_str())
                                })],
                            )),
                        ],
                    )
                    .gated(|a| a.has_landing_page),
                ),
                Rule::Sub(Section::new(
                    Authentication,
                    |l| l.authentication.as_str(),
                    vec![Rule::Choice(|a| (a.auth_type.as_str(), a.auth_type_custom.as_str()))],
                )),
                Rule::Sub(
                    Section::new(
                        Dashboard,
                        |l| l.dashboard.as_str(),
                        vec![Rule::Multi(
                            |a| {
                                (a.dashboard_features.as_slice(), a.dashboard_features_custom.as_str())
                            },
                            |c, _| c.dashboard_features.as_slice(),
                        )],
                    )
                    .gated(|a| a.has_dashboard),
                ),
            ],
        ),
        Section::new(
            TechStack,
            |l| l.tech_stack.as_str(),
            vec![Rule::Entries(vec![
                Entry {
                    gate: Some(separate_stack as Gate),
                    ..entry(
                        |l| l.frontend.as_str(),
                        |a| (a.frontend.as_str(), a.frontend_custom.as_str()),
                    )
                },
                Entry {
                    gate: Some(separate_stack as Gate),
                    ..entry(
                        |l| l.backend.as_str(),
                        |a| (a.backend.as_str(), a.backend_custom.as_str()),
                    )
                },
                Entry {
                    gate: Some(fullstack as Gate),
                    ..entry(
                        |l| l.fullstack.as_str(),
                        |a| (a.fullstack.as_str(), a.fullstack_custom.as_str()),
                    )
                },
                entry(|l| l.database.as_str(), |a| (a.database.as_str(), a.database_custom.as_str())),
                entry(|l| l.orm.as_str(), |a| (a.orm.as_str(), a.orm_custom.as_str())),
                entry(|l| l.deploy.as_str(), |a| (a.deploy.as_str(), a.deploy_custom.as_str())),
            ])],
        ),
        Section::new(
            Security,
            |l| l.security.as_str(),
            vec![Rule::Multi(
                |a| (a.security_requirements.as_slice(), a.security_custom.as_str()),
                |c, _| c.security_requirements.as_slice(),
            )],
        ),
        Section::new(
            CodeStructure,
            |l| l.code_structure.as_str(),
            vec![
                Rule::Sub(Section::new(
                    FolderOrganization,
                    |l| l.folder_organization.as_str(),
                    vec![Rule::Choice(|a| {
                        (a.folder_organization.as_str(), a.folder_organization_custom.as_str())
                    })],
                )),
                Rule::Sub(Section::new(
                    ArchitecturePattern,
                    |l| l.architecture_pattern.as_str(),
                    vec![Rule::Choice(|a| {
                        (a.architecture_pattern.as_str(), a.architecture_pattern_custom.as_str())
                    })],
                )),
                Rule::Sub(Section::new(
                    BestPractices,
                    |l| l.best_practices.as_str(),
                    vec![Rule::Multi(
                        |a| (a.best_practices.as_slice(), a.best_practices_custom.as_str()),
                        |c, _| c.best_practices.as_slice(),
                    )],
                )),
            ],
        ),
        Section::new(
            Restrictions,
            |l| l.restrictions.as_str(),
            vec![Rule::Multi(
                |a| (a.restrictions.as_slice(), a.restrictions_custom.as_str()),
                |c, _| c.restrictions.as_slice(),
            )],
        ),
    ]
}

/// Locate a section anywhere in the table.
pub(crate) fn find_section(table: &[Section], id: SectionId) -> Option<&Section> {
    table.iter().find_map(|section| section.find(id))
}
