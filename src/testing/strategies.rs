//! Proptest strategies for answer sets.
//!
//! Fields are filled in a few layers so that every field of `AnswerSet` the
//! section table reads gets generated.

use proptest::prelude::*;

use crate::domain::answers::{AnswerSet, OTHER_KEY, StackMode};

/// Short free text, biased toward the blank and reserved values.
pub fn text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just(OTHER_KEY.to_string()), "[ a-zA-Z#\\-\n]{0,12}"]
}

/// Multi-select values mixing catalog keys with arbitrary text.
pub fn picks() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![Just("A".to_string()), Just("C".to_string()), Just("Cart".to_string()), text()],
        0..4,
    )
}

prop_compose! {
    fn base_answers()(
        system_type in prop_oneof![Just("e-commerce".to_string()), Just("saas".to_string()), text()],
        system_type_custom in text(),
        objective in text(),
        specific_features in picks(),
        colors in picks(),
        colors_custom in text(),
        security_requirements in picks(),
        security_custom in text(),
        restrictions in picks(),
        restrictions_custom in text(),
    ) -> AnswerSet {
        AnswerSet {
            system_type,
            system_type_custom,
            objective,
            specific_features,
            colors,
            colors_custom,
            security_requirements,
            security_custom,
            restrictions,
            restrictions_custom,
            ..AnswerSet::default()
        }
    }
}

prop_compose! {
    fn with_features_and_design()(
        base in base_answers(),
        general_features in picks(),
        general_features_custom in text(),
        specific_features_custom in text(),
        visual_style in text(),
        visual_style_custom in text(),
        menu_type in text(),
        menu_type_custom in text(),
        auth_type in text(),
        auth_type_custom in text(),
    ) -> AnswerSet {
        AnswerSet {
            general_features,
            general_features_custom,
            specific_features_custom,
            visual_style,
            visual_style_custom,
            menu_type,
            menu_type_custom,
            auth_type,
            auth_type_custom,
            ..base
        }
    }
}

prop_compose! {
    fn with_landing_and_dashboard()(
        base in with_features_and_design(),
        has_landing_page in any::<bool>(),
        landing_structure in picks(),
        landing_structure_custom in text(),
        landing_elements in picks(),
        landing_elements_custom in text(),
        landing_style in text(),
        landing_style_custom in text(),
        has_dashboard in any::<bool>(),
        dashboard_features in picks(),
        dashboard_features_custom in text(),
    ) -> AnswerSet {
        AnswerSet {
            has_landing_page,
            landing_structure,
            landing_structure_custom,
            landing_elements,
            landing_elements_custom,
            landing_style,
            landing_style_custom,
            has_dashboard,
            dashboard_features,
            dashboard_features_custom,
            ..base
        }
    }
}

prop_compose! {
    fn with_stack()(
        base in with_landing_and_dashboard(),
        fullstack_mode in any::<bool>(),
        frontend in text(),
        frontend_custom in text(),
        backend in text(),
        backend_custom in text(),
        fullstack in text(),
        fullstack_custom in text(),
        database in text(),
        database_custom in text(),
    ) -> AnswerSet {
        AnswerSet {
            stack_mode: if fullstack_mode { StackMode::Fullstack } else { StackMode::Separate },
            frontend,
            frontend_custom,
            backend,
            backend_custom,
            fullstack,
            fullstack_custom,
            database,
            database_custom,
            ..base
        }
    }
}

prop_compose! {
    pub fn answer_set()(
        base in with_stack(),
        orm in text(),
        orm_custom in text(),
        deploy in text(),
        deploy_custom in text(),
        folder_organization in text(),
        folder_organization_custom in text(),
        architecture_pattern in text(),
        architecture_pattern_custom in text(),
        best_practices in picks(),
        best_practices_custom in text(),
    ) -> AnswerSet {
        AnswerSet {
            orm,
            orm_custom,
            deploy,
            deploy_custom,
            folder_organization,
            folder_organization_custom,
            architecture_pattern,
            architecture_pattern_custom,
            best_practices,
            best_practices_custom,
            ..base
        }
    }
}
