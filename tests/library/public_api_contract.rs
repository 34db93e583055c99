use crate::harness::answers::{ECOMMERCE_DOCUMENT, ECOMMERCE_TOML};
use devprompt::app::api;
use devprompt::{AnswerSet, AppConfig, AppError, OTHER_KEY, Step, compose, step_completion};
use tempfile::TempDir;

#[test]
fn compose_with_embedded_catalog() {
    let catalog = api::catalog(&AppConfig::default()).expect("embedded catalog");
    let answers: AnswerSet = toml::from_str(ECOMMERCE_TOML).unwrap();

    assert_eq!(compose(&answers, &catalog), ECOMMERCE_DOCUMENT);
    assert_eq!(compose(&AnswerSet::default(), &catalog), "");
}

#[test]
fn completion_tracks_the_same_sections() {
    let catalog = api::catalog(&AppConfig::default()).unwrap();
    let answers = AnswerSet {
        system_type: OTHER_KEY.into(),
        system_type_custom: "Kiosk".into(),
        ..AnswerSet::default()
    };

    let completion = step_completion(&answers, &catalog);
    assert!(completion.is_complete(Step::SystemType));
    assert!(!completion.is_complete(Step::Objective));
    assert!(compose(&answers, &catalog).starts_with("# Sistema Kiosk\n\n"));
}

#[test]
fn history_lifecycle_through_api() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[identity]\nid = \"lib-user\"\n\n[history]\ndir = \"{}\"\n",
            temp.path().join("history").display()
        ),
    )
    .unwrap();
    let config = api::load_config(Some(&config_path)).unwrap();

    let answers: AnswerSet = toml::from_str(ECOMMERCE_TOML).unwrap();
    let outcome = api::compose(&config, &answers).unwrap();
    let saved = api::history_save(&config, &outcome.document).unwrap();
    assert_eq!(saved.derived_label, "Sistema e-commerce");

    let listed = api::history_list(&config).unwrap();
    assert_eq!(listed, vec![saved.clone()]);
    assert_eq!(api::history_show(&config, &saved.id).unwrap().generated_text, ECOMMERCE_DOCUMENT);

    api::history_delete(&config, &saved.id).unwrap();
    assert!(matches!(
        api::history_show(&config, &saved.id),
        Err(AppError::HistoryEntryNotFound(_))
    ));
}

#[test]
fn answers_round_trip_through_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("answers.yaml");
    let answers: AnswerSet = toml::from_str(ECOMMERCE_TOML).unwrap();

    api::save_answers(&path, &answers).unwrap();
    assert_eq!(api::load_answers(path.to_str().unwrap()).unwrap(), answers);
}
