//! Integration tests for the form controller state machine.

use dynaform_core::{FieldDescriptor, FormController, FormRegistry, Severity};

fn user_info_registry() -> FormRegistry {
    FormRegistry::new().with_form(
        "user_info",
        vec![
            FieldDescriptor::text("full_name", "Full Name").required(),
            FieldDescriptor::email("email", "Email").required(),
        ],
    )
}

#[test]
fn select_known_form_type_installs_schema() {
    let mut controller = FormController::new(FormRegistry::builtin());
    controller.select_form_type("address_info");

    let names: Vec<_> = controller
        .active_fields()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    assert_eq!(names, vec!["street", "city", "state", "zip_code", "country"]);
    assert!(controller.values().is_empty());
    assert_eq!(controller.progress(), 0.0);
}

#[test]
fn select_clears_previous_values() {
    let mut controller = FormController::new(FormRegistry::builtin());
    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");

    controller.select_form_type("payment_info");
    assert!(controller.values().is_empty());
    assert_eq!(controller.progress(), 0.0);
}

#[test]
fn select_unknown_form_type_changes_nothing() {
    let mut controller = FormController::new(user_info_registry());
    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");
    let progress_before = controller.progress();

    controller.select_form_type("no_such_form");
    assert_eq!(controller.active_fields().len(), 2);
    assert_eq!(controller.values().get("full_name"), Some("Ann"));
    assert_eq!(controller.progress(), progress_before);
}

#[test]
fn progress_tracks_filled_required_fields() {
    let mut controller = FormController::new(user_info_registry());
    controller.select_form_type("user_info");
    assert_eq!(controller.progress(), 0.0);

    controller.update_field("full_name", "Ann");
    assert_eq!(controller.progress(), 50.0);

    controller.update_field("email", "a@b.com");
    assert_eq!(controller.progress(), 100.0);

    // Overwriting with empty un-fills the field.
    controller.update_field("email", "");
    assert_eq!(controller.progress(), 50.0);
}

#[test]
fn progress_is_zero_without_required_fields() {
    let registry = FormRegistry::new().with_form(
        "feedback",
        vec![
            FieldDescriptor::text("comment", "Comment"),
            FieldDescriptor::choice("rating", "Rating", ["Good", "Bad"]),
        ],
    );
    let mut controller = FormController::new(registry);
    controller.select_form_type("feedback");
    controller.update_field("comment", "nice");
    controller.update_field("rating", "Good");
    assert_eq!(controller.progress(), 0.0);
}

#[test]
fn user_info_happy_path() {
    let mut controller = FormController::new(user_info_registry());

    controller.select_form_type("user_info");
    assert_eq!(controller.progress(), 0.0);

    controller.update_field("full_name", "Ann");
    assert_eq!(controller.progress(), 50.0);

    controller.update_field("email", "a@b.com");
    assert_eq!(controller.progress(), 100.0);

    controller.submit().unwrap();
    assert_eq!(controller.log().len(), 1);
    let record = controller.log().get(0).unwrap();
    assert_eq!(record.get("full_name"), Some("Ann"));
    assert_eq!(record.get("email"), Some("a@b.com"));
    assert_eq!(record.len(), 2);

    assert!(controller.active_fields().is_empty());
    assert!(controller.values().is_empty());
    assert_eq!(controller.progress(), 0.0);
}

#[test]
fn half_filled_submit_is_rejected() {
    let mut controller = FormController::new(user_info_registry());
    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");

    assert!(controller.submit().is_err());
    assert!(controller.log().is_empty());
    assert_eq!(controller.active_fields().len(), 2);
    assert_eq!(controller.values().get("full_name"), Some("Ann"));
}

#[test]
fn rejected_submit_can_be_corrected_and_retried() {
    let mut controller = FormController::new(user_info_registry());
    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");
    assert!(controller.submit().is_err());

    controller.update_field("email", "a@b.com");
    controller.submit().unwrap();
    assert_eq!(controller.log().len(), 1);
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut controller = FormController::new(user_info_registry());
    for name in ["Ann", "Bob", "Cyd"] {
        controller.select_form_type("user_info");
        controller.update_field("full_name", name);
        controller.update_field("email", format!("{}@b.com", name.to_lowercase()));
        controller.submit().unwrap();
    }

    controller.delete_record(1);
    assert_eq!(controller.log().len(), 2);
    assert_eq!(controller.log().get(0).unwrap().get("full_name"), Some("Ann"));
    assert_eq!(controller.log().get(1).unwrap().get("full_name"), Some("Cyd"));

    controller.delete_record(9);
    assert_eq!(controller.log().len(), 2);
}

#[test]
fn edit_moves_record_back_into_values() {
    let mut controller = FormController::new(user_info_registry());
    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");
    controller.update_field("email", "a@b.com");
    controller.submit().unwrap();

    controller.edit_record(0);
    assert!(controller.log().is_empty());
    assert_eq!(controller.values().get("full_name"), Some("Ann"));
    assert_eq!(controller.values().get("email"), Some("a@b.com"));
}

#[test]
fn edit_keeps_whatever_schema_is_active() {
    // Switching form types between submit and edit leaves the new schema in
    // place while the old record's values load.
    let mut controller = FormController::new(FormRegistry::builtin());
    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");
    controller.update_field("email", "a@b.com");
    controller.update_field("password", "hunter2");
    controller.submit().unwrap();

    controller.select_form_type("address_info");
    controller.edit_record(0);

    let names: Vec<_> = controller
        .active_fields()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    assert_eq!(names, vec!["street", "city", "state", "zip_code", "country"]);
    assert_eq!(controller.values().get("full_name"), Some("Ann"));
    // No address field is filled, so progress against the active schema is 0.
    assert_eq!(controller.progress(), 0.0);
}

#[test]
fn carried_over_values_survive_resubmission() {
    let mut controller = FormController::new(FormRegistry::builtin());
    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");
    controller.update_field("email", "a@b.com");
    controller.update_field("password", "hunter2");
    controller.submit().unwrap();

    controller.select_form_type("address_info");
    controller.edit_record(0);
    controller.update_field("street", "1 Main St");
    controller.update_field("city", "Springfield");
    controller.update_field("zip_code", "12345");
    controller.update_field("country", "Canada");
    controller.submit().unwrap();

    let record = controller.log().get(0).unwrap();
    // Address fields come first in schema order, then the recalled user
    // fields sorted by name.
    let names: Vec<_> = record.names().collect();
    assert_eq!(
        names,
        vec!["street", "city", "zip_code", "country", "email", "full_name", "password"]
    );
    assert_eq!(record.get("full_name"), Some("Ann"));
}

#[test]
fn notification_sequence_for_a_session() {
    let mut controller = FormController::new(user_info_registry());

    controller.select_form_type("user_info");
    controller.update_field("full_name", "Ann");
    let _ = controller.submit();
    controller.update_field("email", "a@b.com");
    controller.submit().unwrap();
    controller.edit_record(0);

    let severities: Vec<_> = controller
        .take_notifications()
        .iter()
        .map(|n| n.severity())
        .collect();
    assert_eq!(
        severities,
        vec![
            Severity::Info,    // loaded
            Severity::Error,   // rejected submit
            Severity::Success, // accepted submit
            Severity::Info,    // edit mode
        ]
    );
}
