//! Runs the shell against a bespoke registry instead of the builtin forms.

use anyhow::Result;
use dynaform_core::{FieldDescriptor, FormController, FormRegistry, FormSurface};
use dynaform_tui::FormShell;

fn main() -> Result<()> {
    let registry = FormRegistry::new()
        .with_form(
            "bug_report",
            vec![
                FieldDescriptor::text("title", "Title").required(),
                FieldDescriptor::choice("severity", "Severity", ["Low", "Medium", "High"])
                    .required(),
                FieldDescriptor::text("steps", "Steps to Reproduce"),
                FieldDescriptor::email("reporter", "Reporter Email").required(),
            ],
        )
        .with_form(
            "feature_request",
            vec![
                FieldDescriptor::text("summary", "Summary").required(),
                FieldDescriptor::number("votes", "Initial Votes"),
            ],
        );

    let mut controller = FormController::new(registry);
    FormShell::new()
        .with_title("Issue Tracker Forms")
        .run(&mut controller)?;
    Ok(())
}
