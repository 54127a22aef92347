use anyhow::Result;
use dynaform_core::{FormController, FormRegistry, FormSurface};
use dynaform_tui::FormShell;

fn main() -> Result<()> {
    let mut controller = FormController::new(FormRegistry::builtin());
    let shell = FormShell::new().with_title("Dynamic Form Application");
    shell.run(&mut controller)?;
    Ok(())
}
