//! Ratatui front-end for dynaform.
//!
//! One screen holds the form-type selector, the dynamically rendered field
//! list, the submit control, and the submissions table. Key events feed the
//! [`dynaform_core::FormController`]; the status line drains its
//! notification queue.

mod theme;
pub use theme::Theme;

mod renderer;

mod shell;
pub use shell::{FormShell, ShellError};
