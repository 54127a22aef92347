//! Core types for dynaform.
//!
//! This crate provides the presentation-agnostic building blocks of the
//! dynamic form application:
//! - `FieldDescriptor` and `FieldKind` - static per-field metadata
//! - `FormRegistry` - form-type identifier to field-schema mapping
//! - `FieldValues` - in-progress values for the active form
//! - `FormController` - the session state machine (select, edit, submit)
//! - `SubmissionLog` and `SubmissionRecord` - submitted snapshots
//! - `Notification` - the transient-message contract for view layers
//! - `FormSurface` trait - for implementing front-ends

mod field;
pub use field::{ChoiceField, FieldDescriptor, FieldKind};

mod registry;
pub use registry::{FormRegistry, display_name};

mod values;
pub use values::FieldValues;

mod record;
pub use record::{SubmissionLog, SubmissionRecord};

mod notification;
pub use notification::{Notification, Severity};

mod error;
pub use error::FormError;

mod controller;
pub use controller::FormController;

mod traits;
pub use traits::FormSurface;
