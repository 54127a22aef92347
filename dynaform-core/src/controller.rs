use std::collections::VecDeque;

use crate::{
    FieldDescriptor, FieldValues, FormError, FormRegistry, Notification, SubmissionLog,
    SubmissionRecord, registry::display_name,
};

/// Owns all session state and orchestrates form operations.
///
/// The controller is the single mutator: views call its operations in
/// response to user input and read its state back when drawing. Each
/// operation is one synchronous transition; there is no partial state to
/// observe in between.
///
/// Per session the controller moves between two phases: idle (no form
/// selected, `active_fields` empty) and editing (a form selected, zero or
/// more fields filled). A successful submit returns to idle; a rejected
/// submit stays in editing; `edit_record` re-enters editing with preloaded
/// values and whatever `active_fields` currently holds.
#[derive(Debug)]
pub struct FormController {
    registry: FormRegistry,
    active_fields: Vec<FieldDescriptor>,
    values: FieldValues,
    log: SubmissionLog,
    pending: VecDeque<Notification>,
}

impl FormController {
    /// Create a controller over the given registry, with empty state.
    pub fn new(registry: FormRegistry) -> Self {
        Self {
            registry,
            active_fields: Vec::new(),
            values: FieldValues::new(),
            log: SubmissionLog::new(),
            pending: VecDeque::new(),
        }
    }

    /// Get the registry this controller looks schemas up in.
    pub fn registry(&self) -> &FormRegistry {
        &self.registry
    }

    /// Get the field schema of the currently selected form type.
    ///
    /// Empty when no form type is selected.
    pub fn active_fields(&self) -> &[FieldDescriptor] {
        &self.active_fields
    }

    /// Get the in-progress field values.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Get the submission log.
    pub fn log(&self) -> &SubmissionLog {
        &self.log
    }

    /// Check whether a form type is currently selected.
    pub fn has_active_form(&self) -> bool {
        !self.active_fields.is_empty()
    }

    /// Completion percentage for the active form, in `[0, 100]`.
    ///
    /// Derived fresh on every call from `active_fields` and `values`:
    /// filled required fields over total required fields. A schema with no
    /// required fields yields 0, never NaN.
    pub fn progress(&self) -> f64 {
        let total = self
            .active_fields
            .iter()
            .filter(|field| field.is_required())
            .count();
        if total == 0 {
            return 0.0;
        }
        let filled = self
            .active_fields
            .iter()
            .filter(|field| field.is_required() && self.values.is_filled(field.name()))
            .count();
        filled as f64 / total as f64 * 100.0
    }

    /// Switch to a form type.
    ///
    /// A known id replaces the active schema and clears the in-progress
    /// values; an unknown id leaves state untouched. The "loaded" info
    /// notification fires either way, naming the requested form type.
    pub fn select_form_type(&mut self, id: &str) {
        let schema = self.registry.lookup(id).map(<[FieldDescriptor]>::to_vec);
        if let Some(fields) = schema {
            self.active_fields = fields;
            self.values.clear();
        }
        self.notify(Notification::info(format!(
            "Loaded {} form.",
            display_name(id)
        )));
    }

    /// Store a new value for a field.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.values.set(name, value);
    }

    /// Submit the active form.
    ///
    /// Rejects with [`FormError::MissingFields`] (and an error notification)
    /// when any required field is empty, leaving all state unchanged.
    /// Otherwise appends a snapshot of the current values to the log, resets
    /// the active form, and emits a success notification.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let missing: Vec<String> = self
            .active_fields
            .iter()
            .filter(|field| field.is_required() && !self.values.is_filled(field.name()))
            .map(|field| field.name().to_string())
            .collect();

        if !missing.is_empty() {
            self.notify(Notification::error("Please fill all required fields."));
            return Err(FormError::MissingFields(missing));
        }

        let record = self.snapshot();
        self.log.push(record);
        self.active_fields.clear();
        self.values.clear();
        self.notify(Notification::success("Form submitted successfully!"));
        Ok(())
    }

    /// Delete the record at `index` from the log.
    ///
    /// Out-of-range indices are silent no-ops.
    pub fn delete_record(&mut self, index: usize) {
        if self.log.remove(index).is_some() {
            self.notify(Notification::success("Entry deleted successfully."));
        }
    }

    /// Pull the record at `index` out of the log and back into the form.
    ///
    /// The record's values become the in-progress values; `active_fields` is
    /// left as-is, so the visible schema may not match the record if the
    /// user switched form types since submitting it. Progress derives
    /// against the existing schema. Out-of-range indices are silent no-ops.
    pub fn edit_record(&mut self, index: usize) {
        let Some(record) = self.log.remove(index) else {
            return;
        };
        self.values.clear();
        for (name, value) in record.fields() {
            self.values.set(name, value);
        }
        self.notify(Notification::info("Edit the form and resubmit."));
    }

    /// Drain all pending notifications, oldest first.
    ///
    /// This is the observer seam: views poll it once per frame instead of
    /// subscribing to state changes.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    fn notify(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    /// Snapshot the current values in deterministic order: schema order for
    /// fields of the active form, then any carried-over keys (from an
    /// edit-recall of a different form type) sorted by name.
    fn snapshot(&self) -> SubmissionRecord {
        let mut fields = Vec::with_capacity(self.values.len());
        for field in &self.active_fields {
            if let Some(value) = self.values.get(field.name()) {
                fields.push((field.name().to_string(), value.to_string()));
            }
        }
        let mut extras: Vec<(String, String)> = self
            .values
            .iter()
            .filter(|(name, _)| !self.active_fields.iter().any(|f| f.name() == *name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        extras.sort();
        fields.extend(extras);
        SubmissionRecord::new(fields)
    }
}
