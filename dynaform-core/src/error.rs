/// Error type for form operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Submission was attempted while required fields were still empty.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl FormError {
    /// The names of the fields that blocked the operation.
    pub fn field_names(&self) -> &[String] {
        match self {
            Self::MissingFields(names) => names,
        }
    }
}
