/// Static metadata for one form input.
///
/// Descriptors are defined once per form type in a [`FormRegistry`] and never
/// mutated; the controller clones the active schema when a form type is
/// selected.
///
/// [`FormRegistry`]: crate::FormRegistry
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Unique identifier within its form type; the key into `FieldValues`.
    name: String,

    /// The label shown next to the input.
    label: String,

    /// The kind of input (determines the rendered control).
    kind: FieldKind,

    /// Whether this field must be non-empty for a submission to succeed.
    required: bool,
}

impl FieldDescriptor {
    /// Create a new field descriptor. Fields start out optional.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
        }
    }

    /// Create a plain text field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a numeric field.
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    /// Create a masked password field.
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    /// Create an email field.
    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a closed single-choice field with the given options.
    pub fn choice<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, label, FieldKind::Choice(ChoiceField::new(options)))
    }

    /// Mark this field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Check whether this field is required.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// The kind of field, determining the rendered input control.
///
/// The choice options live inside the `Choice` variant, so they exist exactly
/// when the field is a closed selector.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,

    /// Numeric input (affects the accepted keystrokes, not validation).
    Number,

    /// Masked input for passwords.
    Password,

    /// Email address input.
    Email,

    /// Closed single-choice selector.
    Choice(ChoiceField),
}

impl FieldKind {
    /// Check if this kind renders a closed selector.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }

    /// Check if this kind masks its displayed value.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Configuration for a single-choice field: the ordered options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChoiceField {
    options: Vec<String>,
}

impl ChoiceField {
    /// Create a choice configuration from an ordered list of options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the options in declaration order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Get the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
