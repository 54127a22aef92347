use crate::FieldDescriptor;

/// Maps form-type identifiers to their ordered field schemas.
///
/// The registry is static data: it is assembled once, before the controller
/// starts, and only read afterwards. Registration order is preserved so the
/// selector UI lists form types the way they were declared.
#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
    forms: Vec<(String, Vec<FieldDescriptor>)>,
}

impl FormRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { forms: Vec::new() }
    }

    /// Register a form type, consuming and returning the registry.
    ///
    /// Registering an id twice replaces the earlier schema in place.
    pub fn with_form(mut self, id: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        let id = id.into();
        if let Some(entry) = self.forms.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = fields;
        } else {
            self.forms.push((id, fields));
        }
        self
    }

    /// Look up the schema for a form type.
    ///
    /// Returns `None` for unknown identifiers; callers treat that as
    /// "keep current state", never as an error.
    pub fn lookup(&self, id: &str) -> Option<&[FieldDescriptor]> {
        self.forms
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, fields)| fields.as_slice())
    }

    /// Get the registered form-type identifiers in declaration order.
    pub fn form_ids(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(|(id, _)| id.as_str())
    }

    /// Get the number of registered form types.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Check if the registry has no form types.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// The stock registry: user, address, and payment forms.
    pub fn builtin() -> Self {
        Self::new()
            .with_form(
                "user_info",
                vec![
                    FieldDescriptor::text("full_name", "Full Name").required(),
                    FieldDescriptor::email("email", "Email").required(),
                    FieldDescriptor::password("password", "Password").required(),
                    FieldDescriptor::choice("gender", "Gender", ["Male", "Female", "Other"]),
                ],
            )
            .with_form(
                "address_info",
                vec![
                    FieldDescriptor::text("street", "Street").required(),
                    FieldDescriptor::text("city", "City").required(),
                    FieldDescriptor::text("state", "State"),
                    FieldDescriptor::number("zip_code", "Zip Code").required(),
                    FieldDescriptor::choice(
                        "country",
                        "Country",
                        ["United States", "Canada", "Germany", "India", "Other"],
                    )
                    .required(),
                ],
            )
            .with_form(
                "payment_info",
                vec![
                    FieldDescriptor::number("card_number", "Card Number").required(),
                    FieldDescriptor::text("card_holder", "Card Holder").required(),
                    FieldDescriptor::text("expiry", "Expiry (MM/YY)").required(),
                    FieldDescriptor::password("cvv", "CVV").required(),
                    FieldDescriptor::choice(
                        "method",
                        "Payment Method",
                        ["Credit Card", "Debit Card", "PayPal"],
                    ),
                ],
            )
    }
}

/// Derive a human-readable form name from a snake_case identifier.
///
/// `"user_info"` becomes `"User Info"`. Used for the notification emitted
/// when a form type is loaded.
pub fn display_name(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_id() {
        let registry = FormRegistry::builtin();
        let fields = registry.lookup("user_info").unwrap();
        assert_eq!(fields[0].name(), "full_name");
        assert!(fields[0].is_required());
    }

    #[test]
    fn lookup_unknown_id() {
        let registry = FormRegistry::builtin();
        assert!(registry.lookup("order_info").is_none());
    }

    #[test]
    fn form_ids_in_declaration_order() {
        let registry = FormRegistry::builtin();
        let ids: Vec<_> = registry.form_ids().collect();
        assert_eq!(ids, vec!["user_info", "address_info", "payment_info"]);
    }

    #[test]
    fn with_form_replaces_existing() {
        let registry = FormRegistry::new()
            .with_form("survey", vec![FieldDescriptor::text("a", "A")])
            .with_form("survey", vec![FieldDescriptor::text("b", "B")]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("survey").unwrap()[0].name(), "b");
    }

    #[test]
    fn display_name_spaces_words() {
        assert_eq!(display_name("user_info"), "User Info");
        assert_eq!(display_name("payment_info"), "Payment Info");
        assert_eq!(display_name("plain"), "Plain");
    }
}
