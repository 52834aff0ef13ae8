use crate::form::{Field, FormData};

pub const EMPTY_PLACEHOLDER: &str = "----";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
}

pub fn review_rows(form: &FormData) -> Vec<ReviewRow> {
    Field::ALL
        .into_iter()
        .map(|field| {
            let value = form.get(field);
            ReviewRow {
                field,
                label: field.label(),
                value: if value.is_empty() {
                    EMPTY_PLACEHOLDER.to_string()
                } else {
                    value.to_string()
                },
            }
        })
        .collect()
}
