use crate::catalog::CountryCatalog;
use crate::form::{Field, FormData};
use crate::review::{review_rows, ReviewRow};
use crate::step::Step;
use crate::submission::Submission;

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub step: Step,
    pub form: FormData,
    pub catalog: CountryCatalog,
    pub submission: Option<Submission>,
}

impl BookingForm {
    pub fn new(suggested_count: usize) -> Self {
        Self {
            catalog: CountryCatalog::new(suggested_count),
            ..Self::default()
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn go_to_step(&mut self, step: Step) {
        self.step = step;
    }

    pub fn next_step(&mut self) {
        self.step = self.step.next();
    }

    pub fn prev_step(&mut self) {
        self.step = self.step.previous();
    }

    pub fn review(&self) -> Vec<ReviewRow> {
        review_rows(&self.form)
    }

    pub fn submit(&mut self) -> &Submission {
        let submission = Submission::capture(&self.form);
        tracing::info!(
            location = %submission.form.selected_location,
            cargo = %submission.form.cargo_type,
            pickup = %submission.form.pickup_type,
            "Booking submitted"
        );
        self.submission.insert(submission)
    }
}
