use super::*;

impl App {
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.booking.update_field(field, value);
    }

    pub fn go_to_step(&mut self, step: Step) {
        self.booking.go_to_step(step);
        self.after_step_change();
    }

    pub fn next_step(&mut self) {
        self.booking.next_step();
        self.after_step_change();
    }

    pub fn prev_step(&mut self) {
        self.booking.prev_step();
        self.after_step_change();
    }

    fn after_step_change(&mut self) {
        self.picker = None;
        self.focus.reset(self.booking.step);
    }

    pub fn submit(&mut self) {
        self.booking.submit();
        self.show_submitted = true;
    }

    pub(super) fn activate_focused(&mut self) {
        match self.focus.current() {
            Some(Control::Button(StepButton::Next)) => self.next_step(),
            Some(Control::Button(StepButton::Previous)) => self.prev_step(),
            Some(Control::Button(StepButton::Submit)) => self.submit(),
            Some(Control::Field(field)) if field.kind() == FieldKind::Select => {
                self.open_picker(field);
            }
            Some(Control::Field(_)) => self.focus.focus_next(),
            None => {}
        }
    }

    pub(super) fn open_picker(&mut self, field: Field) {
        let mut picker = Picker::new(field);
        let current = self.booking.form.get(field);
        if let Some(position) = self
            .picker_choices(&picker)
            .iter()
            .position(|c| c.value == current)
        {
            picker.selected = position;
        }
        self.picker = Some(picker);
    }

    pub(super) fn picker_choices(&self, picker: &Picker) -> Vec<Choice> {
        match picker.field {
            Field::SelectedLocation => self
                .booking
                .catalog
                .search(&picker.query)
                .into_iter()
                .map(Choice::plain)
                .collect(),
            field => field.choices(),
        }
    }

    pub(super) fn move_picker_selection(&mut self, delta: isize) {
        let Some(picker) = self.picker.as_ref() else {
            return;
        };
        let len = self.picker_choices(picker).len();
        if let Some(ref mut picker) = self.picker {
            picker.selected = if len == 0 {
                0
            } else {
                picker.selected.saturating_add_signed(delta).min(len - 1)
            };
        }
    }

    pub(super) fn edit_picker_query(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(ref mut picker) = self.picker {
            if picker.is_searchable() {
                edit(&mut picker.query);
                picker.selected = 0;
            }
        }
    }

    pub(super) fn choose_from_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        if let Some(choice) = self.picker_choices(&picker).into_iter().nth(picker.selected) {
            tracing::debug!(field = picker.field.key(), value = %choice.value, "Selected option");
            self.update_field(picker.field, choice.value);
        }
    }

    /// Quick-pick of one of the suggested countries, `index` counted from zero.
    pub(super) fn choose_suggestion(&mut self, index: usize) {
        let Some(picker) = self.picker.as_ref() else {
            return;
        };
        if !picker.is_searchable() {
            return;
        }
        if let Some(country) = self.booking.catalog.suggested.get(index).cloned() {
            self.update_field(Field::SelectedLocation, country);
            self.picker = None;
        }
    }
}
