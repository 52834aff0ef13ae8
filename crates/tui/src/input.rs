use shipbook_booking::{Field, FieldKind, Step, StepButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Field(Field),
    Button(StepButton),
}

impl Control {
    /// Every control the step offers, in focus order: editable fields, then buttons.
    pub fn for_step(step: Step) -> Vec<Control> {
        let fields = if step.is_review() { &[][..] } else { step.fields() };
        fields
            .iter()
            .copied()
            .map(Control::Field)
            .chain(step.buttons().iter().copied().map(Control::Button))
            .collect()
    }
}

pub struct FocusState {
    controls: Vec<Control>,
    position: usize,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new(Step::default())
    }
}

impl FocusState {
    pub fn new(step: Step) -> Self {
        Self {
            controls: Control::for_step(step),
            position: 0,
        }
    }

    pub fn reset(&mut self, step: Step) {
        self.controls = Control::for_step(step);
        self.position = 0;
    }

    pub fn current(&self) -> Option<Control> {
        self.controls.get(self.position).copied()
    }

    pub fn is_focused(&self, control: Control) -> bool {
        self.current() == Some(control)
    }

    pub fn focus_next(&mut self) {
        if !self.controls.is_empty() {
            self.position = (self.position + 1) % self.controls.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.controls.is_empty() {
            self.position = (self.position + self.controls.len() - 1) % self.controls.len();
        }
    }

    pub fn focus(&mut self, control: Control) {
        if let Some(position) = self.controls.iter().position(|c| *c == control) {
            self.position = position;
        }
    }

    /// The text field under the cursor, if typing should go into it.
    pub fn editing_field(&self) -> Option<Field> {
        match self.current() {
            Some(Control::Field(field)) if field.kind() != FieldKind::Select => {
                Some(field)
            }
            _ => None,
        }
    }
}
