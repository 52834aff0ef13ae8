use crate::form::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Shipment,
    Delivery,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepButton {
    Previous,
    Next,
    Submit,
}

impl StepButton {
    pub fn label(self) -> &'static str {
        match self {
            StepButton::Previous => "Previous",
            StepButton::Next => "Next",
            StepButton::Submit => "Submit",
        }
    }
}

const SHIPMENT_FIELDS: [Field; 4] = [
    Field::SelectedLocation,
    Field::CargoType,
    Field::Weight,
    Field::WeightUnit,
];
const DELIVERY_FIELDS: [Field; 2] = [Field::DeliveryAddress, Field::PickupType];

impl Step {
    pub const ALL: [Step; 3] = [Step::Shipment, Step::Delivery, Step::Confirmation];

    pub fn number(self) -> usize {
        match self {
            Step::Shipment => 1,
            Step::Delivery => 2,
            Step::Confirmation => 3,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Shipment => "Shipment Address & Details",
            Step::Delivery => "Delivery Address",
            Step::Confirmation => "Confirmation",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Step::Shipment => Step::Delivery,
            Step::Delivery => Step::Confirmation,
            Step::Confirmation => Step::Confirmation,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Step::Shipment => Step::Shipment,
            Step::Delivery => Step::Shipment,
            Step::Confirmation => Step::Delivery,
        }
    }

    /// Fields the step shows. On the confirmation step they are read-only.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Shipment => &SHIPMENT_FIELDS,
            Step::Delivery => &DELIVERY_FIELDS,
            Step::Confirmation => &Field::ALL,
        }
    }

    pub fn is_review(self) -> bool {
        self == Step::Confirmation
    }

    pub fn buttons(self) -> &'static [StepButton] {
        match self {
            Step::Shipment => &[StepButton::Next],
            Step::Delivery => &[StepButton::Previous, StepButton::Next],
            Step::Confirmation => &[StepButton::Previous, StepButton::Submit],
        }
    }
}
