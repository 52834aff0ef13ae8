use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Everything a browser number input lets through while the user is still typing.
static NUMBER_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d*)?([eE][+-]?\d*)?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SelectedLocation,
    Weight,
    WeightUnit,
    DeliveryAddress,
    CargoType,
    PickupType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Select,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::SelectedLocation,
        Field::Weight,
        Field::WeightUnit,
        Field::DeliveryAddress,
        Field::CargoType,
        Field::PickupType,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::SelectedLocation => "selectedLocation",
            Field::Weight => "weight",
            Field::WeightUnit => "weightUnit",
            Field::DeliveryAddress => "deliveryAddress",
            Field::CargoType => "cargoType",
            Field::PickupType => "pickupType",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::SelectedLocation => "Selected Location",
            Field::Weight => "Weight",
            Field::WeightUnit => "Weight Unit",
            Field::DeliveryAddress => "Delivery Address",
            Field::CargoType => "Cargo Type",
            Field::PickupType => "Pickup Type",
        }
    }

    /// Hint shown while the field is still empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::SelectedLocation => "Select a country",
            Field::Weight => "Weight",
            Field::WeightUnit => "Unit",
            Field::DeliveryAddress => "Delivery Address",
            Field::CargoType => "Cargo Type",
            Field::PickupType => "Pickup Type",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Weight => FieldKind::Number,
            Field::DeliveryAddress => FieldKind::Text,
            Field::SelectedLocation | Field::WeightUnit | Field::CargoType | Field::PickupType => {
                FieldKind::Select
            }
        }
    }

    /// Fixed options of a selector. The location selector draws its options
    /// from the country catalog instead and returns none here.
    pub fn choices(self) -> Vec<Choice> {
        match self {
            Field::WeightUnit => WeightUnit::ALL
                .iter()
                .map(|u| Choice::new(u.value(), u.label()))
                .collect(),
            Field::CargoType => CargoType::ALL
                .iter()
                .map(|c| Choice::new(c.value(), c.label()))
                .collect(),
            Field::PickupType => PickupType::ALL
                .iter()
                .map(|p| Choice::new(p.value(), p.label()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilogram,
    Pound,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Kilogram, WeightUnit::Pound];

    pub fn value(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lb",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilogram (kg)",
            WeightUnit::Pound => "Pound (lb)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CargoType {
    Documents,
    Electronics,
}

impl CargoType {
    pub const ALL: [CargoType; 2] = [CargoType::Documents, CargoType::Electronics];

    pub fn value(self) -> &'static str {
        match self {
            CargoType::Documents => "documents",
            CargoType::Electronics => "electronics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CargoType::Documents => "Documents",
            CargoType::Electronics => "Electronics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupType {
    Local,
    International,
}

impl PickupType {
    pub const ALL: [PickupType; 2] = [PickupType::Local, PickupType::International];

    pub fn value(self) -> &'static str {
        match self {
            PickupType::Local => "local",
            PickupType::International => "international",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PickupType::Local => "Local Delivery",
            PickupType::International => "International Shipping",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub selected_location: String,
    pub weight: String,
    pub weight_unit: String,
    pub delivery_address: String,
    pub cargo_type: String,
    pub pickup_type: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SelectedLocation => &self.selected_location,
            Field::Weight => &self.weight,
            Field::WeightUnit => &self.weight_unit,
            Field::DeliveryAddress => &self.delivery_address,
            Field::CargoType => &self.cargo_type,
            Field::PickupType => &self.pickup_type,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::SelectedLocation => &mut self.selected_location,
            Field::Weight => &mut self.weight,
            Field::WeightUnit => &mut self.weight_unit,
            Field::DeliveryAddress => &mut self.delivery_address,
            Field::CargoType => &mut self.cargo_type,
            Field::PickupType => &mut self.pickup_type,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Appends a typed character. Returns false when the field would not
    /// accept it (selectors, or a number field given a non-numeric key).
    pub fn push_char(&mut self, field: Field, c: char) -> bool {
        match field.kind() {
            FieldKind::Select => false,
            FieldKind::Text => {
                self.slot(field).push(c);
                true
            }
            FieldKind::Number => {
                let mut candidate = self.get(field).to_string();
                candidate.push(c);
                if !accepts_number_input(&candidate) {
                    return false;
                }
                self.set(field, candidate);
                true
            }
        }
    }

    pub fn pop_char(&mut self, field: Field) {
        if field.kind() != FieldKind::Select {
            self.slot(field).pop();
        }
    }
}

pub fn accepts_number_input(candidate: &str) -> bool {
    NUMBER_INPUT.is_match(candidate)
}
