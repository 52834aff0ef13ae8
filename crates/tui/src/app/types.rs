use shipbook_booking::Field;

pub enum AppAsyncEvent {
    CountriesLoaded {
        countries: Vec<String>,
        error: Option<String>,
    },
}

/// Open dropdown for one of the selector fields.
#[derive(Debug, Clone)]
pub struct Picker {
    pub field: Field,
    pub query: String,
    pub selected: usize,
}

impl Picker {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            query: String::new(),
            selected: 0,
        }
    }

    pub fn is_searchable(&self) -> bool {
        self.field == Field::SelectedLocation
    }
}
