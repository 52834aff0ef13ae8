pub mod catalog;
pub mod form;
pub mod review;
pub mod step;
pub mod submission;
pub mod wizard;

pub use catalog::CountryCatalog;
pub use form::{CargoType, Choice, Field, FieldKind, FormData, PickupType, WeightUnit};
pub use review::{review_rows, ReviewRow, EMPTY_PLACEHOLDER};
pub use step::{Step, StepButton};
pub use submission::Submission;
pub use wizard::BookingForm;
