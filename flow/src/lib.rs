pub mod location_picker;
pub mod model;
pub mod reservation_form;

pub use location_picker::LocationPicker;
pub use reservation_form::{ReservationForm, SubmitOutcome};
