//! Address update components

mod error_alert;
mod form;
mod results;

pub use error_alert::ErrorAlert;
pub use form::UpdateForm;
pub use results::{DatabaseTabs, DetailsTable, ResultsCard};
