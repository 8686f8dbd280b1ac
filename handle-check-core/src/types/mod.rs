//! Type definitions

mod form;
mod lookup;

pub use form::{FormState, ThemeMode, ValidationStatus};
pub use lookup::{CheckNameData, CheckNameRequest, CheckNameResponse, ServiceErrorEntry};
