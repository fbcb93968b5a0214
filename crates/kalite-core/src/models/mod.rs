pub mod classification;
pub mod draft;
pub mod form;
