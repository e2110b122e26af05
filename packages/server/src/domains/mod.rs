// Answering domains
pub mod answering;
pub mod identity;
pub mod rules;
pub mod uploads;
