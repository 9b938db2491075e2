pub mod cocktails;
pub mod preferences;
