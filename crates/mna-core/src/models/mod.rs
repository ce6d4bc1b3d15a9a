pub mod patient;
pub mod question;
pub mod record;
pub mod response;
pub mod score;
