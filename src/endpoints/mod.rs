pub mod event;
pub mod hall_of_fame;
pub mod participants;
pub mod rundown;
