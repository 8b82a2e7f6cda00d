pub mod participant;
pub mod statistics;
pub mod vote;
pub mod voting_event;
