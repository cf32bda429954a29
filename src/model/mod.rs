pub mod fixture;
pub mod lineup;
pub mod match_record;
pub mod raw;
pub mod roster;
