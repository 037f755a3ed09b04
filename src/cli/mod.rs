pub mod fund;
pub mod funds;
pub mod recommend;
pub mod setup;
pub mod ui;
