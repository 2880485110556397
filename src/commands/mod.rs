pub mod browse;
pub mod calendar;
pub mod config;
pub mod day;
pub mod fav;
pub mod orgs;
