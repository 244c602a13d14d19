//! Routed pages. Each protected page installs the route guard with its
//! required-role set; public pages install nothing.

pub mod clubs;
pub mod competitions;
pub mod dashboard;
pub mod fixtures;
pub mod home;
pub mod login;
pub mod players;
pub mod post_detail;
pub mod posts;
pub mod register;
pub mod standings;
pub mod subscriptions;
pub mod teams;
pub mod unauthorized;
pub mod users;
