pub mod app;
pub mod domain;
pub mod infra;
pub mod observability;
pub mod proxy;
pub mod ui;
pub mod util;
