//! Screen layer: one MVI state machine per screen plus the host that runs
//! their requests. Rendering is left to the front end.

pub mod account;
pub mod add_expense;
pub mod budget;
pub mod history;
pub mod host;
pub mod login;
pub mod mvi;
pub mod nav;
pub mod notice;
pub mod register;

pub use host::ScreenHost;
pub use nav::{NavIntent, Route, Tab};
pub use notice::{Notice, NoticeLevel};
