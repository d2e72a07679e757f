pub mod user;
pub mod view_state;
