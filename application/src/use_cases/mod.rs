//! Application use cases
//!
//! Each use case orchestrates one storefront flow over the ports. None of
//! them mutate caller-owned state unless the flow says so (checkout clears
//! the cart it is given).

pub mod checkout;
pub mod load_dashboard;
pub mod load_menu;
pub mod login;
pub mod shared;
pub mod submit_inquiry;
