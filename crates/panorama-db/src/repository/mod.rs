//! Remote-backend implementations of the core store traits.

mod activity;
mod auth;
mod customer;
mod employee;
mod project;
