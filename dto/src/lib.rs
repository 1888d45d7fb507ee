pub mod auth;
pub mod checkup_status;
pub mod customer_query;
pub mod member;
pub mod membership_status;
pub mod plan;
pub mod role;
pub mod trainer;
pub mod user;
pub mod workout;
