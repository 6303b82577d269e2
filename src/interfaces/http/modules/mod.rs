pub mod info;
pub mod metrics;
pub mod request_id;
pub mod users;
