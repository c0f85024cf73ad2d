pub mod role;
pub mod session_encoding;
pub mod user_record;
