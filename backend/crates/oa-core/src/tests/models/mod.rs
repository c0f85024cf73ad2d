mod role;
mod session_encoding;
mod user_record;
