pub mod actor_context;
pub mod user_record;
