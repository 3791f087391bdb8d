pub mod use_user_store;

pub use use_user_store::use_user_store;
