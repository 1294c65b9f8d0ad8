mod thread_identity;

pub use thread_identity::{ThreadIdentity, acquire_thread_identity};
