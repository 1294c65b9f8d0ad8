mod generator;
mod seeding_policy;
mod thread_generator;

pub use generator::Generator;
pub use seeding_policy::SeedingPolicy;
pub use thread_generator::{ThreadGenerator, thread_generator};
