mod in_memory_profile_repository;
mod profile_collection;

pub use in_memory_profile_repository::InMemoryProfileRepository;
pub use profile_collection::ProfileCollection;
