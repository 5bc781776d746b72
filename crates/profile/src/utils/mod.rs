#[cfg(test)]
pub mod profile_repository_stub;

#[cfg(test)]
pub use profile_repository_stub::ProfileRepositoryStub;
