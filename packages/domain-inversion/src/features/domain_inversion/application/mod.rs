pub mod inversion_usecase;

pub use inversion_usecase::{DomainUseCase, DomainUseCaseImpl};
