pub mod run_server;

pub use run_server::RunServerUseCase;
