pub mod respond_to_query;

pub use respond_to_query::RespondToQueryUseCase;
