mod errors;

pub use errors::Error;

pub type MoviepickResult<T> = Result<T, Error>;
