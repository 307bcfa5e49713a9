pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid date format: expected YYYYMMDD, got {input:?}.")]
	InvalidDateFormat { input: String },
}
