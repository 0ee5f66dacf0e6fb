use std::fmt;

/// Any failure during a submission, as presented to the user.
pub struct RequestFailure(anyhow::Error);

impl From<anyhow::Error> for RequestFailure {
	fn from(err: anyhow::Error) -> Self {
		RequestFailure(err)
	}
}

impl RequestFailure {
	pub fn cause(&self) -> &anyhow::Error {
		&self.0
	}
}

impl fmt::Display for RequestFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Erro: {}", self.0)
	}
}

impl fmt::Debug for RequestFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RequestFailure({:?})", self.0)
	}
}
