/// Keeps the failure branches out of the hot path.
#[cold]
#[inline(never)]
pub(crate) fn cold_path() {}

#[derive(PartialEq)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ErrorKind {
	CapacityExceeded,
}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		log::debug!("{:?}: {}", kind, msg);
		Self { kind, message: msg }
	}

	pub fn new_capacity_exceeded(msg: &'static str) -> Self {
		Self::new(ErrorKind::CapacityExceeded, msg)
	}
}

#[inline(always)]
#[must_use]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what {
		Ok(())
	} else {
		cold_path();
		Err(err())
	}
}
