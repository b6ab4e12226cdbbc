//! Session slots stored as files.
//!
//! Each slot is `{base_dir}/{key}.json`. Writes go to a temporary file in the
//! same directory which is then renamed over the slot, so a reader sees either
//! the old record or the new one.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{File, create_dir_all, read_to_string, remove_file, rename};
use tokio::io::AsyncWriteExt;

use folio_types::prelude::*;
use folio_types::session_adapter::SessionAdapter;
use folio_types::utils::random_id;

/// Slot keys become file names, so only a safe subset is accepted
fn slot_path(base_dir: &Path, key: &str) -> ClResult<PathBuf> {
	let valid = !key.is_empty()
		&& key.len() <= 64
		&& key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
	if !valid {
		warn!("rejected session slot key {:?}", key);
		Err(Error::Parse)?
	}
	Ok(base_dir.join(format!("{}.json", key)))
}

#[derive(Debug)]
pub struct SessionAdapterFs {
	base_dir: Box<Path>,
}

impl SessionAdapterFs {
	pub async fn new(base_dir: Box<Path>) -> ClResult<Self> {
		create_dir_all(&base_dir).await?;
		Ok(Self { base_dir })
	}
}

#[async_trait]
impl SessionAdapter for SessionAdapterFs {
	async fn read_slot(&self, key: &str) -> ClResult<Option<Box<str>>> {
		let path = slot_path(&self.base_dir, key)?;
		match read_to_string(&path).await {
			Ok(data) => Ok(Some(data.into())),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	async fn write_slot(&self, key: &str, value: &str) -> ClResult<()> {
		let path = slot_path(&self.base_dir, key)?;
		let tmp_path = self.base_dir.join(format!("tmp-{}", random_id()));

		let mut file = File::create(&tmp_path).await?;
		file.write_all(value.as_bytes()).await?;
		file.sync_all().await?;
		drop(file);

		if let Err(err) = rename(&tmp_path, &path).await {
			// Best effort, the rename error is what matters
			let _ = remove_file(&tmp_path).await;
			return Err(err.into());
		}
		debug!("session slot written: {:?}", path);
		Ok(())
	}

	async fn remove_slot(&self, key: &str) -> ClResult<()> {
		let path = slot_path(&self.base_dir, key)?;
		match remove_file(&path).await {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_slot_path_rejects_traversal() {
		let base = Path::new("/data");
		assert_eq!(slot_path(base, "secure_session").unwrap(), Path::new("/data/secure_session.json"));
		for key in ["", "../etc/passwd", "a/b", "a.json", "sp ace"] {
			assert!(slot_path(base, key).is_err(), "{:?}", key);
		}
	}
}

// vim: ts=4
