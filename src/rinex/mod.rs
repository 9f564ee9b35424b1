
use std::fmt;
use std::fs;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::CfgError;

#[cfg(test)]
mod tests;

/// Session characters in the order the archive assigns them
pub const SESSION_CHARS:[char; 36] = [
	'0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
	'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
	'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
	'u', 'v', 'w', 'x', 'y', 'z'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RinexKind {
	/// Hatanaka-compressed observation file, ssssdddS.yyd.Z
	CrinexZ,
	/// Plain observation file, ssssdddS.yyo
	Obs,
}

impl RinexKind {
	pub fn suffix(&self) -> &'static str {
		match self {
			RinexKind::CrinexZ => "d.Z",
			RinexKind::Obs => "o",
		}
	}
}

/* Short-name RINEX convention: four-character station code, three-digit day of
year, one session character, two-digit year and the kind suffix.  The canonical
rendering is lower-case, which is how files are laid down in the tank. */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RinexFilename {
	pub station:String,
	pub doy:u32,
	pub session:char,
	pub yy:u32,
	pub kind:RinexKind,
}

impl RinexFilename {

	pub fn parse(name:&str) -> Result<Self, CfgError> {
		let re = Regex::new(r"^(\w{4})(\d{3})(\w)\.(\d{2})(d\.Z|o)$").unwrap();

		let caps = re.captures(name).ok_or_else(|| CfgError::InvalidFilename(name.to_owned()))?;

		let station:String = caps[1].to_lowercase();
		let doy:u32 = caps[2].parse().map_err(|_| CfgError::InvalidFilename(name.to_owned()))?;
		let session:char = caps[3].chars().next().unwrap();
		let yy:u32 = caps[4].parse().map_err(|_| CfgError::InvalidFilename(name.to_owned()))?;
		let kind = match &caps[5] {
			"d.Z" => RinexKind::CrinexZ,
			_ => RinexKind::Obs,
		};

		Ok(Self{ station, doy, session, yy, kind })
	}

	pub fn with_session(&self, session:char) -> Self {
		let mut ans = self.clone();
		ans.session = session;
		ans
	}

	/// File names for this station/day with the session character running
	/// through '0'-'9' then 'a'-'z', regardless of the current session
	pub fn session_variants(&self) -> SessionVariants {
		SessionVariants{ base: self.clone(), idx: 0 }
	}

}

impl fmt::Display for RinexFilename {
	fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{:03}{}.{:02}{}", self.station, self.doy, self.session, self.yy, self.kind.suffix())
	}
}

pub struct SessionVariants {
	base:RinexFilename,
	idx:usize,
}

impl Iterator for SessionVariants {
	type Item = RinexFilename;

	fn next(&mut self) -> Option<RinexFilename> {
		if self.idx >= SESSION_CHARS.len() {
			None
		} else {
			let ans = self.base.with_session(SESSION_CHARS[self.idx]);
			self.idx += 1;
			Some(ans)
		}
	}
}

/* Places a file into the archive without ever overwriting anything.  The
destination name is tried session by session: an identical file already in
place is accepted as-is, a different file under the same name pushes the copy
to the next free session slot.  Creation uses create_new (O_EXCL semantics) so
two workers racing for the same slot cannot clobber each other; the loser just
moves on to the next candidate. */
pub fn copy_into_archive(src:&Path, dst:&Path) -> Result<PathBuf, CfgError> {
	if !src.exists() {
		return Err(CfgError::Io(io::Error::new(io::ErrorKind::NotFound,
			format!("source file does not exist: {}", src.display()))));
	}

	let name:&str = dst.file_name().and_then(|n| n.to_str())
		.ok_or_else(|| CfgError::InvalidFilename(dst.display().to_string()))?;
	let parsed = RinexFilename::parse(name)?;
	let parent:PathBuf = dst.parent().map(|p| p.to_path_buf()).unwrap_or_default();

	if !parent.as_os_str().is_empty() {
		// Racing workers may create the directory between check and call, which is fine
		fs::create_dir_all(&parent)?;
	}

	for variant in parsed.session_variants() {
		let candidate:PathBuf = parent.join(variant.to_string());

		if candidate.exists() {
			if files_identical(src, &candidate)? {
				return Ok(candidate);
			}
			continue;
		}

		match OpenOptions::new().write(true).create_new(true).open(&candidate) {
			Ok(mut out) => {
				let mut input = File::open(src)?;
				io::copy(&mut input, &mut out)?;
				return Ok(candidate);
			},
			// The slot popped into existence after the check above; try the next one
			Err(ref e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
			Err(e) => return Err(e.into()),
		}
	}

	Err(CfgError::SessionsExhausted(name.to_owned()))
}

/// Copy into the archive, then remove the source
pub fn move_into_archive(src:&Path, dst:&Path) -> Result<PathBuf, CfgError> {
	let placed = copy_into_archive(src, dst)?;
	fs::remove_file(src)?;
	Ok(placed)
}

fn files_identical(a:&Path, b:&Path) -> Result<bool, CfgError> {
	Ok(fs::read(a)? == fs::read(b)?)
}
