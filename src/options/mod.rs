
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::CfgError;
use crate::ini::IniDocument;
use crate::orbits::PathTemplate;


const KNOWN_POSTGRES:[&str; 4] = ["hostname", "username", "password", "database"];
const KNOWN_ARCHIVE:[&str; 11] = ["path", "repository", "parallel", "cpus", "brdc", "sp3",
	"sp3_type_1", "sp3_type_2", "sp3_type_3", "sp3_altr_1", "sp3_altr_2"];
const KNOWN_OTL:[&str; 2] = ["grdtab", "otlgrid"];
const KNOWN_PPP:[&str; 5] = ["ppp_path", "ppp_exe", "institution", "info", "atx"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostgresOptions {
	pub hostname:String,
	pub username:String,
	pub password:String,
	pub database:String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveOptions {
	pub path:PathBuf,
	pub repository:Option<PathBuf>,
	pub parallel:bool,
	pub cpus:Option<usize>,
	pub brdc:PathTemplate,
	pub sp3:PathTemplate,
	pub sp3_types:Vec<String>,
	pub sp3_altrn:Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtlOptions {
	pub grdtab:PathBuf,
	pub otlgrid:PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PppOptions {
	pub ppp_path:PathBuf,
	pub ppp_exe:PathBuf,
	pub institution:Option<String>,
	pub info:Option<String>,
	pub atx:PathBuf,
}

/// Typed view over the four documented sections of the configuration file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Options {
	pub postgres:PostgresOptions,
	pub archive:ArchiveOptions,
	pub otl:OtlOptions,
	pub ppp:PppOptions,
}

impl Options {

	pub fn load<P: AsRef<Path>>(path:P) -> Result<Self, CfgError> {
		let doc = IniDocument::parse_file(path)?;
		Self::from_document(&doc)
	}

	pub fn from_document(doc:&IniDocument) -> Result<Self, CfgError> {
		let postgres = PostgresOptions{
			hostname: required(doc, "postgres", "hostname")?,
			username: required(doc, "postgres", "username")?,
			password: required(doc, "postgres", "password")?,
			database: required(doc, "postgres", "database")?,
		};

		let archive = {
			let section:&HashMap<String, String> = doc.section("archive")
				.ok_or_else(|| CfgError::MissingSection("archive".to_owned()))?;

			let parallel:bool = match section.get("parallel") {
				Some(v) => parse_bool("archive.parallel", v)?,
				None => false,
			};
			let cpus:Option<usize> = match section.get("cpus") {
				Some(v) => Some(parse_positive("archive.cpus", v)?),
				None => None,
			};

			ArchiveOptions{
				path: expand_tilde(&required(doc, "archive", "path")?),
				repository: section.get("repository").map(|v| expand_tilde(v)),
				parallel,
				cpus,
				brdc: PathTemplate::new(&required(doc, "archive", "brdc")?)?,
				sp3: PathTemplate::new(&required(doc, "archive", "sp3")?)?,
				sp3_types: ranked_values(section, "sp3_type", 1)?,
				sp3_altrn: ranked_values(section, "sp3_altr", 0)?,
			}
		};

		let otl = OtlOptions{
			grdtab: expand_tilde(&required(doc, "otl", "grdtab")?),
			otlgrid: expand_tilde(&required(doc, "otl", "otlgrid")?),
		};

		let ppp = PppOptions{
			ppp_path: expand_tilde(&required(doc, "ppp", "ppp_path")?),
			ppp_exe: expand_tilde(&required(doc, "ppp", "ppp_exe")?),
			institution: doc.get("ppp", "institution").map(|v| v.to_owned()),
			info: doc.get("ppp", "info").map(|v| v.to_owned()),
			atx: expand_tilde(&required(doc, "ppp", "atx")?),
		};

		Ok(Self{ postgres, archive, otl, ppp })
	}

	/// Sections and keys present in the document but not documented for this
	/// pipeline, reported as "section" or "section.key" so the cfg-check tool
	/// can warn about typos
	pub fn unrecognized(doc:&IniDocument) -> Vec<String> {
		let known:[(&str, &[&str]); 4] = [
			("postgres", &KNOWN_POSTGRES),
			("archive", &KNOWN_ARCHIVE),
			("otl", &KNOWN_OTL),
			("ppp", &KNOWN_PPP),
		];

		let mut unknown:Vec<String> = vec![];
		for name in doc.section_names() {
			match known.iter().find(|(s, _)| *s == name) {
				Some((_, keys)) => for key in doc.keys(name) {
					if !keys.contains(&key) {
						unknown.push(format!("{}.{}", name, key));
					}
				},
				None => unknown.push(name.to_owned()),
			}
		}
		unknown
	}

}

fn required(doc:&IniDocument, section:&str, key:&str) -> Result<String, CfgError> {
	if doc.section(section).is_none() {
		return Err(CfgError::MissingSection(section.to_owned()));
	}
	doc.get(section, key)
		.map(|v| v.to_owned())
		.ok_or_else(|| CfgError::MissingKey{ section: section.to_owned(), key: key.to_owned() })
}

fn parse_bool(key:&str, value:&str) -> Result<bool, CfgError> {
	match value.to_lowercase().as_str() {
		"true" | "yes" | "on" | "1" => Ok(true),
		"false" | "no" | "off" | "0" => Ok(false),
		_ => Err(CfgError::InvalidValue{ key: key.to_owned(), msg: format!("'{}' is not a recognized boolean token", value) }),
	}
}

fn parse_positive(key:&str, value:&str) -> Result<usize, CfgError> {
	match value.parse::<usize>() {
		Ok(n) if n >= 1 => Ok(n),
		_ => Err(CfgError::InvalidValue{ key: key.to_owned(), msg: format!("'{}' is not a positive integer", value) }),
	}
}

/* Collects prefix_1, prefix_2, ... in rank order.  The numbering must be
contiguous starting at 1: a gap almost certainly means a mistyped rank, so a
prefix_3 without a prefix_2 is an error rather than a silently shorter list. */
fn ranked_values(section:&HashMap<String, String>, prefix:&str, min_count:usize) -> Result<Vec<String>, CfgError> {
	let mut values:Vec<String> = vec![];
	let mut rank:usize = 1;
	loop {
		match section.get(&format!("{}_{}", prefix, rank)) {
			Some(v) => values.push(v.to_owned()),
			None => break,
		}
		rank += 1;
	}

	// Anything ranked beyond the first gap is unreachable
	for key in section.keys() {
		if key.starts_with(prefix) {
			let suffix:&str = &key[prefix.len()..];
			if let Ok(n) = suffix.trim_start_matches('_').parse::<usize>() {
				if n == 0 || n > values.len() {
					return Err(CfgError::InvalidValue{
						key: format!("archive.{}", key),
						msg: format!("rank {} leaves a gap in the {}_* sequence", n, prefix),
					});
				}
			}
		}
	}

	if values.len() < min_count {
		return Err(CfgError::MissingKey{ section: "archive".to_owned(), key: format!("{}_1", prefix) });
	}
	Ok(values)
}

fn expand_tilde(path:&str) -> PathBuf {
	if path == "~" {
		return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
	}
	if let Some(rest) = path.strip_prefix("~/") {
		if let Some(home) = dirs::home_dir() {
			return home.join(rest);
		}
	}
	PathBuf::from(path)
}
