
use thiserror::Error;

pub mod ini;

pub mod date;
pub mod orbits;
pub mod options;

pub mod rinex;
pub mod atx;

pub mod utils;

#[derive(Debug, Error)]
pub enum CfgError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
	#[error("INI syntax error at line {line}: {msg}")]
	Syntax{ line:usize, msg:String },
	#[error("duplicate section [{name}] at line {line}")]
	DuplicateSection{ name:String, line:usize },
	#[error("duplicate key '{key}' in section [{section}] at line {line}")]
	DuplicateKey{ section:String, key:String, line:usize },
	#[error("missing required section [{0}]")]
	MissingSection(String),
	#[error("missing required key '{key}' in section [{section}]")]
	MissingKey{ section:String, key:String },
	#[error("invalid value for {key}: {msg}")]
	InvalidValue{ key:String, msg:String },
	#[error("could not decode date '{0}' (valid entries: fyear, yyyy_ddd, yyyy/mm/dd, gpswk-wkday, days before today)")]
	InvalidDate(String),
	#[error("invalid file naming convention: {0}")]
	InvalidFilename(String),
	#[error("unrecognized token '${token}' in path template '{template}'")]
	BadTemplate{ template:String, token:String },
	#[error("maximum number of sessions reached for {0}")]
	SessionsExhausted(String),
	#[error("invalid station id: {0}")]
	BadStationId(String),
	#[error("invalid integer set: {0}")]
	BadIntSet(String),
}
