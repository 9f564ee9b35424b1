
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::CfgError;


/// One antenna calibration entry: antenna type plus radome code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtxAntenna {
	pub antenna:String,
	pub dome:String,
}

pub fn parse_atx_file<P: AsRef<Path>>(path:P) -> Result<Vec<AtxAntenna>, CfgError> {
	let text:String = fs::read_to_string(path)?;
	Ok(parse_atx_str(&text))
}

/// Scans ANTEX text for START OF ANTENNA records; the antenna type and radome
/// open the line that follows each record marker
pub fn parse_atx_str(text:&str) -> Vec<AtxAntenna> {
	let re = Regex::new(r"START OF ANTENNA\s+(\w+[-./+]?\w*[-./+]?\w*)\s+(\w+)").unwrap();

	re.captures_iter(text)
		.map(|caps| AtxAntenna{ antenna: caps[1].to_owned(), dome: caps[2].to_owned() })
		.collect()
}
