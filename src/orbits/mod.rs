
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::CfgError;
use crate::date::GpsDate;
use crate::options::ArchiveOptions;


/// Placeholder tokens recognized inside path templates
pub const TEMPLATE_TOKENS:[&str; 6] = ["year", "doy", "month", "day", "gpsweek", "gpswkday"];

/* A filesystem path with embedded $tokens that get substituted with zero-padded
date fields, e.g. /data/orbits/brdc/$year or /data/orbits/sp3/$gpsweek.  Any
$token outside TEMPLATE_TOKENS is rejected when the template is built, so a
typo in the configuration file surfaces at load time rather than as a missing
file halfway through processing. */
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PathTemplate {
	raw:String,
}

impl PathTemplate {

	pub fn new(raw:&str) -> Result<Self, CfgError> {
		let token_re = Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap();
		for caps in token_re.captures_iter(raw) {
			let token:&str = &caps[1];
			if !TEMPLATE_TOKENS.contains(&token) {
				return Err(CfgError::BadTemplate{ template: raw.to_owned(), token: token.to_owned() });
			}
		}
		Ok(Self{ raw: raw.to_owned() })
	}

	pub fn raw(&self) -> &str { &self.raw }

	pub fn expand(&self, date:&GpsDate) -> PathBuf {
		// Longest token names first so $gpswkday never half-matches as $day
		let sub_re = Regex::new(r"\$(gpswkday|gpsweek|month|year|doy|day)").unwrap();
		let expanded = sub_re.replace_all(&self.raw, |caps:&regex::Captures| {
			match &caps[1] {
				"year" => format!("{:04}", date.year()),
				"doy" => format!("{:03}", date.doy()),
				"month" => format!("{:02}", date.month()),
				"day" => format!("{:02}", date.day()),
				"gpsweek" => format!("{:04}", date.gps_week()),
				"gpswkday" => format!("{}", date.gps_week_day()),
				_ => unreachable!(),
			}
		});
		PathBuf::from(expanded.into_owned())
	}

}

/// Broadcast ephemeris file name under the expanded template directory,
/// e.g. brdc1000.19n for 2019_100
pub fn brdc_path(template:&PathTemplate, date:&GpsDate) -> PathBuf {
	template.expand(date).join(format!("brdc{}0.{:02}n", date.ddd(), date.yy()))
}

/// Precise orbit file name for one product code, e.g. igs20480.sp3
pub fn sp3_path(template:&PathTemplate, date:&GpsDate, code:&str) -> PathBuf {
	template.expand(date).join(format!("{}{}.sp3", code.to_lowercase(), date.wwww_d()))
}

/* Resolves orbit products for a given day following the precedence declared in
the archive section: sp3_type_1..3 are the preferred products in rank order and
sp3_altr_1..2 are the fallbacks tried when none of the preferred ones exist. */
#[derive(Debug, Clone)]
pub struct OrbitResolver {
	brdc:PathTemplate,
	sp3:PathTemplate,
	sp3_types:Vec<String>,
	sp3_altrn:Vec<String>,
}

impl OrbitResolver {

	pub fn new(archive:&ArchiveOptions) -> Self {
		Self{
			brdc: archive.brdc.clone(),
			sp3: archive.sp3.clone(),
			sp3_types: archive.sp3_types.clone(),
			sp3_altrn: archive.sp3_altrn.clone(),
		}
	}

	/// All candidate sp3 paths for this day, best-ranked first
	pub fn candidates(&self, date:&GpsDate) -> Vec<PathBuf> {
		self.sp3_types.iter()
			.chain(self.sp3_altrn.iter())
			.map(|code| sp3_path(&self.sp3, date, code))
			.collect()
	}

	pub fn brdc_path(&self, date:&GpsDate) -> PathBuf {
		brdc_path(&self.brdc, date)
	}

	/// First candidate that exists on disk, if any
	pub fn find_sp3(&self, date:&GpsDate) -> Option<PathBuf> {
		self.candidates(date).into_iter().find(|p| p.exists())
	}

	pub fn find_brdc(&self, date:&GpsDate) -> Option<PathBuf> {
		let p = self.brdc_path(date);
		if p.exists() { Some(p) } else { None }
	}

}

/// Repairs product file names written with a three-digit GPS week by putting
/// the leading zero back, e.g. g017321.snx.gz -> g0107321.snx.gz
pub fn fix_gps_week<P: AsRef<Path>>(path:P) -> PathBuf {
	let path:&Path = path.as_ref();

	let file_name:&str = match path.file_name().and_then(|n| n.to_str()) {
		Some(n) => n,
		None => return path.to_path_buf(),
	};

	// Everything from the first dot on counts as the (possibly stacked) extension
	let (stem, ext) = match file_name.find('.') {
		Some(idx) => (&file_name[..idx], &file_name[idx..]),
		None => (file_name, ""),
	};

	if stem.len() == 7 {
		let fixed = format!("{}0{}{}", &stem[..3], &stem[3..], ext);
		path.with_file_name(fixed)
	} else {
		path.to_path_buf()
	}
}
