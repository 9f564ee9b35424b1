
use std::fmt;

use chrono::{Datelike, Utc};
use serde::{Serialize, Deserialize};

use crate::CfgError;

#[cfg(test)]
mod tests;

pub const GPS_EPOCH_MJD:i64 = 44244;             // 1980-01-06, start of GPS week 0

/* A single day expressed in every calendar the archive layout uses: civil date,
year/day-of-year, GPS week and week day, fractional year and MJD.  Internally
only the MJD is stored and everything else is derived from it, so equality and
ordering come straight from the day number. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GpsDate {
	mjd:i64,
}

impl GpsDate {

	pub fn from_mjd(mjd:i64) -> Self {
		Self{ mjd }
	}

	pub fn from_calendar(year:i32, month:u32, day:u32) -> Result<Self, CfgError> {
		if month < 1 || month > 12 {
			return Err(CfgError::InvalidDate(format!("{:04}/{:02}/{:02}", year, month, day)));
		}
		if day < 1 || day > days_in_month(year, month) {
			return Err(CfgError::InvalidDate(format!("{:04}/{:02}/{:02}", year, month, day)));
		}
		Ok(Self{ mjd: calendar_to_mjd(year, month, day) })
	}

	pub fn from_year_doy(year:i32, doy:u32) -> Result<Self, CfgError> {
		if doy < 1 || doy > days_in_year(year) {
			return Err(CfgError::InvalidDate(format!("{:04}_{:03}", year, doy)));
		}
		Ok(Self{ mjd: calendar_to_mjd(year, 1, 1) + (doy as i64) - 1 })
	}

	pub fn from_gps_week(week:i64, week_day:u32) -> Result<Self, CfgError> {
		if week < 0 || week_day > 6 {
			return Err(CfgError::InvalidDate(format!("{}-{}", week, week_day)));
		}
		Ok(Self{ mjd: GPS_EPOCH_MJD + week*7 + (week_day as i64) })
	}

	pub fn from_fyear(fyear:f64) -> Result<Self, CfgError> {
		if !fyear.is_finite() || fyear < 0.0 {
			return Err(CfgError::InvalidDate(format!("{}", fyear)));
		}
		let year:i32 = fyear.floor() as i32;
		let days:f64 = days_in_year(year) as f64;
		// Inverse of fyear(): doy enters the fraction shifted by half a day
		let mut doy:u32 = ((fyear - (year as f64))*days + 0.5).round() as u32;
		if doy < 1 { doy = 1; }
		if doy > days_in_year(year) { doy = days_in_year(year); }
		Self::from_year_doy(year, doy)
	}

	pub fn today() -> Self {
		let now = Utc::now();
		Self{ mjd: calendar_to_mjd(now.year(), now.month(), now.day()) }
	}

	/// Decodes the date syntax accepted on the command line: fractional year
	/// (contains '.'), yyyy_ddd, yyyy/mm/dd, gpswk-wkday, or a bare integer N
	/// meaning N days before today
	pub fn parse_flexible(arg:&str) -> Result<Self, CfgError> {
		let arg:&str = arg.trim();
		let bad = || CfgError::InvalidDate(arg.to_owned());

		if arg.contains('.') {
			let fy:f64 = arg.parse().map_err(|_| bad())?;
			Self::from_fyear(fy)
		} else if arg.contains('_') {
			let parts:Vec<&str> = arg.split('_').collect();
			if parts.len() != 2 { return Err(bad()); }
			let year:i32 = parts[0].parse().map_err(|_| bad())?;
			let doy:u32 = parts[1].parse().map_err(|_| bad())?;
			Self::from_year_doy(year, doy)
		} else if arg.contains('/') {
			let parts:Vec<&str> = arg.split('/').collect();
			if parts.len() != 3 { return Err(bad()); }
			let year:i32 = parts[0].parse().map_err(|_| bad())?;
			let month:u32 = parts[1].parse().map_err(|_| bad())?;
			let day:u32 = parts[2].parse().map_err(|_| bad())?;
			Self::from_calendar(year, month, day)
		} else if arg.contains('-') {
			let parts:Vec<&str> = arg.split('-').collect();
			if parts.len() != 2 { return Err(bad()); }
			let week:i64 = parts[0].parse().map_err(|_| bad())?;
			let week_day:u32 = parts[1].parse().map_err(|_| bad())?;
			Self::from_gps_week(week, week_day)
		} else if !arg.is_empty() {
			let days_back:i64 = arg.parse().map_err(|_| bad())?;
			if days_back < 0 { return Err(bad()); }
			Ok(Self::today().sub_days(days_back))
		} else {
			Err(bad())
		}
	}

	pub fn mjd(&self) -> i64 { self.mjd }

	pub fn year(&self) -> i32 { mjd_to_calendar(self.mjd).0 }
	pub fn month(&self) -> u32 { mjd_to_calendar(self.mjd).1 }
	pub fn day(&self) -> u32 { mjd_to_calendar(self.mjd).2 }

	pub fn doy(&self) -> u32 {
		(self.mjd - calendar_to_mjd(self.year(), 1, 1) + 1) as u32
	}

	pub fn gps_week(&self) -> i64 {
		(self.mjd - GPS_EPOCH_MJD).div_euclid(7)
	}

	pub fn gps_week_day(&self) -> u32 {
		(self.mjd - GPS_EPOCH_MJD).rem_euclid(7) as u32
	}

	pub fn fyear(&self) -> f64 {
		let year:i32 = self.year();
		(year as f64) + ((self.doy() as f64) - 0.5)/(days_in_year(year) as f64)
	}

	/// Two-digit year as used by the short RINEX naming convention
	pub fn yy(&self) -> u32 {
		(self.year().rem_euclid(100)) as u32
	}

	// Zero-padded fields for file-name building

	pub fn yyyy(&self) -> String {
		format!("{:04}", self.year())
	}

	pub fn ddd(&self) -> String {
		format!("{:03}", self.doy())
	}

	/// Four-digit GPS week followed by the week day, e.g. 20480
	pub fn wwww_d(&self) -> String {
		format!("{:04}{}", self.gps_week(), self.gps_week_day())
	}

	pub fn add_days(&self, n:i64) -> Self { Self{ mjd: self.mjd + n } }
	pub fn sub_days(&self, n:i64) -> Self { Self{ mjd: self.mjd - n } }

}

impl fmt::Display for GpsDate {
	fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:04}_{:03}", self.year(), self.doy())
	}
}

pub fn days_in_year(year:i32) -> u32 {
	if is_leap_year(year) { 366 } else { 365 }
}

pub fn is_leap_year(year:i32) -> bool {
	(year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year:i32, month:u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 => if is_leap_year(year) { 29 } else { 28 },
		_ => 0,
	}
}

fn calendar_to_mjd(year:i32, month:u32, day:u32) -> i64 {
	// Standard Gregorian civil date to Julian day number conversion
	let y:i64 = year as i64;
	let m:i64 = month as i64;
	let d:i64 = day as i64;

	let a:i64 = (14 - m)/12;
	let y2:i64 = y + 4800 - a;
	let m2:i64 = m + 12*a - 3;

	let jdn:i64 = d + (153*m2 + 2)/5 + 365*y2 + y2/4 - y2/100 + y2/400 - 32045;
	jdn - 2400001
}

fn mjd_to_calendar(mjd:i64) -> (i32, u32, u32) {
	let jdn:i64 = mjd + 2400001;

	let a:i64 = jdn + 32044;
	let b:i64 = (4*a + 3)/146097;
	let c:i64 = a - 146097*b/4;
	let d2:i64 = (4*c + 3)/1461;
	let e:i64 = c - 1461*d2/4;
	let m2:i64 = (5*e + 2)/153;

	let day:i64 = e - (153*m2 + 2)/5 + 1;
	let month:i64 = m2 + 3 - 12*(m2/10);
	let year:i64 = 100*b + d2 - 4800 + m2/10;

	(year as i32, month as u32, day as u32)
}
