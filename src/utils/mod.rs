
use crate::CfgError;


/* Parses operator input like "1,3,5-8,<4" into a sorted, de-duplicated list.
Plain integers, dash-separated ranges (endpoints in either order) and "<N"
meaning 1-N are accepted; every invalid token is collected into the error so
the operator sees all the mistakes at once. */
pub fn parse_int_set(input:&str) -> Result<Vec<u32>, CfgError> {
	let mut selection:Vec<u32> = vec![];
	let mut invalid:Vec<String> = vec![];

	for token in input.split(',').map(|t| t.trim()).filter(|t| !t.is_empty()) {
		let token:String = if token.starts_with('<') {
			format!("1-{}", &token[1..])
		} else {
			token.to_owned()
		};

		if let Ok(n) = token.parse::<u32>() {
			selection.push(n);
			continue;
		}

		let parts:Vec<&str> = token.split('-').collect();
		let range:Option<(u32, u32)> = match parts.as_slice() {
			[a, b] => match (a.parse::<u32>(), b.parse::<u32>()) {
				(Ok(a), Ok(b)) => Some((a.min(b), a.max(b))),
				_ => None,
			},
			_ => None,
		};

		match range {
			Some((first, last)) => selection.extend(first..=last),
			None => invalid.push(token),
		}
	}

	if !invalid.is_empty() {
		return Err(CfgError::BadIntSet(invalid.join(", ")));
	}

	selection.sort();
	selection.dedup();
	Ok(selection)
}

/// Splits a station id of the form net.stnm into the network namespace and the
/// station code; the namespace itself may contain dots
pub fn parse_station_id(id:&str) -> Result<(String, String), CfgError> {
	match id.rfind('.') {
		Some(idx) if idx > 0 && idx + 1 < id.len() => {
			Ok((id[..idx].to_owned(), id[idx+1..].to_owned()))
		},
		_ => Err(CfgError::BadStationId(id.to_owned())),
	}
}

/// Normalizes a two- or four-digit year: 80-99 land in the 1900s, 0-79 in
/// the 2000s, anything already four digits passes through
pub fn norm_year(text:&str) -> Result<i32, CfgError> {
	let year:i32 = text.trim().parse()
		.map_err(|_| CfgError::InvalidValue{ key: "year".to_owned(), msg: format!("'{}' is not an integer year", text) })?;

	if year < 0 {
		return Err(CfgError::InvalidValue{ key: "year".to_owned(), msg: format!("{} is negative", year) });
	}

	Ok(match year {
		80..=99 => year + 1900,
		0..=79 => year + 2000,
		_ => year,
	})
}

/// Zero-pads a day of year to the three digits used in file names
pub fn norm_doy(text:&str) -> Result<String, CfgError> {
	let doy:u32 = text.trim().parse()
		.map_err(|_| CfgError::InvalidValue{ key: "doy".to_owned(), msg: format!("'{}' is not an integer day of year", text) })?;
	Ok(format!("{:03}", doy))
}

pub fn human_readable_time(secs:f64) -> (f64, &'static str) {
	if secs > 3600.0 {
		(secs/3600.0, "hours")
	} else if secs > 60.0 {
		(secs/60.0, "mins")
	} else {
		(secs, "secs")
	}
}

/// Eight items per row, left-aligned in ten-character columns, for station and
/// antenna listings
pub fn format_columns(items:&[String]) -> String {
	let mut out = String::new();
	for chunk in items.chunks(8) {
		out.push_str("    ");
		for (i, item) in chunk.iter().enumerate() {
			if i + 1 == chunk.len() {
				out.push_str(item);
			} else {
				out.push_str(&format!("{:<10}", item));
			}
		}
		out.push('\n');
	}
	out
}
