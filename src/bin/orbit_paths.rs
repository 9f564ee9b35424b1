
extern crate clap;
extern crate colored;
extern crate gnss_data;

use clap::{Arg, App};
use colored::*;

use gnss_data::date::GpsDate;
use gnss_data::options::Options;
use gnss_data::orbits::OrbitResolver;

fn main() {

	let matches = App::new("GNSS Orbit Paths")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Resolves broadcast and precise orbit file paths for a given day")
		.arg(Arg::with_name("config")
			.short("c").long("config")
			.help("Path to the INI configuration file")
			.required(true).takes_value(true))
		.arg(Arg::with_name("date")
			.short("d").long("date")
			.help("Date as fyear, yyyy_ddd, yyyy/mm/dd or gpswk-wkday; defaults to today")
			.takes_value(true))
		.get_matches();

	let opt:Options = match Options::load(matches.value_of("config").unwrap()) {
		Ok(opt) => opt,
		Err(e) => {
			eprintln!("{}", format!("{}", e).red());
			std::process::exit(1);
		}
	};

	let date:GpsDate = match matches.value_of("date") {
		Some(arg) => match GpsDate::parse_flexible(arg) {
			Ok(date) => date,
			Err(e) => {
				eprintln!("{}", format!("{}", e).red());
				std::process::exit(1);
			}
		},
		None => GpsDate::today(),
	};

	println!("Orbits for {} (GPS week {} day {})", date, date.gps_week(), date.gps_week_day());

	let resolver = OrbitResolver::new(&opt.archive);

	let brdc = resolver.brdc_path(&date);
	if brdc.exists() {
		println!("  brdc: {} {}", brdc.display(), "present".green());
	} else {
		println!("  brdc: {} {}", brdc.display(), "missing".red());
	}

	for candidate in resolver.candidates(&date) {
		if candidate.exists() {
			println!("  sp3:  {} {}", candidate.display(), "present".green());
		} else {
			println!("  sp3:  {} {}", candidate.display(), "missing".red());
		}
	}

	match resolver.find_sp3(&date) {
		Some(best) => println!("Best available sp3: {}", best.display()),
		None => eprintln!("{}", "No sp3 product available for this day".yellow()),
	}
}
