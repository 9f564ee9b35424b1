
extern crate clap;
extern crate colored;
extern crate gnss_data;
extern crate serde_json;

use std::path::PathBuf;

use clap::{Arg, App};
use colored::*;

use gnss_data::atx::{AtxAntenna, parse_atx_file};
use gnss_data::options::Options;
use gnss_data::utils::format_columns;

fn main() {

	let matches = App::new("ATX Antenna Listing")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Lists the antenna calibrations available in an ANTEX file")
		.arg(Arg::with_name("config")
			.short("c").long("config")
			.help("Configuration file whose ppp.atx entry points at the ANTEX file")
			.takes_value(true))
		.arg(Arg::with_name("atx")
			.long("atx")
			.help("ANTEX file to read directly, overriding the configuration")
			.takes_value(true))
		.arg(Arg::with_name("json")
			.long("json")
			.help("Dump the antenna list as JSON"))
		.get_matches();

	let atx_path:PathBuf = match (matches.value_of("atx"), matches.value_of("config")) {
		(Some(path), _) => PathBuf::from(path),
		(None, Some(config)) => match Options::load(config) {
			Ok(opt) => opt.ppp.atx,
			Err(e) => {
				eprintln!("{}", format!("{}", e).red());
				std::process::exit(1);
			}
		},
		(None, None) => {
			eprintln!("{}", "Either --atx or --config is required".red());
			std::process::exit(1);
		}
	};

	let antennas:Vec<AtxAntenna> = match parse_atx_file(&atx_path) {
		Ok(antennas) => antennas,
		Err(e) => {
			eprintln!("{}", format!("{}: {}", atx_path.display(), e).red());
			std::process::exit(1);
		}
	};

	if matches.is_present("json") {
		println!("{}", serde_json::to_string_pretty(&antennas).unwrap());
	} else {
		let names:Vec<String> = antennas.iter().map(|a| a.antenna.clone()).collect();
		print!("{}", format_columns(&names));
		eprintln!("{}", format!("{} antennas in {}", antennas.len(), atx_path.display()).green());
	}
}
