
extern crate clap;
extern crate colored;
extern crate gnss_data;
extern crate serde_json;

use clap::{Arg, App};
use colored::*;

use gnss_data::ini::IniDocument;
use gnss_data::options::Options;

fn main() {

	let matches = App::new("GNSS Data Config Check")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Parses and validates a GNSS archive configuration file")
		.arg(Arg::with_name("config")
			.short("c").long("config")
			.help("Path to the INI configuration file")
			.required(true).takes_value(true))
		.arg(Arg::with_name("json")
			.long("json")
			.help("Dump the validated options as JSON"))
		.get_matches();

	let fname:&str = matches.value_of("config").unwrap();

	let doc:IniDocument = match IniDocument::parse_file(fname) {
		Ok(doc) => doc,
		Err(e) => {
			eprintln!("{}", format!("{}: {}", fname, e).red());
			std::process::exit(1);
		}
	};

	for unknown in Options::unrecognized(&doc) {
		eprintln!("{}", format!("Warning: unrecognized entry '{}'", unknown).yellow());
	}

	let opt:Options = match Options::from_document(&doc) {
		Ok(opt) => opt,
		Err(e) => {
			eprintln!("{}", format!("{}: {}", fname, e).red());
			std::process::exit(1);
		}
	};

	if matches.is_present("json") {
		println!("{}", serde_json::to_string_pretty(&opt).unwrap());
	} else {
		println!("[postgres] {}@{} database {}", opt.postgres.username, opt.postgres.hostname, opt.postgres.database);
		println!("[archive]  tank at {}", opt.archive.path.display());
		if let Some(repo) = &opt.archive.repository {
			println!("[archive]  repository at {}", repo.display());
		}
		match (opt.archive.parallel, opt.archive.cpus) {
			(true, Some(n)) => println!("[archive]  parallel execution with {} cpus", n),
			(true, None) => println!("[archive]  parallel execution with all available cpus"),
			(false, _) => println!("[archive]  serial execution"),
		}
		println!("[archive]  brdc orbits under {}", opt.archive.brdc.raw());
		println!("[archive]  sp3 orbits under {}", opt.archive.sp3.raw());
		if opt.archive.sp3_altrn.is_empty() {
			println!("[archive]  sp3 precedence: {}", opt.archive.sp3_types.join(", "));
		} else {
			println!("[archive]  sp3 precedence: {} then {}", opt.archive.sp3_types.join(", "), opt.archive.sp3_altrn.join(", "));
		}
		println!("[otl]      grdtab at {} with grid {}", opt.otl.grdtab.display(), opt.otl.otlgrid.display());
		println!("[ppp]      executable at {} with calibrations {}", opt.ppp.ppp_exe.display(), opt.ppp.atx.display());

		eprintln!("{}", format!("{} is valid", fname).green());
	}
}
