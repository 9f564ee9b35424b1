
use std::fs;

use crate::CfgError;
use crate::rinex::{RinexFilename, RinexKind, copy_into_archive, move_into_archive, SESSION_CHARS};

#[test]
fn parse_crinex_name() {
	let f = RinexFilename::parse("chac0010.19d.Z").unwrap();
	assert_eq!(f.station, "chac");
	assert_eq!(f.doy, 1);
	assert_eq!(f.session, '0');
	assert_eq!(f.yy, 19);
	assert_eq!(f.kind, RinexKind::CrinexZ);
	assert_eq!(f.to_string(), "chac0010.19d.Z");
}

#[test]
fn parse_obs_name_lowercases_station() {
	let f = RinexFilename::parse("CHAC1000.19o").unwrap();
	assert_eq!(f.station, "chac");
	assert_eq!(f.doy, 100);
	assert_eq!(f.kind, RinexKind::Obs);
	assert_eq!(f.to_string(), "chac1000.19o");
}

#[test]
fn invalid_names_are_rejected() {
	assert!(RinexFilename::parse("chac001.19o").is_err());       // two-digit doy
	assert!(RinexFilename::parse("chac0010.19x").is_err());      // unknown kind
	assert!(RinexFilename::parse("chac0010.19d").is_err());      // crinex without .Z
	assert!(RinexFilename::parse("ch0010.19o").is_err());        // short station code
	assert!(RinexFilename::parse("").is_err());
}

#[test]
fn session_variants_run_digits_then_letters() {
	let f = RinexFilename::parse("chac100a.19o").unwrap();
	let variants:Vec<String> = f.session_variants().map(|v| v.to_string()).collect();

	assert_eq!(variants.len(), 36);
	assert_eq!(variants[0], "chac1000.19o");
	assert_eq!(variants[9], "chac1009.19o");
	assert_eq!(variants[10], "chac100a.19o");
	assert_eq!(variants[35], "chac100z.19o");
	assert_eq!(SESSION_CHARS.len(), 36);
}

#[test]
fn copy_places_file_and_creates_directories() {
	let tmp = tempfile::tempdir().unwrap();
	let src = tmp.path().join("incoming.19o");
	fs::write(&src, b"obs data").unwrap();

	let dst = tmp.path().join("tank/2019/001/chac0010.19o");
	let placed = copy_into_archive(&src, &dst).unwrap();
	assert_eq!(placed, tmp.path().join("tank/2019/001/chac0010.19o"));
	assert_eq!(fs::read(&placed).unwrap(), b"obs data");
	assert!(src.exists());
}

#[test]
fn copy_of_identical_file_is_a_no_op() {
	let tmp = tempfile::tempdir().unwrap();
	let src = tmp.path().join("incoming.19o");
	fs::write(&src, b"same bytes").unwrap();

	let dst = tmp.path().join("chac0010.19o");
	let first = copy_into_archive(&src, &dst).unwrap();
	let second = copy_into_archive(&src, &dst).unwrap();
	assert_eq!(first, second);
}

#[test]
fn conflicting_file_moves_to_next_session_slot() {
	let tmp = tempfile::tempdir().unwrap();
	let src = tmp.path().join("incoming.19o");
	fs::write(&src, b"new observation").unwrap();

	// A different file already owns session 0
	fs::write(tmp.path().join("chac0010.19o"), b"old observation").unwrap();

	let placed = copy_into_archive(&src, &tmp.path().join("chac0010.19o")).unwrap();
	assert_eq!(placed, tmp.path().join("chac0011.19o"));
	assert_eq!(fs::read(&placed).unwrap(), b"new observation");
}

#[test]
fn all_sessions_taken_is_an_error() {
	let tmp = tempfile::tempdir().unwrap();
	let src = tmp.path().join("incoming.19o");
	fs::write(&src, b"does not fit").unwrap();

	for c in &SESSION_CHARS {
		fs::write(tmp.path().join(format!("chac001{}.19o", c)), format!("taken by {}", c)).unwrap();
	}

	let err = copy_into_archive(&src, &tmp.path().join("chac0010.19o")).unwrap_err();
	match err {
		CfgError::SessionsExhausted(name) => assert_eq!(name, "chac0010.19o"),
		other => panic!("expected SessionsExhausted, got {:?}", other),
	}
}

#[test]
fn move_removes_the_source() {
	let tmp = tempfile::tempdir().unwrap();
	let src = tmp.path().join("incoming.19o");
	fs::write(&src, b"moving").unwrap();

	let placed = move_into_archive(&src, &tmp.path().join("tank/chac0010.19o")).unwrap();
	assert!(placed.exists());
	assert!(!src.exists());
}

#[test]
fn missing_source_is_an_error() {
	let tmp = tempfile::tempdir().unwrap();
	assert!(copy_into_archive(&tmp.path().join("nope.19o"), &tmp.path().join("chac0010.19o")).is_err());
}
