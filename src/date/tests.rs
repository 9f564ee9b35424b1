
use crate::date::{GpsDate, days_in_year, is_leap_year, GPS_EPOCH_MJD};

#[test]
fn gps_epoch() {
	let d = GpsDate::from_calendar(1980, 1, 6).unwrap();
	assert_eq!(d.mjd(), GPS_EPOCH_MJD);
	assert_eq!(d.gps_week(), 0);
	assert_eq!(d.gps_week_day(), 0);
	assert_eq!(d.doy(), 6);
	assert_eq!(d.year(), 1980);
}

#[test]
fn week_rollovers() {
	// First day of GPS week 1024 and of week 2048
	let d1 = GpsDate::from_calendar(1999, 8, 22).unwrap();
	assert_eq!(d1.gps_week(), 1024);
	assert_eq!(d1.gps_week_day(), 0);

	let d2 = GpsDate::from_calendar(2019, 4, 7).unwrap();
	assert_eq!(d2.mjd(), 58580);
	assert_eq!(d2.gps_week(), 2048);
	assert_eq!(d2.gps_week_day(), 0);

	let d3 = GpsDate::from_gps_week(2048, 3).unwrap();
	assert_eq!(d3.year(), 2019);
	assert_eq!(d3.month(), 4);
	assert_eq!(d3.day(), 10);
}

#[test]
fn calendar_doy_round_trip() {
	let d = GpsDate::from_calendar(2020, 1, 1).unwrap();
	assert_eq!(d.mjd(), 58849);
	assert_eq!(d.doy(), 1);

	let e = GpsDate::from_year_doy(2016, 366).unwrap();
	assert_eq!((e.year(), e.month(), e.day()), (2016, 12, 31));

	let f = GpsDate::from_year_doy(2019, 100).unwrap();
	assert_eq!(GpsDate::from_calendar(f.year(), f.month(), f.day()).unwrap(), f);
}

#[test]
fn leap_year_rules() {
	assert!(is_leap_year(2000));
	assert!(is_leap_year(2016));
	assert!(!is_leap_year(1900));
	assert!(!is_leap_year(2019));
	assert_eq!(days_in_year(2020), 366);
	assert_eq!(days_in_year(2021), 365);

	assert!(GpsDate::from_calendar(2016, 2, 29).is_ok());
	assert!(GpsDate::from_calendar(2019, 2, 29).is_err());
	assert!(GpsDate::from_year_doy(2019, 366).is_err());
	assert!(GpsDate::from_year_doy(2019, 0).is_err());
}

#[test]
fn fyear_round_trip() {
	let d = GpsDate::from_year_doy(2019, 183).unwrap();
	assert!((d.fyear() - 2019.5).abs() < 1.0e-9);
	assert_eq!(GpsDate::from_fyear(d.fyear()).unwrap(), d);

	let first = GpsDate::from_year_doy(2020, 1).unwrap();
	assert_eq!(GpsDate::from_fyear(first.fyear()).unwrap(), first);
	let last = GpsDate::from_year_doy(2020, 366).unwrap();
	assert_eq!(GpsDate::from_fyear(last.fyear()).unwrap(), last);
}

#[test]
fn flexible_parsing() {
	assert_eq!(GpsDate::parse_flexible("2019_100").unwrap(), GpsDate::from_year_doy(2019, 100).unwrap());
	assert_eq!(GpsDate::parse_flexible("2019/04/07").unwrap(), GpsDate::from_calendar(2019, 4, 7).unwrap());
	assert_eq!(GpsDate::parse_flexible("2048-0").unwrap(), GpsDate::from_calendar(2019, 4, 7).unwrap());
	assert_eq!(GpsDate::parse_flexible("0").unwrap(), GpsDate::today());
	assert_eq!(GpsDate::parse_flexible("7").unwrap(), GpsDate::today().sub_days(7));

	let fy = GpsDate::parse_flexible("2019.5").unwrap();
	assert_eq!(fy.doy(), 183);

	assert!(GpsDate::parse_flexible("").is_err());
	assert!(GpsDate::parse_flexible("not_a_date").is_err());
	assert!(GpsDate::parse_flexible("2019/04").is_err());
	assert!(GpsDate::parse_flexible("2048-7").is_err());
}

#[test]
fn ordering_and_arithmetic() {
	let a = GpsDate::from_year_doy(2019, 1).unwrap();
	let b = GpsDate::from_year_doy(2019, 2).unwrap();
	assert!(a < b);
	assert_eq!(a.add_days(1), b);
	assert_eq!(b.sub_days(1), a);

	// Day arithmetic crosses year boundaries
	let end = GpsDate::from_calendar(2019, 12, 31).unwrap();
	assert_eq!(end.add_days(1), GpsDate::from_calendar(2020, 1, 1).unwrap());
}

#[test]
fn display_and_two_digit_year() {
	let d = GpsDate::from_year_doy(2019, 7).unwrap();
	assert_eq!(format!("{}", d), "2019_007");
	assert_eq!(d.yy(), 19);
	assert_eq!(GpsDate::from_calendar(2005, 3, 1).unwrap().yy(), 5);
}

#[test]
fn zero_padded_file_name_fields() {
	let d = GpsDate::from_year_doy(2019, 7).unwrap();
	assert_eq!(d.yyyy(), "2019");
	assert_eq!(d.ddd(), "007");

	assert_eq!(GpsDate::from_gps_week(2048, 0).unwrap().wwww_d(), "20480");
	assert_eq!(GpsDate::from_gps_week(731, 2).unwrap().wwww_d(), "07312");

	let old = GpsDate::from_calendar(985, 2, 3).unwrap();
	assert_eq!(old.yyyy(), "0985");
	assert_eq!(old.ddd(), "034");
}
