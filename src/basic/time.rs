use crate::basic::var::*;
use chrono::{Datelike, Timelike, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

const GPST0: [f64; 6] = [1980.0, 1.0, 6.0, 0.0, 0.0, 0.0];
const BDT0: [f64; 6] = [2006.0, 1.0, 1.0, 0.0, 0.0, 0.0];

pub fn timestr_utc() -> String {
    let now = Utc::now();
    let formatted_time = format!(
        "{:04}{:02}{:02} {:02}{:02}{:02} UTC",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    formatted_time
}

pub fn timeget() -> i64 {
    let system_time = SystemTime::now();
    let t = system_time.duration_since(UNIX_EPOCH).expect("SystemTime before UNIX EPOCH!");
    t.as_secs() as i64
}

pub fn timeadd(mut t: GTime, sec: f64) -> GTime {
    t.sec += sec;
    let tt = t.sec.floor();
    t.time += tt as i64;
    t.sec -= tt;
    t
}

pub fn timediff(t1: GTime, t2: GTime) -> f64 {
    (t1.time - t2.time) as f64 + (t1.sec - t2.sec)
}

/// adjust t into the half-week window around t0
pub fn adjweek(t: GTime, t0: GTime) -> GTime {
    let tt = timediff(t, t0);
    if tt < -302400.0 {
        return timeadd(t, 604800.0);
    }
    if tt > 302400.0 {
        return timeadd(t, -604800.0);
    }
    t
}

/// adjust a 10-bit gps week against the system clock
pub fn adjgpsweek(week: i32) -> i32 {
    let mut w = 0;
    let now = GTime {
        time: timeget(),
        sec: 0.0,
    };
    time2gpst(utc2gpst(now), Some(&mut w));
    if w < 1560 {
        w = 1560; // use 2009/12/1 if time is earlier than 2009/12/1
    }
    week + (w - week + 512) / 1024 * 1024
}

pub fn bdt2gpst(t: GTime) -> GTime {
    timeadd(t, 14.0)
}

pub fn bdt2time(week: i32, sec: f64) -> GTime {
    let mut t = epoch2time(&BDT0);
    let mut s = sec;
    if sec < -1E9 || 1E9 < sec {
        s = 0.0;
    }
    t.time += 86400 * 7 * week as i64 + s as i64;
    t.sec = s - s.floor();
    t
}

pub fn gpst2time(week: i32, sec: f64) -> GTime {
    let mut t = epoch2time(&GPST0);
    let mut s = sec;
    if sec < -1E9 || 1E9 < sec {
        s = 0.0;
    }
    t.time += 86400 * 7 * week as i64 + s as i64;
    t.sec = s - s.floor();
    t
}

pub fn utc2gpst(t: GTime) -> GTime {
    for leap in LEAPS.iter() {
        if leap[0] <= 0.0 {
            break;
        }
        if timediff(t, epoch2time(&leap[..6].try_into().unwrap())) >= 0.0 {
            return timeadd(t, -leap[6]);
        }
    }
    t
}

pub fn time2gpst(t: GTime, week: Option<&mut i32>) -> f64 {
    let t0 = epoch2time(&GPST0);
    let sec = t.time - t0.time;
    let w = (sec / (86400 * 7)) as i32;

    if let Some(week_ref) = week {
        *week_ref = w;
    }
    (sec - (w as i64 * 86400 * 7)) as f64 + t.sec
}

pub fn time2epoch(t: GTime, ep: &mut [f64; 6]) {
    const MDAY: [i32; 48] = [
        31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30,
        31, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31,
        30, 31,
    ];

    let days = (t.time / 86400) as i32;
    let sec = (t.time - (days as i64 * 86400)) as i32;
    let mut day = days % 1461;
    let mut mon = 0;

    while mon < 48 {
        if day >= MDAY[mon] {
            day -= MDAY[mon];
        } else {
            break;
        }
        mon += 1;
    }

    ep[0] = 1970.0 + (days / 1461 * 4) as f64 + (mon / 12) as f64;
    ep[1] = (mon % 12 + 1) as f64;
    ep[2] = (day + 1) as f64;
    ep[3] = (sec / 3600) as f64;
    ep[4] = (sec % 3600 / 60) as f64;
    ep[5] = (sec % 60) as f64 + t.sec;
}

pub fn epoch2time(ep: &[f64; 6]) -> GTime {
    const DOY: [i32; 12] = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

    let mut time = GTime { time: 0, sec: 0.0 };
    let year = ep[0] as i32;
    let mon = ep[1] as i32;
    let day = ep[2] as i32;

    if year < 1970 || year > 2099 || mon < 1 || mon > 12 {
        return time;
    }

    // leap year if year%4==0 in 1901-2099
    let days = (year - 1970) * 365 + (year - 1969) / 4 + DOY[(mon - 1) as usize] + day - 2
        + if year % 4 == 0 && mon >= 3 { 1 } else { 0 };

    let sec = ep[5].floor() as i32;
    time.time = (days as i64) * 86400 + (ep[3] as i64) * 3600 + (ep[4] as i64) * 60 + sec as i64;
    time.sec = ep[5] - sec as f64;

    time
}

pub fn time2str(t: GTime) -> String {
    let mut ep: [f64; 6] = [0.0; 6];
    let mut t = t;

    if 1.0 - t.sec < 0.5 {
        t.time += 1;
        t.sec = 0.0;
    }

    time2epoch(t, &mut ep);

    let formatted_str = format!(
        "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
        ep[0], ep[1], ep[2], ep[3], ep[4], ep[5],
    );

    formatted_str
}
