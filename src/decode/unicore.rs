//! Unicore binary message decoder.
//!
//! Decodes the framed binary output of Unicore high precision GNSS
//! receivers (RANGE/RANGECMP measurements and broadcast ephemerides)
//! into observation and navigation data.

use crate::basic::code::{lam_carr, satwavelen};
use crate::basic::crc::crc32;
use crate::basic::sat::satno;
use crate::basic::time::*;
use crate::basic::var::*;
use crate::decode::raw::*;
use log::{debug, trace, warn};
use std::io::Read;

const UNICORESYNC1: u8 = 0xAA; // unicore message start sync code 1
const UNICORESYNC2: u8 = 0x44; // unicore message start sync code 2
const UNICORESYNC3: u8 = 0x12; // unicore message start sync code 3

const UNICOREHLEN: usize = 28; // unicore message header length (bytes)

const ID_RANGE: u16 = 43; // message id: range measurement
const ID_RANGECMP: u16 = 140; // message id: range compressed
const ID_GPSEPHEM: u16 = 7; // message id: gps ephemeris
const ID_GLOEPHEMERIS: u16 = 723; // message id: glonass ephemeris
const ID_GALEPHEMERIS: u16 = 1122; // message id: galileo ephemeris
const ID_BD2EPHEM: u16 = 1047; // message id: beidou ephemeris
const ID_EVENTALL: u16 = 308; // message id: eventall position & time information

const MAXVAL: f64 = 8388608.0;

const OFF_FRQNO: i32 = -7; // offset of glonass freq number

/// URA values (m)
const URA_EPH: [f64; 16] = [
    2.4, 3.4, 4.85, 6.85, 9.65, 13.65, 24.0, 48.0, 96.0, 192.0, 384.0, 768.0, 1536.0, 3072.0,
    6144.0, 0.0,
];

// get fields (little-endian)
fn u1(p: &[u8], i: usize) -> u8 {
    p[i]
}
fn u2(p: &[u8], i: usize) -> u16 {
    u16::from_le_bytes(p[i..i + 2].try_into().unwrap())
}
fn u4(p: &[u8], i: usize) -> u32 {
    u32::from_le_bytes(p[i..i + 4].try_into().unwrap())
}
fn i4(p: &[u8], i: usize) -> i32 {
    i32::from_le_bytes(p[i..i + 4].try_into().unwrap())
}
fn r4(p: &[u8], i: usize) -> f32 {
    f32::from_le_bytes(p[i..i + 4].try_into().unwrap())
}
fn r8(p: &[u8], i: usize) -> f64 {
    f64::from_le_bytes(p[i..i + 8].try_into().unwrap())
}

/// extend sign
fn exsign(v: u32, bits: u32) -> i32 {
    if v & (1 << (bits - 1)) != 0 {
        (v | (!0u32 << bits)) as i32
    } else {
        v as i32
    }
}

/// URA value (m) to URA index
fn uraindex(value: f64) -> i32 {
    let mut i = 0;
    while i < 15 {
        if URA_EPH[i] >= value {
            break;
        }
        i += 1;
    }
    i as i32
}

/// align a time-of-week to the week of a reference time
fn adjtow(time: GTime, tow: f64) -> GTime {
    let mut week = 0;
    time2gpst(time, Some(&mut week));
    adjweek(gpst2time(week, tow), time)
}

/// decoded tracking status word
#[derive(Debug, Clone, Copy)]
pub struct TrackStat {
    pub sys: usize, // system (SYS_???)
    pub code: u8,   // signal code (CODE_L??)
    pub track: i32, // tracking state
    pub plock: i32, // phase-lock flag (0: not locked, 1: locked)
    pub clock: i32, // code-lock flag (0: not locked, 1: locked)
    pub parity: i32, // parity known flag (0: not known, 1: known)
    pub halfc: i32, // half-cycle added flag
    pub freq: i32,  // signal frequency (0:L1,1:L2,2:L5)
}

/// decode unicore tracking status
///
/// # Arguments
/// - `stat`: tracking status field
///
/// # Returns
/// decoded status (None: unknown system or signal type)
pub fn decode_trackstat(stat: u32) -> Option<TrackStat> {
    let track = (stat & 0x1F) as i32;
    let plock = ((stat >> 10) & 1) as i32;
    let parity = ((stat >> 11) & 1) as i32;
    let clock = ((stat >> 12) & 1) as i32;
    let satsys = (stat >> 16) & 7;
    let halfc = ((stat >> 28) & 1) as i32;
    let sigtype = (stat >> 21) & 0x1F;

    let sys = match satsys {
        0 => SYS_GPS,
        1 => SYS_GLO,
        2 => SYS_SBS,
        3 => SYS_GAL,
        4 => SYS_CMP,
        5 => SYS_QZS,
        _ => {
            warn!("unicore unknown system: sys={}", satsys);
            return None;
        }
    };
    let mut freq = 0;
    let mut code = CODE_NONE;
    if sys == SYS_GPS {
        match sigtype {
            0 => code = CODE_L1C, // L1C/A
            9 => {
                freq = 1;
                code = CODE_L2W; // L2Pcodeless
            }
            _ => freq = -1,
        }
    } else if sys == SYS_QZS {
        match sigtype {
            0 => code = CODE_L1C, // L1C/A
            9 => {
                freq = 1;
                code = CODE_L2C; // L2C/A
            }
            _ => freq = -1,
        }
    } else if sys == SYS_GLO {
        match sigtype {
            0 => code = CODE_L1C, // L1C/A
            5 => {
                freq = 1;
                code = CODE_L2C; // L2C/A
            }
            _ => freq = -1,
        }
    } else if sys == SYS_GAL {
        match sigtype {
            1 => code = CODE_L1B, // E1B
            2 => code = CODE_L1C, // E1C
            17 => {
                freq = 1;
                code = CODE_L7Q; // E5bQ
            }
            _ => freq = -1,
        }
    } else if sys == SYS_CMP {
        match sigtype {
            0 => code = CODE_L1I, // B1I
            17 => {
                freq = 1;
                code = CODE_L7I; // B2I
            }
            _ => freq = -1,
        }
    } else if sys == SYS_SBS {
        match sigtype {
            0 => code = CODE_L1C, // L1C/A
            6 => {
                freq = 2;
                code = CODE_L5I; // L5I
            }
            _ => freq = -1,
        }
    }
    if freq < 0 {
        warn!("unicore signal type error: sys={} sigtype={}", sys, sigtype);
        return None;
    }
    Some(TrackStat {
        sys,
        code,
        track,
        plock,
        clock,
        parity,
        halfc,
        freq,
    })
}

/// check code priority and return obs position
pub fn checkpri(opt: &str, sys: usize, code: u8, freq: i32) -> i32 {
    let nex = NEXOBS as i32; // number of extended obs data
    let nf = NFREQ as i32;

    if sys == SYS_GPS {
        if opt.contains("-GL1P") && freq == 0 {
            return if code == CODE_L1P { 0 } else { -1 };
        }
        if opt.contains("-GL2X") && freq == 1 {
            return if code == CODE_L2X { 1 } else { -1 };
        }
        if code == CODE_L1P {
            return if nex < 1 { -1 } else { nf };
        }
        if code == CODE_L2X {
            return if nex < 2 { -1 } else { nf + 1 };
        }
    } else if sys == SYS_GLO {
        if opt.contains("-RL2C") && freq == 1 {
            return if code == CODE_L2C { 1 } else { -1 };
        }
        if code == CODE_L2C {
            return if nex < 1 { -1 } else { nf };
        }
    } else if sys == SYS_GAL {
        if opt.contains("-EL1B") && freq == 0 {
            return if code == CODE_L1B { 0 } else { -1 };
        }
        if code == CODE_L1B {
            return if nex < 1 { -1 } else { nf };
        }
        if code == CODE_L8Q {
            return if nex < 3 { -1 } else { nf + 2 };
        }
    }
    if freq < nf {
        freq
    } else {
        -1
    }
}

/// reconstruct the carrier phase from a rolled adr count
fn adr_unroll(adr: f64, psr: f64, wavelen: f64) -> f64 {
    let adr_rolls = (psr / wavelen + adr) / MAXVAL;
    -adr + MAXVAL * (adr_rolls + if adr_rolls <= 0.0 { -0.5 } else { 0.5 }).floor()
}

/// quantize C/N0 to 0.25 dBHz units
fn snr_unit(snr: f64) -> u8 {
    if (0.0..255.0).contains(&snr) {
        (snr * 4.0 + 0.5) as u8
    } else {
        0
    }
}

/// decode rangeb
fn decode_rangeb(raw: &mut Raw) -> i32 {
    debug!("decode_rangeb: len={}", raw.len);

    let nobs = u4(&raw.buff, UNICOREHLEN) as usize;

    if raw.outtype {
        raw.msgtype += &format!(" nobs={:2}", nobs);
    }
    if raw.len < UNICOREHLEN + 4 + nobs * 44 {
        warn!("unicore rangeb length error: len={} nobs={}", raw.len, nobs);
        return STAT_ERROR;
    }
    for i in 0..nobs {
        let q = UNICOREHLEN + 4 + i * 44;

        // decode tracking status
        let stat = match decode_trackstat(u4(&raw.buff, q + 40)) {
            Some(stat) => stat,
            None => continue,
        };

        // obs position
        let pos = checkpri(&raw.opt, stat.sys, stat.code, stat.freq);
        if pos < 0 {
            continue;
        }
        let pos = pos as usize;

        let mut prn = u2(&raw.buff, q) as i32;
        if stat.sys == SYS_GLO {
            prn -= 37;
        }
        let sat = satno(stat.sys, prn.max(0) as usize);
        if sat == 0 {
            debug!(
                "unicore rangeb satellite number error: sys={},prn={}",
                stat.sys, prn
            );
            continue;
        }
        if stat.sys == SYS_GLO && stat.parity == 0 {
            continue; // invalid if GLO parity unknown
        }
        let gfrq = u2(&raw.buff, q + 2) as i32;
        let mut psr = r8(&raw.buff, q + 4);
        let mut adr = r8(&raw.buff, q + 16);
        let mut dop = r4(&raw.buff, q + 28) as f64;
        let snr = r4(&raw.buff, q + 32) as f64;
        let lockt = r4(&raw.buff, q + 36) as f64;

        // set glonass frequency channel number
        if stat.sys == SYS_GLO && raw.nav.geph[(prn - 1) as usize].frq != gfrq + OFF_FRQNO {
            raw.nav.geph[(prn - 1) as usize].frq = gfrq + OFF_FRQNO;
        }
        let mut lli = 0u8;
        if raw.tobs[sat - 1][pos].time != 0 {
            let tt = timediff(raw.time, raw.tobs[sat - 1][pos]);
            if lockt - raw.lockt[sat - 1][pos] + 0.05 <= tt {
                lli = LLI_SLIP;
            }
        }
        if stat.parity == 0 {
            lli |= LLI_HALFC;
        }
        if stat.halfc != 0 {
            lli |= LLI_HALFA;
        }
        raw.tobs[sat - 1][pos] = raw.time;
        raw.lockt[sat - 1][pos] = lockt;
        raw.halfc[sat - 1][pos] = stat.halfc as u8;

        if stat.clock == 0 {
            psr = 0.0; // code unlock
        }
        if stat.plock == 0 {
            adr = 0.0; // phase unlock
            dop = 0.0;
        }

        if raw.obs.n > 0 && timediff(raw.obs.data[0].time, raw.time).abs() > 1E-9 {
            raw.obs.clear();
        }
        if let Some(index) = obsindex(&mut raw.obs, raw.time, sat) {
            let data = &mut raw.obs.data[index];
            data.l[pos] = -adr;
            data.p[pos] = psr;
            data.d[pos] = dop;
            data.snr[pos] = snr_unit(snr);
            data.lli[pos] = lli;
            data.code[pos] = stat.code;
        }
    }
    STAT_OBS
}

/// decode rangecmpb
fn decode_rangecmpb(raw: &mut Raw) -> i32 {
    debug!("decode_rangecmpb: len={}", raw.len);

    let nobs = u4(&raw.buff, UNICOREHLEN) as usize;

    if raw.outtype {
        raw.msgtype += &format!(" nobs={:2}", nobs);
    }
    if raw.len < UNICOREHLEN + 4 + nobs * 24 {
        warn!(
            "unicore rangecmpb length error: len={} nobs={}",
            raw.len, nobs
        );
        return STAT_ERROR;
    }
    for i in 0..nobs {
        let q = UNICOREHLEN + 4 + i * 24;

        // decode tracking status
        let stat = match decode_trackstat(u4(&raw.buff, q)) {
            Some(stat) => stat,
            None => continue,
        };

        // obs position
        let pos = checkpri(&raw.opt, stat.sys, stat.code, stat.freq);
        if pos < 0 {
            continue;
        }
        let pos = pos as usize;

        let mut prn = u1(&raw.buff, q + 17) as i32;
        if stat.sys == SYS_GLO {
            prn -= 37;
        }
        let sat = satno(stat.sys, prn.max(0) as usize);
        if sat == 0 {
            debug!(
                "unicore rangecmpb satellite number error: sys={},prn={}",
                stat.sys, prn
            );
            continue;
        }
        if stat.sys == SYS_GLO && stat.parity == 0 {
            continue; // invalid if GLO parity unknown
        }
        let mut dop = exsign(u4(&raw.buff, q + 4) & 0xFFFFFFF, 28) as f64 / 256.0;
        let mut psr =
            (u4(&raw.buff, q + 7) >> 4) as f64 / 128.0 + u1(&raw.buff, q + 11) as f64 * 2097152.0;

        let mut wavelen = satwavelen(sat, stat.freq as usize, &raw.nav);
        if wavelen <= 0.0 {
            if stat.sys == SYS_GLO {
                wavelen = CLIGHT / (if stat.freq == 0 { FREQ1_GLO } else { FREQ2_GLO });
            } else {
                wavelen = lam_carr(stat.freq as usize);
            }
        }
        let mut adr = adr_unroll(i4(&raw.buff, q + 12) as f64 / 256.0, psr, wavelen);

        let lockt = (u4(&raw.buff, q + 18) & 0x1FFFFF) as f64 / 32.0; // lock time

        let mut lli = 0u8;
        if raw.tobs[sat - 1][pos].time != 0 {
            let tt = timediff(raw.time, raw.tobs[sat - 1][pos]);
            if lockt < 65535.968 && lockt - raw.lockt[sat - 1][pos] + 0.05 <= tt {
                lli = LLI_SLIP;
            }
        }
        if stat.parity == 0 {
            lli |= LLI_HALFC;
        }
        if stat.halfc != 0 {
            lli |= LLI_HALFA;
        }
        raw.tobs[sat - 1][pos] = raw.time;
        raw.lockt[sat - 1][pos] = lockt;
        raw.halfc[sat - 1][pos] = stat.halfc as u8;

        let snr = ((u2(&raw.buff, q + 20) & 0x3FF) >> 5) as f64 + 20.0;
        if stat.clock == 0 {
            psr = 0.0; // code unlock
        }
        if stat.plock == 0 {
            adr = 0.0; // phase unlock
            dop = 0.0;
        }

        if raw.obs.n > 0 && timediff(raw.obs.data[0].time, raw.time).abs() > 1E-9 {
            raw.obs.clear();
        }
        if let Some(index) = obsindex(&mut raw.obs, raw.time, sat) {
            let data = &mut raw.obs.data[index];
            data.l[pos] = adr;
            data.p[pos] = psr;
            data.d[pos] = dop;
            data.snr[pos] = snr_unit(snr);
            data.lli[pos] = lli;
            data.code[pos] = stat.code;
        }
    }
    STAT_OBS
}

/// decode gpsephemb
fn decode_gpsephemb(raw: &mut Raw) -> i32 {
    debug!("decode_gpsephemb: len={}", raw.len);

    if raw.len < UNICOREHLEN + 224 {
        warn!("unicore gpsephemb length error: len={}", raw.len);
        return STAT_ERROR;
    }
    let mut eph = Eph::default();
    let mut p = UNICOREHLEN;

    let prn = u2(&raw.buff, p) as usize;
    p += 4;

    if raw.outtype {
        raw.msgtype += &format!(" prn={:3}", prn);
    }
    eph.sat = satno(SYS_GPS, prn);
    if eph.sat == 0 {
        warn!("unicore gpsephemb prn error: prn={}", prn);
        return STAT_ERROR;
    }
    let tow = r8(&raw.buff, p);
    p += 8;
    eph.svh = u4(&raw.buff, p) as i32;
    p += 4;
    eph.iode = u4(&raw.buff, p) as i32;
    p += 4;
    let iode2 = u4(&raw.buff, p) as i32;
    p += 4;
    let week = u4(&raw.buff, p) as i32;
    p += 4;
    let _zweek = u4(&raw.buff, p);
    p += 4;
    eph.toes = r8(&raw.buff, p);
    p += 8;
    eph.a = r8(&raw.buff, p);
    p += 8;
    eph.deln = r8(&raw.buff, p);
    p += 8;
    eph.m0 = r8(&raw.buff, p);
    p += 8;
    eph.e = r8(&raw.buff, p);
    p += 8;
    eph.omg = r8(&raw.buff, p);
    p += 8;
    eph.cuc = r8(&raw.buff, p);
    p += 8;
    eph.cus = r8(&raw.buff, p);
    p += 8;
    eph.crc = r8(&raw.buff, p);
    p += 8;
    eph.crs = r8(&raw.buff, p);
    p += 8;
    eph.cic = r8(&raw.buff, p);
    p += 8;
    eph.cis = r8(&raw.buff, p);
    p += 8;
    eph.i0 = r8(&raw.buff, p);
    p += 8;
    eph.idot = r8(&raw.buff, p);
    p += 8;
    eph.omg0 = r8(&raw.buff, p);
    p += 8;
    eph.omgd = r8(&raw.buff, p);
    p += 8;
    eph.iodc = u4(&raw.buff, p) as i32;
    p += 4;
    let toc = r8(&raw.buff, p);
    p += 8;
    eph.tgd[0] = r8(&raw.buff, p);
    p += 8;
    eph.f0 = r8(&raw.buff, p);
    p += 8;
    eph.f1 = r8(&raw.buff, p);
    p += 8;
    eph.f2 = r8(&raw.buff, p);
    p += 8;
    let _as_on = u4(&raw.buff, p); // AS-ON
    p += 4;
    let _n = r8(&raw.buff, p);
    p += 8;
    let ura = r8(&raw.buff, p);

    if eph.iode != iode2 {
        warn!("unicore gpsephemb iode error: iode={} {}", eph.iode, iode2);
        return STAT_ERROR;
    }
    eph.week = adjgpsweek(week);
    eph.toe = gpst2time(eph.week, eph.toes);
    let tt = timediff(eph.toe, raw.time);
    if tt < -302400.0 {
        eph.week += 1;
    } else if tt > 302400.0 {
        eph.week -= 1;
    }
    eph.toe = gpst2time(eph.week, eph.toes);
    eph.toc = gpst2time(eph.week, toc);
    eph.ttr = adjtow(eph.toe, tow);
    eph.sva = uraindex(ura);

    if !raw.opt.contains("-EPHALL") {
        let old = &raw.nav.eph[eph.sat - 1];
        if timediff(old.toe, eph.toe) == 0.0 && old.iode == eph.iode && old.iodc == eph.iodc {
            return STAT_NONE; // unchanged
        }
    }
    raw.nav.eph[eph.sat - 1] = eph;
    raw.ephsat = eph.sat;
    STAT_EPH
}

/// decode gloephemerisb
fn decode_gloephemerisb(raw: &mut Raw) -> i32 {
    debug!("decode_gloephemerisb: len={}", raw.len);

    if raw.len < UNICOREHLEN + 144 {
        warn!("unicore gloephemerisb length error: len={}", raw.len);
        return STAT_ERROR;
    }
    let p = UNICOREHLEN;
    let prn = u2(&raw.buff, p) as i32 - 37;

    if raw.outtype {
        raw.msgtype += &format!(" prn={:3}", prn);
    }
    let sat = satno(SYS_GLO, prn.max(0) as usize);
    if sat == 0 {
        warn!("unicore gloephemerisb prn error: prn={}", prn);
        return STAT_ERROR;
    }
    let mut geph = Geph::default();
    geph.frq = u2(&raw.buff, p + 2) as i32 + OFF_FRQNO;
    let week = u2(&raw.buff, p + 6) as i32;
    let tow = (u4(&raw.buff, p + 8) as f64 / 1000.0 + 0.5).floor(); // rounded to integer sec
    let toff = u4(&raw.buff, p + 12) as f64;
    geph.iode = (u4(&raw.buff, p + 20) & 0x7F) as i32;
    geph.svh = u4(&raw.buff, p + 24) as i32;
    geph.pos[0] = r8(&raw.buff, p + 28);
    geph.pos[1] = r8(&raw.buff, p + 36);
    geph.pos[2] = r8(&raw.buff, p + 44);
    geph.vel[0] = r8(&raw.buff, p + 52);
    geph.vel[1] = r8(&raw.buff, p + 60);
    geph.vel[2] = r8(&raw.buff, p + 68);
    geph.acc[0] = r8(&raw.buff, p + 76);
    geph.acc[1] = r8(&raw.buff, p + 84);
    geph.acc[2] = r8(&raw.buff, p + 92);
    geph.taun = r8(&raw.buff, p + 100);
    geph.gamn = r8(&raw.buff, p + 116);
    let mut tof = u4(&raw.buff, p + 124) as f64 - toff; // glonasst -> gpst
    geph.age = u4(&raw.buff, p + 136) as i32;
    geph.toe = gpst2time(week, tow);
    tof += (tow / 86400.0).floor() * 86400.0;
    if tof < tow - 43200.0 {
        tof += 86400.0;
    } else if tof > tow + 43200.0 {
        tof -= 86400.0;
    }
    geph.tof = gpst2time(week, tof);

    if !raw.opt.contains("-EPHALL") {
        let old = &raw.nav.geph[(prn - 1) as usize];
        if timediff(geph.toe, old.toe).abs() < 1.0 && geph.svh == old.svh {
            return STAT_NONE; // unchanged
        }
    }
    geph.sat = sat;
    raw.nav.geph[(prn - 1) as usize] = geph;
    raw.ephsat = sat;
    STAT_EPH
}

/// decode galephemerisb
fn decode_galephemerisb(raw: &mut Raw) -> i32 {
    debug!("decode_galephemerisb: len={}", raw.len);

    if raw.len < UNICOREHLEN + 220 {
        warn!("unicore galephemerisb length error: len={}", raw.len);
        return STAT_ERROR;
    }
    let mut eph = Eph::default();
    let mut p = UNICOREHLEN;

    let prn = u4(&raw.buff, p) as usize;
    p += 4;
    let rcv_fnav = (u4(&raw.buff, p) & 1) as i32;
    p += 4;
    let rcv_inav = (u4(&raw.buff, p) & 1) as i32;
    p += 4;
    let svh_e1b = (u1(&raw.buff, p) & 3) as i32;
    p += 1;
    let svh_e5a = (u1(&raw.buff, p) & 3) as i32;
    p += 1;
    let svh_e5b = (u1(&raw.buff, p) & 3) as i32;
    p += 1;
    let dvs_e1b = (u1(&raw.buff, p) & 1) as i32;
    p += 1;
    let dvs_e5a = (u1(&raw.buff, p) & 1) as i32;
    p += 1;
    let dvs_e5b = (u1(&raw.buff, p) & 1) as i32;
    p += 1;
    eph.sva = u1(&raw.buff, p) as i32; // SISA index
    p += 1 + 1;
    eph.iode = u4(&raw.buff, p) as i32; // IODNav
    p += 4;
    eph.toes = u4(&raw.buff, p) as f64;
    p += 4;
    let sqrt_a = r8(&raw.buff, p);
    p += 8;
    eph.deln = r8(&raw.buff, p);
    p += 8;
    eph.m0 = r8(&raw.buff, p);
    p += 8;
    eph.e = r8(&raw.buff, p);
    p += 8;
    eph.omg = r8(&raw.buff, p);
    p += 8;
    eph.cuc = r8(&raw.buff, p);
    p += 8;
    eph.cus = r8(&raw.buff, p);
    p += 8;
    eph.crc = r8(&raw.buff, p);
    p += 8;
    eph.crs = r8(&raw.buff, p);
    p += 8;
    eph.cic = r8(&raw.buff, p);
    p += 8;
    eph.cis = r8(&raw.buff, p);
    p += 8;
    eph.i0 = r8(&raw.buff, p);
    p += 8;
    eph.idot = r8(&raw.buff, p);
    p += 8;
    eph.omg0 = r8(&raw.buff, p);
    p += 8;
    eph.omgd = r8(&raw.buff, p);
    p += 8;
    let toc_fnav = u4(&raw.buff, p) as i32;
    p += 4;
    let af0_fnav = r8(&raw.buff, p);
    p += 8;
    let af1_fnav = r8(&raw.buff, p);
    p += 8;
    let af2_fnav = r8(&raw.buff, p);
    p += 8;
    let toc_inav = u4(&raw.buff, p) as i32;
    p += 4;
    let af0_inav = r8(&raw.buff, p);
    p += 8;
    let af1_inav = r8(&raw.buff, p);
    p += 8;
    let af2_inav = r8(&raw.buff, p);
    p += 8;
    eph.tgd[0] = r8(&raw.buff, p); // BGD: E5A-E1 (s)
    p += 8;
    eph.tgd[1] = r8(&raw.buff, p); // BGD: E5B-E1 (s)
    eph.iodc = eph.iode;
    eph.svh = (svh_e5b << 7)
        | (dvs_e5b << 6)
        | (svh_e5a << 4)
        | (dvs_e5a << 3)
        | (svh_e1b << 1)
        | dvs_e1b;

    // ephemeris selection (0:INAV,1:FNAV)
    let mut sel_nav = 0;
    if raw.opt.contains("-GALINAV") {
        sel_nav = 0;
    } else if raw.opt.contains("-GALFNAV") {
        sel_nav = 1;
    } else if rcv_inav == 0 && rcv_fnav == 1 {
        sel_nav = 1;
    }
    eph.a = sqrt_a * sqrt_a;
    eph.f0 = if sel_nav == 1 { af0_fnav } else { af0_inav };
    eph.f1 = if sel_nav == 1 { af1_fnav } else { af1_inav };
    eph.f2 = if sel_nav == 1 { af2_fnav } else { af2_inav };

    // set data source defined in rinex 3.03
    eph.code = if sel_nav == 0 {
        (1 << 0) | (1 << 9)
    } else {
        (1 << 1) | (1 << 8)
    };

    if raw.outtype {
        raw.msgtype += &format!(" prn={:3} iod={:3} toes={:6.0}", prn, eph.iode, eph.toes);
    }
    eph.sat = satno(SYS_GAL, prn);
    if eph.sat == 0 {
        warn!("unicore galephemeris satellite error: prn={}", prn);
        return STAT_ERROR;
    }
    let mut week = 0;
    let tow = time2gpst(raw.time, Some(&mut week));
    eph.week = week; // gps-week = gal-week
    eph.toe = gpst2time(eph.week, eph.toes);

    // for week-handover problem
    let tt = timediff(eph.toe, raw.time);
    if tt < -302400.0 {
        eph.week += 1;
    } else if tt > 302400.0 {
        eph.week -= 1;
    }
    eph.toe = gpst2time(eph.week, eph.toes);
    let toc = if sel_nav == 1 { toc_fnav } else { toc_inav };
    eph.toc = adjtow(eph.toe, toc as f64);
    eph.ttr = adjtow(eph.toe, tow);

    if !raw.opt.contains("-EPHALL") {
        let old = &raw.nav.eph[eph.sat - 1];
        if old.iode == eph.iode && old.code == eph.code {
            return STAT_NONE; // unchanged
        }
    }
    raw.nav.eph[eph.sat - 1] = eph;
    raw.ephsat = eph.sat;
    STAT_EPH
}

/// decode bd2ephemb
fn decode_bd2ephemb(raw: &mut Raw) -> i32 {
    debug!("decode_bd2ephemb: len={}", raw.len);

    if raw.len < UNICOREHLEN + 232 {
        warn!("unicore bdsephemerisb length error: len={}", raw.len);
        return STAT_ERROR;
    }
    let p = UNICOREHLEN;
    let mut eph = Eph::default();

    let prn = u4(&raw.buff, p) as usize; // PRN
    eph.week = u4(&raw.buff, p + 24) as i32; // WEEK
    let ura = r8(&raw.buff, p + 224); // URA
    eph.svh = (u4(&raw.buff, p + 12) & 1) as i32; // Health
    eph.tgd[0] = r8(&raw.buff, p + 172); // TGD1
    eph.tgd[1] = r8(&raw.buff, p + 180); // TGD2
    eph.iodc = u4(&raw.buff, p + 160) as i32; // AODC
    let toc = u4(&raw.buff, p + 164) as f64; // TOC
    eph.f0 = r8(&raw.buff, p + 188); // af0
    eph.f1 = r8(&raw.buff, p + 196); // af1
    eph.f2 = r8(&raw.buff, p + 204); // af2
    eph.iode = u4(&raw.buff, p + 16) as i32; // AODE
    eph.toes = u4(&raw.buff, p + 32) as f64; // TOE
    eph.e = r8(&raw.buff, p + 64); // ECC
    eph.omg = r8(&raw.buff, p + 72); // w
    eph.deln = r8(&raw.buff, p + 48); // Delta N
    eph.m0 = r8(&raw.buff, p + 56); // M0
    eph.omg0 = r8(&raw.buff, p + 144); // OMG0
    eph.omgd = r8(&raw.buff, p + 152); // OMGd
    eph.i0 = r8(&raw.buff, p + 128); // I0
    eph.idot = r8(&raw.buff, p + 136); // IDOT
    eph.cuc = r8(&raw.buff, p + 80); // cuc
    eph.cus = r8(&raw.buff, p + 88); // cus
    eph.crc = r8(&raw.buff, p + 96); // crc
    eph.crs = r8(&raw.buff, p + 104); // crs
    eph.cic = r8(&raw.buff, p + 112); // cic
    eph.cis = r8(&raw.buff, p + 120); // cis
    eph.a = r8(&raw.buff, p + 40); // A
    eph.sva = uraindex(ura);

    if raw.outtype {
        raw.msgtype += &format!(" prn={:3} iod={:3} toes={:6.0}", prn, eph.iode, eph.toes);
    }
    eph.sat = satno(SYS_CMP, prn);
    if eph.sat == 0 {
        warn!("unicore bdsephemeris satellite error: prn={}", prn);
        return STAT_ERROR;
    }
    eph.toe = bdt2gpst(bdt2time(eph.week, eph.toes)); // bdt -> gpst
    eph.toc = bdt2gpst(bdt2time(eph.week, toc)); // bdt -> gpst
    eph.ttr = raw.time;

    if !raw.opt.contains("-EPHALL") {
        let old = &raw.nav.eph[eph.sat - 1];
        if timediff(old.toe, eph.toe) == 0.0 && old.iode == eph.iode && old.iodc == eph.iodc {
            return STAT_NONE; // unchanged
        }
    }
    raw.nav.eph[eph.sat - 1] = eph;
    raw.ephsat = eph.sat;
    STAT_EPH
}

/// decode a complete unicore message in the buffer
fn decode_unicore(raw: &mut Raw) -> i32 {
    let msgid = u2(&raw.buff, 4);

    debug!("decode_unicore: type={:3} len={}", msgid, raw.len);

    // check crc32
    if crc32(&raw.buff[..raw.len]) != u4(&raw.buff, raw.len) {
        warn!("unicore crc error: type={:3} len={}", msgid, raw.len);
        return STAT_ERROR;
    }
    let msg = (u1(&raw.buff, 6) >> 4) & 0x3;
    let week = u2(&raw.buff, 14) as i32;
    if week == 0 {
        return STAT_ERROR;
    }
    let week = adjgpsweek(week);
    let tow = u4(&raw.buff, 16) as f64 * 0.001;
    raw.time = gpst2time(week, tow);

    if raw.outtype {
        raw.msgtype = format!(
            "UNICORE{:4} ({:4}): msg={} {}",
            msgid,
            raw.len,
            msg,
            time2str(gpst2time(week, tow))
        );
    }
    match msgid {
        ID_RANGE => decode_rangeb(raw),
        ID_RANGECMP => decode_rangecmpb(raw),
        ID_GPSEPHEM => decode_gpsephemb(raw),
        ID_GLOEPHEMERIS => decode_gloephemerisb(raw),
        ID_GALEPHEMERIS => decode_galephemerisb(raw),
        ID_BD2EPHEM => decode_bd2ephemb(raw),
        ID_EVENTALL => STAT_NONE, // recognized, not decoded
        _ => STAT_NONE,
    }
}

/// sync header
fn sync_unicore(buff: &mut [u8; MAXRAWLEN], data: u8) -> bool {
    buff[0] = buff[1];
    buff[1] = buff[2];
    buff[2] = data;
    buff[0] == UNICORESYNC1 && buff[1] == UNICORESYNC2 && buff[2] == UNICORESYNC3
}

/// input unicore raw data from stream
///
/// fetch next unicore raw data and input a message from stream
///
/// # Arguments
/// - `raw`: receiver raw data control struct
/// - `data`: stream data (1 byte)
///
/// # Returns
/// status (-1: error message, 0: no message, 1: input observation data,
/// 2: input ephemeris)
///
/// # Notes
/// to specify input options, set raw.opt to the following option strings
/// separated by spaces:
/// - `-EPHALL`: input all ephemerides
/// - `-GL1P`, `-GL2X`, `-RL2C`, `-EL1B`: select the code of a primary slot
/// - `-GALINAV`, `-GALFNAV`: select the galileo clock source
pub fn input_unicore(raw: &mut Raw, data: u8) -> i32 {
    trace!("input_unicore: data={:02x}", data);

    // synchronize frame
    if raw.nbyte == 0 {
        if sync_unicore(&mut raw.buff, data) {
            raw.nbyte = 3;
        }
        return STAT_NONE;
    }
    raw.buff[raw.nbyte] = data;
    raw.nbyte += 1;

    if raw.nbyte == 10 {
        raw.len = u2(&raw.buff, 8) as usize + UNICOREHLEN;
        if raw.len > MAXRAWLEN - 4 {
            warn!("unicore length error: len={}", raw.len);
            raw.nbyte = 0;
            return STAT_ERROR;
        }
    }
    if raw.nbyte < 10 || raw.nbyte < raw.len + 4 {
        return STAT_NONE;
    }
    raw.nbyte = 0;

    // decode unicore message
    decode_unicore(raw)
}

/// input unicore raw data from file
///
/// fetch next unicore raw data and input a message from file
///
/// # Arguments
/// - `raw`: receiver raw data control struct
/// - `fp`: input file
///
/// # Returns
/// status (-2: end of file, -1...2: same as `input_unicore`)
pub fn input_unicoref<R: Read>(raw: &mut Raw, fp: &mut R) -> i32 {
    debug!("input_unicoref:");

    // synchronize frame
    if raw.nbyte == 0 {
        let mut byte = [0u8; 1];
        let mut i = 0;
        loop {
            match fp.read(&mut byte) {
                Ok(1) => {}
                _ => return STAT_EOF,
            }
            if sync_unicore(&mut raw.buff, byte[0]) {
                break;
            }
            if i >= 4096 {
                return STAT_NONE;
            }
            i += 1;
        }
    }
    if fp.read_exact(&mut raw.buff[3..10]).is_err() {
        return STAT_EOF;
    }
    raw.nbyte = 10;

    raw.len = u2(&raw.buff, 8) as usize + UNICOREHLEN;
    if raw.len > MAXRAWLEN - 4 {
        warn!("unicore length error: len={}", raw.len);
        raw.nbyte = 0;
        return STAT_ERROR;
    }
    if fp.read_exact(&mut raw.buff[10..raw.len + 4]).is_err() {
        return STAT_EOF;
    }
    raw.nbyte = 0;

    // decode unicore message
    decode_unicore(raw)
}
