use crate::basic::var::*;

use super::sat::{getprn, satsys};

/// obs code to obs code string
///
/// # Arguments
/// - 'code': obs code (CODE_???)
///
/// # Returns
/// obs code string ("1C","1P","2W",...)
///
/// # Notes
/// obs codes are based on RINEX 3.04
pub fn code2obs(code: u8) -> &'static str {
    if code <= CODE_NONE || code > MAXCODE {
        ""
    } else {
        OBS_CODES[code as usize]
    }
}

/// satellite and frequency index to carrier wavelength
///
/// # Arguments
/// - `sat`: satellite number (1..MAXSAT)
/// - `frq`: frequency index (0:L1/E1/B1, 1:L2/E5b/B2, 2:L5/E5a)
/// - `nav`: navigation data, for the GLONASS frequency channel
///
/// # Returns
/// carrier wavelength (m) (0.0: the channel is not known yet)
pub fn satwavelen(sat: usize, frq: usize, nav: &Nav) -> f64 {
    let sys = satsys(sat);

    if sys == SYS_GLO {
        let prn = getprn(sat);
        let geph = &nav.geph[prn - 1];
        // a channel is usable once an ephemeris or a range record set it
        if geph.sat != sat && geph.frq == 0 {
            return 0.0;
        }
        return match frq {
            0 => CLIGHT / (FREQ1_GLO + DFRQ1_GLO * geph.frq as f64),
            1 => CLIGHT / (FREQ2_GLO + DFRQ2_GLO * geph.frq as f64),
            2 => CLIGHT / FREQ3_GLO,
            _ => 0.0,
        };
    }
    if sys == SYS_CMP {
        return match frq {
            0 => CLIGHT / FREQ1_CMP,
            1 => CLIGHT / FREQ2_CMP,
            2 => CLIGHT / FREQ3_CMP,
            _ => 0.0,
        };
    }
    if sys == SYS_GAL {
        return match frq {
            0 => CLIGHT / FREQ1,
            1 => CLIGHT / FREQ7,
            2 => CLIGHT / FREQ5,
            _ => 0.0,
        };
    }
    // GPS/QZS/SBS
    match frq {
        0 => CLIGHT / FREQ1,
        1 => CLIGHT / FREQ2,
        2 => CLIGHT / FREQ5,
        _ => 0.0,
    }
}

/// default wavelength when the navigation data has no answer
pub fn lam_carr(frq: usize) -> f64 {
    match frq {
        0 => CLIGHT / FREQ1,
        1 => CLIGHT / FREQ2,
        2 => CLIGHT / FREQ5,
        _ => 0.0,
    }
}
