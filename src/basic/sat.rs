use crate::basic::var::*;

/// convert satellite system+prn to satellite number
pub fn satno(sys: usize, prn: usize) -> usize {
    if prn == 0 {
        return 0;
    }

    match sys {
        SYS_GPS if (MINPRNGPS..=MAXPRNGPS).contains(&prn) => prn,
        SYS_GLO if (MINPRNGLO..=MAXPRNGLO).contains(&prn) => NSATGPS + prn,
        SYS_GAL if (MINPRNGAL..=MAXPRNGAL).contains(&prn) => NSATGPS + NSATGLO + prn,
        SYS_QZS if (MINPRNQZS..=MAXPRNQZS).contains(&prn) => {
            NSATGPS + NSATGLO + NSATGAL + prn - MINPRNQZS + 1
        }
        SYS_CMP if (MINPRNCMP..=MAXPRNCMP).contains(&prn) => {
            NSATGPS + NSATGLO + NSATGAL + NSATQZS + prn
        }
        SYS_SBS if (MINPRNSBS..=MAXPRNSBS).contains(&prn) => {
            NSATGPS + NSATGLO + NSATGAL + NSATQZS + NSATCMP + prn - MINPRNSBS + 1
        }
        _ => 0,
    }
}

/// convert satellite number to PRN
pub fn getprn(sat: usize) -> usize {
    let mut prn = sat;
    if prn == 0 {
        0
    } else if prn <= NSATGPS {
        prn
    } else if { prn -= NSATGPS; prn } <= NSATGLO {
        prn
    } else if { prn -= NSATGLO; prn } <= NSATGAL {
        prn
    } else if { prn -= NSATGAL; prn } <= NSATQZS {
        prn + MINPRNQZS - 1
    } else if { prn -= NSATQZS; prn } <= NSATCMP {
        prn
    } else if { prn -= NSATCMP; prn } <= NSATSBS {
        prn + MINPRNSBS - 1
    } else {
        0
    }
}

/// get satellite system
pub fn satsys(sat: usize) -> usize {
    if sat == 0 {
        SYS_NONE
    } else if sat <= NSATGPS {
        SYS_GPS
    } else if sat <= NSATGPS + NSATGLO {
        SYS_GLO
    } else if sat <= NSATGPS + NSATGLO + NSATGAL {
        SYS_GAL
    } else if sat <= NSATGPS + NSATGLO + NSATGAL + NSATQZS {
        SYS_QZS
    } else if sat <= NSATGPS + NSATGLO + NSATGAL + NSATQZS + NSATCMP {
        SYS_CMP
    } else if sat <= NSATGPS + NSATGLO + NSATGAL + NSATQZS + NSATCMP + NSATSBS {
        SYS_SBS
    } else {
        SYS_NONE
    }
}

/// convert satellite number to satellite id
pub fn satno2id(sat: usize) -> String {
    let prn = getprn(sat);
    match satsys(sat) {
        SYS_GPS => format!("G{:02}", prn),
        SYS_GLO => format!("R{:02}", prn),
        SYS_GAL => format!("E{:02}", prn),
        SYS_QZS => format!("J{:02}", prn - MINPRNQZS + 1),
        SYS_CMP => format!("C{:02}", prn),
        SYS_SBS => format!("S{:02}", prn - 100),
        _ => String::new(),
    }
}
