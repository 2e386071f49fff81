use crate::basic::var::*;

// 解码返回状态
pub const STAT_EOF: i32 = -2; // end of file
pub const STAT_ERROR: i32 = -1; // error message
pub const STAT_NONE: i32 = 0; // no message
pub const STAT_OBS: i32 = 1; // input observation data
pub const STAT_EPH: i32 = 2; // input ephemeris
pub const STAT_SBAS: i32 = 3; // input sbas message (reserved)
pub const STAT_IONUTC: i32 = 9; // input ion/utc parameter (reserved)

/// receiver raw data control
#[derive(Debug, Clone)]
pub struct Raw {
    pub time: GTime,   // message time
    pub obs: Obss,     // observation data for the current epoch
    pub nav: Nav,      // satellite ephemerides
    pub ephsat: usize, // satellite number of the last stored ephemeris
    // per-satellite, per-slot state for loss-of-lock detection
    pub tobs: Vec<[GTime; NFREOBS]>, // observation time of the previous record
    pub lockt: Vec<[f64; NFREOBS]>,  // lock time of the previous record
    pub halfc: Vec<[u8; NFREOBS]>,   // half-cycle flag of the previous record
    pub nbyte: usize,                // number of bytes in the message buffer
    pub len: usize,                  // message length without the crc trailer
    pub buff: [u8; MAXRAWLEN],       // message reassembly buffer
    pub opt: String,                 // receiver dependent options
    pub outtype: bool,               // output message type
    pub msgtype: String,             // last message type
}

impl Raw {
    pub fn new() -> Self {
        Raw {
            time: GTime::default(),
            obs: Obss::new(),
            nav: Nav::new(),
            ephsat: 0,
            tobs: vec![[GTime::default(); NFREOBS]; MAXSAT],
            lockt: vec![[0.0; NFREOBS]; MAXSAT],
            halfc: vec![[0u8; NFREOBS]; MAXSAT],
            nbyte: 0,
            len: 0,
            buff: [0; MAXRAWLEN],
            opt: String::new(),
            outtype: false,
            msgtype: String::new(),
        }
    }
}

impl Default for Raw {
    fn default() -> Self {
        Self::new()
    }
}

/// get the epoch buffer index for a satellite, allocating a new entry if needed
pub fn obsindex(obs: &mut Obss, time: GTime, sat: usize) -> Option<usize> {
    for i in 0..obs.n {
        if obs.data[i].sat == sat {
            return Some(i);
        }
    }
    if obs.n >= MAXOBS {
        return None;
    }
    let mut data = Obs::default();
    data.time = time;
    data.sat = sat;
    obs.data.push(data);
    obs.n += 1;
    Some(obs.n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obsindex_reuses_satellite_entry() {
        let mut obs = Obss::new();
        let time = GTime { time: 1000, sec: 0.0 };
        let i = obsindex(&mut obs, time, 5).unwrap();
        let j = obsindex(&mut obs, time, 7).unwrap();
        let k = obsindex(&mut obs, time, 5).unwrap();
        assert_eq!(i, k);
        assert_ne!(i, j);
        assert_eq!(obs.n, 2);
    }

    #[test]
    fn test_obsindex_capacity() {
        let mut obs = Obss::new();
        let time = GTime::default();
        for sat in 1..=MAXOBS {
            assert!(obsindex(&mut obs, time, sat).is_some());
        }
        assert!(obsindex(&mut obs, time, MAXOBS + 1).is_none());
        // an existing satellite is still found at capacity
        assert_eq!(obsindex(&mut obs, time, 1), Some(0));
    }
}
