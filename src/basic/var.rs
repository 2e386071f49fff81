// 常量定义
pub const MAXSAT: usize = NSATGPS + NSATGLO + NSATGAL + NSATQZS + NSATCMP + NSATSBS;
pub const NFREQ: usize = 3;
pub const NEXOBS: usize = 3;
pub const NFREOBS: usize = NFREQ + NEXOBS;
pub const MAXOBS: usize = 96;
pub const MAXRAWLEN: usize = 4096;

pub const CODE_NONE: u8 = 0; // obs code: none or unknown
pub const CODE_L1C: u8 = 1; // obs code: L1C/A,G1C/A,E1C (GPS,GLO,GAL,QZS,SBS)
pub const CODE_L1P: u8 = 2; // obs code: L1P,G1P,B1P (GPS,GLO,BDS)
pub const CODE_L1W: u8 = 3; // obs code: L1 Z-track (GPS)
pub const CODE_L1Y: u8 = 4; // obs code: L1Y (GPS)
pub const CODE_L1M: u8 = 5; // obs code: L1M (GPS)
pub const CODE_L1N: u8 = 6; // obs code: L1codeless,B1codeless (GPS,BDS)
pub const CODE_L1S: u8 = 7; // obs code: L1C(D) (GPS,QZS)
pub const CODE_L1L: u8 = 8; // obs code: L1C(P) (GPS,QZS)
pub const CODE_L1E: u8 = 9; // (not used)
pub const CODE_L1A: u8 = 10; // obs code: E1A,B1A (GAL,BDS)
pub const CODE_L1B: u8 = 11; // obs code: E1B (GAL)
pub const CODE_L1X: u8 = 12; // obs code: E1B+C,L1C(D+P),B1D+P (GAL,QZS,BDS)
pub const CODE_L1Z: u8 = 13; // obs code: E1A+B+C,L1S (GAL,QZS)
pub const CODE_L2C: u8 = 14; // obs code: L2C/A,G1C/A (GPS,GLO)
pub const CODE_L2D: u8 = 15; // obs code: L2 L1C/A-(P2-P1) (GPS)
pub const CODE_L2S: u8 = 16; // obs code: L2C(M) (GPS,QZS)
pub const CODE_L2L: u8 = 17; // obs code: L2C(L) (GPS,QZS)
pub const CODE_L2X: u8 = 18; // obs code: L2C(M+L),B1_2I+Q (GPS,QZS,BDS)
pub const CODE_L2P: u8 = 19; // obs code: L2P,G2P (GPS,GLO)
pub const CODE_L2W: u8 = 20; // obs code: L2 Z-track (GPS)
pub const CODE_L2Y: u8 = 21; // obs code: L2Y (GPS)
pub const CODE_L2M: u8 = 22; // obs code: L2M (GPS)
pub const CODE_L2N: u8 = 23; // obs code: L2codeless (GPS)
pub const CODE_L5I: u8 = 24; // obs code: L5I,E5aI (GPS,GAL,QZS,SBS)
pub const CODE_L5Q: u8 = 25; // obs code: L5Q,E5aQ (GPS,GAL,QZS,SBS)
pub const CODE_L5X: u8 = 26; // obs code: L5I+Q,E5aI+Q,L5B+C,B2aD+P (GPS,GAL,QZS,IRN,SBS,BDS)
pub const CODE_L7I: u8 = 27; // obs code: E5bI,B2bI (GAL,BDS)
pub const CODE_L7Q: u8 = 28; // obs code: E5bQ,B2bQ (GAL,BDS)
pub const CODE_L7X: u8 = 29; // obs code: E5bI+Q,B2bI+Q (GAL,BDS)
pub const CODE_L6A: u8 = 30; // obs code: E6A,B3A (GAL,BDS)
pub const CODE_L6B: u8 = 31; // obs code: E6B (GAL)
pub const CODE_L6C: u8 = 32; // obs code: E6C (GAL)
pub const CODE_L6X: u8 = 33; // obs code: E6B+C,LEXS+L,B3I+Q (GAL,QZS,BDS)
pub const CODE_L6Z: u8 = 34; // obs code: E6A+B+C,L6D+E (GAL,QZS)
pub const CODE_L6S: u8 = 35; // obs code: L6S (QZS)
pub const CODE_L6L: u8 = 36; // obs code: L6L (QZS)
pub const CODE_L8I: u8 = 37; // obs code: E5abI (GAL)
pub const CODE_L8Q: u8 = 38; // obs code: E5abQ (GAL)
pub const CODE_L8X: u8 = 39; // obs code: E5abI+Q,B2abD+P (GAL,BDS)
pub const CODE_L2I: u8 = 40; // obs code: B1_2I (BDS)
pub const CODE_L2Q: u8 = 41; // obs code: B1_2Q (BDS)
pub const CODE_L6I: u8 = 42; // obs code: B3I (BDS)
pub const CODE_L6Q: u8 = 43; // obs code: B3Q (BDS)
pub const CODE_L3I: u8 = 44; // obs code: G3I (GLO)
pub const CODE_L3Q: u8 = 45; // obs code: G3Q (GLO)
pub const CODE_L3X: u8 = 46; // obs code: G3I+Q (GLO)
pub const CODE_L1I: u8 = 47; // obs code: B1I (BDS) (obsolete)
pub const CODE_L1Q: u8 = 48; // obs code: B1Q (BDS) (obsolete)
pub const MAXCODE: u8 = 48; // max number of obs code

pub const SYS_GPS: usize = 1 << 0;
pub const SYS_GLO: usize = 1 << 1;
pub const SYS_GAL: usize = 1 << 2;
pub const SYS_QZS: usize = 1 << 3;
pub const SYS_CMP: usize = 1 << 4;
pub const SYS_SBS: usize = 1 << 5;
pub const SYS_NONE: usize = 0;

pub const NSATGPS: usize = 32;
pub const NSATGLO: usize = 27;
pub const NSATGAL: usize = 36;
pub const NSATQZS: usize = 10;
pub const NSATCMP: usize = 63;
pub const NSATSBS: usize = 39;
pub const MINPRNGPS: usize = 1;
pub const MAXPRNGPS: usize = 32;
pub const MINPRNGLO: usize = 1;
pub const MAXPRNGLO: usize = 27;
pub const MINPRNGAL: usize = 1;
pub const MAXPRNGAL: usize = 36;
pub const MINPRNQZS: usize = 193;
pub const MAXPRNQZS: usize = 202;
pub const MINPRNCMP: usize = 1;
pub const MAXPRNCMP: usize = 63;
pub const MINPRNSBS: usize = 120;
pub const MAXPRNSBS: usize = 158;

pub const FREQ1: f64 = 1.57542E9; // L1/E1/B1C frequency (Hz)
pub const FREQ2: f64 = 1.22760E9; // L2 frequency (Hz)
pub const FREQ5: f64 = 1.17645E9; // L5/E5a/B2a frequency (Hz)
pub const FREQ7: f64 = 1.20714E9; // E5b frequency (Hz)
pub const FREQ1_GLO: f64 = 1.60200E9; // GLONASS G1 base frequency (Hz)
pub const DFRQ1_GLO: f64 = 0.56250E6; // GLONASS G1 bias frequency (Hz/n)
pub const FREQ2_GLO: f64 = 1.24600E9; // GLONASS G2 base frequency (Hz)
pub const DFRQ2_GLO: f64 = 0.43750E6; // GLONASS G2 bias frequency (Hz/n)
pub const FREQ3_GLO: f64 = 1.202025E9; // GLONASS G3 frequency (Hz)
pub const FREQ1_CMP: f64 = 1.561098E9; // BDS B1I frequency (Hz)
pub const FREQ2_CMP: f64 = 1.20714E9; // BDS B2I/B2b frequency (Hz)
pub const FREQ3_CMP: f64 = 1.26852E9; // BDS B3 frequency (Hz)

pub const LLI_SLIP: u8 = 0x01; // LLI: cycle slip
pub const LLI_HALFC: u8 = 0x02; // LLI: half-cycle not resolved
pub const LLI_HALFA: u8 = 0x40; // LLI: half-cycle added

pub const CLIGHT: f64 = 299792458.0;

pub const OBS_CODES: [&str; 49] = [
    "", "1C", "1P", "1W", "1Y", "1M", "1N", "1S", "1L", "1E", // 0-9
    "1A", "1B", "1X", "1Z", "2C", "2D", "2S", "2L", "2X", "2P", // 10-19
    "2W", "2Y", "2M", "2N", "5I", "5Q", "5X", "7I", "7Q", "7X", // 20-29
    "6A", "6B", "6C", "6X", "6Z", "6S", "6L", "8I", "8Q", "8X", // 30-39
    "2I", "2Q", "6I", "6Q", "3I", "3Q", "3X", "1I", "1Q", // 40-48
];

pub const LEAPS: [[f64; 7]; 19] = [
    [2017.0, 1.0, 1.0, 0.0, 0.0, 0.0, -18.0],
    [2015.0, 7.0, 1.0, 0.0, 0.0, 0.0, -17.0],
    [2012.0, 7.0, 1.0, 0.0, 0.0, 0.0, -16.0],
    [2009.0, 1.0, 1.0, 0.0, 0.0, 0.0, -15.0],
    [2006.0, 1.0, 1.0, 0.0, 0.0, 0.0, -14.0],
    [1999.0, 1.0, 1.0, 0.0, 0.0, 0.0, -13.0],
    [1997.0, 7.0, 1.0, 0.0, 0.0, 0.0, -12.0],
    [1996.0, 1.0, 1.0, 0.0, 0.0, 0.0, -11.0],
    [1994.0, 7.0, 1.0, 0.0, 0.0, 0.0, -10.0],
    [1993.0, 7.0, 1.0, 0.0, 0.0, 0.0, -9.0],
    [1992.0, 7.0, 1.0, 0.0, 0.0, 0.0, -8.0],
    [1991.0, 1.0, 1.0, 0.0, 0.0, 0.0, -7.0],
    [1990.0, 1.0, 1.0, 0.0, 0.0, 0.0, -6.0],
    [1988.0, 1.0, 1.0, 0.0, 0.0, 0.0, -5.0],
    [1985.0, 7.0, 1.0, 0.0, 0.0, 0.0, -4.0],
    [1983.0, 7.0, 1.0, 0.0, 0.0, 0.0, -3.0],
    [1982.0, 7.0, 1.0, 0.0, 0.0, 0.0, -2.0],
    [1981.0, 7.0, 1.0, 0.0, 0.0, 0.0, -1.0],
    [0.0; 7],
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GTime {
    pub time: i64,
    pub sec: f64,
}

/// broadcast ephemeris (GPS/GAL/BDS/QZS)
#[derive(Debug, Clone, Copy, Default)]
pub struct Eph {
    pub sat: usize, // satellite number
    pub iode: i32,  // IODE (GAL: IODNav, BDS: AODE)
    pub iodc: i32,  // IODC (BDS: AODC)
    pub sva: i32,   // SV accuracy (URA index)
    pub svh: i32,   // SV health (0: ok)
    pub week: i32,  // GPS/QZS: gps week, GAL: galileo week
    pub code: i32,  // GAL: data source defined as rinex 3.03
    pub toe: GTime, // Toe
    pub toc: GTime, // Toc
    pub ttr: GTime, // T_trans
    // SV orbit parameters
    pub a: f64,
    pub e: f64,
    pub i0: f64,
    pub omg0: f64,
    pub omg: f64,
    pub m0: f64,
    pub deln: f64,
    pub omgd: f64,
    pub idot: f64,
    pub crc: f64,
    pub crs: f64,
    pub cuc: f64,
    pub cus: f64,
    pub cic: f64,
    pub cis: f64,
    pub toes: f64, // Toe (s) in week
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,       // SV clock parameters (af0, af1, af2)
    pub tgd: [f64; 2], // group delay parameters
                       // GPS/QZS: tgd[0] = TGD
                       // GAL: tgd[0] = BGD_E1E5a, tgd[1] = BGD_E1E5b
                       // CMP: tgd[0] = TGD_B1I, tgd[1] = TGD_B2I
}

/// GLONASS broadcast ephemeris
#[derive(Debug, Clone, Copy, Default)]
pub struct Geph {
    pub sat: usize,    // satellite number
    pub iode: i32,     // IODE (0-6 bit of tb field)
    pub frq: i32,      // satellite frequency number
    pub svh: i32,      // satellite health
    pub age: i32,      // age of operation
    pub toe: GTime,    // epoch of ephemerides (gpst)
    pub tof: GTime,    // message frame time (gpst)
    pub pos: [f64; 3], // satellite position (ecef) (m)
    pub vel: [f64; 3], // satellite velocity (ecef) (m/s)
    pub acc: [f64; 3], // satellite acceleration (ecef) (m/s^2)
    pub taun: f64,     // SV clock bias (s)
    pub gamn: f64,     // relative frequency bias
}

/// navigation data store, one slot per satellite
#[derive(Debug, Clone)]
pub struct Nav {
    pub eph: Vec<Eph>,   // GPS/GAL/BDS/QZS ephemerides, indexed by sat-1
    pub geph: Vec<Geph>, // GLONASS ephemerides, indexed by prn-1
}

impl Nav {
    pub fn new() -> Self {
        Nav {
            eph: vec![Eph::default(); MAXSAT],
            geph: vec![Geph::default(); MAXPRNGLO],
        }
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

/// per-satellite observation data for one epoch
#[derive(Debug, Clone, Default)]
pub struct Obs {
    pub time: GTime,
    pub sat: usize,
    pub snr: [u8; NFREOBS], // C/N0 (0.25 dBHz)
    pub lli: [u8; NFREOBS],
    pub code: [u8; NFREOBS],
    pub l: [f64; NFREOBS], // carrier phase (cycle)
    pub p: [f64; NFREOBS], // pseudorange (m)
    pub d: [f64; NFREOBS], // doppler (Hz)
}

/// epoch observation buffer
#[derive(Debug, Clone)]
pub struct Obss {
    pub n: usize,
    pub data: Vec<Obs>,
}

impl Obss {
    pub fn new() -> Self {
        Obss {
            n: 0,
            data: Vec::with_capacity(MAXOBS),
        }
    }

    pub fn clear(&mut self) {
        self.n = 0;
        self.data.clear();
    }
}

impl Default for Obss {
    fn default() -> Self {
        Self::new()
    }
}
