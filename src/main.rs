use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use urd::basic::sat::{satno2id, satsys};
use urd::basic::time::{time2str, timediff, timestr_utc};
use urd::basic::var::*;
use urd::decode::raw::*;
use urd::decode::unicore::input_unicoref;

#[derive(Parser, Debug)]
#[command(
    name = "URD",
    about = "A decoder for Unicore high precision GNSS receiver raw data.",
    after_help = "Receiver options (-x): -EPHALL -GL1P -GL2X -RL2C -EL1B -GALINAV -GALFNAV"
)]
struct Cli {
    /// Input Raw Data File
    #[clap(short = 'i', long = "inp")]
    ifile: String,

    /// Receiver Dependent Options
    #[clap(short = 'x', long = "opt", default_value = "")]
    opt: String,

    /// Print Every Decoded Message Type
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let file = match File::open(&args.ifile) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Fail to open input file {}: {}", args.ifile, e);
            return;
        }
    };
    let mut reader = BufReader::new(file);

    let mut raw = Raw::new();
    raw.opt = args.opt.clone();
    raw.outtype = args.verbose;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner()
        .tick_chars("/|\\- ")
        .template("{spinner:.green} {msg}")
        .expect("Failed to set progress style"));
    pb.set_message("Decoding raw...");

    let mut nobs = 0u64;
    let mut nepoch = 0u64;
    let mut neph = 0u64;
    let mut nerr = 0u64;
    let mut ts = GTime::default();
    let mut te = GTime::default();
    let mut sats = vec![false; MAXSAT];

    loop {
        let stat = input_unicoref(&mut raw, &mut reader);
        if stat == STAT_EOF {
            break;
        }
        match stat {
            STAT_OBS => {
                nobs += 1;
                if te.time == 0 || timediff(raw.time, te).abs() > 1E-9 {
                    nepoch += 1;
                }
                if ts.time == 0 {
                    ts = raw.time;
                }
                te = raw.time;
                for data in raw.obs.data.iter().take(raw.obs.n) {
                    sats[data.sat - 1] = true;
                }
            }
            STAT_EPH => neph += 1,
            STAT_ERROR => nerr += 1,
            _ => {}
        }
        if args.verbose && stat != STAT_NONE {
            pb.println(raw.msgtype.clone());
        }
        pb.tick();
    }
    pb.finish_with_message("Finish decoding");

    let nsat = sats.iter().filter(|&&s| s).count();
    let mut neph_sys = [0usize; 4]; // G/E/C/J
    for eph in raw.nav.eph.iter() {
        if eph.sat == 0 {
            continue;
        }
        match satsys(eph.sat) {
            SYS_GPS => neph_sys[0] += 1,
            SYS_GAL => neph_sys[1] += 1,
            SYS_CMP => neph_sys[2] += 1,
            SYS_QZS => neph_sys[3] += 1,
            _ => {}
        }
    }
    let ngeph = raw.nav.geph.iter().filter(|geph| geph.sat != 0).count();

    println!("input file : {}", args.ifile);
    println!("decoded at : {}", timestr_utc());
    println!(
        "messages   : obs={} eph={} error={}",
        nobs, neph, nerr
    );
    if nepoch > 0 {
        println!(
            "epochs     : {} ({} - {})",
            nepoch,
            time2str(ts),
            time2str(te)
        );
    }
    println!("satellites : {}", nsat);
    println!(
        "ephemerides: G={} R={} E={} C={} J={}",
        neph_sys[0], ngeph, neph_sys[1], neph_sys[2], neph_sys[3]
    );
    if args.verbose && nsat > 0 {
        let ids: Vec<String> = sats
            .iter()
            .enumerate()
            .filter(|(_, &s)| s)
            .map(|(i, _)| satno2id(i + 1))
            .collect();
        println!("tracked    : {}", ids.join(" "));
    }
}
