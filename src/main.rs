use getopts::Options;
use hex2::{Converter, Mode};
use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process;

const NAME: &str = "hex2";
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage(program: &str, opts: Options) {
    let brief = format!(
        "Usage: {} [-d] (-r | -6) FILES\nConvert hex into base64 or raw aka binary format.",
        program
    );
    print!("{}", opts.usage(&brief));
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optflag("d", "debug", "enable debug output");
    opts.optflag("6", "base64", "output base64 format");
    opts.optflag("r", "raw", "output raw format");
    opts.optflag("h", "help", "print this message and exit");
    opts.optflag("V", "version", "print the version and exit");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}: {}", NAME, f);
            process::exit(9);
        }
    };

    if matches.opt_present("h") {
        print_usage(&args[0], opts);
        return;
    }

    if matches.opt_present("V") {
        println!("{} {}", NAME, VERSION);
        return;
    }

    let mode = match Mode::from_flags(matches.opt_present("r"), matches.opt_present("6")) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}: {}", NAME, e);
            process::exit(9);
        }
    };

    let debug = matches.opt_present("d");
    if debug {
        eprintln!("{}: debug is enabled", NAME);
    }

    let converter = Converter::new(mode).debug(debug);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for file in &matches.free {
        if let Err(e) = converter.convert_file(Path::new(file), &mut out) {
            // Output of the files already converted still reaches stdout.
            let _ = out.flush();
            eprintln!("{}: {}", NAME, e);
            process::exit(1);
        }
    }

    if let Err(e) = out.flush() {
        eprintln!("{}: write to stdout: {}", NAME, e);
        process::exit(1);
    }
}
