//! Inspect catalogued CRC variants.
//!
//! ```text
//! crc-table --list
//! crc-table <NAME> [--bitwise]
//! crc-table <NAME> --input <TEXT> [--bitwise]
//! ```
//!
//! Without `--input`, prints the engine descriptor followed by its lookup
//! table. With `--input`, prints the checksum of TEXT's UTF-8 bytes.

use std::{env, process::ExitCode};

use checksum::{AnyCrc, Crc, CrcParams, ParamsError, catalog};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Args {
  list: bool,
  bitwise: bool,
  name: Option<String>,
  input: Option<String>,
}

fn usage() -> &'static str {
  "usage: crc-table --list | crc-table <NAME> [--input <TEXT>] [--bitwise]"
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args, String> {
  let mut args = Args::default();
  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--list" | "-l" => args.list = true,
      "--bitwise" | "-b" => args.bitwise = true,
      "--input" | "-i" => {
        let value = it.next().ok_or_else(|| "--input requires a value".to_owned())?;
        args.input = Some(value);
      }
      "--help" | "-h" => return Err(usage().to_owned()),
      flag if flag.starts_with('-') => return Err(format!("unknown flag {flag}")),
      name => {
        if args.name.is_some() {
          return Err(format!("unexpected argument {name}"));
        }
        args.name = Some(name.to_owned());
      }
    }
  }

  if !args.list && args.name.is_none() {
    return Err(usage().to_owned());
  }
  Ok(args)
}

fn print_catalog() {
  for params in catalog::CATALOG {
    let digits = usize::from(params.width / 4);
    println!(
      "{:<20} width={:<2} check=0x{:0digits$X}",
      params.name, params.width, params.check
    );
  }
}

fn print_table(params: &CrcParams, use_lut: bool) -> Result<(), ParamsError> {
  match params.width {
    8 => print_engine(&Crc::<u8>::with_params(params, use_lut)?),
    16 => print_engine(&Crc::<u16>::with_params(params, use_lut)?),
    32 => print_engine(&Crc::<u32>::with_params(params, use_lut)?),
    width => return Err(ParamsError::UnsupportedWidth { width }),
  }
  Ok(())
}

fn print_engine<W: checksum::Register>(crc: &Crc<W>) {
  println!("{crc}");
  print!("{}", crc.table_display());
}

fn run(args: &Args) -> Result<(), ParamsError> {
  if args.list {
    print_catalog();
    return Ok(());
  }

  let Some(name) = args.name.as_deref() else {
    return Ok(());
  };
  let params = catalog::find(name).ok_or(ParamsError::UnknownAlgorithm)?;
  let use_lut = !args.bitwise;

  match &args.input {
    Some(text) => {
      let crc = AnyCrc::from_params(params, use_lut)?;
      let digits = usize::from(crc.width() / 4);
      println!("0x{:0digits$X}", crc.calculate(text.as_bytes()));
    }
    None => print_table(params, use_lut)?,
  }
  Ok(())
}

fn main() -> ExitCode {
  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("{msg}");
      return ExitCode::from(2);
    }
  };

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      match (err, args.name.as_deref()) {
        (ParamsError::UnknownAlgorithm, Some(name)) => eprintln!("error: {err}: {name}"),
        _ => eprintln!("error: {err}"),
      }
      ExitCode::FAILURE
    }
  }
}
