// src/main.rs
use std::env;
use std::path::Path;
use std::process;

use wifi_signal_simulator::cli::{self, CliArgs};
use wifi_signal_simulator::error::SimError;
use wifi_signal_simulator::geometry::TrackLayout;
use wifi_signal_simulator::simulation::{run_sweep, SweepConfig, OUTPUT_FILE_NAME};

fn main() {
    let argv: Vec<String> = env::args().collect();
    let program = argv
        .first()
        .map(String::as_str)
        .unwrap_or("wifi_signal_simulator");

    // 校验在任何计算之前完成；参数个数不对只打印用法并以 1 退出
    let args = match cli::parse_args(&argv) {
        Ok(args) => args,
        Err(SimError::WrongArgumentCount(_)) => {
            println!("{}", cli::usage(program));
            process::exit(1);
        }
        Err(err) => {
            println!("{}", cli::usage(program));
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        match err {
            SimError::Io(_) => eprintln!("{err}"),
            _ => {
                println!("{}", cli::usage(program));
                eprintln!("{err}");
            }
        }
        process::exit(2);
    }
}

fn run(args: &CliArgs) -> Result<(), SimError> {
    let layout = TrackLayout::new(
        args.inter_ap_distance as f64,
        args.train_ap_distance as f64,
        args.train_velocity as f64,
    );
    let output = run_sweep(&layout, &SweepConfig::default())?;
    output.write_to(Path::new(OUTPUT_FILE_NAME))?;
    Ok(())
}
