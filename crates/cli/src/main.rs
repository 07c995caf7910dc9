use anyhow::Result;
use clap::{Parser, Subcommand};
use mta_corelib::{version, MtaError, MtaRun, OsEntropy};

#[derive(Parser)]
#[command(name = "mta", version, about = "MtA share conversion demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one share-conversion round and verify it
    Run {
        /// Emit the report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run { json }) => {
            // Entropy failure propagates through anyhow and exits 1;
            // a verification mismatch exits 2 so the two are distinguishable.
            let run = MtaRun::execute(&mut OsEntropy)?;
            let verdict = run.verify();
            let report = run.report();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("a        = {}", report.a);
                println!("b        = {}", report.b);
                println!("masked c = {}", report.c_masked);
                println!("masked d = {}", report.d_masked);
                match &verdict {
                    Ok(()) => println!("MtA success: c + d == a*b (mod p)"),
                    Err(e) => println!("MtA FAIL: {e}"),
                }
            }

            match verdict {
                Ok(()) => {}
                Err(MtaError::VerificationFailed) => std::process::exit(2),
                Err(e) => return Err(e.into()),
            }
        }
        None => {
            println!("mta {} — ready", version());
            println!("Try: `mta run [--json]`");
        }
    }
    Ok(())
}
