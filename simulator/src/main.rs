use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use reelhouse_execution::{
    slots::{GameRng, Reels},
    AutoSpin, Session, SpinReceipt,
};
use reelhouse_simulator::{sim, store};
use reelhouse_types::{MachineType, Profile, DEFAULT_SPIN_DELAY_MS};
use std::{path::PathBuf, time::Duration};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Machine to play.
    #[arg(short, long, value_enum, default_value = "classic")]
    machine: Machine,

    /// Save-file path.
    #[arg(short, long, default_value = store::DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// Seed the reels for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Machine {
    MultiLine,
    Classic,
}

impl From<Machine> for MachineType {
    fn from(machine: Machine) -> Self {
        match machine {
            Machine::MultiLine => MachineType::MultiLine,
            Machine::Classic => MachineType::Classic,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Spin once.
    Spin {
        #[arg(short, long)]
        bet: u64,
        #[arg(short, long, default_value_t = 1)]
        lines: u8,
    },
    /// Run a bounded auto-spin sequence.
    Auto {
        #[arg(short, long)]
        rounds: u32,
        #[arg(short, long)]
        bet: u64,
        #[arg(short, long, default_value_t = 1)]
        lines: u8,
        /// Pause between rounds in milliseconds.
        #[arg(long, default_value_t = DEFAULT_SPIN_DELAY_MS)]
        delay_ms: u64,
    },
    /// Add funds to the balance.
    Deposit {
        #[arg(short, long)]
        amount: u64,
    },
    /// Show the profile and cumulative stats.
    Stats,
    /// Zero the cumulative counters.
    ResetStats,
    /// Restore the balance to the machine's reset value.
    ResetBalance,
    /// Enable or disable hardcore mode.
    Hardcore {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Run a batch simulation on a scratch profile; the save file is
    /// untouched.
    Simulate {
        #[arg(short = 'n', long, default_value_t = 100_000)]
        spins: u64,
        #[arg(short, long, default_value_t = 1)]
        bet: u64,
        #[arg(short, long, default_value_t = 1)]
        lines: u8,
        /// Independent RNG streams the rounds are split across.
        #[arg(long, default_value_t = 8)]
        workers: u64,
        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let machine = MachineType::from(args.machine);

    match args.command {
        Command::Simulate {
            spins,
            bet,
            lines,
            workers,
            json,
        } => {
            let config = sim::SimConfig {
                machine,
                spins,
                bet,
                lines,
                seed: args.seed.unwrap_or_else(rand::random),
                workers,
            };
            let report = sim::run(&config).context("simulation failed")?;
            print_report(machine, &config, &report, json)?;
        }
        command => {
            let rng = match args.seed {
                Some(seed) => GameRng::from_seed(seed),
                None => GameRng::from_entropy(),
            };
            let save_data = store::load(&args.save)
                .with_context(|| format!("failed to load save file {}", args.save.display()))?;
            let mut session = Session::new(machine, save_data.into_profile(), rng);

            match command {
                Command::Spin { bet, lines } => {
                    let receipt = session.spin(bet, lines)?;
                    print_receipt(&receipt);
                }
                Command::Auto {
                    rounds,
                    bet,
                    lines,
                    delay_ms,
                } => {
                    let auto = AutoSpin::new(rounds).with_delay(Duration::from_millis(delay_ms));
                    let receipts = auto.run(&mut session, bet, lines);
                    for receipt in &receipts {
                        print_receipt(receipt);
                        println!();
                    }
                    println!(
                        "Auto-spin finished after {} of {} rounds.",
                        receipts.len(),
                        rounds
                    );
                }
                Command::Deposit { amount } => {
                    let balance = session.deposit(amount)?;
                    println!("Balance: ${balance}");
                }
                Command::Stats => print_stats(session.profile()),
                Command::ResetStats => {
                    session.reset_stats()?;
                    println!("Stats reset.");
                }
                Command::ResetBalance => {
                    session.reset_balance()?;
                    println!("Balance: ${}", session.profile().balance);
                }
                Command::Hardcore { enabled } => {
                    session.set_hardcore(enabled);
                    print_stats(session.profile());
                }
                Command::Simulate { .. } => unreachable!("handled above"),
            }

            store::save(&args.save, &session.save())
                .with_context(|| format!("failed to write save file {}", args.save.display()))?;
        }
    }

    Ok(())
}

fn print_receipt(receipt: &SpinReceipt) {
    match &receipt.result.reels {
        Reels::Grid(columns) => {
            let rows = columns.first().map_or(0, Vec::len);
            for row in 0..rows {
                let line: Vec<String> = columns
                    .iter()
                    .map(|column| column[row].to_string())
                    .collect();
                println!("  {}", line.join(" | "));
            }
            if receipt.result.win_lines.is_empty() {
                println!("Winning lines: none");
            } else {
                let lines: Vec<String> = receipt
                    .result
                    .win_lines
                    .iter()
                    .map(u8::to_string)
                    .collect();
                println!("Winning lines: {}", lines.join(", "));
            }
        }
        Reels::Line(reels) => {
            println!("  {} {} {}", reels[0], reels[1], reels[2]);
        }
    }
    println!("You won: ${}", receipt.result.winnings);
    println!("Balance: ${}", receipt.balance_after);
}

fn print_stats(profile: &Profile) {
    println!("Balance: ${}", profile.balance);
    println!("Total spins: {}", profile.spins);
    println!("Wins: {}", profile.wins);
    println!("Biggest win: ${}", profile.biggest_win);
    println!("Win rate: {:.1}%", profile.win_rate());
    println!("Total deposited: ${}", profile.total_deposited);
    println!(
        "Mode: {}",
        if profile.hardcore { "HARDCORE" } else { "CASUAL" }
    );
}

fn print_report(
    machine: MachineType,
    config: &sim::SimConfig,
    report: &sim::SimReport,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let doc = serde_json::json!({
            "machine": machine.to_string(),
            "seed": config.seed,
            "workers": config.workers,
            "spins": report.spins,
            "wins": report.wins,
            "hit_rate": report.hit_rate(),
            "total_staked": report.total_staked,
            "total_returned": report.total_returned,
            "rtp": report.rtp(),
            "biggest_win": report.biggest_win,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Machine: {machine}");
    println!("Spins: {}", report.spins);
    println!(
        "Wins: {} (hit rate {:.2}%)",
        report.wins,
        report.hit_rate() * 100.0
    );
    println!("Staked: ${}", report.total_staked);
    println!(
        "Returned: ${} (RTP {:.2}%)",
        report.total_returned,
        report.rtp() * 100.0
    );
    println!("Biggest win: ${}", report.biggest_win);
    Ok(())
}
