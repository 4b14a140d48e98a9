use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};
use serde_derive::Serialize;

use agari::image::{render, TileStyle};
use agari::validate::Warning;
use agari::yaku::RankedAgari;
use agari::{rank_agari, Env, Error, Tehai};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Load table state from a .ron file. Flags override it.
    #[arg(long)]
    env: Option<PathBuf>,

    /// Round wind (1j to 4j)
    #[arg(long)]
    bakaze: Option<String>,
    /// Seat wind (1j to 4j). East is the dealer.
    #[arg(long)]
    jikaze: Option<String>,

    #[arg(long)]
    richi: bool,
    /// Double riichi
    #[arg(long)]
    daburi: bool,
    #[arg(long)]
    ippatsu: bool,
    /// Rinshan kaihou on tsumo, chankan on ron
    #[arg(long)]
    rinshan: bool,
    /// Haitei on tsumo, houtei on ron
    #[arg(long)]
    haitei: bool,
    /// Tenhou, or chihou when not the dealer
    #[arg(long)]
    tenho: bool,
    /// Count without limits
    #[arg(long)]
    aotenjo: bool,

    /// Dora indicators, e.g. "3m7j"
    #[arg(long)]
    dora: Option<String>,
    /// Uradora indicators, only counted with riichi
    #[arg(long)]
    uradora: Option<String>,

    /// Draw tiles with mahjong Unicode characters
    #[arg(long)]
    unicode: bool,
    /// Print a RON report instead of text
    #[arg(long)]
    ron_output: bool,

    /// Hand, e.g. 123m456p789s1122j ?2j
    #[arg(required = true)]
    hand: Vec<String>,
}

fn load_env(args: &Args) -> Result<Env, Error> {
    let mut env: Env = match &args.env {
        Some(path) => {
            debug!("Loading table state from {}", path.display());
            ron::de::from_reader(File::open(path)?)?
        }
        None => Env::default(),
    };
    if let Some(bakaze) = &args.bakaze {
        env.set_bakaze(bakaze)?;
    }
    if let Some(jikaze) = &args.jikaze {
        env.set_jikaze(jikaze)?;
    }
    if let Some(dora) = &args.dora {
        env.set_dora(dora)?;
    }
    if let Some(uradora) = &args.uradora {
        env.set_uradora(uradora)?;
    }
    if args.richi {
        env.set_richi(true);
    }
    if args.daburi {
        env.set_daburi(true);
    }
    if args.ippatsu {
        env.set_ippatsu(true);
    }
    if args.rinshan {
        env.set_rinshan(true);
    }
    if args.haitei {
        env.set_haitei(true);
    }
    if args.tenho {
        env.set_tenho(true);
    }
    if args.aotenjo {
        env.set_aotenjo(true);
    }
    Ok(env)
}

#[derive(Serialize)]
struct Report {
    hand: String,
    warnings: Vec<String>,
    readings: Vec<Reading>,
}

#[derive(Serialize)]
struct Reading {
    agari: String,
    yaku: Vec<(String, String)>,
    fu: Option<u32>,
    rank: Option<String>,
    class: Option<String>,
    payment: Option<String>,
    /// Decimal, points are unbounded without limits
    point: Option<String>,
    error: Option<String>,
}

impl From<&RankedAgari<'_>> for Reading {
    fn from((agari, result): &RankedAgari<'_>) -> Self {
        match result {
            Ok(result) => Reading {
                agari: agari.to_string(),
                yaku: result
                    .detail
                    .iter()
                    .map(|(yaku, value)| (yaku.name().to_owned(), value.to_string()))
                    .collect(),
                fu: Some(result.fu),
                rank: Some(result.rank.to_string()),
                class: result.class.name(),
                payment: Some(result.payment.to_string()),
                point: Some(result.point.to_string()),
                error: None,
            },
            Err(err) => Reading {
                agari: agari.to_string(),
                yaku: vec![],
                fu: None,
                rank: None,
                class: None,
                payment: None,
                point: None,
                error: Some(err.to_string()),
            },
        }
    }
}

fn print_text(tehai: &Tehai, ranked: &[RankedAgari], style: TileStyle) {
    println!("{}", render(&tehai.to_image(), style));
    for (i, ranked) in ranked.iter().enumerate() {
        let reading = Reading::from(ranked);
        println!();
        println!("#{} {}", i + 1, reading.agari);
        for (name, value) in &reading.yaku {
            println!("    {:<26}{}", name, value);
        }
        match (reading.fu, reading.rank, reading.payment, reading.point) {
            (Some(fu), Some(rank), Some(payment), Some(point)) => {
                let class = reading.class.map(|c| format!(" {}", c)).unwrap_or_default();
                println!("    {} fu, {}{}: {} ({})", fu, rank, class, payment, point);
            }
            _ => println!("    {}", reading.error.unwrap_or_default()),
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let env = load_env(args)?;
    let tehai: Tehai = args.hand.join(" ").parse()?;
    debug!("Scoring {} under {:?}", tehai, env);

    let warnings = env.check_props_with_tehai(&tehai);
    for warning in &warnings {
        warn!("{}", warning);
    }

    let ranked = rank_agari(&tehai, &env)?;
    if args.ron_output {
        let report = Report {
            hand: tehai.to_string(),
            warnings: warnings.iter().map(Warning::to_string).collect(),
            readings: ranked.iter().map(Reading::from).collect(),
        };
        println!(
            "{}",
            ron::ser::to_string_pretty(&report, ron::ser::PrettyConfig::default())?
        );
    } else {
        let style = if args.unicode {
            TileStyle::Unicode
        } else {
            TileStyle::Notation
        };
        print_text(&tehai, &ranked, style);
    }

    // Readings with yaku sort first
    match ranked.into_iter().next() {
        Some((_, Err(err))) => Err(err.into()),
        _ => Ok(()),
    }
}

fn main() -> ExitCode {
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    log_builder.target(env_logger::Target::Stderr).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("agari: {}", err);
            if err.is_not_winning() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
