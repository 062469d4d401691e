use dice_func::{roll, Dice, PlotConfig, Plotter, Roller, SampledFunc};
use std::io::{self, BufRead, Write};
use tracing::Level;

const SEPARATOR: &str =
    "---------------------------------------------------------------------------------------";

fn print_section(plotter: &Plotter, func: &SampledFunc, header: &str) -> dice_func::Result<()> {
    print!("{}", plotter.plot(func)?);
    println!();
    println!("{}", header);
    println!("{}", SEPARATOR);
    println!();
    Ok(())
}

fn plot_all(config: &PlotConfig, dice: &Dice) -> dice_func::Result<()> {
    let normal = dice.prob_func()?;
    let plotter = Plotter::new(config.clone());
    print_section(&plotter, &normal, "normal")?;

    let cumulative = normal.cumulative();
    print_section(&plotter, &cumulative, "cumulative")?;

    let inverse = cumulative.inverse();
    let supersampled = Plotter::new(config.with_supersampling(config.supersampling * 5.0));
    print_section(&supersampled, &inverse, "inverse")
}

fn roll_once(roller: &mut impl Roller, dice: &Dice) -> dice_func::Result<()> {
    let rolled = roller.roll_dice(dice)?;
    let drawn = roller.draw(&dice.prob_func()?)?;
    println!("{} = {} (drawn from distribution: {})", dice, rolled, drawn);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = PlotConfig::from_path(&path)?;
            log::info!("loaded plot configuration from {}", path);
            config
        }
        None => PlotConfig::default(),
    };
    let mut roller = roll::default_roller();

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            let (rolling, notation) = match line.strip_prefix("roll ") {
                Some(rest) => (true, rest),
                None => (false, line),
            };
            let result = notation
                .parse::<Dice>()
                .map_err(dice_func::Error::from)
                .and_then(|dice| {
                    if rolling {
                        roll_once(&mut roller, &dice)
                    } else {
                        plot_all(&config, &dice)
                    }
                });
            if let Err(why) = result {
                log::error!("{}: {}", notation, why);
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
