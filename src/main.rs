use anyhow::Result;
use appfinder::config::load_config;
use appfinder::executor;
use appfinder::results::build_results;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Application name fragment to search for
    query: Vec<String>,

    /// Launch the result at this index instead of only listing
    #[arg(short, long)]
    launch: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config()?;
    let query = args.query.join(" ");
    let items = build_results(&query, &config.search);

    if let Some(index) = args.launch {
        match items.get(index) {
            Some(item) => match &item.exec {
                Some(exec) => executor::execute(exec)?,
                None => println!("'{}' has nothing to launch", item.label),
            },
            None => println!("no result at index {}", index),
        }
        return Ok(());
    }

    for (index, item) in items.iter().enumerate() {
        println!("{:3}  {}", index, item.label);
        println!("     {}", item.description);
        println!("     icon: {}", item.icon);
    }

    Ok(())
}
