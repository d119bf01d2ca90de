use crate::cluster::Substitute;
use crate::codec::Schedule;
use crate::data::Csv;
use crate::pipeline::Config;
use crate::pipeline::Pipeline;
use crate::sink::Console;
use crate::sink::Disk;
use crate::Value;
use crate::Width;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Driver {
    #[command(
        about = "Run the load-cluster-encode pipeline from a JSON config",
        alias = "go"
    )]
    Run {
        #[arg(required = true)]
        config: PathBuf,
    },
    #[command(
        about = "Encode one comma-separated row of survey values",
        alias = "enc"
    )]
    Encode {
        #[arg(required = true)]
        values: String,
        #[arg(long, value_delimiter = ',')]
        widths: Option<Vec<Width>>,
        #[arg(long)]
        reverse: bool,
    },
}

impl Driver {
    pub fn run() -> anyhow::Result<()> {
        match Self::parse() {
            Self::Run { config } => {
                let config = Config::load(&config)?;
                let source = Csv::from(config.dataset.clone());
                let oracle = Substitute::survey();
                let report = match config.output.clone() {
                    Some(path) => Pipeline::new(config, source, oracle, Disk::from(path)).run()?,
                    None => Pipeline::new(config, source, oracle, Console).run()?,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
            Self::Encode {
                values,
                widths,
                reverse,
            } => {
                let values = values
                    .split(',')
                    .map(|value| value.trim().parse::<Value>())
                    .collect::<Result<Vec<Value>, _>>()?;
                let schedule = match widths {
                    Some(widths) => Schedule::try_from(widths)?,
                    None => Schedule::survey(),
                };
                let schedule = match reverse {
                    true => schedule.reversed(),
                    false => schedule,
                };
                log::info!("{:<32}{}", "schedule", schedule);
                println!("{}", schedule.encode(&values, reverse)?);
                Ok(())
            }
        }
    }
}
