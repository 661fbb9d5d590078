//! renumbers MAZs of households outside the selected county according to the
//! TAZ each household is in.
use clap::Parser;
use maz_renumber::app::RenumberApp;

fn main() {
    env_logger::init();
    let args = RenumberApp::parse();
    println!("{}", args.households_file);
    println!("{}", args.zones_file);
    println!("{}", args.county_code);

    match args.run() {
        Ok(summary) => {
            log::info!("finished renumbering: {summary}");
            println!("*** Finished ***");
        }
        Err(e) => {
            log::error!("renumber_hh_mazs failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
